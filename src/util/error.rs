// SplashForge - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation (DevWorkflow Part A Rule 2).
// All errors preserve the causal chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all SplashForge operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum SplashForgeError {
    /// Input validation failed before any work started.
    Validation(ValidationError),

    /// An icon image could not be inspected.
    Inspect(InspectError),

    /// Asset emission failed.
    Emit(EmitError),
}

impl fmt::Display for SplashForgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "Validation error: {e}"),
            Self::Inspect(e) => write!(f, "Image inspection error: {e}"),
            Self::Emit(e) => write!(f, "Emission error: {e}"),
        }
    }
}

impl std::error::Error for SplashForgeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            Self::Inspect(e) => Some(e),
            Self::Emit(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Validation errors
// ---------------------------------------------------------------------------

/// Errors raised while resolving and validating invocation inputs.
/// All of these are user-facing and occur before any asset is touched.
#[derive(Debug)]
pub enum ValidationError {
    /// One or more required inputs were not supplied.
    MissingArguments { fields: Vec<&'static str> },

    /// A colour is neither valid hexadecimal nor the `system` token.
    InvalidColor { value: String },

    /// The icon width is outside the accepted dp range.
    WidthOutOfRange { width: u32, min: u32, max: u32 },

    /// The asset name is not a valid identifier on both platforms.
    InvalidName { name: String, reason: &'static str },

    /// The project path does not exist or is not a directory.
    ProjectNotFound { path: PathBuf },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArguments { fields } => {
                write!(f, "Missing required arguments: {}", fields.join(", "))
            }
            Self::InvalidColor { value } => write!(
                f,
                "Invalid colour '{value}'. Expected 3- or 6-digit hexadecimal \
                 (e.g. #FFF or #F5F6F7) or 'system'"
            ),
            Self::WidthOutOfRange { width, min, max } => {
                write!(f, "Icon width {width} is out of range ({min}-{max} dp)")
            }
            Self::InvalidName { name, reason } => {
                write!(f, "Invalid asset name '{name}': {reason}")
            }
            Self::ProjectNotFound { path } => write!(
                f,
                "Project path '{}' does not exist or is not a directory",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for SplashForgeError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

// ---------------------------------------------------------------------------
// Inspection errors
// ---------------------------------------------------------------------------

/// Errors raised while probing an icon image for its pixel dimensions.
#[derive(Debug)]
pub enum InspectError {
    /// The path does not exist or is not a decodable raster image.
    Unreadable {
        path: PathBuf,
        source: image::ImageError,
    },
}

impl fmt::Display for InspectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable { path, source } => {
                write!(f, "Cannot read image '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for InspectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unreadable { source, .. } => Some(source),
        }
    }
}

impl From<InspectError> for SplashForgeError {
    fn from(e: InspectError) -> Self {
        Self::Inspect(e)
    }
}

// ---------------------------------------------------------------------------
// Template errors
// ---------------------------------------------------------------------------

/// Errors raised by the template renderer.  These indicate a packaging
/// defect (a template or variable wired up wrongly), not user error.
#[derive(Debug)]
pub enum TemplateError {
    /// No embedded template exists under the requested logical name.
    NotFound { name: String },

    /// The template references a placeholder with no supplied value.
    /// Missing variables are an explicit error, never an empty string.
    MissingVariable { template: String, variable: String },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { name } => {
                write!(f, "Template '{name}' is not embedded in this build")
            }
            Self::MissingVariable { template, variable } => write!(
                f,
                "Template '{template}': no value supplied for placeholder '{variable}'"
            ),
        }
    }
}

impl std::error::Error for TemplateError {}

impl From<TemplateError> for EmitError {
    fn from(e: TemplateError) -> Self {
        Self::Template(e)
    }
}

// ---------------------------------------------------------------------------
// Emission errors
// ---------------------------------------------------------------------------

/// Errors raised while writing platform assets.  Fatal to the platform
/// being emitted; the other platform still runs.
#[derive(Debug)]
pub enum EmitError {
    /// Template rendering failed.
    Template(TemplateError),

    /// I/O error with path and operation context.
    AssetWrite {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },

    /// A source icon could not be opened or decoded for scaling.
    ImageRead {
        path: PathBuf,
        source: image::ImageError,
    },

    /// A scaled image could not be encoded or written.
    ImageEncode {
        path: PathBuf,
        source: image::ImageError,
    },

    /// Asset-catalog JSON serialisation failed.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The launch screen entry could not be spliced into the project.
    Plist { path: PathBuf, reason: &'static str },
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template(e) => write!(f, "{e}"),
            Self::AssetWrite {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
            Self::ImageRead { path, source } => {
                write!(f, "Cannot decode image '{}': {source}", path.display())
            }
            Self::ImageEncode { path, source } => {
                write!(
                    f,
                    "Cannot write scaled image '{}': {source}",
                    path.display()
                )
            }
            Self::Json { path, source } => {
                write!(
                    f,
                    "JSON serialisation error for '{}': {source}",
                    path.display()
                )
            }
            Self::Plist { path, reason } => {
                write!(
                    f,
                    "Cannot update launch screen entry at '{}': {reason}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for EmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Template(e) => Some(e),
            Self::AssetWrite { source, .. } => Some(source),
            Self::ImageRead { source, .. } => Some(source),
            Self::ImageEncode { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::Plist { .. } => None,
        }
    }
}

impl From<EmitError> for SplashForgeError {
    fn from(e: EmitError) -> Self {
        Self::Emit(e)
    }
}

/// Convenience type alias for SplashForge results.
pub type Result<T> = std::result::Result<T, SplashForgeError>;
