// SplashForge - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// platform dependencies.
//
// These types are the shared vocabulary across all layers.

use crate::core::color::ThemeColors;
use crate::core::geometry::Geometry;
use crate::util::error::{EmitError, ValidationError};
use std::path::PathBuf;

// =============================================================================
// Target platform
// =============================================================================

/// A target mobile platform the generator can emit assets for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Ios,
    Android,
}

impl Platform {
    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Ios => "iOS",
            Platform::Android => "Android",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Icon inputs
// =============================================================================

/// A source icon image to build splash assets around.
///
/// Ephemeral, constructed per invocation; never persisted.
#[derive(Debug, Clone)]
pub struct IconSpec {
    /// Path to the source raster image.
    pub path: PathBuf,

    /// True for the dark-theme variant, false for the light/default one.
    pub is_dark: bool,
}

impl IconSpec {
    pub fn light(path: PathBuf) -> Self {
        Self {
            path,
            is_dark: false,
        }
    }

    pub fn dark(path: PathBuf) -> Self {
        Self {
            path,
            is_dark: true,
        }
    }
}

/// Pixel dimensions of a source image as reported by the inspector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDims {
    /// Width in pixels.
    pub width: u32,

    /// Height in pixels.
    pub height: u32,
}

impl ImageDims {
    /// Degenerate 1x1 dimensions substituted when no dark icon is
    /// supplied, so geometry computation proceeds instead of failing.
    pub fn placeholder() -> Self {
        Self {
            width: 1,
            height: 1,
        }
    }
}

// =============================================================================
// Asset name validation
// =============================================================================

/// Check that `name` is a valid asset identifier on both platforms:
/// ASCII, starting with a letter, containing only letters, digits, and
/// underscores.  Android additionally lowercases the name at emission
/// time, which cannot invalidate a name this check accepts.
pub fn validate_asset_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::InvalidName {
            name: name.to_string(),
            reason: "name must not be empty",
        });
    }

    if !name
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
    {
        return Err(ValidationError::InvalidName {
            name: name.to_string(),
            reason: "name must start with an ASCII letter",
        });
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(ValidationError::InvalidName {
            name: name.to_string(),
            reason: "name may only contain ASCII letters, digits, and underscores",
        });
    }

    Ok(())
}

// =============================================================================
// Emission inputs and outcomes
// =============================================================================

/// Everything an emitter needs to materialise assets for one platform.
///
/// Built once by the pipeline after inspection and geometry computation,
/// then handed unchanged to every emitter.
#[derive(Debug, Clone)]
pub struct EmissionSpec {
    /// Filesystem root of the host application project.
    pub project_path: PathBuf,

    /// Base asset name (as supplied; Android lowercases its own copy).
    pub name: String,

    /// Computed on-canvas geometry for both icon variants.
    pub geometry: Geometry,

    /// Light/default theme icon.
    pub light_icon: IconSpec,

    /// Dark theme icon, if supplied.
    pub dark_icon: Option<IconSpec>,

    /// Background colors for both themes.
    pub colors: ThemeColors,
}

/// Per-platform outcome of an emit call.
///
/// A skip is an expected state (e.g. an Android-only project has no iOS
/// tree), not an error; write failures surface as `Err` from `emit` and
/// are folded into the report as `PlatformOutcome::Failed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmissionResult {
    /// All assets for the platform were written.
    Emitted,

    /// No recognisable project for the platform; nothing was written.
    Skipped { reason: String },
}

/// Report-level outcome for one platform, including failures.
#[derive(Debug)]
pub enum PlatformOutcome {
    Emitted,
    Skipped { reason: String },
    Failed { error: EmitError },
}

impl PlatformOutcome {
    pub fn is_emitted(&self) -> bool {
        matches!(self, PlatformOutcome::Emitted)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, PlatformOutcome::Failed { .. })
    }
}

/// Aggregated result of one pipeline run.
#[derive(Debug)]
pub struct GenerateReport {
    /// The project the assets were written into.
    pub project_path: PathBuf,

    /// iOS emission outcome.
    pub ios: PlatformOutcome,

    /// Android emission outcome.
    pub android: PlatformOutcome,
}

impl GenerateReport {
    /// True when no platform failed.  Skips do not count as failure.
    pub fn success(&self) -> bool {
        !self.ios.is_failed() && !self.android.is_failed()
    }
}

// =============================================================================
// Tests
// =============================================================================
