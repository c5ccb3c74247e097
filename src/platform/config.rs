// SplashForge - platform/config.rs
//
// Project-local configuration: splashforge.toml loading with startup
// validation (DevWorkflow Part A Rule 13).
//
// The file lives at the project root next to the ios/ and android/
// directories, so a team can check defaults in and run the tool with no
// flags at all.

use crate::core::color::ColorValue;
use crate::core::model::validate_asset_name;
use crate::util::constants;
use std::path::{Path, PathBuf};

// =============================================================================
// splashforge.toml loading and validation (Rule 13)
// =============================================================================

/// Raw deserialisable shape of splashforge.toml.
///
/// Unknown keys are silently ignored for forward compatibility -- a newer
/// config file can be used with an older binary without crashing.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[splash]` section.
    pub splash: SplashSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[splash]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct SplashSection {
    /// Asset base name.
    pub name: Option<String>,
    /// Light (default) icon path, relative to the project root.
    pub icon_path: Option<String>,
    /// Dark-variant icon path, relative to the project root.
    pub dark_icon_path: Option<String>,
    /// Background colour: hex or "system".
    pub background_color: Option<String>,
    /// Dark background colour: hex or "system".
    pub dark_background_color: Option<String>,
    /// Icon width in dp.
    pub icon_width: Option<u32>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated configuration derived from `splashforge.toml`.
///
/// Every field is optional: the command line overrides these values, and
/// whatever is still missing afterwards is prompted for or rejected.
/// Invalid values produce actionable warnings and are dropped rather
/// than aborting the run (Rule 13).
#[derive(Debug, Clone, Default)]
pub struct FileConfig {
    /// Asset base name.
    pub name: Option<String>,
    /// Light icon path, resolved against the project root.
    pub icon_path: Option<PathBuf>,
    /// Dark icon path, resolved against the project root.
    pub dark_icon_path: Option<PathBuf>,
    /// Background colour string, syntax-checked.
    pub background_color: Option<String>,
    /// Dark background colour string, syntax-checked.
    pub dark_background_color: Option<String>,
    /// Icon width in dp, range-checked.
    pub icon_width: Option<u32>,
    /// Logging level string (consumed before tracing is initialised).
    pub log_level: Option<String>,
}

/// Resolve a config-supplied path against the project root.
fn resolve_path(project_path: &Path, raw: &str) -> PathBuf {
    let path = PathBuf::from(raw);
    if path.is_absolute() {
        path
    } else {
        project_path.join(path)
    }
}

/// Load and validate `splashforge.toml` from the project root.
///
/// Returns `FileConfig` with validated values and a list of non-fatal
/// warnings. If the file does not exist, returns defaults with no
/// warnings (the common case). If the file is unreadable or unparseable,
/// returns defaults with a warning -- the run still proceeds, the user
/// is informed.
pub fn load_config(project_path: &Path) -> (FileConfig, Vec<String>) {
    let config_path = project_path.join(constants::CONFIG_FILE_NAME);
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No splashforge.toml found; using defaults");
        return (FileConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            let msg = format!(
                "Could not read config file '{}': {e}. Using defaults.",
                config_path.display()
            );
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (FileConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            let msg = format!(
                "Failed to parse config file '{}': {e}. Using defaults.",
                config_path.display()
            );
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (FileConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded splashforge.toml");

    // Validate each field, accumulating all warnings rather than
    // stopping at the first.
    let mut config = FileConfig::default();

    // -- Splash: name --
    if let Some(ref name) = raw.splash.name {
        match validate_asset_name(name) {
            Ok(()) => config.name = Some(name.clone()),
            Err(e) => {
                warnings.push(format!(
                    "[splash] {e}. Using default ({}).",
                    constants::DEFAULT_ASSET_NAME,
                ));
            }
        }
    }

    // -- Splash: icon paths --
    if let Some(ref path) = raw.splash.icon_path {
        config.icon_path = Some(resolve_path(project_path, path));
    }
    if let Some(ref path) = raw.splash.dark_icon_path {
        config.dark_icon_path = Some(resolve_path(project_path, path));
    }

    // -- Splash: colours --
    if let Some(ref value) = raw.splash.background_color {
        match ColorValue::parse(value) {
            Ok(_) => config.background_color = Some(value.clone()),
            Err(_) => {
                warnings.push(format!(
                    "[splash] background_color = \"{value}\" is not a valid colour. \
                     Expected hex (e.g. \"#FF5733\") or \"system\". Ignoring it.",
                ));
            }
        }
    }
    if let Some(ref value) = raw.splash.dark_background_color {
        match ColorValue::parse(value) {
            Ok(_) => config.dark_background_color = Some(value.clone()),
            Err(_) => {
                warnings.push(format!(
                    "[splash] dark_background_color = \"{value}\" is not a valid colour. \
                     Expected hex (e.g. \"#FF5733\") or \"system\". Ignoring it.",
                ));
            }
        }
    }

    // -- Splash: icon_width --
    if let Some(width) = raw.splash.icon_width {
        if (constants::MIN_ICON_WIDTH..=constants::MAX_ICON_WIDTH).contains(&width) {
            config.icon_width = Some(width);
        } else {
            warnings.push(format!(
                "[splash] icon_width = {width} is out of range ({}-{}). Ignoring it.",
                constants::MIN_ICON_WIDTH,
                constants::MAX_ICON_WIDTH,
            ));
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.clone());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default ({}).",
                constants::DEFAULT_LOG_LEVEL,
            ));
        }
    }

    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "Config validation produced warnings");
    }

    (config, warnings)
}

// =============================================================================
// Tests
// =============================================================================
