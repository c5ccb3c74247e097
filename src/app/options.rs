// SplashForge - app/options.rs
//
// Option assembly and validation. Flags, splashforge.toml values, and
// prompt answers all funnel into `RawOptions`; `resolve` turns the
// merged set into validated `GenerateOptions` or a precise refusal.
//
// Precedence: command line > config file > interactive prompt. The
// merge is slot-wise, so a config file can supply the icon while the
// command line supplies the colour.

use crate::core::color::{ColorValue, ThemeColors};
use crate::core::model::validate_asset_name;
use crate::platform::config::FileConfig;
use crate::util::constants;
use crate::util::error::ValidationError;
use std::path::PathBuf;

// =============================================================================
// Raw (unvalidated) options
// =============================================================================

/// Accumulated option values before validation.
///
/// Every field is optional; `resolve` decides what is required.
#[derive(Debug, Clone, Default)]
pub struct RawOptions {
    /// Project root directory.
    pub project_path: Option<PathBuf>,
    /// Light (default) icon path.
    pub icon_path: Option<PathBuf>,
    /// Dark-variant icon path.
    pub dark_icon_path: Option<PathBuf>,
    /// Background colour string: hex or "system".
    pub background_color: Option<String>,
    /// Dark background colour string: hex or "system".
    pub dark_background_color: Option<String>,
    /// Icon width in dp.
    pub icon_width: Option<u32>,
    /// Asset base name.
    pub name: Option<String>,
}

impl RawOptions {
    /// Fill empty slots from the config file. Values already present
    /// (from flags or prompts) always win.
    pub fn merge_config(&mut self, config: &FileConfig) {
        if self.icon_path.is_none() {
            self.icon_path = config.icon_path.clone();
        }
        if self.dark_icon_path.is_none() {
            self.dark_icon_path = config.dark_icon_path.clone();
        }
        if self.background_color.is_none() {
            self.background_color = config.background_color.clone();
        }
        if self.dark_background_color.is_none() {
            self.dark_background_color = config.dark_background_color.clone();
        }
        if self.icon_width.is_none() {
            self.icon_width = config.icon_width;
        }
        if self.name.is_none() {
            self.name = config.name.clone();
        }
    }

    /// Validate the merged options into a ready-to-run set.
    ///
    /// Checks run in a fixed order so the caller sees the most useful
    /// refusal first: missing arguments are reported together before any
    /// individual value is inspected, and nothing touches the filesystem
    /// until every in-memory check has passed.
    pub fn resolve(self) -> Result<GenerateOptions, ValidationError> {
        // -- Completeness, all gaps reported at once --
        let mut missing: Vec<&'static str> = Vec::new();
        if self.project_path.is_none() {
            missing.push("projectPath");
        }
        if self.icon_path.is_none() {
            missing.push("iconPath");
        }
        if self.background_color.is_none() {
            missing.push("backgroundColor");
        }
        if self.icon_width.is_none() {
            missing.push("iconWidth");
        }
        if !missing.is_empty() {
            return Err(ValidationError::MissingArguments { fields: missing });
        }

        // Every required slot is filled once the completeness check has
        // passed.
        let project_path = self.project_path.unwrap_or_default();
        let icon_path = self.icon_path.unwrap_or_default();
        let background_color = self.background_color.unwrap_or_default();
        let icon_width = self.icon_width.unwrap_or_default();

        // -- Width range --
        if !(constants::MIN_ICON_WIDTH..=constants::MAX_ICON_WIDTH).contains(&icon_width) {
            return Err(ValidationError::WidthOutOfRange {
                width: icon_width,
                min: constants::MIN_ICON_WIDTH,
                max: constants::MAX_ICON_WIDTH,
            });
        }

        // -- Asset name --
        let name = self
            .name
            .unwrap_or_else(|| constants::DEFAULT_ASSET_NAME.to_string());
        validate_asset_name(&name)?;

        // -- Colours --
        let light = ColorValue::parse(&background_color)?;
        let dark = match &self.dark_background_color {
            Some(value) => Some(ColorValue::parse(value)?),
            None => None,
        };
        let colors = ThemeColors { light, dark };

        // -- Project path, the only filesystem touch in validation --
        if !project_path.is_dir() {
            return Err(ValidationError::ProjectNotFound { path: project_path });
        }

        Ok(GenerateOptions {
            project_path,
            icon_path,
            dark_icon_path: self.dark_icon_path,
            background_color: colors,
            icon_width,
            name,
        })
    }
}

// =============================================================================
// Resolved options
// =============================================================================

/// Fully validated inputs for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Project root, known to exist as a directory.
    pub project_path: PathBuf,
    /// Light icon path (existence is the inspector's concern).
    pub icon_path: PathBuf,
    /// Dark icon path, if supplied.
    pub dark_icon_path: Option<PathBuf>,
    /// Parsed theme colours.
    pub background_color: ThemeColors,
    /// Icon width in dp, within range.
    pub icon_width: u32,
    /// Validated asset base name.
    pub name: String,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::HexColor;

    fn complete_options(project_path: PathBuf) -> RawOptions {
        RawOptions {
            project_path: Some(project_path),
            icon_path: Some(PathBuf::from("icon.png")),
            dark_icon_path: None,
            background_color: Some("#FF5733".to_string()),
            dark_background_color: None,
            icon_width: Some(100),
            name: None,
        }
    }

    #[test]
    fn test_empty_options_report_all_missing_fields_in_order() {
        let err = RawOptions::default().resolve().unwrap_err();

        match err {
            ValidationError::MissingArguments { fields } => {
                assert_eq!(
                    fields,
                    vec!["projectPath", "iconPath", "backgroundColor", "iconWidth"]
                );
            }
            other => panic!("expected MissingArguments, got {other:?}"),
        }
    }

    #[test]
    fn test_partially_missing_options_report_only_the_gaps() {
        let raw = RawOptions {
            project_path: Some(PathBuf::from(".")),
            icon_width: Some(100),
            ..RawOptions::default()
        };

        match raw.resolve().unwrap_err() {
            ValidationError::MissingArguments { fields } => {
                assert_eq!(fields, vec!["iconPath", "backgroundColor"]);
            }
            other => panic!("expected MissingArguments, got {other:?}"),
        }
    }

    #[test]
    fn test_width_out_of_range_is_rejected() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut raw = complete_options(dir.path().to_path_buf());
        raw.icon_width = Some(1001);

        match raw.resolve().unwrap_err() {
            ValidationError::WidthOutOfRange { width, min, max } => {
                assert_eq!((width, min, max), (1001, 1, 1000));
            }
            other => panic!("expected WidthOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_name_is_rejected() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut raw = complete_options(dir.path().to_path_buf());
        raw.name = Some("9lives".to_string());

        assert!(matches!(
            raw.resolve().unwrap_err(),
            ValidationError::InvalidName { .. }
        ));
    }

    #[test]
    fn test_invalid_colour_is_rejected() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut raw = complete_options(dir.path().to_path_buf());
        raw.background_color = Some("#GGHHII".to_string());

        assert!(matches!(
            raw.resolve().unwrap_err(),
            ValidationError::InvalidColor { .. }
        ));
    }

    #[test]
    fn test_nonexistent_project_path_is_rejected_last() {
        // An invalid colour must win over the bad path: in-memory checks
        // run before the filesystem is consulted.
        let mut raw = complete_options(PathBuf::from("/definitely/not/here"));
        raw.background_color = Some("nope".to_string());
        assert!(matches!(
            raw.resolve().unwrap_err(),
            ValidationError::InvalidColor { .. }
        ));

        let raw = complete_options(PathBuf::from("/definitely/not/here"));
        match raw.resolve().unwrap_err() {
            ValidationError::ProjectNotFound { path } => {
                assert_eq!(path, PathBuf::from("/definitely/not/here"));
            }
            other => panic!("expected ProjectNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_happy_path_applies_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let options = complete_options(dir.path().to_path_buf())
            .resolve()
            .expect("resolution should succeed");

        assert_eq!(options.name, "BootSplash");
        assert_eq!(options.icon_width, 100);
        assert_eq!(
            options.background_color.light,
            ColorValue::Explicit(HexColor {
                r: 255,
                g: 87,
                b: 51
            })
        );
        assert_eq!(options.background_color.dark, None);
    }

    #[test]
    fn test_merge_config_fills_only_empty_slots() {
        let config = FileConfig {
            name: Some("FromConfig".to_string()),
            icon_path: Some(PathBuf::from("/config/icon.png")),
            background_color: Some("#000000".to_string()),
            icon_width: Some(64),
            ..FileConfig::default()
        };

        let mut raw = RawOptions {
            background_color: Some("#FFFFFF".to_string()),
            ..RawOptions::default()
        };
        raw.merge_config(&config);

        // Flag value kept, config fills the rest.
        assert_eq!(raw.background_color.as_deref(), Some("#FFFFFF"));
        assert_eq!(raw.icon_path, Some(PathBuf::from("/config/icon.png")));
        assert_eq!(raw.icon_width, Some(64));
        assert_eq!(raw.name.as_deref(), Some("FromConfig"));
    }
}
