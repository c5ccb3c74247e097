// SplashForge - core/color.rs
//
// Background colour model: hexadecimal parsing/normalisation, the symbolic
// `system` token, and the per-platform resolution table that turns the
// token into concrete colours at emission time.

use crate::util::constants;
use crate::util::error::ValidationError;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Compiled acceptance regex for hexadecimal colour strings.
/// The pattern is a constant tested in the unit tests below, so a mistake
/// there shows up as a failing test rather than a runtime panic.
fn hex_regex() -> &'static Regex {
    static HEX: OnceLock<Regex> = OnceLock::new();
    HEX.get_or_init(|| {
        Regex::new(constants::HEX_COLOR_PATTERN).expect("hex color pattern is valid")
    })
}

/// True when `value` is 3- or 6-digit hexadecimal, with or without a
/// leading '#', case-insensitive.  4- and 5-digit forms are rejected.
pub fn is_valid_hex(value: &str) -> bool {
    hex_regex().is_match(value)
}

// =============================================================================
// HexColor
// =============================================================================

/// A fully resolved RGB colour.  Parsed from user input and normalised;
/// displays as uppercase `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    /// Build from an `(r, g, b)` tuple (used for the named constants).
    pub const fn from_rgb(rgb: (u8, u8, u8)) -> Self {
        Self {
            r: rgb.0,
            g: rgb.1,
            b: rgb.2,
        }
    }

    /// Parse a hexadecimal colour string.  Three-digit shorthand expands
    /// each digit (`#F80` -> `#FF8800`).
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        if !is_valid_hex(value) {
            return Err(ValidationError::InvalidColor {
                value: value.to_string(),
            });
        }

        let digits = value.strip_prefix('#').unwrap_or(value);
        let expanded: String = if digits.len() == 3 {
            digits.chars().flat_map(|c| [c, c]).collect()
        } else {
            digits.to_string()
        };

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&expanded[range], 16).map_err(|_| ValidationError::InvalidColor {
                value: value.to_string(),
            })
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

// =============================================================================
// ColorValue and ThemeColors
// =============================================================================

/// A background colour as supplied by the user: either an explicit
/// hexadecimal value or the symbolic `system` token, which defers to the
/// platform default for the theme being emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorValue {
    Explicit(HexColor),
    SystemDefault,
}

impl ColorValue {
    /// Parse user input: the `system` token (case-insensitive) or a
    /// hexadecimal string.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        if value.eq_ignore_ascii_case(constants::SYSTEM_COLOR_TOKEN) {
            Ok(Self::SystemDefault)
        } else {
            HexColor::parse(value).map(Self::Explicit)
        }
    }
}

/// The light and dark background colours for one invocation.
///
/// `dark` is `None` when the caller supplied no dark background at all.
/// That is a different state from `Some(SystemDefault)`: the Android
/// emitter writes night resources only when a dark colour was supplied,
/// while iOS always writes a dark appearance (defaulting to the system
/// pair when unsupplied).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColors {
    pub light: ColorValue,
    pub dark: Option<ColorValue>,
}

impl ThemeColors {
    /// Resolve the light colour for the iOS colorset.  The `system` token
    /// maps to the light half of the system-background pair.
    pub fn ios_light(&self) -> HexColor {
        match self.light {
            ColorValue::Explicit(c) => c,
            ColorValue::SystemDefault => {
                HexColor::from_rgb(constants::IOS_SYSTEM_BACKGROUND_LIGHT)
            }
        }
    }

    /// Resolve the dark colour for the iOS colorset.  The colorset always
    /// carries a dark appearance; an unsupplied dark colour behaves like
    /// the `system` token.
    pub fn ios_dark(&self) -> HexColor {
        match self.dark {
            Some(ColorValue::Explicit(c)) => c,
            Some(ColorValue::SystemDefault) | None => {
                HexColor::from_rgb(constants::IOS_SYSTEM_BACKGROUND_DARK)
            }
        }
    }

    /// Resolve the light colour for `res/values/`.  The `system` token
    /// maps to an explicit white literal; Android plain colour resources
    /// cannot reference a dynamic system colour.
    pub fn android_light(&self) -> HexColor {
        match self.light {
            ColorValue::Explicit(c) => c,
            ColorValue::SystemDefault => HexColor::from_rgb(constants::ANDROID_SYSTEM_LIGHT),
        }
    }

    /// Resolve the dark colour for `res/values-night/`.  Returns `None`
    /// when no dark colour was supplied, in which case the night resource
    /// is not written at all.
    pub fn android_dark(&self) -> Option<HexColor> {
        match self.dark {
            None => None,
            Some(ColorValue::Explicit(c)) => Some(c),
            Some(ColorValue::SystemDefault) => {
                Some(HexColor::from_rgb(constants::ANDROID_SYSTEM_DARK))
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_three_and_six_digit_hex() {
        for value in ["#FFF", "fff", "#ffffff", "F5F6F7", "#a1B2c3", "012"] {
            assert!(is_valid_hex(value), "expected '{value}' to be accepted");
        }
    }

    #[test]
    fn test_rejects_other_lengths_and_characters() {
        for value in ["", "#", "#FFFF", "#FFFFF", "#1234567", "GGG", "#12 34", "# FFF"] {
            assert!(!is_valid_hex(value), "expected '{value}' to be rejected");
        }
    }

    #[test]
    fn test_parse_six_digit() {
        let c = HexColor::parse("#F5F6F7").unwrap();
        assert_eq!((c.r, c.g, c.b), (0xF5, 0xF6, 0xF7));
        assert_eq!(c.to_string(), "#F5F6F7");
    }

    #[test]
    fn test_parse_expands_shorthand() {
        let c = HexColor::parse("#abc").unwrap();
        assert_eq!((c.r, c.g, c.b), (0xAA, 0xBB, 0xCC));
        assert_eq!(c.to_string(), "#AABBCC", "display must normalise to uppercase");
    }

    #[test]
    fn test_parse_without_hash() {
        let c = HexColor::parse("000").unwrap();
        assert_eq!(c.to_string(), "#000000");
    }

    #[test]
    fn test_parse_rejects_invalid() {
        let err = HexColor::parse("#FFFF");
        assert!(err.is_err(), "4-digit hex must be rejected, got {err:?}");
    }

    #[test]
    fn test_system_token_is_case_insensitive() {
        for value in ["system", "SYSTEM", "System"] {
            assert_eq!(
                ColorValue::parse(value).unwrap(),
                ColorValue::SystemDefault
            );
        }
    }

    #[test]
    fn test_color_value_falls_through_to_hex() {
        let v = ColorValue::parse("#FFF").unwrap();
        assert_eq!(v, ColorValue::Explicit(HexColor::from_rgb((0xFF, 0xFF, 0xFF))));
    }

    #[test]
    fn test_ios_resolution_always_has_dark_appearance() {
        let colors = ThemeColors {
            light: ColorValue::SystemDefault,
            dark: None,
        };
        assert_eq!(colors.ios_light().to_string(), "#FFFFFF");
        assert_eq!(
            colors.ios_dark().to_string(),
            "#000000",
            "unsupplied dark must fall back to the system pair"
        );
    }

    #[test]
    fn test_android_dark_absent_when_unsupplied() {
        let colors = ThemeColors {
            light: ColorValue::SystemDefault,
            dark: None,
        };
        assert_eq!(colors.android_light().to_string(), "#FFFFFF");
        assert!(colors.android_dark().is_none());
    }

    #[test]
    fn test_android_dark_system_token_resolves_to_black() {
        let colors = ThemeColors {
            light: ColorValue::SystemDefault,
            dark: Some(ColorValue::SystemDefault),
        };
        assert_eq!(colors.android_dark().map(|c| c.to_string()), Some("#000000".to_string()));
    }

    #[test]
    fn test_explicit_colors_pass_through_unchanged() {
        let light = HexColor::parse("#112233").unwrap();
        let dark = HexColor::parse("#445566").unwrap();
        let colors = ThemeColors {
            light: ColorValue::Explicit(light),
            dark: Some(ColorValue::Explicit(dark)),
        };
        assert_eq!(colors.ios_light(), light);
        assert_eq!(colors.ios_dark(), dark);
        assert_eq!(colors.android_light(), light);
        assert_eq!(colors.android_dark(), Some(dark));
    }
}
