// SplashForge - core/geometry.rs
//
// On-canvas geometry for the splash icon: aspect-preserving height
// derivation and centering offsets against the fixed reference canvas.
// Values stay full-precision internally; one-decimal rounding happens
// only at serialisation into templates.

use crate::core::model::ImageDims;
use crate::util::constants;

/// Derived on-canvas geometry for both icon variants.
///
/// Heights are always derived from the source aspect ratio, never
/// supplied directly, so the icon is scaled and never stretched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Target icon width in dp, as chosen by the user.
    pub target_width: f64,

    /// Derived height of the light icon at `target_width`.
    pub light_height: f64,

    /// Derived height of the dark icon at `target_width`.
    pub dark_height: f64,
}

impl Geometry {
    /// Compute geometry for both variants from their pixel dimensions.
    pub fn compute(target_width: u32, light: ImageDims, dark: ImageDims) -> Self {
        let width = f64::from(target_width);
        Self {
            target_width: width,
            light_height: scaled_height(light, width),
            dark_height: scaled_height(dark, width),
        }
    }

    /// Horizontal offset that centers the icon on the reference canvas.
    pub fn centered_x(&self) -> f64 {
        (constants::REFERENCE_CANVAS_WIDTH - self.target_width) / 2.0
    }

    /// Vertical offset that centers the light icon on the reference canvas.
    pub fn centered_y(&self) -> f64 {
        (constants::REFERENCE_CANVAS_HEIGHT - self.light_height) / 2.0
    }
}

/// Height of an image scaled to `target_width` with its aspect ratio
/// preserved: `source_height / source_width * target_width`.
pub fn scaled_height(dims: ImageDims, target_width: f64) -> f64 {
    f64::from(dims.height) / f64::from(dims.width) * target_width
}

/// Serialise a dp value for templates: one decimal place, always present
/// (`50` -> `"50.0"`), matching the layout files Xcode itself writes.
pub fn format_dp(value: f64) -> String {
    format!("{value:.1}")
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(width: u32, height: u32) -> ImageDims {
        ImageDims { width, height }
    }

    #[test]
    fn test_landscape_icon_scales_down() {
        // 200x100 source at 100 dp wide -> 50 dp tall.
        let g = Geometry::compute(100, dims(200, 100), ImageDims::placeholder());
        assert_eq!(g.target_width, 100.0);
        assert_eq!(g.light_height, 50.0);
    }

    #[test]
    fn test_centering_on_reference_canvas() {
        let g = Geometry::compute(100, dims(200, 100), ImageDims::placeholder());
        assert_eq!(g.centered_x(), 157.0, "(414 - 100) / 2");
        assert_eq!(g.centered_y(), 423.0, "(896 - 50) / 2");
    }

    #[test]
    fn test_aspect_ratio_is_preserved() {
        // height / width of the result must equal the source ratio for a
        // spread of shapes and target widths.
        let cases = [
            (dims(100, 100), 250),
            (dims(640, 480), 100),
            (dims(30, 90), 999),
            (dims(1024, 1), 1),
        ];
        for (d, w) in cases {
            let h = scaled_height(d, f64::from(w));
            let source_ratio = f64::from(d.height) / f64::from(d.width);
            let result_ratio = h / f64::from(w);
            assert!(
                (source_ratio - result_ratio).abs() < 1e-9,
                "ratio drifted for {d:?} at width {w}: {source_ratio} vs {result_ratio}"
            );
        }
    }

    #[test]
    fn test_internal_precision_is_not_rounded() {
        // 300x100 at 100 dp gives a repeating fraction; storage keeps it.
        let h = scaled_height(dims(300, 100), 100.0);
        assert!((h - 100.0 / 3.0).abs() < 1e-9, "stored height was {h}");
    }

    #[test]
    fn test_format_dp_one_decimal() {
        assert_eq!(format_dp(50.0), "50.0");
        assert_eq!(format_dp(100.0 / 3.0), "33.3");
        assert_eq!(format_dp(423.0), "423.0");
        assert_eq!(format_dp(0.05), "0.1");
    }

    #[test]
    fn test_placeholder_dark_dims_yield_square_height() {
        // 1x1 placeholder has ratio 1, so the dark height equals the
        // target width and emission never needs a special case.
        let g = Geometry::compute(120, dims(200, 100), ImageDims::placeholder());
        assert_eq!(g.dark_height, 120.0);
    }
}
