// SplashForge - platform/android.rs
//
// Android asset emission: the layer-list drawable, per-density splash
// bitmaps, and the colour resources (with night-qualified variants when
// a dark theme is configured).

use crate::core::color::HexColor;
use crate::core::model::{EmissionResult, EmissionSpec, Platform};
use crate::core::template;
use crate::platform::{assets, PlatformEmitter};
use crate::util::constants;
use crate::util::error::EmitError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

// =============================================================================
// Project detection
// =============================================================================

/// Path to the Android app module's main source set, if present.
///
/// Detection keys off `android/app/src/main` existing as a directory,
/// which every Gradle-based app project has regardless of build flavour.
pub fn main_source_path(project_path: &Path) -> Option<PathBuf> {
    let main = project_path.join(constants::ANDROID_APP_MAIN);
    main.is_dir().then_some(main)
}

// =============================================================================
// Resource naming
// =============================================================================

// Android resource names must be lowercase; both derived names share the
// lowercased asset name so the drawable can reference them verbatim.

fn image_resource_name(name: &str) -> String {
    format!("{name}{}", constants::ANDROID_IMAGE_SUFFIX)
}

fn color_resource_name(name: &str) -> String {
    format!("{name}{}", constants::ANDROID_COLOR_SUFFIX)
}

// =============================================================================
// Emission
// =============================================================================

/// Writes the Android splash assets into the app module's res tree.
pub struct AndroidEmitter;

impl PlatformEmitter for AndroidEmitter {
    fn platform(&self) -> Platform {
        Platform::Android
    }

    fn detect(&self, project_path: &Path) -> bool {
        main_source_path(project_path).is_some()
    }

    fn emit(&self, spec: &EmissionSpec) -> Result<EmissionResult, EmitError> {
        let Some(main) = main_source_path(&spec.project_path) else {
            tracing::info!(
                path = %spec.project_path.display(),
                "No Android app module detected, skipping Android emission"
            );
            return Ok(EmissionResult::Skipped {
                reason: constants::SKIP_NO_ANDROID_PROJECT.to_string(),
            });
        };

        let name = spec.name.to_lowercase();
        let res = main.join(constants::ANDROID_RES_DIR);
        tracing::debug!(name = %name, dir = %res.display(), "Emitting Android assets");

        write_drawable_xml(&res, &name)?;
        write_density_pngs(spec, &res, &name)?;
        write_color_resources(spec, &res, &name)?;

        tracing::info!(name = %name, "Android assets written");
        Ok(EmissionResult::Emitted)
    }
}

fn write_drawable_xml(res: &Path, name: &str) -> Result<(), EmitError> {
    let drawable_dir = res.join("drawable");
    assets::ensure_dir(&drawable_dir)?;

    let variables = HashMap::from([
        ("imageName", image_resource_name(name)),
        ("colorName", color_resource_name(name)),
    ]);
    let rendered = template::render(constants::DRAWABLE_TEMPLATE, &variables)?;
    assets::write_text(&drawable_dir.join(format!("{name}.xml")), &rendered)
}

fn write_density_pngs(spec: &EmissionSpec, res: &Path, name: &str) -> Result<(), EmitError> {
    let geometry = &spec.geometry;
    let file_name = format!("{}.png", image_resource_name(name));

    let light = assets::load_rgba(&spec.light_icon.path)?;
    for &(qualifier, factor) in constants::ANDROID_DENSITIES {
        let dir = res.join(format!("drawable-{qualifier}"));
        assets::ensure_dir(&dir)?;
        assets::write_scaled_png(
            &light,
            &dir.join(&file_name),
            assets::scaled_px(geometry.target_width, factor),
            assets::scaled_px(geometry.light_height, factor),
        )?;
    }

    if let Some(dark_icon) = &spec.dark_icon {
        let dark = assets::load_rgba(&dark_icon.path)?;
        for &(qualifier, factor) in constants::ANDROID_DENSITIES {
            let dir = res.join(format!("drawable-night-{qualifier}"));
            assets::ensure_dir(&dir)?;
            assets::write_scaled_png(
                &dark,
                &dir.join(&file_name),
                assets::scaled_px(geometry.target_width, factor),
                assets::scaled_px(geometry.dark_height, factor),
            )?;
        }
    }

    Ok(())
}

/// XML body for a single colour resource file.
fn color_resource_xml(color_name: &str, color: HexColor) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
         <resources>\n\
         \x20   <color name=\"{color_name}\">{color}</color>\n\
         </resources>\n"
    )
}

fn write_color_resources(spec: &EmissionSpec, res: &Path, name: &str) -> Result<(), EmitError> {
    let color_name = color_resource_name(name);
    let file_name = format!("{color_name}.xml");

    let values_dir = res.join("values");
    assets::ensure_dir(&values_dir)?;
    assets::write_text(
        &values_dir.join(&file_name),
        &color_resource_xml(&color_name, spec.colors.android_light()),
    )?;

    // Night resources exist only when a dark background was configured;
    // without the qualified directory Android falls back to the light
    // value in both themes.
    if let Some(dark) = spec.colors.android_dark() {
        let night_dir = res.join("values-night");
        assets::ensure_dir(&night_dir)?;
        assets::write_text(&night_dir.join(&file_name), &color_resource_xml(&color_name, dark))?;
    }

    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_source_path_detection() {
        let dir = tempfile::tempdir().expect("create temp dir");
        assert_eq!(main_source_path(dir.path()), None);

        let main = dir.path().join("android/app/src/main");
        std::fs::create_dir_all(&main).expect("create main source set");
        assert_eq!(main_source_path(dir.path()), Some(main));
    }

    #[test]
    fn test_detect_requires_directory_not_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::create_dir_all(dir.path().join("android/app/src")).expect("create parent dirs");
        std::fs::write(dir.path().join("android/app/src/main"), b"not a dir")
            .expect("write placeholder file");

        assert!(!AndroidEmitter.detect(dir.path()));
    }

    #[test]
    fn test_resource_names_share_the_asset_name() {
        assert_eq!(image_resource_name("bootsplash"), "bootsplash_image");
        assert_eq!(color_resource_name("bootsplash"), "bootsplash_color");
    }

    #[test]
    fn test_color_resource_xml_content() {
        let xml = color_resource_xml("bootsplash_color", HexColor { r: 255, g: 87, b: 51 });

        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
             <resources>\n\
             \x20   <color name=\"bootsplash_color\">#FF5733</color>\n\
             </resources>\n"
        );
    }
}
