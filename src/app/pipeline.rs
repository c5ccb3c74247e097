// SplashForge - app/pipeline.rs
//
// Generation pipeline. Inspects the source icons, computes the shared
// geometry, then hands one immutable emission spec to each platform
// emitter in turn.
//
// The pipeline is synchronous: two platforms and a handful of small
// image writes per run do not justify a thread pool. Emitters are
// independent; an error on one platform is recorded in the report and
// the other platform still runs.

use crate::app::options::GenerateOptions;
use crate::core::geometry::Geometry;
use crate::core::model::{
    EmissionResult, EmissionSpec, GenerateReport, IconSpec, ImageDims, PlatformOutcome,
};
use crate::platform::android::AndroidEmitter;
use crate::platform::ios::IosEmitter;
use crate::platform::{assets, PlatformEmitter};
use crate::util::error::{Result, SplashForgeError};

/// Run one full generation pass over both platforms.
///
/// Fails outright only when a source icon cannot be inspected; from
/// that point on, per-platform trouble is folded into the report.
pub fn run(options: &GenerateOptions) -> Result<GenerateReport> {
    tracing::info!(
        project = %options.project_path.display(),
        name = %options.name,
        width = options.icon_width,
        "Starting splash asset generation"
    );

    // -- Inspection --
    let light_dims = assets::image_dimensions(&options.icon_path).map_err(SplashForgeError::Inspect)?;
    let dark_dims = match &options.dark_icon_path {
        Some(path) => assets::image_dimensions(path).map_err(SplashForgeError::Inspect)?,
        None => ImageDims::placeholder(),
    };

    // -- Geometry --
    let geometry = Geometry::compute(options.icon_width, light_dims, dark_dims);
    tracing::debug!(
        light_height = geometry.light_height,
        dark_height = geometry.dark_height,
        x = geometry.centered_x(),
        y = geometry.centered_y(),
        "Geometry computed"
    );

    // -- Emission --
    let spec = EmissionSpec {
        project_path: options.project_path.clone(),
        name: options.name.clone(),
        geometry,
        light_icon: IconSpec::light(options.icon_path.clone()),
        dark_icon: options.dark_icon_path.clone().map(IconSpec::dark),
        colors: options.background_color.clone(),
    };

    let ios = run_emitter(&IosEmitter, &spec);
    let android = run_emitter(&AndroidEmitter, &spec);

    Ok(GenerateReport {
        project_path: spec.project_path,
        ios,
        android,
    })
}

/// Run one emitter and fold its result into a report outcome.
fn run_emitter(emitter: &dyn PlatformEmitter, spec: &EmissionSpec) -> PlatformOutcome {
    match emitter.emit(spec) {
        Ok(EmissionResult::Emitted) => PlatformOutcome::Emitted,
        Ok(EmissionResult::Skipped { reason }) => {
            tracing::info!(platform = %emitter.platform(), reason = %reason, "Platform skipped");
            PlatformOutcome::Skipped { reason }
        }
        Err(error) => {
            tracing::error!(
                platform = %emitter.platform(),
                error = %error,
                "Platform emission failed"
            );
            PlatformOutcome::Failed { error }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::{ColorValue, ThemeColors};
    use image::RgbaImage;
    use std::path::Path;

    fn write_icon(path: &Path, width: u32, height: u32) {
        RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]))
            .save(path)
            .expect("write fixture icon");
    }

    fn options_for(project: &Path, icon: &Path) -> GenerateOptions {
        GenerateOptions {
            project_path: project.to_path_buf(),
            icon_path: icon.to_path_buf(),
            dark_icon_path: None,
            background_color: ThemeColors {
                light: ColorValue::SystemDefault,
                dark: None,
            },
            icon_width: 100,
            name: "BootSplash".to_string(),
        }
    }

    #[test]
    fn test_unreadable_icon_fails_the_whole_run() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let options = options_for(dir.path(), &dir.path().join("missing.png"));

        let err = run(&options).unwrap_err();
        assert!(
            matches!(err, SplashForgeError::Inspect(_)),
            "expected an inspection error, got {err:?}"
        );
    }

    #[test]
    fn test_project_without_platforms_skips_both() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let icon = dir.path().join("icon.png");
        write_icon(&icon, 200, 100);

        let report = run(&options_for(dir.path(), &icon)).expect("run should succeed");

        assert!(
            matches!(report.ios, PlatformOutcome::Skipped { .. }),
            "got {:?}",
            report.ios
        );
        assert!(
            matches!(report.android, PlatformOutcome::Skipped { .. }),
            "got {:?}",
            report.android
        );
        assert!(report.success(), "skips must not count as failure");
    }

    #[test]
    fn test_android_runs_even_when_ios_is_absent() {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::create_dir_all(dir.path().join("android/app/src/main"))
            .expect("create android tree");
        let icon = dir.path().join("icon.png");
        write_icon(&icon, 200, 100);

        let report = run(&options_for(dir.path(), &icon)).expect("run should succeed");

        assert!(matches!(report.ios, PlatformOutcome::Skipped { .. }));
        assert!(report.android.is_emitted(), "got {:?}", report.android);
        assert!(report.success());
    }
}
