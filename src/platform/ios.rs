// SplashForge - platform/ios.rs
//
// iOS asset emission: the imageset and colorset under Images.xcassets,
// the launch storyboard, and the optional Info.plist wiring that makes
// Xcode pick the storyboard up.

use crate::core::color::HexColor;
use crate::core::geometry::format_dp;
use crate::core::model::{EmissionResult, EmissionSpec, Platform};
use crate::core::template;
use crate::platform::{assets, PlatformEmitter};
use crate::util::constants;
use crate::util::error::EmitError;
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

// =============================================================================
// Project detection
// =============================================================================

/// Name of the Xcode project bundle (`<root>/ios/*.xcodeproj`), if any.
///
/// Bundles are matched on extension and taken in name order, so
/// detection is deterministic.  The app directory holding
/// Images.xcassets and Info.plist is assumed to share the bundle's
/// stem, which is how the standard project layout is generated.
pub fn project_name(project_path: &Path) -> Option<String> {
    let entries = std::fs::read_dir(project_path.join(constants::IOS_DIR)).ok()?;
    entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "xcodeproj"))
        .min()
        .and_then(|path| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
}

fn app_dir(project_path: &Path, project: &str) -> PathBuf {
    project_path.join(constants::IOS_DIR).join(project)
}

// =============================================================================
// Asset catalog JSON
// =============================================================================

/// Appearance qualifier attached to dark-variant catalog entries.
#[derive(Serialize)]
struct Appearance {
    appearance: &'static str,
    value: &'static str,
}

fn dark_appearance() -> Vec<Appearance> {
    vec![Appearance {
        appearance: "luminosity",
        value: "dark",
    }]
}

#[derive(Serialize)]
struct ImageEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    appearances: Option<Vec<Appearance>>,
    filename: String,
    idiom: &'static str,
    scale: String,
}

#[derive(Serialize)]
struct ColorComponents {
    alpha: &'static str,
    blue: String,
    green: String,
    red: String,
}

impl ColorComponents {
    fn from_hex(color: HexColor) -> Self {
        Self {
            alpha: "1.000",
            blue: format!("0x{:02X}", color.b),
            green: format!("0x{:02X}", color.g),
            red: format!("0x{:02X}", color.r),
        }
    }
}

#[derive(Serialize)]
struct ColorDef {
    #[serde(rename = "color-space")]
    color_space: &'static str,
    components: ColorComponents,
}

#[derive(Serialize)]
struct ColorEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    appearances: Option<Vec<Appearance>>,
    color: ColorDef,
    idiom: &'static str,
}

#[derive(Serialize)]
struct CatalogInfo {
    author: &'static str,
    version: u32,
}

#[derive(Serialize)]
struct ImagesetContents {
    images: Vec<ImageEntry>,
    info: CatalogInfo,
}

#[derive(Serialize)]
struct ColorsetContents {
    colors: Vec<ColorEntry>,
    info: CatalogInfo,
}

fn catalog_info() -> CatalogInfo {
    CatalogInfo {
        author: "xcode",
        version: 1,
    }
}

fn write_contents_json<T: Serialize>(path: &Path, contents: &T) -> Result<(), EmitError> {
    let json = serde_json::to_string_pretty(contents).map_err(|e| EmitError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;
    assets::write_text(path, &json)
}

// =============================================================================
// Emission
// =============================================================================

/// Writes the iOS splash assets into the detected Xcode app directory.
pub struct IosEmitter;

impl PlatformEmitter for IosEmitter {
    fn platform(&self) -> Platform {
        Platform::Ios
    }

    fn detect(&self, project_path: &Path) -> bool {
        project_name(project_path).is_some()
    }

    fn emit(&self, spec: &EmissionSpec) -> Result<EmissionResult, EmitError> {
        let Some(project) = project_name(&spec.project_path) else {
            tracing::info!(
                path = %spec.project_path.display(),
                "No Xcode project detected, skipping iOS emission"
            );
            return Ok(EmissionResult::Skipped {
                reason: constants::SKIP_NO_IOS_PROJECT.to_string(),
            });
        };

        let app_dir = app_dir(&spec.project_path, &project);
        tracing::debug!(project = %project, dir = %app_dir.display(), "Emitting iOS assets");

        write_imageset(spec, &app_dir)?;
        write_colorset(spec, &app_dir)?;
        write_storyboard(spec, &app_dir)?;

        tracing::info!(project = %project, "iOS assets written");
        Ok(EmissionResult::Emitted)
    }
}

/// Catalog filename for one scale slot, e.g. `Boot.png` / `Boot@2x.png`
/// / `Boot_dark@3x.png`.
fn scaled_filename(name: &str, scale: u32, is_dark: bool) -> String {
    let suffix = if is_dark { "_dark" } else { "" };
    if scale == 1 {
        format!("{name}{suffix}.png")
    } else {
        format!("{name}{suffix}@{scale}x.png")
    }
}

fn write_imageset(spec: &EmissionSpec, app_dir: &Path) -> Result<(), EmitError> {
    let imageset_dir = app_dir
        .join(constants::IOS_XCASSETS_DIR)
        .join(format!("{}.imageset", spec.name));
    assets::ensure_dir(&imageset_dir)?;

    let geometry = &spec.geometry;
    let light = assets::load_rgba(&spec.light_icon.path)?;
    let mut entries: Vec<ImageEntry> = Vec::new();

    for &scale in constants::IOS_SCALES {
        let factor = f64::from(scale);
        let filename = scaled_filename(&spec.name, scale, false);
        assets::write_scaled_png(
            &light,
            &imageset_dir.join(&filename),
            assets::scaled_px(geometry.target_width, factor),
            assets::scaled_px(geometry.light_height, factor),
        )?;
        entries.push(ImageEntry {
            appearances: None,
            filename,
            idiom: "universal",
            scale: format!("{scale}x"),
        });
    }

    if let Some(dark_icon) = &spec.dark_icon {
        let dark = assets::load_rgba(&dark_icon.path)?;
        for &scale in constants::IOS_SCALES {
            let factor = f64::from(scale);
            let filename = scaled_filename(&spec.name, scale, true);
            assets::write_scaled_png(
                &dark,
                &imageset_dir.join(&filename),
                assets::scaled_px(geometry.target_width, factor),
                assets::scaled_px(geometry.dark_height, factor),
            )?;
            entries.push(ImageEntry {
                appearances: Some(dark_appearance()),
                filename,
                idiom: "universal",
                scale: format!("{scale}x"),
            });
        }
    }

    write_contents_json(
        &imageset_dir.join("Contents.json"),
        &ImagesetContents {
            images: entries,
            info: catalog_info(),
        },
    )
}

fn write_colorset(spec: &EmissionSpec, app_dir: &Path) -> Result<(), EmitError> {
    let colorset_dir = app_dir
        .join(constants::IOS_XCASSETS_DIR)
        .join(format!("{}.colorset", spec.name));
    assets::ensure_dir(&colorset_dir)?;

    // The catalog always carries both appearances so the splash colour
    // follows the device theme without an app relaunch.
    let contents = ColorsetContents {
        colors: vec![
            ColorEntry {
                appearances: None,
                color: ColorDef {
                    color_space: "srgb",
                    components: ColorComponents::from_hex(spec.colors.ios_light()),
                },
                idiom: "universal",
            },
            ColorEntry {
                appearances: Some(dark_appearance()),
                color: ColorDef {
                    color_space: "srgb",
                    components: ColorComponents::from_hex(spec.colors.ios_dark()),
                },
                idiom: "universal",
            },
        ],
        info: catalog_info(),
    };

    write_contents_json(&colorset_dir.join("Contents.json"), &contents)
}

fn write_storyboard(spec: &EmissionSpec, app_dir: &Path) -> Result<(), EmitError> {
    let geometry = &spec.geometry;
    let variables = HashMap::from([
        ("width", format_dp(geometry.target_width)),
        ("height", format_dp(geometry.light_height)),
        ("x", format_dp(geometry.centered_x())),
        ("y", format_dp(geometry.centered_y())),
        ("imageAsset", spec.name.clone()),
        ("backgroundColor", spec.name.clone()),
    ]);
    let rendered = template::render(constants::STORYBOARD_TEMPLATE, &variables)?;
    assets::write_text(&app_dir.join(format!("{}.storyboard", spec.name)), &rendered)
}

// =============================================================================
// Xcode wiring
// =============================================================================

/// Sets the generated storyboard as the launch screen by updating
/// `UILaunchStoryboardName` in the app target's Info.plist.
///
/// Xcode stores the value with its extension, so `Boot` is written as
/// `Boot.storyboard`.  An existing entry is replaced in place; a missing
/// one is inserted just before the closing dict tag.  Running this twice
/// leaves the file byte-identical.
pub fn add_to_xcode(project_path: &Path, name: &str) -> Result<(), EmitError> {
    let Some(project) = project_name(project_path) else {
        return Err(EmitError::Plist {
            path: project_path.join(constants::IOS_DIR),
            reason: "no Xcode project found",
        });
    };

    let plist_path = app_dir(project_path, &project).join(constants::IOS_INFO_PLIST);
    let content = std::fs::read_to_string(&plist_path).map_err(|e| EmitError::AssetWrite {
        path: plist_path.clone(),
        operation: "read",
        source: e,
    })?;

    let value = format!("{name}.storyboard");
    let updated = set_plist_string(&content, constants::LAUNCH_STORYBOARD_KEY, &value).ok_or_else(
        || EmitError::Plist {
            path: plist_path.clone(),
            reason: "no usable <dict> structure for the launch storyboard key",
        },
    )?;

    assets::write_text(&plist_path, &updated)?;
    tracing::info!(
        path = %plist_path.display(),
        value = %value,
        "Updated launch storyboard entry in Info.plist"
    );
    tracing::info!(
        "Add the storyboard file in Xcode's navigator if the project does not list it yet"
    );
    Ok(())
}

/// Replaces or inserts a `<key>/<string>` pair in plist XML text.
///
/// Plists are edited textually rather than through a full parser so that
/// unrelated formatting and comments survive untouched.  Returns None
/// when the document has no place to put the pair.
fn set_plist_string(content: &str, key: &str, value: &str) -> Option<String> {
    let key_tag = format!("<key>{key}</key>");

    if let Some(key_pos) = content.find(&key_tag) {
        // Replace the value of the first <string> following the key.
        let after_key = key_pos + key_tag.len();
        let open = content[after_key..].find("<string>")?;
        let close = content[after_key..].find("</string>")?;
        if close < open {
            return None;
        }
        let value_start = after_key + open + "<string>".len();
        let value_end = after_key + close;

        let mut updated = String::with_capacity(content.len() + value.len());
        updated.push_str(&content[..value_start]);
        updated.push_str(value);
        updated.push_str(&content[value_end..]);
        Some(updated)
    } else {
        // Insert before the last closing dict tag.
        let insert_at = content.rfind("</dict>")?;
        let mut updated = String::with_capacity(content.len() + key_tag.len() + value.len() + 32);
        updated.push_str(&content[..insert_at]);
        updated.push_str(&format!("\t{key_tag}\n\t<string>{value}</string>\n"));
        updated.push_str(&content[insert_at..]);
        Some(updated)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_PLIST: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
        <plist version=\"1.0\">\n\
        <dict>\n\
        \t<key>CFBundleName</key>\n\
        \t<string>TestApp</string>\n\
        </dict>\n\
        </plist>\n";

    #[test]
    fn test_project_name_finds_xcodeproj_stem() {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::create_dir_all(dir.path().join("ios/MyApp.xcodeproj"))
            .expect("create xcodeproj dir");

        let name = project_name(dir.path());
        assert_eq!(name.as_deref(), Some("MyApp"), "got {name:?}");
    }

    #[test]
    fn test_project_name_none_without_ios_dir() {
        let dir = tempfile::tempdir().expect("create temp dir");
        assert_eq!(project_name(dir.path()), None);
    }

    #[test]
    fn test_project_name_in_root_with_brackets() {
        // Directory names like "app [prod]" must not disturb detection.
        let dir = tempfile::tempdir().expect("create temp dir");
        let root = dir.path().join("app [prod]");
        std::fs::create_dir_all(root.join("ios/MyApp.xcodeproj")).expect("create xcodeproj dir");

        let name = project_name(&root);
        assert_eq!(name.as_deref(), Some("MyApp"), "got {name:?}");
    }

    #[test]
    fn test_detect_matches_project_name() {
        let dir = tempfile::tempdir().expect("create temp dir");
        assert!(!IosEmitter.detect(dir.path()));

        std::fs::create_dir_all(dir.path().join("ios/Demo.xcodeproj"))
            .expect("create xcodeproj dir");
        assert!(IosEmitter.detect(dir.path()));
    }

    #[test]
    fn test_scaled_filename_variants() {
        assert_eq!(scaled_filename("Boot", 1, false), "Boot.png");
        assert_eq!(scaled_filename("Boot", 2, false), "Boot@2x.png");
        assert_eq!(scaled_filename("Boot", 3, true), "Boot_dark@3x.png");
        assert_eq!(scaled_filename("Boot", 1, true), "Boot_dark.png");
    }

    #[test]
    fn test_set_plist_string_inserts_before_closing_dict() {
        let updated = set_plist_string(MINIMAL_PLIST, "UILaunchStoryboardName", "Boot.storyboard")
            .expect("insert should succeed");

        assert!(
            updated.contains("<key>UILaunchStoryboardName</key>\n\t<string>Boot.storyboard</string>"),
            "missing inserted pair in {updated}"
        );
        // The original entry must survive untouched.
        assert!(updated.contains("<key>CFBundleName</key>"));
        assert!(updated.ends_with("</dict>\n</plist>\n"));
    }

    #[test]
    fn test_set_plist_string_replaces_existing_value() {
        let first = set_plist_string(MINIMAL_PLIST, "UILaunchStoryboardName", "Old.storyboard")
            .expect("insert should succeed");
        let second = set_plist_string(&first, "UILaunchStoryboardName", "New.storyboard")
            .expect("replace should succeed");

        assert!(!second.contains("Old.storyboard"), "stale value in {second}");
        assert!(second.contains("<string>New.storyboard</string>"));
        assert_eq!(
            second.matches("UILaunchStoryboardName").count(),
            1,
            "key duplicated in {second}"
        );
    }

    #[test]
    fn test_set_plist_string_is_idempotent() {
        let first = set_plist_string(MINIMAL_PLIST, "UILaunchStoryboardName", "Boot.storyboard")
            .expect("insert should succeed");
        let second = set_plist_string(&first, "UILaunchStoryboardName", "Boot.storyboard")
            .expect("second application should succeed");

        assert_eq!(first, second, "repeated application must not change the file");
    }

    #[test]
    fn test_set_plist_string_rejects_document_without_dict() {
        assert_eq!(
            set_plist_string("<plist></plist>", "UILaunchStoryboardName", "Boot.storyboard"),
            None
        );
    }
}
