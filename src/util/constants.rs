// SplashForge - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.
// Referenced by DevWorkflow Part A Rule 11 (explicit named-constant limits).

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "SplashForge";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Reference canvas and icon sizing
// =============================================================================

/// Width in points of the reference canvas the storyboard is designed
/// against (iPhone 11 / XR portrait).  A design-time constant only: the
/// storyboard's centering constraints keep the layout correct on every
/// actual screen size at render time.
pub const REFERENCE_CANVAS_WIDTH: f64 = 414.0;

/// Height in points of the reference canvas (iPhone 11 / XR portrait).
pub const REFERENCE_CANVAS_HEIGHT: f64 = 896.0;

/// Minimum accepted icon width in density-independent pixels.
pub const MIN_ICON_WIDTH: u32 = 1;

/// Maximum accepted icon width in density-independent pixels.
/// Wider than the reference canvas makes no sense for a centered logo.
pub const MAX_ICON_WIDTH: u32 = 1_000;

/// Icon width suggested by the interactive prompt (dp).  ~100 dp reads
/// well on every density bucket without dominating the screen.
pub const DEFAULT_ICON_WIDTH: u32 = 100;

// =============================================================================
// Asset naming
// =============================================================================

/// Base name used for all generated assets when none is supplied.
pub const DEFAULT_ASSET_NAME: &str = "BootSplash";

/// Suffix appended to the asset name for Android image resources.
pub const ANDROID_IMAGE_SUFFIX: &str = "_image";

/// Suffix appended to the asset name for Android colour resources.
pub const ANDROID_COLOR_SUFFIX: &str = "_color";

// =============================================================================
// Colours
// =============================================================================

/// Accepted hexadecimal colour syntax: 3 or 6 hex digits, optional leading
/// '#', case-insensitive.  Anything else (including 4- and 5-digit forms)
/// is rejected.
pub const HEX_COLOR_PATTERN: &str = r"^#?([0-9A-Fa-f]{3}){1,2}$";

/// Symbolic token meaning "defer to the platform default for this theme".
pub const SYSTEM_COLOR_TOKEN: &str = "system";

/// Background colour pre-filled by the interactive prompt.
pub const PROMPT_DEFAULT_BACKGROUND: &str = "#FFF";

/// Light appearance of the iOS system-background pair written into the
/// colorset when the colour is the `system` token.
pub const IOS_SYSTEM_BACKGROUND_LIGHT: (u8, u8, u8) = (0xFF, 0xFF, 0xFF);

/// Dark appearance of the iOS system-background pair.
pub const IOS_SYSTEM_BACKGROUND_DARK: (u8, u8, u8) = (0x00, 0x00, 0x00);

/// Literal written to `res/values/` when the light colour is the `system`
/// token.  Android has no dynamic colour reference in plain colour
/// resources, so the token resolves to an explicit white.
pub const ANDROID_SYSTEM_LIGHT: (u8, u8, u8) = (0xFF, 0xFF, 0xFF);

/// Literal written to `res/values-night/` for the `system` token.
pub const ANDROID_SYSTEM_DARK: (u8, u8, u8) = (0x00, 0x00, 0x00);

// =============================================================================
// iOS emission
// =============================================================================

/// iOS project subdirectory under the host project root.
pub const IOS_DIR: &str = "ios";

/// Asset catalog directory name inside the iOS app group.
pub const IOS_XCASSETS_DIR: &str = "Images.xcassets";

/// Scale factors for imageset variants (@1x, @2x, @3x).
pub const IOS_SCALES: &[u32] = &[1, 2, 3];

/// Property-list file carrying the launch screen key.
pub const IOS_INFO_PLIST: &str = "Info.plist";

/// Info.plist key naming the launch storyboard.
pub const LAUNCH_STORYBOARD_KEY: &str = "UILaunchStoryboardName";

// =============================================================================
// Android emission
// =============================================================================

/// Main source set of the Android app module, relative to the project root.
pub const ANDROID_APP_MAIN: &str = "android/app/src/main";

/// Resource directory name inside the main source set.
pub const ANDROID_RES_DIR: &str = "res";

/// Density qualifiers and their px-per-dp scale factors, from mdpi (the
/// 1.0 baseline) up to xxxhdpi.
pub const ANDROID_DENSITIES: &[(&str, f64)] = &[
    ("mdpi", 1.0),
    ("hdpi", 1.5),
    ("xhdpi", 2.0),
    ("xxhdpi", 3.0),
    ("xxxhdpi", 4.0),
];

// =============================================================================
// Skip reasons
// =============================================================================

/// Reported when the project root has no recognisable iOS project.
pub const SKIP_NO_IOS_PROJECT: &str = "no valid ios project";

/// Reported when the project root has no recognisable Android app module.
pub const SKIP_NO_ANDROID_PROJECT: &str = "no valid android project";

// =============================================================================
// Templates
// =============================================================================

/// Logical name of the embedded iOS launch storyboard template.
pub const STORYBOARD_TEMPLATE: &str = "splash.storyboard";

/// Logical name of the embedded Android layer-list drawable template.
pub const DRAWABLE_TEMPLATE: &str = "splash_drawable.xml";

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name, looked up in the host project root.
pub const CONFIG_FILE_NAME: &str = "splashforge.toml";
