// SplashForge - main.rs
//
// Binary entry point. Handles:
// 1. CLI argument parsing
// 2. splashforge.toml loading and logging initialisation
// 3. Interactive prompts for anything still missing
// 4. Pipeline invocation and the per-platform summary

use splashforge::app;
use splashforge::core;
use splashforge::platform;
use splashforge::util;

use clap::Parser;
use console::style;
use inquire::validator::Validation;
use inquire::{Confirm, InquireError, Text};
use splashforge::app::options::RawOptions;
use splashforge::core::model::PlatformOutcome;
use splashforge::util::constants;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// SplashForge - Splash screen asset generator for iOS and Android.
///
/// Point SplashForge at an app project with one source icon (plus an
/// optional dark variant) and it writes every splash asset both
/// platforms need: scaled images, colour resources, and the launch
/// layout files.
#[derive(Parser, Debug)]
#[command(name = "splashforge", version, about)]
struct Cli {
    /// Project root directory (prompted for if omitted).
    path: Option<PathBuf>,

    /// Source icon image for the light/default theme.
    #[arg(short = 'i', long = "icon")]
    icon: Option<PathBuf>,

    /// Source icon image for the dark theme.
    #[arg(long = "dark-icon")]
    dark_icon: Option<PathBuf>,

    /// Background colour: hex (e.g. "#FF5733") or "system".
    #[arg(short = 'b', long = "background-color")]
    background_color: Option<String>,

    /// Dark-theme background colour: hex or "system".
    #[arg(long = "dark-background-color")]
    dark_background_color: Option<String>,

    /// Icon width in dp (1-1000).
    #[arg(short = 'w', long = "icon-width")]
    icon_width: Option<u32>,

    /// Base name for the generated assets.
    #[arg(short = 'n', long = "name")]
    name: Option<String>,

    /// Update the iOS launch screen setting without asking.
    #[arg(long = "add-to-xcode")]
    add_to_xcode: bool,

    /// Never prompt; fail instead when required values are missing.
    #[arg(long = "non-interactive")]
    non_interactive: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Prompts need a real terminal; a redirected stdin (CI, scripts)
    // behaves exactly like --non-interactive.
    let interactive = !cli.non_interactive && std::io::stdin().is_terminal();

    // Project path comes first: the config file lives inside it.
    let project_path = match cli.path {
        Some(path) => path,
        None if interactive => prompt_project_path(),
        None => PathBuf::from("."),
    };

    let (file_config, config_warnings) = platform::config::load_config(&project_path);

    // Initialise logging subsystem
    util::logging::init(cli.debug, file_config.log_level.as_deref());

    tracing::info!(
        version = constants::APP_VERSION,
        debug = cli.debug,
        "SplashForge starting"
    );

    for warning in &config_warnings {
        tracing::warn!("{}", warning);
        eprintln!("{} {warning}", style("⚠").yellow().bold());
    }

    // Layer the option sources: flags > config file > prompts.
    let mut raw = RawOptions {
        project_path: Some(project_path),
        icon_path: cli.icon,
        dark_icon_path: cli.dark_icon,
        background_color: cli.background_color,
        dark_background_color: cli.dark_background_color,
        icon_width: cli.icon_width,
        name: cli.name,
    };
    raw.merge_config(&file_config);

    if interactive {
        fill_interactively(&mut raw);
    } else if raw.background_color.is_none() {
        // Without a terminal the colour falls back to the platform
        // theme default; the other required values stay required.
        raw.background_color = Some(constants::SYSTEM_COLOR_TOKEN.to_string());
    }

    let options = match raw.resolve() {
        Ok(options) => options,
        Err(e) => {
            tracing::error!(error = %e, "Option validation failed");
            eprintln!("{} {e}", style("✗").red().bold());
            std::process::exit(1);
        }
    };

    println!("Looking good! Generating files…");

    let report = match app::pipeline::run(&options) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{} {e}", style("✗").red().bold());
            std::process::exit(1);
        }
    };

    print_outcome(core::model::Platform::Ios.label(), &report.ios);
    print_outcome(core::model::Platform::Android.label(), &report.android);

    if report.ios.is_emitted() && should_add_to_xcode(cli.add_to_xcode, interactive) {
        if let Err(e) = platform::ios::add_to_xcode(&report.project_path, &options.name) {
            eprintln!("{} {e}", style("✗").red().bold());
            std::process::exit(1);
        }
        println!(
            "{} Launch storyboard wired into the Xcode project",
            style("✓").green().bold()
        );
    }

    if !report.success() {
        std::process::exit(1);
    }

    println!(
        "{} Done! Splash assets written to {}",
        style("✔").green().bold(),
        report.project_path.display()
    );
}

/// Print one platform's line of the completion summary.
fn print_outcome(label: &str, outcome: &PlatformOutcome) {
    match outcome {
        PlatformOutcome::Emitted => {
            println!("{}", style(format!("✨ {label} done")).dim());
        }
        PlatformOutcome::Skipped { reason } => {
            println!("{} {label} skipped: {reason}", style("⚠").yellow().bold());
        }
        PlatformOutcome::Failed { error } => {
            eprintln!("{} {label} failed: {error}", style("✗").red().bold());
        }
    }
}

/// Unwrap a prompt result, treating Esc/Ctrl-C as a clean abort.
fn prompt_or_abort<T>(result: Result<T, InquireError>) -> T {
    match result {
        Ok(value) => value,
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
            println!("Aborted.");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{} Prompt failed: {e}", style("✗").red().bold());
            std::process::exit(1);
        }
    }
}

fn prompt_project_path() -> PathBuf {
    let answer = Text::new("Project path:")
        .with_default(".")
        .with_help_message("Root of the app project holding ios/ and android/")
        .with_validator(|input: &str| {
            if Path::new(input).is_dir() {
                Ok(Validation::Valid)
            } else {
                Ok(Validation::Invalid(
                    format!("The directory '{input}' could not be found").into(),
                ))
            }
        })
        .prompt();
    PathBuf::from(prompt_or_abort(answer))
}

/// Prompt for every required value still missing after flags and the
/// config file, then ask for the final go-ahead.
fn fill_interactively(raw: &mut RawOptions) {
    if raw.icon_path.is_none() {
        let answer = Text::new("Source icon file:")
            .with_help_message("Path to the light/default theme icon image")
            .with_validator(|input: &str| {
                if Path::new(input).is_file() {
                    Ok(Validation::Valid)
                } else {
                    Ok(Validation::Invalid(
                        format!("The file '{input}' could not be found").into(),
                    ))
                }
            })
            .prompt();
        raw.icon_path = Some(PathBuf::from(prompt_or_abort(answer)));
    }

    if raw.background_color.is_none() {
        let answer = Text::new("Background colour:")
            .with_default(constants::PROMPT_DEFAULT_BACKGROUND)
            .with_help_message("Hexadecimal (e.g. #FF5733) or \"system\"")
            .with_validator(|input: &str| {
                if core::color::is_valid_hex(input)
                    || input.eq_ignore_ascii_case(constants::SYSTEM_COLOR_TOKEN)
                {
                    Ok(Validation::Valid)
                } else {
                    Ok(Validation::Invalid("Invalid hexadecimal colour.".into()))
                }
            })
            .prompt();
        raw.background_color = Some(prompt_or_abort(answer));
    }

    if raw.icon_width.is_none() {
        let answer = Text::new("Icon width (in dp):")
            .with_default("100")
            .with_help_message("Roughly 100 works well on most devices (range 1-1000)")
            .with_validator(|input: &str| match input.trim().parse::<u32>() {
                Ok(width)
                    if (constants::MIN_ICON_WIDTH..=constants::MAX_ICON_WIDTH)
                        .contains(&width) =>
                {
                    Ok(Validation::Valid)
                }
                _ => Ok(Validation::Invalid(
                    format!(
                        "Expected a whole number between {} and {}",
                        constants::MIN_ICON_WIDTH,
                        constants::MAX_ICON_WIDTH
                    )
                    .into(),
                )),
            })
            .prompt();
        // The validator has already accepted the input.
        let width = prompt_or_abort(answer)
            .trim()
            .parse::<u32>()
            .unwrap_or(constants::DEFAULT_ICON_WIDTH);
        raw.icon_width = Some(width);
    }

    let confirmed = prompt_or_abort(
        Confirm::new("Existing splash assets will be overwritten. Continue?")
            .with_default(true)
            .prompt(),
    );
    if !confirmed {
        println!("Aborted.");
        std::process::exit(0);
    }
}

/// Decide whether to wire the storyboard into the Xcode project:
/// unconditional with --add-to-xcode, otherwise asked interactively.
fn should_add_to_xcode(flag: bool, interactive: bool) -> bool {
    if flag {
        return true;
    }
    if !interactive {
        return false;
    }
    prompt_or_abort(
        Confirm::new("Assets created. Update the Xcode project to use the new launch storyboard?")
            .with_default(true)
            .prompt(),
    )
}
