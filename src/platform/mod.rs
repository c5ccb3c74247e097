// SplashForge - platform/mod.rs
//
// Target-platform emission layer: project detection, asset writers, and
// project-local configuration.
// Dependencies: core layer plus the image/serde crates.
// Must NOT depend on: app.

pub mod android;
pub mod assets;
pub mod config;
pub mod ios;

use crate::core::model::{EmissionResult, EmissionSpec, Platform};
use crate::util::error::EmitError;
use std::path::Path;

/// One target platform's emission strategy.
///
/// Emitters are independent and order-insensitive: the orchestrator
/// invokes both unconditionally, and a skip or failure in one never
/// prevents the other from running.  Each emitter touches only its own
/// platform's subtree.
pub trait PlatformEmitter {
    /// The platform this emitter writes assets for.
    fn platform(&self) -> Platform;

    /// True when a recognisable project for this platform exists under
    /// `project_path`.
    fn detect(&self, project_path: &Path) -> bool;

    /// Write all splash assets for this platform, or report a skip when
    /// no project is detected.
    fn emit(&self, spec: &EmissionSpec) -> Result<EmissionResult, EmitError>;
}
