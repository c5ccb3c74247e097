// SplashForge - lib.rs
//
// Library entry point, exposing all non-CLI modules for integration
// testing and potential future programmatic use.
//
// The interactive prompt and terminal output live in `main.rs` and are
// not part of the library surface.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
