// SplashForge - core/mod.rs
//
// Core business logic layer: colors, geometry, templates, shared model.
// Dependencies: standard library plus regex.
// Must NOT depend on: platform, app, or any I/O directly.

pub mod color;
pub mod geometry;
pub mod model;
pub mod template;
