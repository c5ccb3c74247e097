// SplashForge - app/mod.rs
//
// Application layer: option assembly and the generation pipeline.
// Dependencies: core and platform layers.
// Must NOT depend on: the binary's CLI surface.

pub mod options;
pub mod pipeline;
