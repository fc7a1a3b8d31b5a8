//! Integration tests for `asesheet-rs`: loading sheets through asset sources and
//! playing the resulting animations.

mod fixtures;
mod loading;
mod playback;
