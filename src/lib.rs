#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `asesheet-rs` loads sprite sheets exported by Aseprite and plays their tagged
//! animations.
//!
//! A sheet is a JSON metadata file plus one packed atlas image. Loading cuts the
//! atlas into one image per frame, arranges every tag's frames by its playback
//! direction, and yields an [`Animation`] that advances by elapsed milliseconds.
//!
//! ```no_run
//! use asesheet_rs::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let source = DirSource::new("assets");
//! let mut hero = load_animation(&source, "hero.json", &LoadConfig::default())?;
//! hero.set_tag("attack");
//! hero.on_end("attack", |anim| anim.set_tag("idle"));
//!
//! let mut clock = WallClock::new();
//! loop {
//!     clock.tick();
//!     hero.update(&clock)?;
//!     # break;
//! }
//! # Ok(())
//! # }
//! ```
//!
pub use asesheet_internal::*;

#[cfg(all(feature = "dynamic_linking", not(target_family = "wasm")))]
#[allow(unused_imports)]
use asesheet_dylib;
