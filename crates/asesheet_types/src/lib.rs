//! This crate provides the sheet model, frame sequencing and playback engine of `asesheet-rs`.
//!
//! # Modules
//!
//! - **sheet**: Serde model of the Aseprite JSON export (frames, tags, layers, slices)
//! - **anim**: Per-frame images, direction-ordered sequences and the immutable tag table
//! - **player**: The [`Animation`](player::Animation) state machine, clocks and drawing helpers
//! - **config**: Loading options such as the accepted format version
//! - **error**: Error types for loading and playback
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use asesheet_types::prelude::*;
//! use asesheet_vfs::DirSource;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut hero = load_animation(&DirSource::new("assets"), "hero.json", &LoadConfig::default())?;
//! hero.set_tag("walk");
//! hero.on_end("walk", |anim| anim.set_tag("idle"));
//!
//! let mut clock = FixedStepClock::default();
//! clock.tick();
//! hero.update(&clock)?;
//! # Ok(())
//! # }
//! ```
//!
//! Or use explicit paths:
//!
//! ```
//! use asesheet_types::sheet::SpriteSheet;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let json = br#"{"frames": [], "meta": {"version": "1.3.7", "image": "hero.png"}}"#;
//! let sheet = SpriteSheet::from_slice(json)?;
//! assert!(!sheet.has_tags());
//! // ...
//! # Ok(())
//! # }
//! ```

pub mod anim;
pub mod config;
pub mod error;
pub mod player;
pub mod sheet;

/// `use asesheet_types::prelude::*;` to import commonly used items.
pub mod prelude;
