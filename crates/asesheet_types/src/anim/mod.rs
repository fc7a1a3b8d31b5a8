//! Frame records, sequence building and tag table assembly.
//!
//! This module covers everything that happens once per loaded sheet: cutting the
//! atlas into per-frame images, arranging each tag's frames by its direction, and
//! collecting the results into an immutable [`TagTable`].
//!
//! # Usage Examples
//!
//! ## Loading from disk
//!
//! ```no_run
//! use asesheet_types::{anim::load_sprite_sheet, config::LoadConfig};
//! use asesheet_vfs::DirSource;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let loaded = load_sprite_sheet(&DirSource::new("assets"), "hero.json", &LoadConfig::default())?;
//! let table = loaded.tag_table(&LoadConfig::default())?;
//!
//! for name in table.tag_names() {
//!     println!("{name:?}: {}", table.get(name).unwrap());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Building sequences by hand
//!
//! ```
//! use std::sync::Arc;
//!
//! use asesheet_types::anim::{AniFrame, Sequence};
//! use asesheet_types::sheet::Direction;
//! use image::RgbaImage;
//!
//! let image = Arc::new(RgbaImage::new(8, 8));
//! let frames = (0..3).map(|i| AniFrame::new(i, image.clone(), 100)).collect();
//!
//! let seq = Sequence::build(frames, Direction::PingPong);
//! assert_eq!(seq.indices(), vec![0, 1, 2, 1]);
//! ```

pub mod frame;
pub mod loader;
pub mod sequence;
pub mod tags;

pub use self::frame::{AniFrame, FrameImage};
pub use self::loader::{LoadedSheet, load_animation, load_sprite_sheet};
pub use self::sequence::Sequence;
pub use self::tags::{DEFAULT_TAG, TagTable};
