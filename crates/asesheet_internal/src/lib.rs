//! This module is separated into its own crate to enable simple dynamic linking for `asesheet-rs`, and should not be used directly.

/// `use asesheet_rs::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export the member crates for convenience
pub use asesheet_types;
pub use asesheet_vfs;

// Re-export commonly used types at crate root
pub use asesheet_types::{
	anim::{TagTable, load_animation, load_sprite_sheet},
	config::LoadConfig,
	error::{PlaybackError, SheetError},
	player::Animation,
};
pub use asesheet_vfs::{AssetSource, DirSource, MemorySource};
