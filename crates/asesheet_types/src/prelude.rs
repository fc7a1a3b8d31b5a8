//! Prelude module for `asesheet_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and functions.
//!
//! # Examples
//!
//! ```no_run
//! use asesheet_types::prelude::*;
//!
//! // Now you can use all common types directly
//! let table = TagTable::new();
//! let anim = Animation::new(table);
//! let clock = FixedStepClock::new(30);
//! ```

// Sheet model
#[doc(inline)]
pub use crate::sheet::{Direction, Frame, FrameTag, Meta, Rect, Size, SpriteSheet};

// Frames, sequences and tags
#[doc(inline)]
pub use crate::anim::{
	AniFrame,
	DEFAULT_TAG,
	FrameImage,

	// Loading
	LoadedSheet,
	Sequence,
	TagTable,
	load_animation,
	load_sprite_sheet,
};

// Playback
#[doc(inline)]
pub use crate::player::{Animation, Callback, Clock, FixedStepClock, WallClock};

// Configuration and errors
#[doc(inline)]
pub use crate::{
	config::LoadConfig,
	error::{PlaybackError, SheetError},
};
