//! Sprite-sheet JSON export model.
//!
//! This module mirrors the JSON document written by the Aseprite sprite-sheet
//! exporter when frames are exported as an *array*. The document has two top-level
//! members:
//!
//! - **`frames`**: one entry per frame, in original frame order
//! - **`meta`**: exporter information, the atlas image name and the frame tags
//!
//! # Frame Entry
//!
//! ```text
//! Field              Description
//! -----------------  ------------------------------------------------------
//! frame              Rectangle of the frame inside the atlas image
//! rotated            Whether the packer rotated the frame (pass-through)
//! trimmed            Whether transparent borders were trimmed (pass-through)
//! spriteSourceSize   Position of the trimmed frame inside the untrimmed canvas
//! sourceSize         Size of the untrimmed canvas
//! duration           Display duration in milliseconds
//! ```
//!
//! # Frame Tags
//!
//! Each tag names an inclusive range `from..=to` of frame indices together with a
//! playback [`Direction`]. Tags may overlap.
//!
//! # Examples
//!
//! ```
//! use asesheet_types::sheet::{Direction, SpriteSheet};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let json = br#"{
//!     "frames": [
//!         { "frame": { "x": 0, "y": 0, "w": 16, "h": 16 }, "duration": 100 },
//!         { "frame": { "x": 16, "y": 0, "w": 16, "h": 16 }, "duration": 100 }
//!     ],
//!     "meta": {
//!         "version": "1.3.7-x64",
//!         "image": "hero.png",
//!         "frameTags": [ { "name": "walk", "from": 0, "to": 1, "direction": "pingpong" } ]
//!     }
//! }"#;
//!
//! let sheet = SpriteSheet::from_slice(json)?;
//! assert_eq!(sheet.frames.len(), 2);
//! assert_eq!(sheet.meta.frame_tags[0].direction, Direction::PingPong);
//! # Ok(())
//! # }
//! ```

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::{config::LoadConfig, error::SheetError};

pub mod direction;

pub use direction::Direction;

/// Sheet format constants.
pub mod constants {
	/// Exporter version prefix understood by this crate
	pub const SUPPORTED_VERSION: &str = "1.3";
}

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
	/// Width in pixels
	pub w: u32,
	/// Height in pixels
	pub h: u32,
}

/// Axis-aligned rectangle in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
	/// Left edge
	pub x: u32,
	/// Top edge
	pub y: u32,
	/// Width
	pub w: u32,
	/// Height
	pub h: u32,
}

impl Rect {
	/// Creates a new rectangle.
	pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
		Self {
			x,
			y,
			w,
			h,
		}
	}

	/// Exclusive right edge.
	pub fn right(&self) -> u64 {
		u64::from(self.x) + u64::from(self.w)
	}

	/// Exclusive bottom edge.
	pub fn bottom(&self) -> u64 {
		u64::from(self.y) + u64::from(self.h)
	}

	/// Returns the size of the rectangle.
	pub fn size(&self) -> Size {
		Size {
			w: self.w,
			h: self.h,
		}
	}

	/// Returns `true` when the rectangle lies fully inside a `width` x `height` image.
	pub fn fits_within(&self, width: u32, height: u32) -> bool {
		self.right() <= u64::from(width) && self.bottom() <= u64::from(height)
	}

	/// Clips the rectangle to a `width` x `height` image.
	pub fn clipped_to(&self, width: u32, height: u32) -> Self {
		let x = self.x.min(width);
		let y = self.y.min(height);
		Self {
			x,
			y,
			w: self.w.min(width - x),
			h: self.h.min(height - y),
		}
	}

	/// Smallest rectangle anchored at the origin that contains both extents.
	pub(crate) fn extent_union(extent: Size, rect: &Self) -> Size {
		let w = u32::try_from(rect.right()).unwrap_or(u32::MAX);
		let h = u32::try_from(rect.bottom()).unwrap_or(u32::MAX);
		Size {
			w: extent.w.max(w),
			h: extent.h.max(h),
		}
	}
}

impl std::fmt::Display for Rect {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "({}, {}, {}x{})", self.x, self.y, self.w, self.h)
	}
}

/// A single frame entry of the export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
	/// Rectangle of the frame inside the atlas image
	pub frame: Rect,
	/// Whether the packer rotated the frame
	#[serde(default)]
	pub rotated: bool,
	/// Whether transparent borders were trimmed
	#[serde(default)]
	pub trimmed: bool,
	/// Position of the frame inside the untrimmed canvas
	#[serde(default)]
	pub sprite_source_size: Option<Rect>,
	/// Size of the untrimmed canvas
	#[serde(default)]
	pub source_size: Option<Size>,
	/// Display duration in milliseconds
	#[serde(default)]
	pub duration: u32,
}

/// A named, inclusive range of frames.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameTag {
	/// Tag name
	pub name: String,
	/// First frame index
	pub from: usize,
	/// Last frame index (inclusive)
	pub to: usize,
	/// Playback direction, forward when absent
	#[serde(default)]
	pub direction: Direction,
	/// Tag color in the editor, `#rrggbb`
	#[serde(default)]
	pub color: Option<String>,
}

impl FrameTag {
	/// Number of frames covered by the tag range.
	pub fn frame_count(&self) -> usize {
		self.to.saturating_sub(self.from) + 1
	}
}

/// A layer of the source document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
	/// Layer name
	pub name: String,
	/// Opacity, 0-255
	#[serde(default)]
	pub opacity: Option<u8>,
	/// Blend mode name
	#[serde(default)]
	pub blend_mode: Option<String>,
}

/// A key of a slice: its bounds starting at a given frame.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceKey {
	/// Frame at which these bounds take effect
	pub frame: usize,
	/// Slice bounds
	pub bounds: Rect,
}

/// A named region of the canvas that may change across frames.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
	/// Slice name
	pub name: String,
	/// Slice keys, ordered by frame
	#[serde(default)]
	pub keys: Vec<SliceKey>,
}

/// Exporter metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
	/// Exporting application
	#[serde(default)]
	pub app: String,
	/// Exporter version
	pub version: String,
	/// Atlas image file name, relative to the metadata file
	pub image: String,
	/// Pixel format of the atlas
	#[serde(default)]
	pub format: String,
	/// Atlas size
	#[serde(default)]
	pub size: Size,
	/// Export scale
	#[serde(default)]
	pub scale: String,
	/// Frame tags
	#[serde(default)]
	pub frame_tags: Vec<FrameTag>,
	/// Layers
	#[serde(default)]
	pub layers: Vec<Layer>,
	/// Slices
	#[serde(default)]
	pub slices: Vec<Slice>,
}

/// Complete sprite-sheet export document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteSheet {
	/// Frames in original order
	pub frames: Vec<Frame>,
	/// Exporter metadata
	pub meta: Meta,
}

impl SpriteSheet {
	/// Parses and validates a sheet from JSON bytes with the default configuration.
	///
	/// # Errors
	///
	/// Returns an error if the JSON is malformed or the version is unsupported.
	pub fn from_slice(data: &[u8]) -> Result<Self, SheetError> {
		Self::from_slice_with_config(data, &LoadConfig::default())
	}

	/// Parses and validates a sheet from JSON bytes.
	///
	/// # Errors
	///
	/// Returns an error if the JSON is malformed or the version does not start with
	/// `config.version_prefix`.
	pub fn from_slice_with_config(data: &[u8], config: &LoadConfig) -> Result<Self, SheetError> {
		let sheet: Self = serde_json::from_slice(data)?;
		sheet.check_version(config)?;
		Ok(sheet)
	}

	/// Parses and validates a sheet from a reader with the default configuration.
	///
	/// # Errors
	///
	/// Returns an error if reading fails, the JSON is malformed or the version is unsupported.
	pub fn from_reader<R: Read>(reader: R) -> Result<Self, SheetError> {
		let sheet: Self = serde_json::from_reader(reader)?;
		sheet.check_version(&LoadConfig::default())?;
		Ok(sheet)
	}

	/// Checks the declared exporter version against `config.version_prefix`.
	///
	/// # Errors
	///
	/// Returns [`SheetError::UnsupportedVersion`] on mismatch.
	pub fn check_version(&self, config: &LoadConfig) -> Result<(), SheetError> {
		if self.meta.version.starts_with(config.version_prefix.as_str()) {
			Ok(())
		} else {
			Err(SheetError::UnsupportedVersion {
				expected: config.version_prefix.clone(),
				found: self.meta.version.clone(),
			})
		}
	}

	/// Returns `true` when the sheet declares at least one frame tag.
	pub fn has_tags(&self) -> bool {
		!self.meta.frame_tags.is_empty()
	}

	/// Serializes the sheet back to pretty-printed JSON.
	///
	/// # Errors
	///
	/// Returns an error if serialization fails.
	pub fn to_json(&self) -> Result<String, SheetError> {
		Ok(serde_json::to_string_pretty(self)?)
	}
}
