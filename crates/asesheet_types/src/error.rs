//! Error types for sheet ingestion and playback control.

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::sheet::Rect;

/// Errors that can occur while ingesting a sprite sheet.
///
/// Every variant is fatal to the load in progress: no partial tag table is
/// ever handed back.
#[derive(Debug, Error)]
pub enum SheetError {
	/// The metadata is not valid JSON or does not have the expected shape
	#[error("Malformed sheet metadata: {0}")]
	Json(#[from] serde_json::Error),

	/// The metadata was written by an unsupported exporter version
	#[error("Version mismatch: expected {expected}, got {found}")]
	UnsupportedVersion {
		/// Version prefix this crate understands
		expected: String,
		/// Version declared in the metadata
		found: String,
	},

	/// The metadata declares no frames at all
	#[error("Sheet contains no frames")]
	NoFrames,

	/// A tag refers to frames beyond the end of the frame list
	#[error("Tag {tag:?} range {from}..={to} is out of bounds (frame count: {frame_count})")]
	TagRangeOutOfBounds {
		/// Tag name
		tag: String,
		/// First frame index of the tag
		from: usize,
		/// Last frame index of the tag
		to: usize,
		/// Number of frames in the sheet
		frame_count: usize,
	},

	/// A tag's first frame comes after its last frame
	#[error("Tag {tag:?} range is inverted: from {from} > to {to}")]
	InvertedTagRange {
		/// Tag name
		tag: String,
		/// First frame index of the tag
		from: usize,
		/// Last frame index of the tag
		to: usize,
	},

	/// A frame rectangle does not fit inside the atlas image
	#[error("Frame {index} rectangle {rect} lies outside the {atlas_width}x{atlas_height} atlas")]
	FrameOutsideAtlas {
		/// Original frame index
		index: usize,
		/// Offending rectangle
		rect: Rect,
		/// Atlas width in pixels
		atlas_width: u32,
		/// Atlas height in pixels
		atlas_height: u32,
	},

	/// The metadata or atlas file could not be located
	#[error("Asset not found: {}", path.display())]
	AssetNotFound {
		/// Path that was looked up
		path: PathBuf,
		/// Underlying lookup error
		#[source]
		source: io::Error,
	},

	/// The atlas file exists but is not a decodable image
	#[error("Failed to decode image {}: {source}", path.display())]
	AssetDecode {
		/// Path of the atlas image
		path: PathBuf,
		/// Underlying decoder error
		#[source]
		source: image::ImageError,
	},

	/// IO error
	#[error(transparent)]
	Io(#[from] io::Error),
}

impl SheetError {
	/// Maps a lookup failure on `path` to [`SheetError::AssetNotFound`] or [`SheetError::Io`].
	pub(crate) fn from_lookup(path: PathBuf, source: io::Error) -> Self {
		if source.kind() == io::ErrorKind::NotFound {
			Self::AssetNotFound {
				path,
				source,
			}
		} else {
			Self::Io(source)
		}
	}
}

/// Errors raised by playback controls and frame reads.
///
/// These are recoverable: the animation state is left untouched when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
	/// `set_frame` was given an index outside the current tag's sequence
	#[error("Frame index {index} out of range for tag {tag:?} (length {len})")]
	FrameOutOfRange {
		/// Requested index
		index: usize,
		/// Length of the current tag's sequence
		len: usize,
		/// Current tag
		tag: String,
	},

	/// The current tag does not exist in the tag table
	#[error("Unknown tag {0:?}")]
	UnknownTag(String),

	/// The current tag's sequence has no frames
	#[error("Tag {0:?} has an empty sequence")]
	EmptySequence(String),
}
