//! Playable frame records.

use std::sync::Arc;

use image::RgbaImage;

use crate::sheet::Rect;

/// Shared image region of one frame.
///
/// Regions are cut out of the atlas once per source frame and shared by every
/// tag and every animation instance that shows that frame.
pub type FrameImage = Arc<RgbaImage>;

/// A single still image plus the time it stays on screen.
///
/// Immutable once constructed; cloning only bumps the image's reference count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AniFrame {
	index: usize,
	image: FrameImage,
	duration_ms: u32,
	source_rect: Option<Rect>,
}

impl AniFrame {
	/// Creates a new frame record.
	///
	/// # Arguments
	///
	/// * `index` - Original frame index in the sheet
	/// * `image` - Shared image region
	/// * `duration_ms` - Display duration in milliseconds
	pub fn new(index: usize, image: FrameImage, duration_ms: u32) -> Self {
		Self {
			index,
			image,
			duration_ms,
			source_rect: None,
		}
	}

	/// Attaches the position of the frame inside the untrimmed canvas.
	pub fn with_source_rect(mut self, source_rect: Rect) -> Self {
		self.source_rect = Some(source_rect);
		self
	}

	/// Original frame index in the sheet.
	pub fn index(&self) -> usize {
		self.index
	}

	/// Shared image region.
	pub fn image(&self) -> &FrameImage {
		&self.image
	}

	/// Display duration in milliseconds.
	pub fn duration_ms(&self) -> u32 {
		self.duration_ms
	}

	/// Position of the frame inside the untrimmed canvas, for packed sheets.
	pub fn source_rect(&self) -> Option<Rect> {
		self.source_rect
	}

	/// Returns `true` when both records point at the same image allocation.
	pub fn shares_image_with(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.image, &other.image)
	}
}

impl std::fmt::Display for AniFrame {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"Frame(#{}, {}x{}, {}ms)",
			self.index,
			self.image.width(),
			self.image.height(),
			self.duration_ms
		)
	}
}
