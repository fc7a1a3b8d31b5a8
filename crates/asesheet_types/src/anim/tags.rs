//! Tag table: tag name to playable sequence.
//!
//! A tag table is assembled once per loaded sheet and never mutated afterwards.
//! Animation instances hold it behind an [`Arc`](std::sync::Arc) so any number of
//! them can share the same frames and images.
//!
//! # Assembly
//!
//! 1. Every frame rectangle is cut out of the atlas exactly once
//! 2. The default tag (empty name) receives every frame in original order
//! 3. Each declared tag receives its `from..=to` slice, arranged by its direction,
//!    reusing the images cut in step 1

use std::collections::HashMap;

use image::{RgbaImage, imageops};
use log::{debug, warn};

use crate::{
	config::LoadConfig,
	error::SheetError,
	sheet::{Rect, Size, SpriteSheet},
};

use super::{
	frame::{AniFrame, FrameImage},
	sequence::Sequence,
};

/// Name of the implicit tag that plays the whole sheet.
pub const DEFAULT_TAG: &str = "";

/// Mapping from tag name to its playable [`Sequence`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagTable {
	sequences: HashMap<String, Sequence>,
}

impl TagTable {
	/// Creates an empty tag table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a tag table from `(name, sequence)` pairs.
	///
	/// # Examples
	///
	/// ```
	/// use std::sync::Arc;
	///
	/// use asesheet_types::anim::{AniFrame, Sequence, TagTable};
	/// use image::RgbaImage;
	///
	/// let image = Arc::new(RgbaImage::new(4, 4));
	/// let frames = vec![AniFrame::new(0, image.clone(), 100), AniFrame::new(1, image, 100)];
	/// let table = TagTable::from_sequences([("", Sequence::from_frames(frames))]);
	///
	/// assert_eq!(table.len(), 1);
	/// assert_eq!(table.get("").map(Sequence::len), Some(2));
	/// ```
	pub fn from_sequences<I, S>(sequences: I) -> Self
	where
		I: IntoIterator<Item = (S, Sequence)>,
		S: Into<String>,
	{
		Self {
			sequences: sequences.into_iter().map(|(name, seq)| (name.into(), seq)).collect(),
		}
	}

	/// Assembles the tag table of a decoded sheet.
	///
	/// # Arguments
	///
	/// * `sheet` - Parsed sheet metadata
	/// * `atlas` - Decoded atlas image the frame rectangles point into
	/// * `config` - Validation options
	///
	/// # Errors
	///
	/// Returns an error if:
	/// - The sheet has no frames
	/// - A tag range is inverted or reaches past the last frame
	/// - A frame rectangle lies outside the atlas and `config.check_atlas_bounds` is set
	pub fn from_sheet(
		sheet: &SpriteSheet,
		atlas: &RgbaImage,
		config: &LoadConfig,
	) -> Result<Self, SheetError> {
		if sheet.frames.is_empty() {
			return Err(SheetError::NoFrames);
		}
		validate_tag_ranges(sheet)?;

		let (atlas_width, atlas_height) = atlas.dimensions();
		let mut frames = Vec::with_capacity(sheet.frames.len());
		for (index, frame) in sheet.frames.iter().enumerate() {
			let mut rect = frame.frame;
			if !rect.fits_within(atlas_width, atlas_height) {
				if config.check_atlas_bounds {
					return Err(SheetError::FrameOutsideAtlas {
						index,
						rect,
						atlas_width,
						atlas_height,
					});
				}
				warn!("Frame {index} rectangle {rect} clipped to the {atlas_width}x{atlas_height} atlas");
				rect = rect.clipped_to(atlas_width, atlas_height);
			}

			let mut record = AniFrame::new(index, subregion(atlas, rect), frame.duration);
			if let Some(source_rect) = frame.sprite_source_size {
				record = record.with_source_rect(source_rect);
			}
			frames.push(record);
		}

		let mut table = Self::new();
		table.sequences.insert(DEFAULT_TAG.to_string(), Sequence::from_frames(frames.clone()));

		for tag in &sheet.meta.frame_tags {
			if tag.name == DEFAULT_TAG {
				warn!("Ignoring frame tag with an empty name ({}..={})", tag.from, tag.to);
				continue;
			}
			let sequence = Sequence::build(frames[tag.from..=tag.to].to_vec(), tag.direction);
			if table.sequences.insert(tag.name.clone(), sequence).is_some() {
				warn!("Frame tag {:?} declared more than once; keeping the last one", tag.name);
			}
		}

		debug!(
			"Assembled tag table: {} frames, {} tags",
			sheet.frames.len(),
			table.sequences.len() - 1
		);

		Ok(table)
	}

	/// Returns the sequence of `tag`.
	pub fn get(&self, tag: &str) -> Option<&Sequence> {
		self.sequences.get(tag)
	}

	/// Returns the sequence of the default tag.
	pub fn default_sequence(&self) -> Option<&Sequence> {
		self.get(DEFAULT_TAG)
	}

	/// Returns `true` when `tag` exists.
	pub fn contains(&self, tag: &str) -> bool {
		self.sequences.contains_key(tag)
	}

	/// Returns the number of tags, the default tag included.
	pub fn len(&self) -> usize {
		self.sequences.len()
	}

	/// Returns `true` when the table has no tags at all.
	pub fn is_empty(&self) -> bool {
		self.sequences.is_empty()
	}

	/// Returns the tag names in sorted order.
	pub fn tag_names(&self) -> Vec<&str> {
		let mut names: Vec<&str> = self.sequences.keys().map(String::as_str).collect();
		names.sort_unstable();
		names
	}

	/// Iterates over `(name, sequence)` pairs in arbitrary order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Sequence)> {
		self.sequences.iter().map(|(name, seq)| (name.as_str(), seq))
	}

	/// Size of a canvas large enough to composite every frame at its source rectangle.
	///
	/// Returns `None` when no frame carries a source rectangle.
	pub fn canvas_size(&self) -> Option<Size> {
		self.sequences
			.values()
			.flat_map(Sequence::frames)
			.filter_map(AniFrame::source_rect)
			.fold(None, |acc, rect| Some(Rect::extent_union(acc.unwrap_or_default(), &rect)))
	}
}

fn validate_tag_ranges(sheet: &SpriteSheet) -> Result<(), SheetError> {
	let frame_count = sheet.frames.len();
	for tag in &sheet.meta.frame_tags {
		if tag.from > tag.to {
			return Err(SheetError::InvertedTagRange {
				tag: tag.name.clone(),
				from: tag.from,
				to: tag.to,
			});
		}
		if tag.to >= frame_count {
			return Err(SheetError::TagRangeOutOfBounds {
				tag: tag.name.clone(),
				from: tag.from,
				to: tag.to,
				frame_count,
			});
		}
	}
	Ok(())
}

/// Copies `rect` out of `atlas` into its own shared image.
fn subregion(atlas: &RgbaImage, rect: Rect) -> FrameImage {
	FrameImage::new(imageops::crop_imm(atlas, rect.x, rect.y, rect.w, rect.h).to_image())
}
