//! Time-driven playback of tagged frame sequences.
//!
//! An [`Animation`] owns the playback state of one on-screen sprite: the current
//! tag, the index into that tag's sequence, the leftover time since the last frame
//! boundary, a pause flag and one optional end callback per tag. The frames
//! themselves live in a shared [`TagTable`].
//!
//! # Advancing
//!
//! Each call to [`Animation::advance`] adds the delta to the accumulator and then
//! crosses as many frame boundaries as the accumulated time covers. Whenever the
//! index wraps back to 0 the current tag's end callback runs, once per wrap, before
//! the remaining time is processed. Callbacks receive the animation itself and may
//! change its tag or frame, or even advance it; the loop re-reads all state after
//! each call. A pause requested by a callback applies from the next `advance`.
//!
//! ```text
//! durations   100  100  100          advance(250) from frame 0:
//!             [0]  [1]  [2]            250 -> 150 (frame 1) -> 50 (frame 2)
//! ```
//!
//! # Zero-duration frames
//!
//! A frame lasting 0ms is stepped over by the next `advance` with a positive delta,
//! without consuming time. `advance(0.0)` never changes state, even when the
//! current frame lasts 0ms after a `restart` or `set_frame`. A sequence whose
//! frames all last 0ms steps exactly one frame per `advance` call.
//!
//! # Long deltas
//!
//! A single call plays through at most [`MAX_LOOPS_PER_ADVANCE`] loops of the
//! current tag; whole loops beyond that are skipped without firing callbacks.
//!
//! # Threading
//!
//! All callbacks run synchronously on the thread calling `advance`. The tag table
//! may be read from several threads; a single animation must be driven by one
//! owner at a time.
//!
//! # Examples
//!
//! ```
//! use std::sync::{
//!     Arc,
//!     atomic::{AtomicUsize, Ordering},
//! };
//!
//! use asesheet_types::anim::{AniFrame, Sequence, TagTable};
//! use asesheet_types::player::Animation;
//! use image::RgbaImage;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let image = Arc::new(RgbaImage::new(4, 4));
//! let frames: Vec<_> = (0..3).map(|i| AniFrame::new(i, image.clone(), 100)).collect();
//! let mut anim = Animation::new(TagTable::from_sequences([("", Sequence::from_frames(frames))]));
//!
//! let loops = Arc::new(AtomicUsize::new(0));
//! let counter = loops.clone();
//! anim.on_end("", move |_| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! anim.advance(650.0)?;
//! assert_eq!(loops.load(Ordering::SeqCst), 2);
//! assert_eq!(anim.frame_index(), 0);
//! assert_eq!(anim.elapsed_millis(), 50.0);
//! # Ok(())
//! # }
//! ```

use std::{collections::HashMap, sync::Arc};

use image::RgbaImage;
use log::{debug, trace, warn};

use crate::{
	anim::{AniFrame, DEFAULT_TAG, Sequence, TagTable},
	error::PlaybackError,
};

pub mod clock;
mod render;


pub use self::clock::{Clock, FixedStepClock, WallClock};

/// Number of complete loops a single `advance` call plays through at most.
///
/// Time beyond that is dropped in whole loops, so the frame shown afterwards is
/// the same as without the limit but the end callback fires at most this many
/// times (plus one for a partially played loop).
pub const MAX_LOOPS_PER_ADVANCE: u32 = 1024;

/// End-of-sequence callback. Shared between an animation and its clones.
pub type Callback = Arc<dyn Fn(&mut Animation) + Send + Sync>;

/// Playback state of one sprite over a shared [`TagTable`].
pub struct Animation {
	tags: Arc<TagTable>,
	current_tag: String,
	current_frame: usize,
	elapsed_ms: f64,
	paused: bool,
	callbacks: HashMap<String, Callback>,
	canvas: Option<RgbaImage>,
	needs_draw: bool,
}

impl Animation {
	/// Creates an animation over `tags`, playing the default tag from frame 0.
	///
	/// A compositing canvas is allocated when any frame carries a source rectangle.
	pub fn new(tags: impl Into<Arc<TagTable>>) -> Self {
		let tags = tags.into();
		let canvas = tags.canvas_size().map(|size| RgbaImage::new(size.w, size.h));
		Self {
			tags,
			current_tag: DEFAULT_TAG.to_string(),
			current_frame: 0,
			elapsed_ms: 0.0,
			paused: false,
			callbacks: HashMap::new(),
			canvas,
			needs_draw: true,
		}
	}

	/// Creates a fresh animation sharing the tag table of `source`.
	///
	/// Nothing but the frames is carried over: the new animation plays the default
	/// tag from frame 0, runs, and has no callbacks.
	pub fn flyweight(source: &Self) -> Self {
		Self::new(Arc::clone(&source.tags))
	}

	/// Advances playback by `delta_ms` milliseconds.
	///
	/// Does nothing while paused or when the delta is zero. Negative and non-finite
	/// deltas count as zero. At most [`MAX_LOOPS_PER_ADVANCE`] loops of a tag are
	/// played per call.
	///
	/// # Errors
	///
	/// Returns [`PlaybackError::UnknownTag`] or [`PlaybackError::EmptySequence`]
	/// when the current tag cannot be played. State is not modified in that case,
	/// except by callbacks that already ran.
	pub fn advance(&mut self, delta_ms: f64) -> Result<(), PlaybackError> {
		if self.paused {
			return Ok(());
		}
		self.sequence()?;

		let delta_ms = if delta_ms.is_finite() && delta_ms > 0.0 {
			delta_ms
		} else {
			if !delta_ms.is_finite() {
				warn!("Ignoring non-finite animation delta {delta_ms}");
			}
			0.0
		};
		if delta_ms == 0.0 {
			return Ok(());
		}
		self.elapsed_ms += delta_ms;

		loop {
			// Callbacks may switch tags, so the sequence is looked up on every step.
			let sequence = self.sequence()?;
			let len = sequence.len();
			let total_ms = sequence.total_duration_ms();

			if total_ms == 0 {
				self.elapsed_ms = 0.0;
				warn!(
					"Tag {:?} has only zero-duration frames; stepping once",
					self.current_tag
				);
				self.step(len);
				return Ok(());
			}

			let duration = match sequence.get(self.current_frame) {
				Some(frame) => f64::from(frame.duration_ms()),
				None => {
					return Err(PlaybackError::FrameOutOfRange {
						index: self.current_frame,
						len,
						tag: self.current_tag.clone(),
					});
				}
			};
			self.drop_backlog(total_ms as f64);
			if self.elapsed_ms < duration {
				return Ok(());
			}

			self.elapsed_ms -= duration;
			trace!(
				"Tag {:?} frame {} done, {}ms left over",
				self.current_tag, self.current_frame, self.elapsed_ms
			);
			self.step(len);
		}
	}

	/// Drops whole loops of `total_ms` beyond [`MAX_LOOPS_PER_ADVANCE`] from the accumulator.
	fn drop_backlog(&mut self, total_ms: f64) {
		let limit = total_ms * f64::from(MAX_LOOPS_PER_ADVANCE);
		if self.elapsed_ms < limit + total_ms {
			return;
		}
		let excess = self.elapsed_ms - limit;
		warn!(
			"Tag {:?} is {excess}ms behind; skipping {} loops",
			self.current_tag,
			(excess / total_ms).floor()
		);
		self.elapsed_ms = limit + excess % total_ms;
	}

	/// Advances playback by the last delta of `clock`.
	///
	/// # Errors
	///
	/// See [`advance`](Self::advance).
	pub fn update(&mut self, clock: &impl Clock) -> Result<(), PlaybackError> {
		self.advance(clock.delta_millis())
	}

	/// Moves to the next frame, firing the end callback when the index wraps.
	fn step(&mut self, len: usize) {
		self.current_frame = (self.current_frame + 1) % len;
		self.needs_draw = true;
		if self.current_frame == 0 {
			self.fire_end_callback();
		}
	}

	fn fire_end_callback(&mut self) {
		let Some(callback) = self.callbacks.get(&self.current_tag).cloned() else {
			return;
		};
		debug!("Tag {:?} reached its end; running callback", self.current_tag);
		callback(self);
	}

	/// Pauses playback. Animations run by default.
	pub fn pause(&mut self) {
		self.paused = true;
	}

	/// Resumes playback. Accumulated time is kept.
	pub fn resume(&mut self) {
		self.paused = false;
	}

	/// Pauses a running animation or resumes a paused one.
	pub fn toggle(&mut self) {
		self.paused = !self.paused;
	}

	/// Returns `true` while paused.
	pub fn is_paused(&self) -> bool {
		self.paused
	}

	/// Jumps back to the first frame of the current tag.
	///
	/// The accumulator is left untouched, so the timing cadence carries on.
	pub fn restart(&mut self) {
		self.current_frame = 0;
		self.needs_draw = true;
	}

	/// Switches to `tag`.
	///
	/// The frame index is reset to 0 if `tag` differs from the current tag. The tag
	/// is not checked here; an unknown tag is reported when a frame is next read or
	/// the animation is next advanced.
	pub fn set_tag(&mut self, tag: &str) {
		if self.current_tag != tag {
			self.current_frame = 0;
			self.current_tag = tag.to_string();
		}
		self.needs_draw = true;
	}

	/// Jumps to frame `index` of the current tag.
	///
	/// # Errors
	///
	/// Returns [`PlaybackError::FrameOutOfRange`] if `index` is not below the length
	/// of the current sequence, or the current tag's lookup error.
	pub fn set_frame(&mut self, index: usize) -> Result<(), PlaybackError> {
		let len = self.sequence()?.len();
		if index >= len {
			return Err(PlaybackError::FrameOutOfRange {
				index,
				len,
				tag: self.current_tag.clone(),
			});
		}
		self.current_frame = index;
		self.needs_draw = true;
		Ok(())
	}

	/// Registers `callback` to run every time `tag`'s sequence wraps around.
	///
	/// A later registration for the same tag replaces the earlier one. For
	/// `reverse` and ping-pong tags the end is the end of the built sequence.
	pub fn on_end<F>(&mut self, tag: &str, callback: F)
	where
		F: Fn(&mut Animation) + Send + Sync + 'static,
	{
		self.set_on_end(tag, Some(Arc::new(callback)));
	}

	/// Registers, or with `None` removes, the end callback of `tag`.
	pub fn set_on_end(&mut self, tag: &str, callback: Option<Callback>) {
		match callback {
			Some(callback) => {
				self.callbacks.insert(tag.to_string(), callback);
			}
			None => {
				self.callbacks.remove(tag);
			}
		}
	}

	/// Removes the end callback of `tag`.
	pub fn clear_on_end(&mut self, tag: &str) {
		self.set_on_end(tag, None);
	}

	/// Returns `true` when `tag` has an end callback.
	pub fn has_callback(&self, tag: &str) -> bool {
		self.callbacks.contains_key(tag)
	}

	/// Current tag name.
	pub fn tag(&self) -> &str {
		&self.current_tag
	}

	/// Index into the current tag's sequence.
	pub fn frame_index(&self) -> usize {
		self.current_frame
	}

	/// Time accumulated towards the next frame boundary, in milliseconds.
	pub fn elapsed_millis(&self) -> f64 {
		self.elapsed_ms
	}

	/// Shared tag table.
	pub fn tags(&self) -> &Arc<TagTable> {
		&self.tags
	}

	/// Sequence of the current tag.
	///
	/// # Errors
	///
	/// Returns [`PlaybackError::UnknownTag`] or [`PlaybackError::EmptySequence`].
	pub fn sequence(&self) -> Result<&Sequence, PlaybackError> {
		let sequence = self
			.tags
			.get(&self.current_tag)
			.ok_or_else(|| PlaybackError::UnknownTag(self.current_tag.clone()))?;
		if sequence.is_empty() {
			return Err(PlaybackError::EmptySequence(self.current_tag.clone()));
		}
		Ok(sequence)
	}

	/// Frame currently on screen.
	///
	/// # Errors
	///
	/// Returns [`PlaybackError::UnknownTag`] or [`PlaybackError::EmptySequence`].
	pub fn frame(&self) -> Result<&AniFrame, PlaybackError> {
		let sequence = self.sequence()?;
		sequence.get(self.current_frame).ok_or_else(|| PlaybackError::FrameOutOfRange {
			index: self.current_frame,
			len: sequence.len(),
			tag: self.current_tag.clone(),
		})
	}

	/// Width and height of the current frame image.
	///
	/// # Errors
	///
	/// See [`frame`](Self::frame).
	pub fn bounds(&self) -> Result<(u32, u32), PlaybackError> {
		Ok(self.frame()?.image().dimensions())
	}
}

impl Clone for Animation {
	/// Shares the tag table and copies tag, frame, pause flag and callbacks.
	///
	/// The accumulator starts again from zero and the compositing canvas is
	/// allocated afresh.
	fn clone(&self) -> Self {
		Self {
			tags: Arc::clone(&self.tags),
			current_tag: self.current_tag.clone(),
			current_frame: self.current_frame,
			elapsed_ms: 0.0,
			paused: self.paused,
			callbacks: self.callbacks.clone(),
			canvas: self.canvas.as_ref().map(|canvas| RgbaImage::new(canvas.width(), canvas.height())),
			needs_draw: true,
		}
	}
}

impl std::fmt::Debug for Animation {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let mut callbacks: Vec<&str> = self.callbacks.keys().map(String::as_str).collect();
		callbacks.sort_unstable();
		f.debug_struct("Animation")
			.field("tag", &self.current_tag)
			.field("frame", &self.current_frame)
			.field("elapsed_ms", &self.elapsed_ms)
			.field("paused", &self.paused)
			.field("callbacks", &callbacks)
			.field("tags", &self.tags.len())
			.finish_non_exhaustive()
	}
}
