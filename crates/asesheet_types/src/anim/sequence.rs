//! Playable frame sequences.
//!
//! This module turns the frames of a tag range plus its [`Direction`] into the
//! concrete order in which the frames are shown:
//!
//! ```text
//! Direction          [A, B, C, D] becomes
//! -----------------  --------------------
//! forward            A B C D
//! reverse            D C B A
//! pingpong           A B C D C B
//! pingpong_reverse   D C B A B C
//! ```
//!
//! Ping-pong expansion never repeats the first or last frame, so ranges of one or
//! two frames come out unchanged.

use crate::sheet::Direction;

use super::frame::AniFrame;

/// Orders `items` according to `direction`.
///
/// # Examples
///
/// ```
/// use asesheet_types::anim::sequence::arrange;
/// use asesheet_types::sheet::Direction;
///
/// let frames = vec!['A', 'B', 'C', 'D'];
/// assert_eq!(arrange(frames.clone(), Direction::PingPong), vec!['A', 'B', 'C', 'D', 'C', 'B']);
/// assert_eq!(arrange(frames, Direction::PingPongReverse), vec!['D', 'C', 'B', 'A', 'B', 'C']);
/// ```
pub fn arrange<T: Clone>(items: Vec<T>, direction: Direction) -> Vec<T> {
	match direction {
		Direction::Forward => items,
		Direction::Reverse => reverse(items),
		Direction::PingPong => ping_pong(items),
		Direction::PingPongReverse => ping_pong(reverse(items)),
	}
}

/// Reverses `items` in place and returns them.
pub fn reverse<T>(mut items: Vec<T>) -> Vec<T> {
	items.reverse();
	items
}

/// Appends the interior of `items` in reverse order: `f0..fn` becomes `f0..fn, f(n-1)..f1`.
pub fn ping_pong<T: Clone>(mut items: Vec<T>) -> Vec<T> {
	let len = items.len();
	if len > 2 {
		items.reserve(len - 2);
		for i in (1..len - 1).rev() {
			let item = items[i].clone();
			items.push(item);
		}
	}
	items
}

/// Ordered frames of one tag, ready to play.
///
/// Logically immutable once built; shared by every animation instance that uses
/// the same tag table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
	frames: Vec<AniFrame>,
	total_duration_ms: u64,
}

impl Sequence {
	/// Creates a sequence that plays `frames` in the given order.
	pub fn from_frames(frames: Vec<AniFrame>) -> Self {
		let total_duration_ms = frames.iter().map(|frame| u64::from(frame.duration_ms())).sum();
		Self {
			frames,
			total_duration_ms,
		}
	}

	/// Builds the sequence for a tag from its frames in original order.
	pub fn build(frames: Vec<AniFrame>, direction: Direction) -> Self {
		Self::from_frames(arrange(frames, direction))
	}

	/// Returns the frames in playback order.
	pub fn frames(&self) -> &[AniFrame] {
		&self.frames
	}

	/// Returns the frame at `index`.
	pub fn get(&self, index: usize) -> Option<&AniFrame> {
		self.frames.get(index)
	}

	/// Returns the number of frames in the sequence.
	pub fn len(&self) -> usize {
		self.frames.len()
	}

	/// Returns true if the sequence is empty.
	pub fn is_empty(&self) -> bool {
		self.frames.is_empty()
	}

	/// Sum of all frame durations in milliseconds; one full loop of the sequence.
	pub fn total_duration_ms(&self) -> u64 {
		self.total_duration_ms
	}

	/// Returns true if no frame of the sequence has a positive duration.
	pub fn is_instantaneous(&self) -> bool {
		self.total_duration_ms == 0
	}

	/// Original frame indices in playback order.
	pub fn indices(&self) -> Vec<usize> {
		self.frames.iter().map(AniFrame::index).collect()
	}
}

impl std::fmt::Display for Sequence {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Sequence({} frames, {}ms)", self.frames.len(), self.total_duration_ms)
	}
}
