//! Playback direction of a frame tag.

use std::{fmt::Formatter, str::FromStr};

use serde::{Deserialize, Serialize};

/// Traversal rule applied when a tag's playable sequence is built.
///
/// Serialized with the exporter's spelling: `forward`, `reverse`, `pingpong`
/// and `pingpong_reverse`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
	/// Frames in their original order
	#[default]
	#[serde(rename = "forward")]
	Forward,
	/// Frames in reverse order
	#[serde(rename = "reverse")]
	Reverse,
	/// Original order, then back down without repeating either end
	#[serde(rename = "pingpong")]
	PingPong,
	/// Reverse order, then back up without repeating either end
	#[serde(rename = "pingpong_reverse")]
	PingPongReverse,
}

impl Direction {
	/// All directions, in declaration order.
	pub const ALL: [Self; 4] = [Self::Forward, Self::Reverse, Self::PingPong, Self::PingPongReverse];

	/// Returns the exporter's spelling of the direction.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Forward => "forward",
			Self::Reverse => "reverse",
			Self::PingPong => "pingpong",
			Self::PingPongReverse => "pingpong_reverse",
		}
	}
}

impl FromStr for Direction {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|direction| direction.as_str() == s)
			.ok_or_else(|| format!("unknown direction: {s}"))
	}
}

impl std::fmt::Display for Direction {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
