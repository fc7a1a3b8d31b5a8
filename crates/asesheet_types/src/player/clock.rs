//! Frame clocks feeding elapsed time into animations.
//!
//! A clock is ticked exactly once per outer update cycle, before any animation
//! consumes its delta. Every animation updated from the same clock sees the same
//! delta, while still keeping its own tag, frame and accumulator.
//!
//! ```
//! use asesheet_types::player::{Clock, FixedStepClock};
//!
//! let mut clock = FixedStepClock::new(50);
//! assert_eq!(clock.tick(), 20.0);
//! assert_eq!(clock.tick(), 20.0);
//! assert_eq!(clock.elapsed_millis(), 40.0);
//! ```

use std::time::Instant;

/// Source of per-tick elapsed time, in milliseconds.
pub trait Clock {
	/// Advances the clock by one tick and returns the new delta.
	fn tick(&mut self) -> f64;

	/// Delta produced by the most recent tick.
	fn delta_millis(&self) -> f64;

	/// Sum of all deltas since the clock was created.
	fn elapsed_millis(&self) -> f64;
}

/// Wall-clock time, measured with [`Instant`].
///
/// The first tick establishes the reference point and yields a zero delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallClock {
	last: Option<Instant>,
	delta_ms: f64,
	elapsed_ms: f64,
	time_scale: f64,
}

impl Default for WallClock {
	fn default() -> Self {
		Self {
			last: None,
			delta_ms: 0.0,
			elapsed_ms: 0.0,
			time_scale: 1.0,
		}
	}
}

impl WallClock {
	/// Creates a clock running at normal speed.
	pub fn new() -> Self {
		Self::default()
	}

	/// Multiplier applied to every measured delta.
	pub fn time_scale(&self) -> f64 {
		self.time_scale
	}

	/// Sets the multiplier applied to every measured delta; negative values are clamped to zero.
	pub fn set_time_scale(&mut self, time_scale: f64) {
		self.time_scale = time_scale.max(0.0);
	}

	/// Ticks the clock as if the current time were `now`.
	///
	/// Instants earlier than the previous tick produce a zero delta.
	pub fn tick_at(&mut self, now: Instant) -> f64 {
		let raw = self
			.last
			.map_or(0.0, |last| now.saturating_duration_since(last).as_nanos() as f64 / 1_000_000.0);
		self.last = Some(now);
		self.delta_ms = raw * self.time_scale;
		self.elapsed_ms += self.delta_ms;
		self.delta_ms
	}
}

impl Clock for WallClock {
	fn tick(&mut self) -> f64 {
		self.tick_at(Instant::now())
	}

	fn delta_millis(&self) -> f64 {
		self.delta_ms
	}

	fn elapsed_millis(&self) -> f64 {
		self.elapsed_ms
	}
}

/// Fixed-rate clock: every tick lasts `1000 / tps` milliseconds.
///
/// Suited to game loops that run at a fixed ticks-per-second rate, and to
/// deterministic replays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedStepClock {
	tps: u32,
	ticks: u64,
	delta_ms: f64,
	elapsed_ms: f64,
}

impl FixedStepClock {
	/// Default ticks per second.
	pub const DEFAULT_TPS: u32 = 60;

	/// Creates a clock ticking `tps` times per second. A rate of zero is treated as one.
	pub fn new(tps: u32) -> Self {
		Self {
			tps: tps.max(1),
			ticks: 0,
			delta_ms: 0.0,
			elapsed_ms: 0.0,
		}
	}

	/// Ticks per second.
	pub fn tps(&self) -> u32 {
		self.tps
	}

	/// Changes the tick rate for subsequent ticks. A rate of zero is treated as one.
	pub fn set_tps(&mut self, tps: u32) {
		self.tps = tps.max(1);
	}

	/// Number of ticks so far.
	pub fn ticks(&self) -> u64 {
		self.ticks
	}

	/// Length of one tick in milliseconds.
	pub fn step_millis(&self) -> f64 {
		1000.0 / f64::from(self.tps)
	}
}

impl Default for FixedStepClock {
	fn default() -> Self {
		Self::new(Self::DEFAULT_TPS)
	}
}

impl Clock for FixedStepClock {
	fn tick(&mut self) -> f64 {
		self.ticks += 1;
		self.delta_ms = self.step_millis();
		self.elapsed_ms += self.delta_ms;
		self.delta_ms
	}

	fn delta_millis(&self) -> f64 {
		self.delta_ms
	}

	fn elapsed_millis(&self) -> f64 {
		self.elapsed_ms
	}
}
