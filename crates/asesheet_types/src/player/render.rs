//! CPU drawing of the current frame.

use image::{Rgba, RgbaImage, imageops};

use crate::error::PlaybackError;

use super::Animation;

impl Animation {
	/// Draws the current frame onto `target` with its top-left corner at `(x, y)`.
	///
	/// Source rectangles of packed sheets are ignored; see
	/// [`draw_packed_to`](Self::draw_packed_to).
	///
	/// # Errors
	///
	/// Returns the current tag's lookup error.
	pub fn draw_to(&self, target: &mut RgbaImage, x: i64, y: i64) -> Result<(), PlaybackError> {
		let image: &RgbaImage = self.frame()?.image();
		imageops::overlay(target, image, x, y);
		Ok(())
	}

	/// Draws the current frame of a packed sheet onto `target`.
	///
	/// `(x, y)` is the position of the untrimmed canvas; the frame is offset by its
	/// source rectangle inside that canvas.
	///
	/// # Errors
	///
	/// Returns the current tag's lookup error.
	pub fn draw_packed_to(
		&self,
		target: &mut RgbaImage,
		x: i64,
		y: i64,
	) -> Result<(), PlaybackError> {
		let frame = self.frame()?;
		let (dx, dy) = frame.source_rect().map_or((0, 0), |rect| (i64::from(rect.x), i64::from(rect.y)));
		let image: &RgbaImage = frame.image();
		imageops::overlay(target, image, x + dx, y + dy);
		Ok(())
	}

	/// Returns the current frame composited onto the untrimmed canvas.
	///
	/// The canvas is only redrawn after the frame or tag changed. Returns `None`
	/// when no frame of the tag table carries a source rectangle.
	///
	/// # Errors
	///
	/// Returns the current tag's lookup error.
	pub fn composited_frame(&mut self) -> Result<Option<&RgbaImage>, PlaybackError> {
		let frame = self.frame()?.clone();
		let needs_draw = self.needs_draw;
		let Some(canvas) = self.canvas.as_mut() else {
			return Ok(None);
		};

		if needs_draw {
			canvas.pixels_mut().for_each(|pixel| *pixel = Rgba([0, 0, 0, 0]));
			let (x, y) = frame.source_rect().map_or((0, 0), |rect| (i64::from(rect.x), i64::from(rect.y)));
			let image: &RgbaImage = frame.image();
			imageops::overlay(canvas, image, x, y);
			self.needs_draw = false;
		}

		Ok(self.canvas.as_ref())
	}

	/// Returns `true` when the composited canvas is stale.
	pub fn needs_redraw(&self) -> bool {
		self.needs_draw
	}
}
