//! Sheet fixtures built in memory

use std::io::Cursor;

use asesheet_rs::prelude::*;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use serde_json::{Value, json};

/// Edge length of every fixture frame.
pub(super) const FRAME_SIZE: u32 = 16;

/// Per-frame durations of the fixture sheet.
pub(super) const DURATIONS: [u32; 4] = [100, 50, 0, 150];

/// Color of frame `index` in the fixture atlas.
pub(super) fn frame_color(index: usize) -> Rgba<u8> {
	Rgba([(index as u8 + 1) * 40, 0, 255 - index as u8 * 40, 255])
}

/// Atlas with the four fixture frames laid out horizontally.
pub(super) fn atlas_png() -> Vec<u8> {
	let atlas = RgbaImage::from_fn(FRAME_SIZE * 4, FRAME_SIZE, |x, _| frame_color((x / FRAME_SIZE) as usize));
	let mut bytes = Vec::new();
	DynamicImage::ImageRgba8(atlas)
		.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
		.unwrap();
	bytes
}

/// Sheet metadata with `walk`, `back`, `bounce` and `hit` tags over the fixture atlas.
pub(super) fn sheet_json(image: &str) -> Value {
	let frames: Vec<Value> = DURATIONS
		.iter()
		.enumerate()
		.map(|(i, duration)| {
			json!({
				"frame": { "x": i as u32 * FRAME_SIZE, "y": 0, "w": FRAME_SIZE, "h": FRAME_SIZE },
				"rotated": false,
				"trimmed": false,
				"spriteSourceSize": { "x": 0, "y": 0, "w": FRAME_SIZE, "h": FRAME_SIZE },
				"sourceSize": { "w": FRAME_SIZE, "h": FRAME_SIZE },
				"duration": duration
			})
		})
		.collect();

	json!({
		"frames": frames,
		"meta": {
			"app": "https://www.aseprite.org/",
			"version": "1.3.7-x64",
			"image": image,
			"format": "RGBA8888",
			"size": { "w": FRAME_SIZE * 4, "h": FRAME_SIZE },
			"scale": "1",
			"frameTags": [
				{ "name": "walk", "from": 0, "to": 3, "direction": "forward", "color": "#000000ff" },
				{ "name": "back", "from": 0, "to": 3, "direction": "reverse" },
				{ "name": "bounce", "from": 0, "to": 3, "direction": "pingpong_reverse" },
				{ "name": "hit", "from": 0, "to": 1 }
			],
			"layers": [
				{ "name": "Layer 1", "opacity": 255, "blendMode": "normal" }
			],
			"slices": []
		}
	})
}

/// Memory source holding `sprites/hero.json` and its atlas `sprites/hero.png`.
pub(super) fn hero_source() -> MemorySource {
	source_with(sheet_json("hero.png"))
}

/// Memory source holding `json` at `sprites/hero.json` and the fixture atlas next to it.
pub(super) fn source_with(json: Value) -> MemorySource {
	MemorySource::new()
		.with_file("sprites/hero.json", serde_json::to_vec(&json).unwrap())
		.with_file("sprites/hero.png", atlas_png())
}
