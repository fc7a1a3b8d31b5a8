//! Loading sheets through asset sources

use std::{fs, path::Path};

use asesheet_rs::prelude::*;

use crate::fixtures::{
	DURATIONS, FRAME_SIZE, atlas_png, frame_color, hero_source, sheet_json, source_with,
};

#[test_log::test]
fn test_load_tagged_sheet() {
	let loaded = load_sprite_sheet(&hero_source(), "sprites/hero.json", &LoadConfig::default()).unwrap();
	assert_eq!(loaded.image_path, Path::new("sprites/hero.png"));
	assert_eq!(loaded.atlas.dimensions(), (FRAME_SIZE * 4, FRAME_SIZE));
	assert_eq!(loaded.sheet.meta.layers.len(), 1);

	let table = loaded.tag_table(&LoadConfig::default()).unwrap();
	assert_eq!(table.tag_names(), vec![DEFAULT_TAG, "back", "bounce", "hit", "walk"]);
	assert_eq!(table.get("walk").unwrap().indices(), vec![0, 1, 2, 3]);
	assert_eq!(table.get("back").unwrap().indices(), vec![3, 2, 1, 0]);
	assert_eq!(table.get("bounce").unwrap().indices(), vec![3, 2, 1, 0, 1, 2]);
	assert_eq!(table.get("hit").unwrap().indices(), vec![0, 1]);

	let all = table.default_sequence().unwrap();
	assert_eq!(all.total_duration_ms(), u64::from(DURATIONS.iter().sum::<u32>()));
	for frame in all.frames() {
		assert_eq!(frame.image().dimensions(), (FRAME_SIZE, FRAME_SIZE));
		assert_eq!(*frame.image().get_pixel(FRAME_SIZE / 2, FRAME_SIZE / 2), frame_color(frame.index()));
		assert_eq!(frame.duration_ms(), DURATIONS[frame.index()]);
	}
}

#[test]
fn test_untagged_sheet_plays_every_frame() {
	let mut json = sheet_json("hero.png");
	json["meta"]["frameTags"] = serde_json::json!([]);

	let anim = load_animation(&source_with(json), "sprites/hero.json", &LoadConfig::default()).unwrap();
	assert_eq!(anim.tags().tag_names(), vec![DEFAULT_TAG]);
	assert_eq!(anim.sequence().unwrap().len(), DURATIONS.len());
}

#[test]
fn test_image_path_relative_to_metadata() {
	let source = MemorySource::new()
		.with_file("sprites/hero.json", serde_json::to_vec(&sheet_json("../atlas/hero.png")).unwrap())
		.with_file("atlas/hero.png", atlas_png());

	let loaded = load_sprite_sheet(&source, "sprites/hero.json", &LoadConfig::default()).unwrap();
	assert_eq!(loaded.image_path, Path::new("atlas/hero.png"));
}

#[test]
fn test_unsupported_version() {
	let mut json = sheet_json("hero.png");
	json["meta"]["version"] = "1.2.40".into();

	let err = load_sprite_sheet(&source_with(json.clone()), "sprites/hero.json", &LoadConfig::default())
		.unwrap_err();
	assert!(matches!(
		err,
		SheetError::UnsupportedVersion { ref expected, ref found } if expected == "1.3" && found == "1.2.40"
	));

	let older = LoadConfig::new("1.2", true);
	assert!(load_sprite_sheet(&source_with(json), "sprites/hero.json", &older).is_ok());
}

#[test]
fn test_malformed_metadata() {
	let source = MemorySource::new().with_file("sprites/hero.json", b"{ \"frames\": [".to_vec());
	let err = load_sprite_sheet(&source, "sprites/hero.json", &LoadConfig::default()).unwrap_err();
	assert!(matches!(err, SheetError::Json(_)));
}

#[test]
fn test_missing_files() {
	let err = load_sprite_sheet(&MemorySource::new(), "sprites/hero.json", &LoadConfig::default())
		.unwrap_err();
	assert!(matches!(err, SheetError::AssetNotFound { ref path, .. } if path == Path::new("sprites/hero.json")));

	let source = MemorySource::new()
		.with_file("sprites/hero.json", serde_json::to_vec(&sheet_json("hero.png")).unwrap());
	let err = load_sprite_sheet(&source, "sprites/hero.json", &LoadConfig::default()).unwrap_err();
	assert!(matches!(err, SheetError::AssetNotFound { ref path, .. } if path == Path::new("sprites/hero.png")));
}

#[test]
fn test_undecodable_image() {
	let source = MemorySource::new()
		.with_file("sprites/hero.json", serde_json::to_vec(&sheet_json("hero.png")).unwrap())
		.with_file("sprites/hero.png", b"not a png".to_vec());

	let err = load_animation(&source, "sprites/hero.json", &LoadConfig::default()).unwrap_err();
	assert!(matches!(err, SheetError::AssetDecode { .. }));
}

#[test_log::test]
fn test_tag_range_past_last_frame() {
	let mut json = sheet_json("hero.png");
	json["meta"]["frameTags"][0]["to"] = 4.into();

	let err = load_animation(&source_with(json), "sprites/hero.json", &LoadConfig::default()).unwrap_err();
	assert!(matches!(
		err,
		SheetError::TagRangeOutOfBounds { ref tag, from: 0, to: 4, frame_count: 4 } if tag == "walk"
	));
}

#[test_log::test]
fn test_frame_outside_atlas() {
	let mut json = sheet_json("hero.png");
	json["meta"]["frameTags"] = serde_json::json!([]);
	json["frames"][3]["frame"]["w"] = (FRAME_SIZE * 2).into();

	let err = load_animation(&source_with(json.clone()), "sprites/hero.json", &LoadConfig::default())
		.unwrap_err();
	assert!(matches!(err, SheetError::FrameOutsideAtlas { index: 3, .. }));

	let anim = load_animation(&source_with(json), "sprites/hero.json", &LoadConfig::lenient()).unwrap();
	let clipped = &anim.sequence().unwrap().frames()[3];
	assert_eq!(clipped.image().dimensions(), (FRAME_SIZE, FRAME_SIZE));
}

#[test]
fn test_load_from_directory() {
	let root = std::env::temp_dir().join(format!("asesheet-dir-source-{}", std::process::id()));
	fs::create_dir_all(root.join("sprites")).unwrap();
	fs::write(root.join("sprites/hero.json"), serde_json::to_vec(&sheet_json("hero.png")).unwrap()).unwrap();
	fs::write(root.join("sprites/hero.png"), atlas_png()).unwrap();

	let result = load_animation(&DirSource::new(&root), "sprites/hero.json", &LoadConfig::default());
	fs::remove_dir_all(&root).unwrap();

	let anim = result.unwrap();
	assert_eq!(anim.tags().len(), 5);
}
