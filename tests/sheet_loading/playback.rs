//! Playing loaded animations

use std::sync::{
	Arc, Mutex,
	atomic::{AtomicUsize, Ordering},
};

use asesheet_rs::prelude::*;
use image::RgbaImage;

use crate::fixtures::{FRAME_SIZE, frame_color, hero_source};

fn load_hero() -> Animation {
	load_animation(&hero_source(), "sprites/hero.json", &LoadConfig::default()).unwrap()
}

#[test_log::test]
fn test_sheet_durations_drive_playback() {
	// Durations are 100, 50, 0 and 150ms.
	let mut anim = load_hero();
	let loops = Arc::new(AtomicUsize::new(0));
	let counter = loops.clone();
	anim.on_end(DEFAULT_TAG, move |_| {
		counter.fetch_add(1, Ordering::SeqCst);
	});

	anim.advance(100.0).unwrap();
	assert_eq!(anim.frame_index(), 1);

	// The zero-duration frame is skipped without consuming time.
	anim.advance(50.0).unwrap();
	assert_eq!(anim.frame_index(), 3);
	assert_eq!(anim.elapsed_millis(), 0.0);

	anim.advance(149.0).unwrap();
	assert_eq!(anim.frame_index(), 3);
	assert_eq!(loops.load(Ordering::SeqCst), 0);

	anim.advance(1.0).unwrap();
	assert_eq!(anim.frame_index(), 0);
	assert_eq!(loops.load(Ordering::SeqCst), 1);
}

#[test]
fn test_tag_chain_through_callbacks() {
	let mut anim = load_hero();
	let visited = Arc::new(Mutex::new(Vec::new()));

	let log = visited.clone();
	anim.on_end("hit", move |anim| {
		log.lock().unwrap().push(anim.tag().to_string());
		anim.set_tag("back");
	});
	anim.set_tag("hit");

	// hit lasts 150ms; back starts with frame 3 (150ms).
	anim.advance(200.0).unwrap();
	assert_eq!(anim.tag(), "back");
	assert_eq!(anim.frame_index(), 0);
	assert_eq!(anim.frame().unwrap().index(), 3);
	assert_eq!(anim.elapsed_millis(), 50.0);
	assert_eq!(*visited.lock().unwrap(), vec!["hit".to_string()]);
}

#[test]
fn test_fixed_step_clock_drives_instances() {
	let mut first = load_hero();
	first.set_tag("walk");
	let mut second = Animation::flyweight(&first);
	second.set_tag("bounce");

	// 20 ticks at 40 tps: 500ms.
	let mut clock = FixedStepClock::new(40);
	for _ in 0..20 {
		clock.tick();
		first.update(&clock).unwrap();
		second.update(&clock).unwrap();
	}

	// walk: 100 + 50 + 0 + 150 = 300ms per loop, 200ms into the second loop.
	assert_eq!(first.frame().unwrap().index(), 3);
	assert_eq!(first.elapsed_millis(), 50.0);
	// bounce plays 3 2 1 0 1 2: 150 + 0 + 50 + 100 + 50 + 0 = 350ms per loop.
	assert_eq!(second.frame_index(), 2);
	assert_eq!(second.frame().unwrap().index(), 1);
	assert_eq!(second.elapsed_millis(), 0.0);
}

#[test]
fn test_clones_share_frames() {
	let mut anim = load_hero();
	anim.set_tag("walk");
	anim.advance(120.0).unwrap();
	anim.on_end("walk", |anim| anim.pause());

	let mut copy = anim.clone();
	assert!(Arc::ptr_eq(anim.tags(), copy.tags()));
	assert_eq!(copy.frame_index(), anim.frame_index());
	assert_eq!(copy.elapsed_millis(), 0.0);

	copy.advance(1000.0).unwrap();
	assert!(copy.is_paused());
	assert!(!anim.is_paused());
	let fresh = Animation::flyweight(&anim);
	assert!(Arc::ptr_eq(fresh.tags(), anim.tags()));
	assert!(!fresh.has_callback("walk"));
}

#[test]
fn test_draw_current_frame() {
	let mut anim = load_hero();
	anim.set_tag("back");

	let mut target = RgbaImage::new(FRAME_SIZE * 2, FRAME_SIZE * 2);
	anim.draw_to(&mut target, i64::from(FRAME_SIZE), 0).unwrap();
	assert_eq!(*target.get_pixel(FRAME_SIZE, 0), frame_color(3));
	assert_eq!(target.get_pixel(0, 0).0[3], 0);

	let canvas = anim.composited_frame().unwrap().unwrap();
	assert_eq!(canvas.dimensions(), (FRAME_SIZE, FRAME_SIZE));
	assert_eq!(*canvas.get_pixel(0, 0), frame_color(3));
}
