//! Benchmark suite for animation playback
//!
//! This benchmark measures the per-tick cost of advancing animations, which is the
//! hot path of a game loop driving many sprites.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml --bench playback

use std::{hint::black_box, sync::Arc};

use asesheet_benches::{FRAME_DURATION_MS, generate_atlas, generate_sheet};
use asesheet_types::{
	anim::TagTable,
	config::LoadConfig,
	player::{Animation, Clock, FixedStepClock},
};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use image::RgbaImage;

fn create_table() -> Arc<TagTable> {
	let sheet = generate_sheet(64, 32, 8, 8);
	let atlas = generate_atlas(&sheet);
	match TagTable::from_sheet(&sheet, &atlas, &LoadConfig::default()) {
		Ok(table) => Arc::new(table),
		Err(err) => panic!("generated sheet rejected: {err}"),
	}
}

/// Benchmark a single advance for deltas crossing 0, 1 and many frame boundaries
fn bench_advance(c: &mut Criterion) {
	let mut group = c.benchmark_group("playback_advance");
	let table = create_table();
	let step = f64::from(FRAME_DURATION_MS);

	for (name, delta) in [("within_frame", step / 10.0), ("one_frame", step), ("many_frames", step * 50.0)] {
		group.bench_with_input(BenchmarkId::new("delta", name), &delta, |b, &delta| {
			let mut anim = Animation::new(Arc::clone(&table));
			anim.set_tag("tag_2");
			anim.on_end("tag_2", |_| {});
			b.iter(|| black_box(anim.advance(black_box(delta))));
		});
	}

	group.finish();
}

/// Benchmark one clock tick updating many flyweight instances
fn bench_many_instances(c: &mut Criterion) {
	let mut group = c.benchmark_group("playback_instances");
	let table = create_table();

	for count in [100_usize, 1_000, 10_000] {
		let source = Animation::new(Arc::clone(&table));
		let mut sprites: Vec<Animation> = (0..count)
			.map(|i| {
				let mut anim = Animation::flyweight(&source);
				anim.set_tag(&format!("tag_{}", i % 8));
				anim
			})
			.collect();
		let mut clock = FixedStepClock::default();

		group.throughput(Throughput::Elements(count as u64));
		group.bench_function(BenchmarkId::new("update", count), |b| {
			b.iter(|| {
				clock.tick();
				for anim in &mut sprites {
					let _ = black_box(anim.update(&clock));
				}
			});
		});
	}

	group.finish();
}

/// Benchmark drawing the current frame
fn bench_draw(c: &mut Criterion) {
	let mut group = c.benchmark_group("playback_draw");
	let table = create_table();
	let mut anim = Animation::new(table);
	let mut target = RgbaImage::new(256, 256);

	group.bench_function("draw_to", |b| {
		b.iter(|| black_box(anim.draw_to(&mut target, 64, 64)));
	});
	group.bench_function("composited_frame", |b| {
		b.iter(|| {
			anim.restart();
			black_box(anim.composited_frame().map(|canvas| canvas.map(RgbaImage::width)))
		});
	});

	group.finish();
}

criterion_group!(benches, bench_advance, bench_many_instances, bench_draw);
criterion_main!(benches);
