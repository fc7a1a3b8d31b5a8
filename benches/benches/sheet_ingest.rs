//! Benchmark suite for sprite-sheet ingestion
//!
//! This benchmark measures metadata parsing and tag table assembly, which cuts the
//! atlas into per-frame images and builds one sequence per tag.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml --bench sheet_ingest

use std::hint::black_box;

use asesheet_benches::{generate_atlas, generate_sheet, sheet_json};
use asesheet_types::{anim::TagTable, config::LoadConfig, sheet::SpriteSheet};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

const SHEET_SIZES: [u32; 3] = [16, 128, 512];

/// Benchmark JSON parsing and version checking
fn bench_parse_metadata(c: &mut Criterion) {
	let mut group = c.benchmark_group("sheet_parse");

	for frame_count in SHEET_SIZES {
		let data = sheet_json(&generate_sheet(frame_count, 32, 16, 8));
		group.throughput(Throughput::Bytes(data.len() as u64));
		group.bench_with_input(BenchmarkId::new("from_slice", frame_count), &data, |b, data| {
			b.iter(|| black_box(SpriteSheet::from_slice(black_box(data))));
		});
	}

	group.finish();
}

/// Benchmark tag table assembly from a decoded atlas
fn bench_tag_table(c: &mut Criterion) {
	let mut group = c.benchmark_group("sheet_tag_table");
	let config = LoadConfig::default();

	for frame_count in SHEET_SIZES {
		let sheet = generate_sheet(frame_count, 32, 16, 8);
		let atlas = generate_atlas(&sheet);
		group.throughput(Throughput::Elements(u64::from(frame_count)));
		group.bench_with_input(
			BenchmarkId::new("from_sheet", frame_count),
			&(sheet, atlas),
			|b, (sheet, atlas)| {
				b.iter(|| black_box(TagTable::from_sheet(sheet, atlas, &config)));
			},
		);
	}

	group.finish();
}

/// Benchmark the effect of frame size on cutting the atlas
fn bench_frame_size(c: &mut Criterion) {
	let mut group = c.benchmark_group("sheet_frame_size");
	let config = LoadConfig::default();

	for frame_size in [16, 64, 256] {
		let sheet = generate_sheet(32, frame_size, 8, 32);
		let atlas = generate_atlas(&sheet);
		group.throughput(Throughput::Elements(u64::from(32 * frame_size * frame_size)));
		group.bench_with_input(BenchmarkId::new("pixels", frame_size), &(sheet, atlas), |b, (sheet, atlas)| {
			b.iter(|| black_box(TagTable::from_sheet(sheet, atlas, &config)));
		});
	}

	group.finish();
}

criterion_group!(benches, bench_parse_metadata, bench_tag_table, bench_frame_size);
criterion_main!(benches);
