//! Headless Playback Example
//!
//! Loads a sprite sheet and drives one animation with a fixed-step clock, logging
//! every frame change and every end-of-tag callback. A second animation shares the
//! same frames through a flyweight and plays the default sequence alongside.
//!
//! Tags listed with `--chain` are played one after another: the end callback of each
//! tag switches to the next one, and the last tag loops.
//!
//! # Usage
//!
//! ```bash
//! # Play the default sequence for two seconds at 60 ticks per second
//! cargo run --example playback -- assets/hero.json
//!
//! # Play walk, then attack, then loop idle, at 30 ticks per second
//! cargo run --example playback -- assets/hero.json --chain walk,attack,idle --tps 30
//!
//! # Dump the composited canvas of every tick as PNG
//! cargo run --example playback -- assets/hero.json --dump bin/playback
//! ```

use std::{
	fs,
	path::{Path, PathBuf},
	sync::{
		Arc,
		atomic::{AtomicUsize, Ordering},
	},
};

use anyhow::{Context, Result, bail};
use asesheet_rs::prelude::*;
use clap::Parser;
use log::{debug, info};

#[derive(Parser)]
#[command(name = "playback")]
#[command(author = "asesheet-rs project")]
#[command(version)]
#[command(about = "Simulate tag playback of a sprite sheet", long_about = None)]
struct Cli {
	/// Path to the sheet JSON file
	#[arg(value_name = "FILE")]
	file: PathBuf,

	/// Tags to play in order; the last one loops
	#[arg(short, long, value_delimiter = ',', value_name = "TAGS")]
	chain: Vec<String>,

	/// Ticks per second of the simulated game loop
	#[arg(long, env = "ASESHEET_TPS", default_value_t = FixedStepClock::DEFAULT_TPS)]
	tps: u32,

	/// Simulated duration in milliseconds
	#[arg(short, long, value_name = "MS", default_value_t = 2000)]
	duration: u64,

	/// Write the composited canvas of every tick into this directory
	#[arg(long, value_name = "DIR")]
	dump: Option<PathBuf>,
}

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	let root = cli.file.parent().map_or_else(|| PathBuf::from("."), Path::to_path_buf);
	let name = cli.file.file_name().with_context(|| format!("{} does not name a file", cli.file.display()))?;

	let mut anim = load_animation(&DirSource::new(root), name, &LoadConfig::default())
		.with_context(|| format!("Failed to load {}", cli.file.display()))?;
	info!("Loaded {} with tags {:?}", cli.file.display(), anim.tags().tag_names());

	for tag in &cli.chain {
		if !anim.tags().contains(tag) {
			bail!("Tag {tag:?} not found");
		}
	}

	let loops = Arc::new(AtomicUsize::new(0));
	chain_tags(&mut anim, &cli.chain, &loops);
	if let Some(first) = cli.chain.first() {
		anim.set_tag(first);
	}

	let mut background = Animation::flyweight(&anim);

	if let Some(dir) = &cli.dump {
		fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
	}

	let mut clock = FixedStepClock::new(cli.tps);
	let mut last = (anim.tag().to_string(), anim.frame_index());
	info!("tick {:>5}  {:>8.1}ms  tag {:?} frame {}", 0, 0.0, last.0, last.1);

	while clock.elapsed_millis() < cli.duration as f64 {
		clock.tick();
		anim.update(&clock)?;
		background.update(&clock)?;

		let current = (anim.tag().to_string(), anim.frame_index());
		if current != last {
			info!(
				"tick {:>5}  {:>8.1}ms  tag {:?} frame {} (sheet frame {})",
				clock.ticks(),
				clock.elapsed_millis(),
				current.0,
				current.1,
				anim.frame()?.index()
			);
			last = current;
		}
		debug!("background at frame {}", background.frame_index());

		if let Some(dir) = &cli.dump {
			dump_tick(&mut anim, dir, clock.ticks())?;
		}
	}

	info!(
		"Simulated {} ticks ({:.1}ms), {} tag end(s)",
		clock.ticks(),
		clock.elapsed_millis(),
		loops.load(Ordering::SeqCst)
	);
	Ok(())
}

/// Registers end callbacks so that each tag of `chain` hands over to the next.
fn chain_tags(anim: &mut Animation, chain: &[String], loops: &Arc<AtomicUsize>) {
	for (position, tag) in chain.iter().enumerate() {
		let next = chain.get(position + 1).cloned();
		let loops = Arc::clone(loops);
		let tag_name = tag.clone();
		anim.on_end(tag, move |anim| {
			loops.fetch_add(1, Ordering::SeqCst);
			match &next {
				Some(next) => {
					info!("{tag_name:?} finished, switching to {next:?}");
					anim.set_tag(next);
				}
				None => debug!("{tag_name:?} looped"),
			}
		});
	}
}

fn dump_tick(anim: &mut Animation, dir: &Path, tick: u64) -> Result<()> {
	let path = dir.join(format!("tick_{tick:05}.png"));
	let frame = Arc::clone(anim.frame()?.image());
	let saved = match anim.composited_frame()? {
		Some(canvas) => canvas.save(&path),
		None => frame.save(&path),
	};
	saved.with_context(|| format!("Failed to write {}", path.display()))
}
