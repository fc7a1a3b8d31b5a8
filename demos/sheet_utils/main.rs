//! Sprite-sheet CLI Utility
//!
//! A command-line tool for checking and unpacking Aseprite JSON exports.
//!
//! # Features
//!
//! - **info**: Display the metadata, frames and tags of a sheet
//! - **validate**: Load a sheet and its atlas, build every tag sequence and report problems
//! - **export**: Write every tag's frames, in playback order, to PNG files
//!
//! # Usage
//!
//! ```bash
//! # Show sheet information
//! cargo run --example sheet_utils -- info assets/hero.json
//!
//! # Validate with out-of-atlas frames clipped instead of rejected
//! cargo run --example sheet_utils -- validate assets/hero.json --lenient
//!
//! # Export all tags into frames/<tag>/NNN.png
//! cargo run --example sheet_utils -- export assets/hero.json -o frames/
//!
//! # Export only one tag
//! cargo run --example sheet_utils -- export assets/hero.json -o frames/ -t walk
//! ```

use std::{
	fs,
	path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use asesheet_rs::prelude::*;
use clap::{Args, Parser, Subcommand};
use log::{info, warn};

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	match cli.command {
		Command::Info(args) => run_info(&args),
		Command::Validate(args) => run_validate(&args),
		Command::Export(args) => run_export(&args),
	}
}

#[derive(Parser)]
#[command(name = "sheet_utils")]
#[command(author = "asesheet-rs project")]
#[command(version)]
#[command(about = "Inspect, validate and unpack Aseprite sprite sheets", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Display information about a sheet
	Info(SheetArgs),
	/// Load a sheet with its atlas and build every tag sequence
	Validate(SheetArgs),
	/// Export tag frames to PNG files
	Export(ExportArgs),
}

#[derive(Args)]
struct SheetArgs {
	/// Path to the sheet JSON file
	#[arg(value_name = "FILE")]
	file: PathBuf,

	/// Accepted exporter version prefix
	#[arg(long, value_name = "PREFIX", env = "ASESHEET_VERSION_PREFIX")]
	version_prefix: Option<String>,

	/// Clip frames reaching outside the atlas instead of failing
	#[arg(long, default_value_t = false)]
	lenient: bool,
}

#[derive(Args)]
struct ExportArgs {
	#[command(flatten)]
	sheet: SheetArgs,

	/// Output directory; one sub-directory is created per tag
	#[arg(short, long, value_name = "DIR", default_value = "bin/sheet_export")]
	output: PathBuf,

	/// Only export this tag (use "" for the default sequence)
	#[arg(short, long, value_name = "TAG")]
	tag: Option<String>,
}

impl SheetArgs {
	fn config(&self) -> LoadConfig {
		let mut config = if self.lenient {
			LoadConfig::lenient()
		} else {
			LoadConfig::default()
		};
		if let Some(prefix) = &self.version_prefix {
			config.version_prefix = prefix.clone();
		}
		config
	}

	/// Splits the file path into a directory source and the file name inside it.
	fn source(&self) -> Result<(DirSource, PathBuf)> {
		let name = self
			.file
			.file_name()
			.with_context(|| format!("{} does not name a file", self.file.display()))?;
		let root = self.file.parent().map_or_else(|| PathBuf::from("."), Path::to_path_buf);
		Ok((DirSource::new(root), PathBuf::from(name)))
	}

	fn load(&self) -> Result<(LoadedSheet, TagTable)> {
		let config = self.config();
		let (source, name) = self.source()?;
		let loaded = load_sprite_sheet(&source, &name, &config)
			.with_context(|| format!("Failed to load {}", self.file.display()))?;
		let table = loaded
			.tag_table(&config)
			.with_context(|| format!("Failed to build tags of {}", self.file.display()))?;
		Ok((loaded, table))
	}
}

fn run_info(args: &SheetArgs) -> Result<()> {
	let data = fs::read(&args.file).with_context(|| format!("Failed to read {}", args.file.display()))?;
	let sheet = SpriteSheet::from_slice_with_config(&data, &args.config())
		.with_context(|| format!("Failed to parse {}", args.file.display()))?;
	let meta = &sheet.meta;

	println!("File: {}", args.file.display());
	println!("  App:      {} {}", meta.app, meta.version);
	println!("  Image:    {} ({}x{}, {})", meta.image, meta.size.w, meta.size.h, meta.format);
	println!("  Frames:   {}", sheet.frames.len());
	println!("  Layers:   {}", meta.layers.len());
	println!("  Slices:   {}", meta.slices.len());

	println!();
	println!("{:>5}  {:<20}  {:>8}  {:<20}", "Index", "Atlas rect", "Duration", "Source rect");
	for (index, frame) in sheet.frames.iter().enumerate() {
		let source = frame.sprite_source_size.map_or_else(|| "-".to_string(), |rect| rect.to_string());
		println!("{index:>5}  {:<20}  {:>6}ms  {source:<20}", frame.frame.to_string(), frame.duration);
	}

	if sheet.has_tags() {
		println!();
		println!("{:<20}  {:>5}  {:>5}  {:<16}", "Tag", "From", "To", "Direction");
		for tag in &meta.frame_tags {
			println!("{:<20}  {:>5}  {:>5}  {:<16}", tag.name, tag.from, tag.to, tag.direction);
		}
	} else {
		println!();
		println!("No tags; only the default sequence is available");
	}

	Ok(())
}

fn run_validate(args: &SheetArgs) -> Result<()> {
	let (loaded, table) = args.load()?;

	info!(
		"{}: {} frames, atlas {}x{} from {}",
		args.file.display(),
		loaded.sheet.frames.len(),
		loaded.atlas.width(),
		loaded.atlas.height(),
		loaded.image_path.display()
	);

	let mut problems = 0_usize;
	for name in table.tag_names() {
		let Some(sequence) = table.get(name) else {
			continue;
		};
		let label = if name.is_empty() {
			"<default>"
		} else {
			name
		};
		if sequence.is_instantaneous() {
			warn!("  {label}: every frame lasts 0ms, playback steps once per update");
			problems += 1;
		} else {
			info!("  {label}: {sequence}, order {:?}", sequence.indices());
		}
	}

	let declared = loaded.sheet.meta.size;
	if declared.w != 0 && (declared.w, declared.h) != loaded.atlas.dimensions() {
		warn!(
			"  declared atlas size {}x{} differs from decoded {}x{}",
			declared.w,
			declared.h,
			loaded.atlas.width(),
			loaded.atlas.height()
		);
		problems += 1;
	}

	if problems > 0 {
		bail!("Validation finished with {problems} warning(s)");
	}
	info!("✓ {} is valid", args.file.display());
	Ok(())
}

fn run_export(args: &ExportArgs) -> Result<()> {
	let (_, table) = args.sheet.load()?;

	let names: Vec<&str> = match &args.tag {
		Some(tag) if table.contains(tag) => vec![tag.as_str()],
		Some(tag) => bail!("Tag {tag:?} not found (available: {:?})", table.tag_names()),
		None => table.tag_names(),
	};

	let mut written = 0_usize;
	for name in names {
		let Some(sequence) = table.get(name) else {
			continue;
		};
		let dir_name = if name.is_empty() {
			"_default"
		} else {
			name
		};
		let dir = args.output.join(dir_name);
		fs::create_dir_all(&dir).with_context(|| format!("Failed to create {}", dir.display()))?;

		for (position, frame) in sequence.frames().iter().enumerate() {
			let path = dir.join(format!("{position:03}_f{:03}.png", frame.index()));
			frame.image().save(&path).with_context(|| format!("Failed to write {}", path.display()))?;
			written += 1;
		}
		info!("Exported {dir_name}: {sequence}");
	}

	info!("✓ Wrote {written} frame(s) to {}", args.output.display());
	Ok(())
}
