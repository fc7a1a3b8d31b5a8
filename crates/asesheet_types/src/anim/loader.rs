//! Loading sheets and animations through an [`AssetSource`].

use std::path::{Path, PathBuf};

use asesheet_vfs::{AssetSource, resolve_sibling};
use image::RgbaImage;
use log::debug;

use crate::{config::LoadConfig, error::SheetError, player::Animation, sheet::SpriteSheet};

use super::tags::TagTable;

/// Sheet metadata together with its decoded atlas.
#[derive(Debug, Clone)]
pub struct LoadedSheet {
	/// Parsed and version-checked metadata
	pub sheet: SpriteSheet,
	/// Decoded atlas image
	pub atlas: RgbaImage,
	/// Path the atlas was read from, relative to the asset source
	pub image_path: PathBuf,
}

impl LoadedSheet {
	/// Assembles the tag table of this sheet.
	///
	/// # Errors
	///
	/// See [`TagTable::from_sheet`].
	pub fn tag_table(&self, config: &LoadConfig) -> Result<TagTable, SheetError> {
		TagTable::from_sheet(&self.sheet, &self.atlas, config)
	}
}

/// Loads sheet metadata and decodes the atlas it refers to.
///
/// The atlas path in `meta.image` is resolved relative to the directory of
/// `json_path`.
///
/// # Errors
///
/// Returns an error if:
/// - The metadata file cannot be found or read
/// - The metadata is malformed or has an unsupported version
/// - The atlas cannot be found or decoded
///
/// # Examples
///
/// ```no_run
/// use asesheet_types::{anim::load_sprite_sheet, config::LoadConfig};
/// use asesheet_vfs::DirSource;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let source = DirSource::new("assets");
/// let loaded = load_sprite_sheet(&source, "sprites/hero.json", &LoadConfig::default())?;
/// println!("{} frames, atlas {:?}", loaded.sheet.frames.len(), loaded.atlas.dimensions());
/// # Ok(())
/// # }
/// ```
pub fn load_sprite_sheet<S: AssetSource + ?Sized>(
	source: &S,
	json_path: impl AsRef<Path>,
	config: &LoadConfig,
) -> Result<LoadedSheet, SheetError> {
	let json_path = json_path.as_ref();
	let data = source
		.read(json_path)
		.map_err(|err| SheetError::from_lookup(json_path.to_path_buf(), err))?;
	let sheet = SpriteSheet::from_slice_with_config(&data, config)?;

	let image_path = resolve_sibling(json_path, &sheet.meta.image);
	let bytes = source
		.read(&image_path)
		.map_err(|err| SheetError::from_lookup(image_path.clone(), err))?;
	let atlas = image::load_from_memory(&bytes)
		.map_err(|err| SheetError::AssetDecode {
			path: image_path.clone(),
			source: err,
		})?
		.into_rgba8();

	debug!(
		"Loaded {} ({} frames) with atlas {} ({}x{})",
		json_path.display(),
		sheet.frames.len(),
		image_path.display(),
		atlas.width(),
		atlas.height()
	);

	Ok(LoadedSheet {
		sheet,
		atlas,
		image_path,
	})
}

/// Loads a sheet and wraps its tag table in a ready-to-play [`Animation`].
///
/// # Errors
///
/// Returns any error of [`load_sprite_sheet`] or [`TagTable::from_sheet`].
///
/// # Examples
///
/// ```no_run
/// use asesheet_types::{anim::load_animation, config::LoadConfig};
/// use asesheet_vfs::DirSource;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut hero = load_animation(&DirSource::new("assets"), "hero.json", &LoadConfig::default())?;
/// hero.set_tag("walk");
/// hero.advance(16.0)?;
/// # Ok(())
/// # }
/// ```
pub fn load_animation<S: AssetSource + ?Sized>(
	source: &S,
	json_path: impl AsRef<Path>,
	config: &LoadConfig,
) -> Result<Animation, SheetError> {
	let loaded = load_sprite_sheet(source, json_path, config)?;
	let table = loaded.tag_table(config)?;
	Ok(Animation::new(table))
}
