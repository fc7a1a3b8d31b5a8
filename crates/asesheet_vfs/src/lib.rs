//! Asset lookup for the `asesheet-rs` project.
//!
//! Sprite-sheet metadata refers to its atlas image by a path relative to the
//! metadata file itself. This crate owns that resolution and the byte-level
//! access to both files, so the loaders in `asesheet_types` never touch
//! `std::fs` directly.
//!
//! # Sources
//!
//! - [`DirSource`]: reads files below a root directory on disk
//! - [`MemorySource`]: serves files from an in-memory map (tests, embedded assets)
//!
//! # Examples
//!
//! ```
//! use std::path::Path;
//!
//! use asesheet_vfs::{AssetSource, MemorySource, resolve_sibling};
//!
//! let mut source = MemorySource::new();
//! source.insert("sprites/hero.json", b"{}".to_vec());
//!
//! let image = resolve_sibling(Path::new("sprites/hero.json"), "hero.png");
//! assert_eq!(image, Path::new("sprites/hero.png"));
//! assert!(source.exists(Path::new("sprites/./hero.json")));
//! ```

use std::{
	collections::HashMap,
	io,
	path::{Component, Path, PathBuf},
};

/// Read-only access to the files a sprite sheet is made of.
pub trait AssetSource {
	/// Reads the whole file at `path`.
	///
	/// # Errors
	///
	/// Returns [`io::ErrorKind::NotFound`] when the file does not exist, or any
	/// other I/O error raised while reading it.
	fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

	/// Returns `true` when `path` names a readable file.
	fn exists(&self, path: &Path) -> bool {
		self.read(path).is_ok()
	}
}

impl<T: AssetSource + ?Sized> AssetSource for &T {
	fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
		(**self).read(path)
	}

	fn exists(&self, path: &Path) -> bool {
		(**self).exists(path)
	}
}

/// Files below a root directory on the local filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirSource {
	root: PathBuf,
}

impl DirSource {
	/// Creates a source rooted at `root`. Relative asset paths are joined onto it.
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self {
			root: root.into(),
		}
	}

	/// Returns the root directory.
	pub fn root(&self) -> &Path {
		&self.root
	}

	fn full_path(&self, path: &Path) -> PathBuf {
		self.root.join(normalize(path))
	}
}

impl AssetSource for DirSource {
	fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
		std::fs::read(self.full_path(path))
	}

	fn exists(&self, path: &Path) -> bool {
		self.full_path(path).is_file()
	}
}

/// Files held in memory, keyed by their normalized relative path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySource {
	files: HashMap<PathBuf, Vec<u8>>,
}

impl MemorySource {
	/// Creates an empty source.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds or replaces the file at `path`.
	pub fn insert(&mut self, path: impl AsRef<Path>, data: Vec<u8>) {
		self.files.insert(normalize(path.as_ref()), data);
	}

	/// Builder-style variant of [`insert`](Self::insert).
	pub fn with_file(mut self, path: impl AsRef<Path>, data: Vec<u8>) -> Self {
		self.insert(path, data);
		self
	}

	/// Number of files held.
	pub fn len(&self) -> usize {
		self.files.len()
	}

	/// Returns `true` when no files are held.
	pub fn is_empty(&self) -> bool {
		self.files.is_empty()
	}
}

impl AssetSource for MemorySource {
	fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
		self.files.get(&normalize(path)).cloned().ok_or_else(|| {
			io::Error::new(io::ErrorKind::NotFound, format!("{} not found", path.display()))
		})
	}

	fn exists(&self, path: &Path) -> bool {
		self.files.contains_key(&normalize(path))
	}
}

/// Resolves `relative` against the directory containing `metadata_path`.
///
/// ```
/// use std::path::Path;
///
/// use asesheet_vfs::resolve_sibling;
///
/// assert_eq!(resolve_sibling(Path::new("hero.json"), "hero.png"), Path::new("hero.png"));
/// assert_eq!(
/// 	resolve_sibling(Path::new("a/b/hero.json"), "../atlas.png"),
/// 	Path::new("a/atlas.png")
/// );
/// ```
pub fn resolve_sibling(metadata_path: &Path, relative: &str) -> PathBuf {
	let dir = metadata_path.parent().unwrap_or_else(|| Path::new(""));
	normalize(&dir.join(relative))
}

/// Lexically normalizes a path: drops `.` components and folds `..` into its parent.
///
/// Leading `..` components that cannot be folded are kept.
pub fn normalize(path: &Path) -> PathBuf {
	let mut out = PathBuf::new();
	for component in path.components() {
		match component {
			Component::CurDir => {}
			Component::ParentDir => {
				let can_pop = matches!(
					out.components().next_back(),
					Some(Component::Normal(_))
				);
				if can_pop {
					out.pop();
				} else {
					out.push("..");
				}
			}
			other => out.push(other.as_os_str()),
		}
	}
	out
}
