//! Load configuration for sheet ingestion.
//!
//! This module provides options controlling how strictly sheet metadata and its
//! atlas image are validated while a tag table is assembled.

use crate::sheet::constants;

/// Configuration for loading sprite sheets.
///
/// # Presets
///
/// - `default()`: requires exporter version `1.3`, rejects frames outside the atlas
/// - `lenient()`: requires exporter version `1.3`, clips frames to the atlas instead
///
/// # Examples
///
/// ```
/// use asesheet_types::config::LoadConfig;
///
/// let config = LoadConfig::default();
/// assert!(config.check_atlas_bounds);
///
/// let config = LoadConfig::lenient();
/// assert!(!config.check_atlas_bounds);
///
/// let config = LoadConfig::new("1.3.7", true);
/// assert_eq!(config.version_prefix, "1.3.7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadConfig {
	/// Prefix the metadata's `meta.version` must start with
	pub version_prefix: String,
	/// Reject frame rectangles that extend past the atlas; clip them when `false`
	pub check_atlas_bounds: bool,
}

impl Default for LoadConfig {
	fn default() -> Self {
		Self {
			version_prefix: constants::SUPPORTED_VERSION.to_string(),
			check_atlas_bounds: true,
		}
	}
}

impl LoadConfig {
	/// Create a new load configuration.
	///
	/// # Arguments
	/// * `version_prefix` - Required prefix of the exporter version
	/// * `check_atlas_bounds` - Whether out-of-atlas frames are an error
	pub fn new(version_prefix: impl Into<String>, check_atlas_bounds: bool) -> Self {
		Self {
			version_prefix: version_prefix.into(),
			check_atlas_bounds,
		}
	}

	/// Create a lenient configuration that clips out-of-atlas frames.
	pub fn lenient() -> Self {
		Self {
			check_atlas_bounds: false,
			..Self::default()
		}
	}
}
