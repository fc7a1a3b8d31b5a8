//! Prelude module for `asesheet_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use asesheet_internal::prelude::*;
//!
//! // Sheets can be loaded from any asset source
//! let json = br#"{"frames": [], "meta": {"version": "1.3", "image": "hero.png"}}"#;
//! let source = MemorySource::new().with_file("sprites/hero.json", json.to_vec());
//!
//! // The atlas is looked up next to the metadata file
//! let err = load_sprite_sheet(&source, "sprites/hero.json", &LoadConfig::default()).unwrap_err();
//! assert!(matches!(err, SheetError::AssetNotFound { .. }));
//! ```

// Re-export everything from asesheet_types::prelude
#[doc(inline)]
pub use asesheet_types::prelude::*;

// Asset sources
#[doc(inline)]
pub use asesheet_vfs::{AssetSource, DirSource, MemorySource};

// Re-export the member crates for advanced usage
#[doc(inline)]
pub use asesheet_types;
#[doc(inline)]
pub use asesheet_vfs;
