//! Forces dynamic linking of `asesheet` when the `dynamic_linking` feature is enabled.
//!
//! Only meant to shorten incremental builds during development.

#[allow(unused_imports)]
pub use asesheet_internal::*;
