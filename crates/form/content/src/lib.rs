//! Data-driven content for the form rules.
//!
//! Loads the inputs the rules consume from RON/TOML data files:
//! - Rule configuration (TOML)
//! - Species baselines (RON)
//! - Equipment loadouts (RON)
//!
//! Content feeds the oracles and collaborators of `form-core`; the form
//! catalogue itself is compiled into the core and never loaded from disk.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, LoadoutLoader, SpeciesLoader};
