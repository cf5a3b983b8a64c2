//! Scenario content and loaders.
//!
//! This crate houses the built-in starting layouts and, behind the default
//! `loaders` feature, readers for data files:
//! - Scenarios (layout plus rule overrides) via RON
//! - Game configuration defaults via TOML
//!
//! All loaders deserialize pursuit-core types directly with serde.

pub mod scenario;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use scenario::Scenario;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, ScenarioLoader};
