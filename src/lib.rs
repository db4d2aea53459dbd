#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod builder;
pub mod bundle;
pub mod config;
pub mod error;
pub mod hook;
pub mod manifest;
pub mod models;

pub use builder::{PrecacheBuilder, generate_next_manifest};
pub use config::PrecacheConfig;
pub use error::{PrecacheError, PrecacheResult};
pub use hook::ManifestTransform;
pub use models::{Manifest, ManifestEntry, StaticAssetSet};
