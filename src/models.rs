//! Data structures flowing through the precache manifest pipeline.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A single resource the service worker should fetch and cache up front.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ManifestEntry {
  /// Relative URL as emitted by the bundler, or the rewritten URL after transformation.
  pub url: String,
  /// Opaque cache-busting token. Content-hashed files usually carry `null`.
  #[serde(default)]
  pub revision: Option<String>,
}

impl ManifestEntry {
  /// Build an entry from a URL and optional revision.
  pub fn new(url: impl Into<String>, revision: Option<&str>) -> Self {
    Self {
      url: url.into(),
      revision: revision.map(str::to_string),
    }
  }
}

/// Ordered list of precache entries. Order carries no meaning but is preserved for determinism.
pub type Manifest = Vec<ManifestEntry>;

/// Relative paths (`static/...`) of the files served from the public static directory.
pub type StaticAssetSet = BTreeSet<String>;
