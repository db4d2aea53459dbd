//! Pipeline orchestrator: load the workbox manifest, rewrite it and inline it into the
//! service worker.

use tracing::debug;

use crate::bundle::inline_manifest;
use crate::config::PrecacheConfig;
use crate::error::PrecacheResult;
use crate::hook::ManifestTransform;
use crate::manifest::{
  apply_transform_hook, build_next_manifest, collect_static_assets, load_manifest,
};
use crate::models::Manifest;

/// High-level helper running the whole pipeline for one build output.
///
/// Each stage runs to completion before the next starts, and the service worker is only
/// written once every earlier stage succeeded. Two runs against the same output directory must
/// not overlap; the last write wins.
pub struct PrecacheBuilder<'a> {
  config: &'a PrecacheConfig,
  transform: Option<&'a dyn ManifestTransform>,
}

impl<'a> PrecacheBuilder<'a> {
  /// Create a builder for the provided configuration.
  pub fn new(config: &'a PrecacheConfig) -> Self {
    Self {
      config,
      transform: None,
    }
  }

  /// Register a hook applied to the rewritten manifest before it is inlined.
  pub fn with_transform(mut self, transform: &'a dyn ManifestTransform) -> Self {
    self.transform = Some(transform);
    self
  }

  /// Compute the final manifest without touching the service worker.
  pub fn prepare(&self) -> PrecacheResult<Manifest> {
    let (_, original) = load_manifest(&self.config.manifest_pattern())?;

    let static_assets = collect_static_assets(&self.config.static_assets_root)?;
    debug!(
      root = %self.config.static_assets_root.display(),
      count = static_assets.len(),
      "collected static assets"
    );

    let rewritten = build_next_manifest(original, &static_assets, &self.config.url_prefix);
    apply_transform_hook(rewritten, self.transform)
  }

  /// Run the pipeline and rewrite the service worker, returning the inlined manifest.
  pub fn build(&self) -> PrecacheResult<Manifest> {
    let manifest = self.prepare()?;
    inline_manifest(&manifest, &self.config.sw_path())?;
    Ok(manifest)
  }
}

/// Convenience wrapper around [`PrecacheBuilder`] taking the hook as an optional argument.
pub fn generate_next_manifest(
  config: &PrecacheConfig,
  transform: Option<&dyn ManifestTransform>,
) -> PrecacheResult<Manifest> {
  let builder = PrecacheBuilder::new(config);
  match transform {
    Some(transform) => builder.with_transform(transform).build(),
    None => builder.build(),
  }
}
