//! Filtering and URL rewriting applied to the workbox manifest.

use tracing::debug;

use crate::asset_paths::{make_precache_url, should_exclude_from_precache};
use crate::error::{PrecacheError, PrecacheResult};
use crate::hook::ManifestTransform;
use crate::models::{Manifest, ManifestEntry, StaticAssetSet};

/// Drop build metadata entries and rewrite every remaining URL for the Next.js server.
///
/// Revisions pass through untouched and the input order is preserved.
pub fn build_next_manifest(
  manifest: Manifest,
  static_assets: &StaticAssetSet,
  url_prefix: &str,
) -> Manifest {
  let original_len = manifest.len();
  let rewritten: Manifest = manifest
    .into_iter()
    .filter(|entry| !should_exclude_from_precache(&entry.url))
    .map(|entry| ManifestEntry {
      url: make_precache_url(url_prefix, &entry.url, static_assets.contains(&entry.url)),
      revision: entry.revision,
    })
    .collect();

  debug!(
    kept = rewritten.len(),
    dropped = original_len - rewritten.len(),
    "rewrote precache manifest"
  );
  rewritten
}

/// Run the optional caller hook over the rewritten manifest.
pub fn apply_transform_hook(
  manifest: Manifest,
  hook: Option<&dyn ManifestTransform>,
) -> PrecacheResult<Manifest> {
  match hook {
    Some(hook) => hook.transform(manifest).map_err(PrecacheError::Hook),
    None => Ok(manifest),
  }
}
