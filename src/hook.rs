//! Caller-supplied hook applied to the manifest right before it is inlined.

use crate::models::Manifest;

/// Strategy used to post-process the rewritten manifest.
///
/// The returned manifest is trusted as-is and replaces the input for the inlining stage.
/// Errors are surfaced to the caller unchanged as [`crate::PrecacheError::Hook`].
pub trait ManifestTransform {
  /// Transform the manifest.
  fn transform(&self, manifest: Manifest) -> anyhow::Result<Manifest>;
}

impl<F> ManifestTransform for F
where
  F: Fn(Manifest) -> anyhow::Result<Manifest>,
{
  fn transform(&self, manifest: Manifest) -> anyhow::Result<Manifest> {
    self(manifest)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::ManifestEntry;

  struct AppendOffline;

  impl ManifestTransform for AppendOffline {
    fn transform(&self, mut manifest: Manifest) -> anyhow::Result<Manifest> {
      manifest.push(ManifestEntry::new("/offline.html", Some("1")));
      Ok(manifest)
    }
  }

  #[test]
  fn closures_act_as_transforms() {
    let reverse = |mut manifest: Manifest| -> anyhow::Result<Manifest> {
      manifest.reverse();
      Ok(manifest)
    };
    let manifest = vec![ManifestEntry::new("a", None), ManifestEntry::new("b", None)];

    let result = reverse.transform(manifest).unwrap();
    assert_eq!(result[0].url, "b");
  }

  #[test]
  fn custom_types_act_as_transforms() {
    let result = AppendOffline.transform(Vec::new()).unwrap();
    assert_eq!(result, vec![ManifestEntry::new("/offline.html", Some("1"))]);
  }
}
