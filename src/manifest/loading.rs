//! Locate and parse the workbox-generated precache manifest.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use glob::glob;
use regex::Regex;
use tracing::debug;

use crate::error::{PrecacheError, PrecacheResult};
use crate::models::Manifest;

/// Matches the assignment up to and including the opening `[` of the array literal.
///
/// Accepts both `self.__precacheManifest = [...]` and the workbox form
/// `self.__precacheManifest = (self.__precacheManifest || []).concat([...])`.
fn manifest_assignment() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| {
    Regex::new(
      r"(?:self\.)?__precacheManifest\s*=\s*(?:\(\s*self\.__precacheManifest\s*\|\|\s*\[\s*\]\s*\)\s*\.concat\(\s*)?\[",
    )
    .expect("invalid manifest assignment regex")
  })
}

/// Resolve the manifest glob pattern to exactly one file.
pub fn locate_manifest(pattern: &str) -> PrecacheResult<PathBuf> {
  let paths = glob(pattern).map_err(|source| PrecacheError::InvalidPattern {
    pattern: pattern.to_string(),
    source,
  })?;

  let mut matches = Vec::new();
  for entry in paths {
    let path = entry.map_err(|err| {
      let path = err.path().to_path_buf();
      PrecacheError::io(path, err.into_error())
    })?;
    matches.push(path);
  }

  match matches.len() {
    0 => Err(PrecacheError::NotFound {
      pattern: pattern.to_string(),
    }),
    1 => Ok(matches.remove(0)),
    _ => Err(PrecacheError::AmbiguousManifest {
      pattern: pattern.to_string(),
      matches,
    }),
  }
}

/// Extract the manifest array from the text of a generated manifest script.
///
/// The script is never evaluated: the array literal following the `__precacheManifest`
/// assignment is decoded as JSON and anything after it is ignored.
pub fn parse_manifest_source(source: &str, path: &Path) -> PrecacheResult<Manifest> {
  let assignment = manifest_assignment()
    .find(source)
    .ok_or_else(|| PrecacheError::Parse {
      path: path.to_path_buf(),
      message: "no array assigned to __precacheManifest".into(),
    })?;

  // The match ends right after `[`; decoding starts at the bracket itself.
  let literal = &source[assignment.end() - 1..];
  let mut stream = serde_json::Deserializer::from_str(literal).into_iter::<Manifest>();
  match stream.next() {
    Some(Ok(manifest)) => Ok(manifest),
    Some(Err(source)) => Err(PrecacheError::Json {
      path: path.to_path_buf(),
      source,
    }),
    None => Err(PrecacheError::Parse {
      path: path.to_path_buf(),
      message: "empty __precacheManifest assignment".into(),
    }),
  }
}

/// Locate the manifest matching `pattern` and decode its entries.
pub fn load_manifest(pattern: &str) -> PrecacheResult<(PathBuf, Manifest)> {
  let path = locate_manifest(pattern)?;
  debug!(path = %path.display(), "reading precache manifest");

  let source = fs::read_to_string(&path).map_err(|err| PrecacheError::io(&path, err))?;
  let manifest = parse_manifest_source(&source, &path)?;
  debug!(entries = manifest.len(), "parsed precache manifest");
  Ok((path, manifest))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::ManifestEntry;
  use tempfile::tempdir;

  const WORKBOX_MANIFEST: &str = r#"self.__precacheManifest = (self.__precacheManifest || []).concat([
  {
    "revision": "r1",
    "url": "static/css/a.css"
  },
  {
    "url": "chunks/b.js"
  }
]);
"#;

  #[test]
  fn parses_workbox_concat_form() {
    let manifest = parse_manifest_source(WORKBOX_MANIFEST, Path::new("m.js")).unwrap();
    assert_eq!(manifest, vec![
      ManifestEntry::new("static/css/a.css", Some("r1")),
      ManifestEntry::new("chunks/b.js", None),
    ]);
  }

  #[test]
  fn parses_plain_assignment() {
    let source = r#"self.__precacheManifest = [{"url":"x","revision":null}];"#;
    let manifest = parse_manifest_source(source, Path::new("m.js")).unwrap();
    assert_eq!(manifest, vec![ManifestEntry::new("x", None)]);
  }

  #[test]
  fn missing_assignment_is_a_parse_error() {
    let err = parse_manifest_source("self.somethingElse = [];", Path::new("m.js")).unwrap_err();
    assert!(matches!(err, PrecacheError::Parse { .. }));
  }

  #[test]
  fn non_json_payload_is_a_json_error() {
    let source = "self.__precacheManifest = [{url: 'x'}];";
    let err = parse_manifest_source(source, Path::new("m.js")).unwrap_err();
    assert!(matches!(err, PrecacheError::Json { .. }));
  }

  #[test]
  fn load_reads_the_single_match() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("precache-manifest.abc.js"), WORKBOX_MANIFEST).unwrap();
    fs::write(dir.path().join("other.js"), "ignored").unwrap();

    let pattern = format!("{}/precache-manifest.*.js", dir.path().display());
    let (path, manifest) = load_manifest(&pattern).unwrap();
    assert_eq!(path, dir.path().join("precache-manifest.abc.js"));
    assert_eq!(manifest.len(), 2);
  }

  #[test]
  fn reports_missing_manifest() {
    let dir = tempdir().unwrap();
    let pattern = format!("{}/precache-manifest.*.js", dir.path().display());
    let err = load_manifest(&pattern).unwrap_err();
    assert!(matches!(err, PrecacheError::NotFound { .. }));
  }

  #[test]
  fn rejects_multiple_manifests() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("precache-manifest.a.js"), WORKBOX_MANIFEST).unwrap();
    fs::write(dir.path().join("precache-manifest.b.js"), WORKBOX_MANIFEST).unwrap();

    let pattern = format!("{}/precache-manifest.*.js", dir.path().display());
    match locate_manifest(&pattern).unwrap_err() {
      PrecacheError::AmbiguousManifest { matches, .. } => assert_eq!(matches.len(), 2),
      other => panic!("unexpected error: {other}"),
    }
  }
}
