//! Inline the precache manifest into the generated service worker.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;
use tracing::info;

use crate::error::{PrecacheError, PrecacheResult};
use crate::models::Manifest;

const INLINED_ASSIGNMENT: &str = "self.__precacheManifest = ";

/// Reference to the old manifest script, including a separating comma so removing it does not
/// leave a dangling one behind.
fn manifest_import() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| {
    Regex::new(r#"(,\s*(?:\r\n|\r|\n)\s*)?"precache-manifest\.[^.]*\.js"(,\s*)?"#)
      .expect("invalid manifest import regex")
  })
}

/// Remove a manifest block inlined by a previous run, if the source starts with one.
fn strip_inlined_manifest(source: &str) -> &str {
  let Some(rest) = source.strip_prefix(INLINED_ASSIGNMENT) else {
    return source;
  };

  let mut stream = serde_json::Deserializer::from_str(rest).into_iter::<Value>();
  if !matches!(stream.next(), Some(Ok(Value::Array(_)))) {
    return source;
  }

  match rest[stream.byte_offset()..].strip_prefix(';') {
    Some(tail) => tail.trim_start_matches(['\r', '\n']),
    None => source,
  }
}

/// Render the patched service worker for `source`.
///
/// The manifest is pretty-printed with two-space indentation and prepended, followed by a
/// blank line. The first reference to the old manifest script is removed from the source.
pub fn render_inlined_service_worker(
  manifest: &Manifest,
  source: &str,
) -> Result<String, serde_json::Error> {
  let manifest_json = serde_json::to_string_pretty(manifest)?;
  let body = manifest_import().replace(strip_inlined_manifest(source), "");
  Ok(format!("{INLINED_ASSIGNMENT}{manifest_json};\n\n{body}"))
}

/// Rewrite the service worker at `sw_path` in place with `manifest` inlined.
pub fn inline_manifest(manifest: &Manifest, sw_path: &Path) -> PrecacheResult<()> {
  let original =
    fs::read_to_string(sw_path).map_err(|err| PrecacheError::io(sw_path, err))?;

  let patched =
    render_inlined_service_worker(manifest, &original).map_err(|source| PrecacheError::Json {
      path: sw_path.to_path_buf(),
      source,
    })?;

  fs::write(sw_path, patched).map_err(|err| PrecacheError::io(sw_path, err))?;
  info!(path = %sw_path.display(), entries = manifest.len(), "inlined precache manifest");
  Ok(())
}
