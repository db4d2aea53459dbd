//! Configuration describing where the build output lives and how URLs are rewritten.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use glob::Pattern;
use serde::Deserialize;

use crate::error::{PrecacheError, PrecacheResult};

/// Name of the configuration file looked up by [`PrecacheConfig::discover`].
pub const DEFAULT_CONFIG_FILE: &str = "precache.config.json";

/// File name pattern of the manifest generated by workbox.
pub const MANIFEST_FILE_PATTERN: &str = "precache-manifest.*.js";

/// Options for a single pipeline run. Read-only once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrecacheConfig {
    /// Root directory of the build output.
    pub output_path: PathBuf,
    /// Directory under `output_path` containing the generated manifest.
    pub imports_directory: PathBuf,
    /// Path of the service worker to patch, relative to `output_path`.
    pub sw_dest: PathBuf,
    /// String prepended to every rewritten URL.
    #[serde(default)]
    pub url_prefix: String,
    /// Directory whose files are served from the application root as `static/...`.
    #[serde(default = "default_static_assets_root")]
    pub static_assets_root: PathBuf,
}

fn default_static_assets_root() -> PathBuf {
    PathBuf::from("static")
}

impl PrecacheConfig {
    /// Create a configuration with an empty URL prefix and the default static root.
    pub fn new(
        output_path: impl Into<PathBuf>,
        imports_directory: impl Into<PathBuf>,
        sw_dest: impl Into<PathBuf>,
    ) -> Self {
        Self {
            output_path: output_path.into(),
            imports_directory: imports_directory.into(),
            sw_dest: sw_dest.into(),
            url_prefix: String::new(),
            static_assets_root: default_static_assets_root(),
        }
    }

    /// Replace the URL prefix.
    pub fn with_url_prefix(mut self, url_prefix: impl Into<String>) -> Self {
        self.url_prefix = url_prefix.into();
        self
    }

    /// Replace the directory enumerated for static assets.
    pub fn with_static_assets_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.static_assets_root = root.into();
        self
    }

    /// Look for [`DEFAULT_CONFIG_FILE`] inside `dir`.
    ///
    /// A missing file yields `Ok(None)`; a file that exists but cannot be read or parsed is an
    /// error, since silently falling back would patch the wrong output directory.
    pub fn discover(dir: &Path) -> PrecacheResult<Option<Self>> {
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        match Self::from_path(&candidate) {
            Ok(config) => Ok(Some(config)),
            Err(PrecacheError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> PrecacheResult<Self> {
        let content = fs::read_to_string(path).map_err(|err| PrecacheError::io(path, err))?;
        serde_json::from_str(&content).map_err(|source| PrecacheError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Glob pattern locating the generated manifest.
    ///
    /// The directory part is escaped so that build directories containing `[` or `*` are
    /// matched literally.
    pub fn manifest_pattern(&self) -> String {
        let dir = self.output_path.join(&self.imports_directory);
        let escaped = Pattern::escape(&dir.to_string_lossy());
        format!("{}/{}", escaped.trim_end_matches('/'), MANIFEST_FILE_PATTERN)
    }

    /// Absolute or working-directory relative path of the service worker file.
    pub fn sw_path(&self) -> PathBuf {
        self.output_path.join(&self.sw_dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn builds_manifest_pattern_and_sw_path() {
        let config = PrecacheConfig::new(".next", "static", "service-worker.js");
        assert_eq!(config.manifest_pattern(), ".next/static/precache-manifest.*.js");
        assert_eq!(config.sw_path(), PathBuf::from(".next/service-worker.js"));
    }

    #[test]
    fn escapes_glob_characters_in_output_path() {
        let config = PrecacheConfig::new("build[1]", "", "sw.js");
        assert_eq!(config.manifest_pattern(), "build[[]1[]]/precache-manifest.*.js");
    }

    #[test]
    fn parses_camel_case_config_with_defaults() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            r#"{"outputPath": ".next", "importsDirectory": "static", "swDest": "sw.js"}"#,
        )
        .unwrap();

        let config = PrecacheConfig::discover(dir.path()).unwrap().unwrap();
        assert_eq!(config, PrecacheConfig::new(".next", "static", "sw.js"));
        assert_eq!(config.url_prefix, "");
        assert_eq!(config.static_assets_root, PathBuf::from("static"));
    }

    #[test]
    fn discover_returns_none_without_config_file() {
        let dir = tempdir().unwrap();
        assert!(PrecacheConfig::discover(dir.path()).unwrap().is_none());
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), r#"{"outputPath": 3}"#).unwrap();

        let err = PrecacheConfig::discover(dir.path()).unwrap_err();
        assert!(matches!(err, PrecacheError::Config { .. }));
    }
}
