//! Error type shared by every stage of the pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the crate.
pub type PrecacheResult<T> = Result<T, PrecacheError>;

/// Failures raised while loading, transforming or inlining a precache manifest.
#[derive(Debug, Error)]
pub enum PrecacheError {
  /// No file matched the manifest glob pattern.
  #[error("no precache manifest matches {pattern}")]
  NotFound {
    /// Glob pattern that was resolved.
    pattern: String,
  },

  /// More than one file matched the manifest glob pattern.
  #[error("expected a single precache manifest for {pattern}, found {}", .matches.len())]
  AmbiguousManifest {
    /// Glob pattern that was resolved.
    pattern: String,
    /// Every matching path, in glob order.
    matches: Vec<PathBuf>,
  },

  /// The manifest glob pattern could not be compiled.
  #[error("invalid glob pattern {pattern}")]
  InvalidPattern {
    /// Offending pattern.
    pattern: String,
    /// Source pattern error.
    #[source]
    source: glob::PatternError,
  },

  /// The manifest file does not assign an array to `__precacheManifest`.
  #[error("failed to parse {}: {message}", .path.display())]
  Parse {
    /// File being parsed.
    path: PathBuf,
    /// Description of what was missing.
    message: String,
  },

  /// The manifest payload is not valid JSON data, or could not be serialized.
  #[error("invalid manifest data in {}", .path.display())]
  Json {
    /// File being read or written.
    path: PathBuf,
    /// Source JSON error.
    #[source]
    source: serde_json::Error,
  },

  /// A filesystem operation failed.
  #[error("i/o error on {}", .path.display())]
  Io {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    #[source]
    source: std::io::Error,
  },

  /// The JSON configuration file is malformed.
  #[error("failed to parse config {}", .path.display())]
  Config {
    /// Configuration file path.
    path: PathBuf,
    /// Source parse error.
    #[source]
    source: serde_json::Error,
  },

  /// The caller-supplied transform hook failed.
  #[error(transparent)]
  Hook(anyhow::Error),
}

impl PrecacheError {
  pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
    Self::Io {
      path: path.into(),
      source,
    }
  }
}
