/// Emitted files that are build metadata rather than resources a client ever requests.
pub const EXCLUDED_FILES: &[&str] = &["react-loadable-manifest.json", "build-manifest.json"];

/// Determine whether a manifest URL must be dropped before precaching.
///
/// Only exact matches are excluded; a user file that merely shares the suffix (for example
/// `static/build-manifest.json`) is kept.
pub fn should_exclude_from_precache(url: &str) -> bool {
    EXCLUDED_FILES.contains(&url)
}
