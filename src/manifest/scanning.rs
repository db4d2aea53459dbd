//! Directory scanning for files served from the public static directory.

use std::fs;
use std::path::Path;

use crate::error::{PrecacheError, PrecacheResult};
use crate::models::StaticAssetSet;

/// Prefix under which static files appear in the generated manifest.
pub const STATIC_URL_ROOT: &str = "static";

/// Walk `root` and return every file as `static/<relative path>`.
///
/// Nesting depth is unbounded: `root/a/b/c.js` becomes `static/a/b/c.js`. Segments are
/// always joined with `/` so the result compares equal to manifest URLs on every platform.
pub fn collect_static_assets(root: &Path) -> PrecacheResult<StaticAssetSet> {
    let mut assets = StaticAssetSet::new();
    collect_assets_recursively(root, STATIC_URL_ROOT, &mut assets)?;
    Ok(assets)
}

fn collect_assets_recursively(
    dir: &Path,
    url_prefix: &str,
    assets: &mut StaticAssetSet,
) -> PrecacheResult<()> {
    let entries = fs::read_dir(dir).map_err(|err| PrecacheError::io(dir, err))?;
    for entry in entries {
        let entry = entry.map_err(|err| PrecacheError::io(dir, err))?;
        let path = entry.path();
        let file_name = entry.file_name();
        let next_prefix = format!("{}/{}", url_prefix, file_name.to_string_lossy());

        // Follows symlinks, matching how the files will be served.
        let metadata = fs::metadata(&path).map_err(|err| PrecacheError::io(&path, err))?;
        if metadata.is_dir() {
            collect_assets_recursively(&path, &next_prefix, assets)?;
        } else {
            assets.insert(next_prefix);
        }
    }
    Ok(())
}
