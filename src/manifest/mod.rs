//! Loading, scanning and rewriting of the workbox precache manifest.

mod loading;
mod scanning;
mod transform;

pub use loading::{load_manifest, locate_manifest, parse_manifest_source};
pub use scanning::{STATIC_URL_ROOT, collect_static_assets};
pub use transform::{apply_transform_hook, build_next_manifest};
