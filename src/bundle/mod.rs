//! Helpers for patching the generated service worker.

pub mod sw_patch;

pub use sw_patch::{inline_manifest, render_inlined_service_worker};
