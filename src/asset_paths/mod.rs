//! Rules deciding which manifest URLs are kept and how they are rewritten.
//!
//! The exclusion list and the URL prefix rule are split into their own submodules so each can
//! be tested without building a whole manifest.

mod filters;
mod prefix;

pub use filters::{EXCLUDED_FILES, should_exclude_from_precache};
pub use prefix::{NEXT_URL_PREFIX, make_precache_url};
