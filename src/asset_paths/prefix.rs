/// Fixed path segment under which Next.js serves its generated bundle files.
pub const NEXT_URL_PREFIX: &str = "/_next/";

/// Produce the URL a manifest entry is served from.
///
/// Static files live at the application root, so only `url_prefix` is prepended. Everything
/// else was emitted by the bundler and additionally receives [`NEXT_URL_PREFIX`]. The parts are
/// concatenated verbatim; callers own the slashes in `url_prefix`.
pub fn make_precache_url(url_prefix: &str, url: &str, is_static: bool) -> String {
    if is_static {
        format!("{url_prefix}{url}")
    } else {
        format!("{url_prefix}{NEXT_URL_PREFIX}{url}")
    }
}

#[cfg(test)]
mod tests {
    use super::make_precache_url;

    #[test]
    fn prefixes_static_assets_with_url_prefix_only() {
        assert_eq!(make_precache_url("/app/", "static/logo.png", true), "/app/static/logo.png");
    }

    #[test]
    fn inserts_next_prefix_for_bundle_assets() {
        assert_eq!(make_precache_url("", "chunks/b.js", false), "/_next/chunks/b.js");
        assert_eq!(make_precache_url("/app", "chunks/b.js", false), "/app/_next/chunks/b.js");
    }
}
