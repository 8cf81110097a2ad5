use crate::types::SitemapUrl;

/// Joins a base URL, an optional route prefix and a page path.
///
/// Trailing slashes on `base_url` are dropped so that `https://example.com/`
/// and `https://example.com` yield the same URLs. The path is appended as-is;
/// nothing is percent-encoded.
///
/// ### Example:
/// ```rust
/// use asset_sitemap::join_url;
///
/// assert_eq!(join_url("https://example.com/", "", "/charts"), "https://example.com/charts");
/// assert_eq!(join_url("https://example.com", "/#", "/asset/PETR4"), "https://example.com/#/asset/PETR4");
/// ```
pub fn join_url(base_url: &str, route_prefix: &str, path: &str) -> SitemapUrl {
    let base = base_url.trim_end_matches('/');

    let mut url = String::with_capacity(base.len() + route_prefix.len() + path.len());
    url.push_str(base);
    url.push_str(route_prefix);
    url.push_str(path);

    url
}
