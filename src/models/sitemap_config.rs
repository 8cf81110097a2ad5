use crate::models::ChangeFrequency;
use crate::Error;

/// Options recognized by the sitemap builder.
///
/// The binary always runs with `DEFAULT_SITEMAP_CONFIG`; library callers can
/// construct their own, e.g. to point at another domain or fixture file.
#[derive(Debug, Copy, Clone)]
pub struct SitemapConfig<'a> {
    /// Root domain prepended to every path. A trailing `/` is ignored.
    pub base_url: &'a str,
    /// Input CSV. A `.gz` suffix means gzip-compressed.
    pub csv_path: &'a str,
    /// Output XML. A `.gz` suffix means the document is gzip-compressed.
    pub output_file: &'a str,
    pub static_pages: &'a [&'a str],
    /// Inserted between base URL and page path (`"/#"` for hash routing).
    pub route_prefix: &'a str,
    pub changefreq: ChangeFrequency,
    /// Relative importance, `0.0..=1.0`.
    pub priority: f32,
}

impl SitemapConfig<'_> {
    /// Rejects options the sitemap protocol cannot express.
    pub fn validate(&self) -> Result<(), Error> {
        if !(0.0..=1.0).contains(&self.priority) {
            return Err(Error::ConfigError(format!(
                "priority must be between 0.0 and 1.0, got {}",
                self.priority
            )));
        }

        Ok(())
    }
}
