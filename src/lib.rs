#[cfg(doctest)]
doc_comment::doctest!("../README.md");

pub mod constants;
pub use constants::DEFAULT_SITEMAP_CONFIG;
pub mod models;
pub use models::{
    ChangeFrequency, Error, SitemapBuilder, SitemapConfig, SitemapDocument, SitemapSummary,
    TickerListPreprocessor, UrlEntry,
};
pub mod types;
pub use types::{SitemapUrl, TickerSet, TickerSymbol};
mod utils;
pub use utils::{dedup_tickers, join_url, normalize_ticker};

/// Reads the configured asset list and writes its sitemap, stamped with
/// today's UTC date.
pub fn generate_sitemap(config: SitemapConfig) -> Result<SitemapSummary, Error> {
    SitemapBuilder::new(config).run()
}

/// Renders a sitemap straight from CSV text, without touching the filesystem.
///
/// Only `base_url`, `static_pages`, `route_prefix`, `changefreq` and
/// `priority` of `config` are used.
pub fn render_sitemap_from_csv_string(
    csv: &str,
    config: SitemapConfig,
    lastmod: chrono::NaiveDate,
) -> Result<String, Error> {
    config.validate()?;

    let tickers = TickerListPreprocessor::read_ticker_set_from_string(csv)?;
    let document = SitemapBuilder::with_lastmod(config, lastmod).build_document(&tickers);

    Ok(document.render_xml())
}
