use crate::constants::{ASSET_PAGE_PATH, MAX_URLS_PER_SITEMAP};
use crate::models::{SitemapConfig, SitemapDocument, TickerListPreprocessor, UrlEntry};
use crate::types::{TickerSet, TickerSymbolRef};
use crate::utils::{join_url, write_output_file};
use crate::Error;
use chrono::{NaiveDate, Utc};
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapSummary {
    pub url_count: usize,
    pub ticker_count: usize,
    pub output_file: PathBuf,
    pub lastmod: NaiveDate,
}

/// Builds the sitemap for one run.
///
/// The `lastmod` date is stamped once, when the builder is created, and shared
/// by every entry.
pub struct SitemapBuilder<'a> {
    config: SitemapConfig<'a>,
    lastmod: NaiveDate,
}

impl<'a> SitemapBuilder<'a> {
    /// Creates a builder stamped with the current UTC date.
    pub fn new(config: SitemapConfig<'a>) -> Self {
        Self::with_lastmod(config, Utc::now().date_naive())
    }

    /// Creates a builder with an explicit `lastmod` date.
    pub fn with_lastmod(config: SitemapConfig<'a>, lastmod: NaiveDate) -> Self {
        Self { config, lastmod }
    }

    /// Static pages first, then one asset page per ticker, in ticker order.
    pub fn build_url_entries(&self, tickers: &TickerSet) -> Vec<UrlEntry> {
        let static_entries = self
            .config
            .static_pages
            .iter()
            .map(|page| self.entry_for_path(page));

        let asset_entries = tickers
            .iter()
            .map(|ticker| self.entry_for_path(&Self::asset_page_path(ticker)));

        static_entries.chain(asset_entries).collect()
    }

    pub fn build_document(&self, tickers: &TickerSet) -> SitemapDocument {
        SitemapDocument::new(self.build_url_entries(tickers))
    }

    /// Renders the document and writes it to `output_file`, overwriting it.
    ///
    /// Returns the number of URLs written.
    pub fn write_document(
        &self,
        document: &SitemapDocument,
        output_file: &Path,
    ) -> Result<usize, Error> {
        let url_count = document.url_count();

        if url_count > MAX_URLS_PER_SITEMAP {
            warn!(
                "Sitemap lists {} URLs, above the protocol limit of {} per file",
                url_count, MAX_URLS_PER_SITEMAP
            );
        }

        info!("Writing {} URLs to {}...", url_count, output_file.display());
        write_output_file(output_file, &document.render_xml())?;

        Ok(url_count)
    }

    /// Loads the configured CSV, builds the document and writes it to the
    /// configured output file.
    pub fn run(&self) -> Result<SitemapSummary, Error> {
        self.config.validate()?;

        let tickers = TickerListPreprocessor::read_ticker_set_from_path(self.config.csv_path)?;

        self.run_with_tickers(&tickers)
    }

    /// Same as `run`, for a ticker set obtained elsewhere.
    pub fn run_with_tickers(&self, tickers: &TickerSet) -> Result<SitemapSummary, Error> {
        self.config.validate()?;

        info!("Building sitemap for {} tickers...", tickers.len());

        let document = self.build_document(tickers);
        let output_file = PathBuf::from(self.config.output_file);
        let url_count = self.write_document(&document, &output_file)?;

        Ok(SitemapSummary {
            url_count,
            ticker_count: tickers.len(),
            output_file,
            lastmod: self.lastmod,
        })
    }

    fn entry_for_path(&self, path: &str) -> UrlEntry {
        UrlEntry::new(
            join_url(self.config.base_url, self.config.route_prefix, path),
            self.lastmod,
            self.config.changefreq,
            self.config.priority,
        )
    }

    fn asset_page_path(ticker: &TickerSymbolRef) -> String {
        format!("{}/{}", ASSET_PAGE_PATH, ticker)
    }
}
