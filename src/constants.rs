use crate::models::{ChangeFrequency, SitemapConfig};

/// Root domain prepended to every page path.
pub const BASE_URL: &str = "https://meucreditoprivado.netlify.app";

/// Location of the asset master list, relative to the working directory.
pub const CSV_PATH: &str = "public/data/assets_master.csv";

/// Location of the generated sitemap, relative to the working directory.
pub const OUTPUT_FILE: &str = "public/sitemap.xml";

/// Pages which are always listed, ahead of the per-asset pages.
pub const STATIC_PAGES: &[&str] = &["/", "/charts", "/primary"];

/// Path under which every asset page lives.
pub const ASSET_PAGE_PATH: &str = "/asset";

/// Name of the CSV column holding the ticker symbol.
pub const TICKER_COLUMN: &str = "ticker";

/// Raw cell values read as a missing value, matched exactly against the
/// untrimmed cell. Same set as the default NA markers of pandas' `read_csv`.
pub const MISSING_VALUE_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Cell values which stand in for a missing ticker. Compared case-sensitively,
/// after trimming.
pub const PLACEHOLDER_TICKERS: &[&str] = &["", "nan", "N/A"];

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// `chrono` format string for `<lastmod>`.
pub const LASTMOD_DATE_FORMAT: &str = "%Y-%m-%d";

/// Maximum number of URLs a single sitemap file may list (sitemaps.org 0.9).
pub const MAX_URLS_PER_SITEMAP: usize = 50_000;

/// Extension which switches input decompression / output compression on.
pub const GZIP_EXTENSION: &str = "gz";

pub const DEFAULT_SITEMAP_CONFIG: SitemapConfig<'static> = SitemapConfig {
    base_url: BASE_URL,
    csv_path: CSV_PATH,
    output_file: OUTPUT_FILE,
    static_pages: STATIC_PAGES,
    route_prefix: "",
    changefreq: ChangeFrequency::Daily,
    priority: 0.8,
};
