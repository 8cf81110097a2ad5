pub mod change_frequency;
pub use change_frequency::ChangeFrequency;

pub mod error;
pub use error::Error;

pub mod sitemap_builder;
pub use sitemap_builder::{SitemapBuilder, SitemapSummary};

pub mod sitemap_config;
pub use sitemap_config::SitemapConfig;

pub mod sitemap_document;
pub use sitemap_document::SitemapDocument;

pub mod ticker_list_preprocessor;
pub use ticker_list_preprocessor::TickerListPreprocessor;

pub mod url_entry;
pub use url_entry::UrlEntry;
