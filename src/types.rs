// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a ticker symbol (e.g., `PETR4`) as an owned `String`.
pub type TickerSymbol = String;

/// Represents a borrowed view of a ticker symbol.
pub type TickerSymbolRef = str;

/// An absolute URL as it appears in a `<loc>` element, before XML escaping.
pub type SitemapUrl = String;

/// Distinct, cleaned ticker symbols in first-seen order.
///
/// Never contains duplicates, empty strings, or placeholder values such as
/// `nan` and `N/A`.
pub type TickerSet = Vec<TickerSymbol>;
