use crate::constants::{MISSING_VALUE_MARKERS, PLACEHOLDER_TICKERS};
use crate::types::TickerSymbol;

/// Cleans a raw `ticker` cell.
///
/// Returns `None` for a missing cell and for a cell which is exactly one of the
/// `MISSING_VALUE_MARKERS` (`NA`, `NULL`, `n/a`, ...). Otherwise surrounding
/// whitespace is trimmed, and the result is dropped if it matches one of the
/// `PLACEHOLDER_TICKERS` (case-sensitive).
///
/// ### Example:
/// ```rust
/// use asset_sitemap::normalize_ticker;
///
/// assert_eq!(normalize_ticker(Some(" VALE3 ")), Some("VALE3".to_string()));
/// assert_eq!(normalize_ticker(Some("nan")), None);
/// assert_eq!(normalize_ticker(Some("NULL")), None);
/// assert_eq!(normalize_ticker(Some(" NA ")), Some("NA".to_string()));
/// assert_eq!(normalize_ticker(None), None);
/// ```
pub fn normalize_ticker(raw: Option<&str>) -> Option<TickerSymbol> {
    let raw = raw?;

    if MISSING_VALUE_MARKERS.contains(&raw) {
        return None;
    }

    let trimmed = raw.trim();

    if PLACEHOLDER_TICKERS.contains(&trimmed) {
        return None;
    }

    Some(trimmed.to_string())
}
