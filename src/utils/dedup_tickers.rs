use crate::types::{TickerSet, TickerSymbol};
use std::collections::HashSet;

/// Deduplicates ticker symbols while maintaining first-seen order.
///
/// ### Example:
/// ```rust
/// use asset_sitemap::dedup_tickers;
///
/// let tickers = vec!["PETR4".to_string(), "VALE3".to_string(), "PETR4".to_string()];
/// assert_eq!(dedup_tickers(tickers), vec!["PETR4".to_string(), "VALE3".to_string()]);
/// ```
pub fn dedup_tickers<I>(tickers: I) -> TickerSet
where
    I: IntoIterator<Item = TickerSymbol>,
{
    let mut seen = HashSet::new();
    tickers
        .into_iter()
        .filter(|ticker| seen.insert(ticker.clone()))
        .collect()
}
