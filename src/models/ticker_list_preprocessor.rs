use crate::constants::TICKER_COLUMN;
use crate::types::TickerSet;
use crate::utils::{dedup_tickers, normalize_ticker, read_input_file};
use crate::Error;
use csv::ReaderBuilder;
use log::{debug, info};
use std::io::{Cursor, Read};
use std::path::Path;

/// Turns an asset master list (CSV with a `ticker` column) into a `TickerSet`.
pub struct TickerListPreprocessor {}

impl TickerListPreprocessor {
    pub fn read_ticker_set_from_string(csv: &str) -> Result<TickerSet, Error> {
        Self::read_ticker_set_from_reader(Cursor::new(csv))
    }

    /// Parses CSV from any reader. Only the `ticker` column is consulted; rows
    /// shorter than the header are treated as having a missing ticker, rows
    /// longer than the header are rejected.
    pub fn read_ticker_set_from_reader<R: Read>(source: R) -> Result<TickerSet, Error> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(source);

        let headers = reader
            .headers()
            .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?;
        let header_len = headers.len();

        let ticker_index = headers
            .iter()
            .position(|header| header == TICKER_COLUMN)
            .ok_or_else(|| Error::MissingColumnError(TICKER_COLUMN.to_string()))?;

        let mut total_rows = 0;
        let mut tickers = Vec::new();

        for record in reader.records() {
            let record =
                record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;
            total_rows += 1;

            if record.len() > header_len {
                return Err(Error::ParserError(format!(
                    "Expected {} fields in line {}, saw {}",
                    header_len,
                    record.position().map_or(0, |position| position.line()),
                    record.len()
                )));
            }

            if let Some(ticker) = normalize_ticker(record.get(ticker_index)) {
                tickers.push(ticker);
            }
        }

        let ticker_set = dedup_tickers(tickers);

        debug!(
            "Kept {} distinct tickers out of {} rows",
            ticker_set.len(),
            total_rows
        );

        Ok(ticker_set)
    }

    /// Reads the asset list from disk; `.gz` files are decompressed first.
    pub fn read_ticker_set_from_path<P: AsRef<Path>>(path: P) -> Result<TickerSet, Error> {
        let path = path.as_ref();
        info!("Reading tickers from {}...", path.display());

        let csv = read_input_file(path)?;

        Self::read_ticker_set_from_string(&csv)
    }
}
