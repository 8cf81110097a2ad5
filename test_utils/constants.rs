use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

// Lazy-initialized static variables
pub static TEST_FILES_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files"));

pub static ASSETS_MASTER_CSV_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| TEST_FILES_DIRECTORY.join("assets_master.csv"));

pub static MESSY_TICKERS_CSV_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| TEST_FILES_DIRECTORY.join("messy_tickers.csv"));

pub static MISSING_TICKER_COLUMN_CSV_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| TEST_FILES_DIRECTORY.join("missing_ticker_column.csv"));

pub static MISSING_VALUE_MARKERS_CSV_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| TEST_FILES_DIRECTORY.join("missing_value_markers.csv"));

pub const TEST_BASE_URL: &str = "https://example.com";
