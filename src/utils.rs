pub mod dedup_tickers;
pub mod is_gzip_path;
pub mod join_url;
pub mod normalize_ticker;
pub mod read_input_file;
pub mod write_output_file;

pub use dedup_tickers::dedup_tickers;
pub use is_gzip_path::is_gzip_path;
pub use join_url::join_url;
pub use normalize_ticker::normalize_ticker;
pub use read_input_file::read_input_file;
pub use write_output_file::write_output_file;
