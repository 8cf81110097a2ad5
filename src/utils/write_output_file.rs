use crate::utils::is_gzip_path;
use crate::Error;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes `contents` to `path`, truncating any existing file. Output is
/// gzip-compressed when the path ends in `.gz`.
///
/// The parent directory must already exist.
pub fn write_output_file(path: &Path, contents: &str) -> Result<(), Error> {
    let mut file = File::create(path)?;

    if is_gzip_path(path) {
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(contents.as_bytes())?;
        encoder.finish()?;
    } else {
        file.write_all(contents.as_bytes())?;
        file.flush()?;
    }

    Ok(())
}
