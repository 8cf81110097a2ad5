use crate::utils::is_gzip_path;
use crate::Error;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads a whole UTF-8 text file, decompressing it first when it ends in `.gz`.
pub fn read_input_file(path: &Path) -> Result<String, Error> {
    let mut file = File::open(path)?;
    let mut bytes = Vec::new();

    if is_gzip_path(path) {
        let mut decoder = GzDecoder::new(file);
        decoder.read_to_end(&mut bytes)?;
    } else {
        file.read_to_end(&mut bytes)?;
    }

    String::from_utf8(bytes).map_err(|e| {
        Error::ParserError(format!("{} is not valid UTF-8: {}", path.display(), e))
    })
}
