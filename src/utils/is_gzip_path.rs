use crate::constants::GZIP_EXTENSION;
use std::path::Path;

/// Whether `path` carries a `.gz` extension.
pub fn is_gzip_path(path: &Path) -> bool {
    path.extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case(GZIP_EXTENSION))
}
