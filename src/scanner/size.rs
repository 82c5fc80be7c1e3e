use std::path::Path;

use humansize::{format_size, DECIMAL};
use walkdir::WalkDir;

use crate::error::SizeError;

/// Sum the apparent size of every non-directory entry under `path`.
///
/// Symlinks are not followed; a link contributes its own length. The walk
/// stops at the first entry that cannot be read and the bytes counted so far
/// travel with the error.
pub fn dir_size(path: &Path) -> Result<u64, SizeError> {
    let mut total = 0u64;

    for result in WalkDir::new(path) {
        let fail = |source| SizeError {
            path: path.to_path_buf(),
            partial_bytes: total,
            source,
        };

        let entry = result.map_err(fail)?;
        if entry.file_type().is_dir() {
            continue;
        }

        let metadata = entry.metadata().map_err(fail)?;
        total += metadata.len();
    }

    Ok(total)
}

/// Size of a candidate, falling back to the partial total on error.
pub fn best_effort_size(path: &Path) -> u64 {
    match dir_size(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "Size is undercounted");
            err.partial_bytes
        }
    }
}

/// Human-readable SI label, e.g. "12.3 MB".
pub fn size_label(bytes: u64) -> String {
    format_size(bytes, DECIMAL.decimal_places(1))
}
