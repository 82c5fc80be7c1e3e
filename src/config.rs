use std::path::{Path, PathBuf};

use crate::error::{Result, SweeperError};

/// Settings for a single run, fixed once the CLI has been parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Absolute directory to scan
    pub root: PathBuf,

    /// Go through the whole flow without deleting anything
    pub dry_run: bool,

    /// Walk into hidden directories (starting with .)
    pub include_hidden: bool,
}

impl RunConfig {
    /// Create a config for `root` with both flags off
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            ..Self::default()
        }
    }

    /// Set dry-run mode
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Set whether hidden directories are walked
    pub fn with_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }
}

/// Make `path` absolute without resolving symlinks and check that it exists.
pub fn resolve_root(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path).map_err(|e| SweeperError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    if !absolute.exists() {
        return Err(SweeperError::PathNotFound(absolute));
    }

    Ok(absolute)
}
