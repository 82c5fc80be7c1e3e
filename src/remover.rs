//! Removal of selected dependency folders.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::scanner::Candidate;

/// Outcome of removing one folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveResult {
    /// The folder is gone.
    Removed { path: PathBuf, freed_bytes: u64 },
    /// Dry run: the folder was left in place.
    Skipped { path: PathBuf, would_free: u64 },
    /// Deletion failed; other folders are still attempted.
    Failed {
        path: PathBuf,
        kind: io::ErrorKind,
        error: String,
    },
}

/// Totals over a batch of removals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemoveSummary {
    pub removed_count: usize,
    pub skipped_count: usize,
    pub failed_count: usize,
    /// Bytes freed, or that would be freed in a dry run
    pub total_freed: u64,
}

/// Deletes folders recursively, honoring dry-run mode.
pub struct Remover {
    dry_run: bool,
}

impl Remover {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Remove every candidate in order. A failure on one folder never stops
    /// the rest of the batch.
    pub fn remove_all(&self, candidates: &[Candidate]) -> Vec<RemoveResult> {
        candidates.iter().map(|c| self.remove(c)).collect()
    }

    /// Remove a single folder and everything beneath it.
    pub fn remove(&self, candidate: &Candidate) -> RemoveResult {
        let path = candidate.path.as_path();

        if self.dry_run {
            println!("[DRY RUN] Removing {}", path.display());
            return RemoveResult::Skipped {
                path: path.to_path_buf(),
                would_free: candidate.size,
            };
        }

        println!("Removing {}", path.display());

        match delete_tree(path) {
            Ok(()) => RemoveResult::Removed {
                path: path.to_path_buf(),
                freed_bytes: candidate.size,
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Removal failed");
                println!("Failed to remove {}: {}", path.display(), e);
                RemoveResult::Failed {
                    path: path.to_path_buf(),
                    kind: e.kind(),
                    error: e.to_string(),
                }
            }
        }
    }

    pub fn summarize(results: &[RemoveResult]) -> RemoveSummary {
        let mut summary = RemoveSummary::default();

        for result in results {
            match result {
                RemoveResult::Removed { freed_bytes, .. } => {
                    summary.removed_count += 1;
                    summary.total_freed += freed_bytes;
                }
                RemoveResult::Skipped { would_free, .. } => {
                    summary.skipped_count += 1;
                    summary.total_freed += would_free;
                }
                RemoveResult::Failed { .. } => summary.failed_count += 1,
            }
        }

        summary
    }
}

/// A path that is already gone counts as removed.
fn delete_tree(path: &Path) -> io::Result<()> {
    match fs::remove_dir_all(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}
