use std::path::Path;

use indicatif::ProgressBar;
use walkdir::{DirEntry, WalkDir};

use super::candidate::{Candidate, CandidateKind};
use super::size::best_effort_size;

/// Marker file that identifies a Python virtual environment.
pub const VENV_MARKER: &str = "pyvenv.cfg";

/// Directory name that identifies an npm dependency tree.
pub const NODE_MODULES: &str = "node_modules";

/// How the walk proceeds after visiting one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Keep walking, descending into the entry if it is a directory.
    Continue,
    /// Do not descend into the entry just visited.
    SkipSubtree,
    /// Stop the walk.
    Abort,
}

/// What a visited entry turns out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Not a directory.
    NotDir,
    /// Hidden directory that is pruned with everything below it.
    Hidden,
    /// Dependency folder to offer for removal.
    Removable(CandidateKind),
    /// Ordinary directory to descend into.
    Plain,
}

/// Result of a scan: whatever was collected, plus every traversal error hit
/// on the way.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub candidates: Vec<Candidate>,
    pub errors: Vec<walkdir::Error>,
}

/// Decide what to do with a single walk entry.
///
/// Rules apply in order: files are ignored, hidden directories below the
/// root are pruned unless `include_hidden` is set, `node_modules` matches by
/// name, and a directory holding `pyvenv.cfg` is a virtual environment.
pub fn classify(entry: &DirEntry, include_hidden: bool) -> Classification {
    if !entry.file_type().is_dir() {
        return Classification::NotDir;
    }

    let name = entry.file_name().to_string_lossy();

    if !include_hidden && entry.depth() > 0 && name.len() > 1 && name.starts_with('.') {
        return Classification::Hidden;
    }

    if name == NODE_MODULES {
        return Classification::Removable(CandidateKind::NodeModules);
    }

    if entry.path().join(VENV_MARKER).is_file() {
        return Classification::Removable(CandidateKind::PythonVenv);
    }

    Classification::Plain
}

/// Collects candidates while the walk visits entries one at a time.
struct Collector<'a> {
    include_hidden: bool,
    progress: &'a ProgressBar,
    outcome: ScanOutcome,
}

impl Collector<'_> {
    fn visit(&mut self, result: walkdir::Result<DirEntry>) -> Visit {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                // Below the root only the unreadable entry is lost.
                let visit = if err.depth() == 0 {
                    Visit::Abort
                } else {
                    Visit::Continue
                };
                tracing::warn!(error = %err, ?visit, "Walk error");
                self.outcome.errors.push(err);
                return visit;
            }
        };

        match classify(&entry, self.include_hidden) {
            Classification::NotDir => Visit::Continue,
            Classification::Hidden => {
                tracing::debug!(path = %entry.path().display(), "Pruning hidden directory");
                Visit::SkipSubtree
            }
            Classification::Removable(kind) => {
                let path = entry.into_path();
                self.progress.set_message(format!("sizing {}", path.display()));

                let size = best_effort_size(&path);
                tracing::debug!(path = %path.display(), %kind, size, "Found candidate");

                self.outcome.candidates.push(Candidate::new(path, size, kind));
                self.progress.inc(1);
                Visit::SkipSubtree
            }
            Classification::Plain => {
                self.progress.set_message(entry.path().display().to_string());
                Visit::Continue
            }
        }
    }
}

/// Walk `root` depth-first in file-name order and collect dependency folders.
///
/// Candidates are never descended into, so nested `node_modules` inside a
/// collected tree are not reported separately. An unreadable entry below the
/// root is recorded and skipped; an error at the root ends the walk.
pub fn find_candidates(root: &Path, include_hidden: bool, progress: &ProgressBar) -> ScanOutcome {
    let mut collector = Collector {
        include_hidden,
        progress,
        outcome: ScanOutcome::default(),
    };

    let mut walker = WalkDir::new(root).sort_by_file_name().into_iter();

    while let Some(result) = walker.next() {
        match collector.visit(result) {
            Visit::Continue => {}
            Visit::SkipSubtree => walker.skip_current_dir(),
            Visit::Abort => break,
        }
    }

    collector.outcome
}
