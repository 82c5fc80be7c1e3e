use std::fmt;
use std::path::PathBuf;

/// Which rule marked a directory as removable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKind {
    /// A directory literally named `node_modules`.
    NodeModules,
    /// A directory holding a `pyvenv.cfg` marker.
    PythonVenv,
}

impl fmt::Display for CandidateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateKind::NodeModules => write!(f, "node_modules"),
            CandidateKind::PythonVenv => write!(f, "python venv"),
        }
    }
}

/// A dependency folder found during the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Absolute path of the folder
    pub path: PathBuf,

    /// Sum of file sizes under `path` at scan time (best effort)
    pub size: u64,

    pub kind: CandidateKind,
}

impl Candidate {
    pub fn new(path: PathBuf, size: u64, kind: CandidateKind) -> Self {
        Self { path, size, kind }
    }
}

/// Sum of candidate sizes.
pub fn total_size(candidates: &[Candidate]) -> u64 {
    candidates.iter().map(|c| c.size).sum()
}
