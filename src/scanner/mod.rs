mod candidate;
mod size;
mod walker;

pub use candidate::{total_size, Candidate, CandidateKind};
pub use size::{best_effort_size, dir_size, size_label};
pub use walker::{
    classify, find_candidates, Classification, ScanOutcome, Visit, NODE_MODULES, VENV_MARKER,
};
