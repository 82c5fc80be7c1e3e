//! Interactive selection of the folders to delete.
//!
//! The sweep pipeline only sees the [`Picker`] trait, so the terminal UI can
//! be swapped for a scripted double in tests.

pub mod event;
pub mod state;
pub mod terminal;
pub mod ui;

use std::path::PathBuf;

use crate::error::Result;
use crate::scanner::{size_label, Candidate};

pub use state::{Outcome, PickerState};
pub use terminal::TerminalPicker;

/// A candidate together with the line shown for it in the checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOption {
    pub candidate: Candidate,
    pub label: String,
}

/// What the user did with the checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Confirmed; paths in option order, possibly empty.
    Chosen(Vec<PathBuf>),
    /// Cancelled without choosing anything.
    Aborted,
}

/// Presents options and blocks until the user confirms or aborts.
pub trait Picker {
    fn present(&mut self, options: &[PickerOption]) -> Result<Selection>;
}

/// Sort candidates largest first and label each with its size, right-aligned
/// to the widest size label, followed by the path.
pub fn prepare_options(mut candidates: Vec<Candidate>) -> Vec<PickerOption> {
    candidates.sort_by(|a, b| b.size.cmp(&a.size));

    let sizes: Vec<String> = candidates.iter().map(|c| size_label(c.size)).collect();
    let width = sizes.iter().map(|s| s.chars().count()).max().unwrap_or(0);

    candidates
        .into_iter()
        .zip(sizes)
        .map(|(candidate, size)| {
            let label = format!("{:>width$} {}", size, candidate.path.display(), width = width);
            PickerOption { candidate, label }
        })
        .collect()
}
