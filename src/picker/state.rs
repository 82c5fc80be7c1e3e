//! Checklist state for the picker.

use std::path::PathBuf;

use super::{PickerOption, Selection};

/// How the interaction ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Confirmed,
    Aborted,
}

/// Cursor and check marks over a fixed list of options.
#[derive(Debug, Clone)]
pub struct PickerState {
    /// Index of the highlighted row.
    pub cursor: usize,

    /// One flag per option.
    pub checked: Vec<bool>,

    /// Set once the user confirms or aborts.
    pub outcome: Option<Outcome>,
}

impl PickerState {
    /// Create a state for `len` options, none checked.
    pub fn new(len: usize) -> Self {
        Self {
            cursor: 0,
            checked: vec![false; len],
            outcome: None,
        }
    }

    pub fn len(&self) -> usize {
        self.checked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }

    pub fn is_done(&self) -> bool {
        self.outcome.is_some()
    }

    /// Move the cursor by `delta` rows, clamped to the list.
    pub fn move_cursor(&mut self, delta: isize) {
        if self.is_empty() {
            return;
        }
        let last = self.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
    }

    pub fn cursor_to_first(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_to_last(&mut self) {
        self.cursor = self.len().saturating_sub(1);
    }

    pub fn toggle_current(&mut self) {
        if let Some(flag) = self.checked.get_mut(self.cursor) {
            *flag = !*flag;
        }
    }

    /// Check everything, or clear everything if all rows are already checked.
    pub fn toggle_all(&mut self) {
        let target = !self.checked.iter().all(|c| *c);
        self.checked.iter_mut().for_each(|c| *c = target);
    }

    pub fn checked_count(&self) -> usize {
        self.checked.iter().filter(|c| **c).count()
    }

    /// Total size of the checked options.
    pub fn checked_size(&self, options: &[PickerOption]) -> u64 {
        options
            .iter()
            .zip(&self.checked)
            .filter(|(_, checked)| **checked)
            .map(|(option, _)| option.candidate.size)
            .sum()
    }

    pub fn confirm(&mut self) {
        self.outcome = Some(Outcome::Confirmed);
    }

    pub fn abort(&mut self) {
        self.outcome = Some(Outcome::Aborted);
    }

    /// Turn the finished interaction into a selection. Anything other than an
    /// explicit confirm counts as an abort.
    pub fn selection(&self, options: &[PickerOption]) -> Selection {
        match self.outcome {
            Some(Outcome::Confirmed) => Selection::Chosen(
                options
                    .iter()
                    .zip(&self.checked)
                    .filter(|(_, checked)| **checked)
                    .map(|(option, _)| option.candidate.path.clone())
                    .collect::<Vec<PathBuf>>(),
            ),
            Some(Outcome::Aborted) | None => Selection::Aborted,
        }
    }
}
