//! Sweep command implementation: scan, pick, remove.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::config::RunConfig;
use crate::error::Result;
use crate::picker::{prepare_options, Picker, Selection};
use crate::remover::{RemoveSummary, Remover};
use crate::scanner::{find_candidates, size_label, total_size, Candidate};

/// How a sweep ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SweepReport {
    /// The scan turned up no dependency folders.
    NothingFound,
    /// The user cancelled the checklist.
    Aborted,
    /// The user confirmed without checking anything.
    NothingSelected,
    /// Removal ran (or was simulated) for the selected folders.
    Completed(RemoveSummary),
}

/// Run the sweep with a spinner on stderr during the scan.
pub fn run(config: &RunConfig, picker: &mut dyn Picker) -> Result<SweepReport> {
    run_with_progress(config, picker, scan_spinner())
}

/// Run the sweep reporting scan progress to `progress`.
///
/// Walk errors are printed and the sweep continues with every candidate the
/// walk could reach. Only a failure of the picker itself is returned as an
/// error.
pub fn run_with_progress(
    config: &RunConfig,
    picker: &mut dyn Picker,
    progress: ProgressBar,
) -> Result<SweepReport> {
    tracing::info!(root = %config.root.display(), include_hidden = config.include_hidden, "Scanning");

    let outcome = find_candidates(&config.root, config.include_hidden, &progress);
    progress.finish_and_clear();

    for err in &outcome.errors {
        println!("{}", err);
    }

    if outcome.candidates.is_empty() {
        println!("No folders found");
        return Ok(SweepReport::NothingFound);
    }

    println!(
        "Found {} folder{} totalling {}",
        outcome.candidates.len(),
        plural(outcome.candidates.len()),
        size_label(total_size(&outcome.candidates))
    );

    let options = prepare_options(outcome.candidates);

    let chosen = match picker.present(&options)? {
        Selection::Aborted => {
            println!("Program was interrupted by the user");
            return Ok(SweepReport::Aborted);
        }
        Selection::Chosen(paths) => paths,
    };

    if chosen.is_empty() {
        println!("No folders selected");
        return Ok(SweepReport::NothingSelected);
    }

    let selected: Vec<Candidate> = options
        .into_iter()
        .map(|option| option.candidate)
        .filter(|candidate| chosen.contains(&candidate.path))
        .collect();

    tracing::info!(count = selected.len(), dry_run = config.dry_run, "Removing selection");

    let results = Remover::new(config.dry_run).remove_all(&selected);
    let summary = Remover::summarize(&results);
    print_summary(&summary, config.dry_run);

    Ok(SweepReport::Completed(summary))
}

fn scan_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} {pos} found  {wide_msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn print_summary(summary: &RemoveSummary, dry_run: bool) {
    if dry_run {
        println!(
            "\n[DRY RUN] Would free {} across {} folder{}",
            size_label(summary.total_freed),
            summary.skipped_count,
            plural(summary.skipped_count)
        );
        return;
    }

    println!(
        "\nRemoved {} folder{}, freed {}",
        summary.removed_count,
        plural(summary.removed_count),
        size_label(summary.total_freed)
    );
    if summary.failed_count > 0 {
        println!("Failed:  {}", summary.failed_count);
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
