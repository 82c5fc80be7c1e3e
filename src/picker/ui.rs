//! Checklist rendering for the picker.

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::state::PickerState;
use super::PickerOption;
use crate::scanner::size_label;

/// Rows of the checklist shown at once.
pub const MAX_VISIBLE_ROWS: usize = 15;

pub const TITLE: &str = " Select folders to delete ";

const HINTS: &str = "[↑↓] Move  [Space] Toggle  [a] All  [Enter] Confirm  [Esc] Cancel";

/// Render the whole picker.
pub fn render(state: &PickerState, options: &[PickerOption], frame: &mut Frame) {
    let list_height = options.len().clamp(1, MAX_VISIBLE_ROWS) as u16 + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(list_height), // Checklist
            Constraint::Length(1),           // Selection summary
            Constraint::Length(1),           // Key hints
            Constraint::Min(0),
        ])
        .split(frame.area());

    render_list(state, options, frame, chunks[0]);
    render_summary(state, options, frame, chunks[1]);

    let hints = Paragraph::new(HINTS).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hints, chunks[2]);
}

fn render_list(state: &PickerState, options: &[PickerOption], frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(TITLE)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible_height = (inner.height as usize).min(MAX_VISIBLE_ROWS);
    let scroll_offset = calculate_scroll_offset(state.cursor, visible_height, options.len());

    for (i, option) in options
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_height)
    {
        let row = Rect::new(inner.x, inner.y + (i - scroll_offset) as u16, inner.width, 1);
        render_row(option, state.checked[i], i == state.cursor, frame, row);
    }
}

fn render_row(option: &PickerOption, checked: bool, is_cursor: bool, frame: &mut Frame, area: Rect) {
    let pointer = if is_cursor { "> " } else { "  " };
    let mark = if checked { "[x] " } else { "[ ] " };

    let mark_style = if checked {
        Style::default().fg(Color::Green).bold()
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut line = Line::from(vec![
        Span::styled(pointer, Style::default().fg(Color::Yellow)),
        Span::styled(mark, mark_style),
        Span::raw(option.label.as_str()),
    ]);

    if is_cursor {
        line = line.style(Style::default().bg(Color::DarkGray));
    }

    frame.render_widget(Paragraph::new(line), area);
}

fn render_summary(state: &PickerState, options: &[PickerOption], frame: &mut Frame, area: Rect) {
    let text = format!(
        " {} of {} selected, {}",
        state.checked_count(),
        options.len(),
        size_label(state.checked_size(options))
    );

    frame.render_widget(Paragraph::new(text), area);
}

/// First row to draw so the cursor stays visible with a little context.
fn calculate_scroll_offset(cursor: usize, visible_height: usize, total: usize) -> usize {
    if visible_height == 0 || total <= visible_height {
        return 0;
    }

    let padding = 3.min(visible_height / 4);

    if cursor < padding {
        0
    } else if cursor >= total - padding {
        total.saturating_sub(visible_height)
    } else {
        cursor
            .saturating_sub(visible_height - padding - 1)
            .min(total - visible_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::prepare_options;
    use crate::scanner::{Candidate, CandidateKind};
    use ratatui::backend::TestBackend;
    use std::path::PathBuf;

    fn options(count: usize) -> Vec<PickerOption> {
        prepare_options(
            (0..count)
                .map(|i| {
                    Candidate::new(
                        PathBuf::from(format!("/work/app{:02}/node_modules", i)),
                        (count - i) as u64 * 1000,
                        CandidateKind::NodeModules,
                    )
                })
                .collect(),
        )
    }

    fn render_to_string(state: &PickerState, options: &[PickerOption]) -> String {
        render_sized(state, options, 80, 24)
    }

    fn render_sized(state: &PickerState, options: &[PickerOption], width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(state, options, frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut output = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                output.push_str(buffer[(x, y)].symbol());
            }
            output.push('\n');
        }
        output
    }

    #[test]
    fn test_render_shows_title_and_rows() {
        let options = options(3);
        let state = PickerState::new(options.len());

        let output = render_to_string(&state, &options);

        assert!(output.contains("Select folders to delete"));
        assert!(output.contains("/work/app00/node_modules"));
        assert!(output.contains("/work/app02/node_modules"));
        assert!(output.contains("0 of 3 selected"));
    }

    #[test]
    fn test_render_marks_checked_rows() {
        let options = options(2);
        let mut state = PickerState::new(options.len());
        state.toggle_current();

        let output = render_to_string(&state, &options);

        assert!(output.contains("> [x] "));
        assert!(output.contains("  [ ] "));
        assert!(output.contains("1 of 2 selected"));
    }

    #[test]
    fn test_render_limits_visible_rows() {
        let options = options(30);
        let state = PickerState::new(options.len());

        let output = render_to_string(&state, &options);

        assert!(output.contains("/work/app14/node_modules"));
        assert!(!output.contains("/work/app15/node_modules"));
    }

    #[test]
    fn test_render_scrolls_to_cursor() {
        let options = options(30);
        let mut state = PickerState::new(options.len());
        state.cursor_to_last();

        let output = render_to_string(&state, &options);

        assert!(output.contains("/work/app29/node_modules"));
        assert!(!output.contains("/work/app00/node_modules"));
    }

    #[test]
    fn test_render_empty_does_not_panic() {
        let state = PickerState::new(0);
        render_to_string(&state, &[]);
    }

    #[test]
    fn test_render_tiny_terminal_does_not_panic() {
        let options = options(5);
        let mut state = PickerState::new(options.len());
        state.move_cursor(2);

        for height in 1..=4 {
            render_sized(&state, &options, 80, height);
        }
    }

    #[test]
    fn test_calculate_scroll_offset_without_room() {
        assert_eq!(calculate_scroll_offset(2, 0, 5), 0);
        assert_eq!(calculate_scroll_offset(4, 1, 5), 4);
    }

    #[test]
    fn test_calculate_scroll_offset() {
        // Fits in view
        assert_eq!(calculate_scroll_offset(0, 15, 10), 0);
        assert_eq!(calculate_scroll_offset(9, 15, 10), 0);

        // Top of a long list
        assert_eq!(calculate_scroll_offset(0, 15, 100), 0);
        assert_eq!(calculate_scroll_offset(10, 15, 100), 0);

        // Middle keeps the cursor visible
        let offset = calculate_scroll_offset(50, 15, 100);
        assert!(offset <= 50);
        assert!(offset + 15 > 50);

        // Bottom
        assert_eq!(calculate_scroll_offset(99, 15, 100), 85);
    }
}
