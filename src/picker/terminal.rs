//! Terminal-backed picker using crossterm and ratatui.

use std::io::{self, IsTerminal, Stdout};

use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::event::handle_key_event;
use super::state::PickerState;
use super::ui::render;
use super::{Picker, PickerOption, Selection};
use crate::error::{Result, SweeperError};

/// Full-screen checklist on the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalPicker;

impl TerminalPicker {
    pub fn new() -> Self {
        Self
    }
}

impl Picker for TerminalPicker {
    fn present(&mut self, options: &[PickerOption]) -> Result<Selection> {
        if options.is_empty() {
            return Ok(Selection::Chosen(Vec::new()));
        }

        if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
            return Err(SweeperError::Interaction(io::Error::new(
                io::ErrorKind::NotConnected,
                "not a terminal",
            )));
        }

        let mut state = PickerState::new(options.len());
        run_loop(&mut state, options).map_err(SweeperError::Interaction)?;

        Ok(state.selection(options))
    }
}

/// Restores the terminal when dropped, including on early return.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        let terminal = execute!(stdout, EnterAlternateScreen)
            .and_then(|()| Terminal::new(CrosstermBackend::new(stdout)));

        match terminal {
            Ok(terminal) => Ok(Self { terminal }),
            Err(e) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                Err(e)
            }
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn run_loop(state: &mut PickerState, options: &[PickerOption]) -> io::Result<()> {
    let mut guard = TerminalGuard::enter()?;

    while !state.is_done() {
        guard.terminal.draw(|frame| render(state, options, frame))?;

        if let Event::Key(key) = event::read()? {
            handle_key_event(state, key);
        }
    }

    Ok(())
}
