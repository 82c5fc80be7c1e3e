//! Key handling for the picker.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::PickerState;
use super::ui::MAX_VISIBLE_ROWS;

/// Apply a single key event to the picker state.
pub fn handle_key_event(state: &mut PickerState, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.abort();
        return;
    }

    let page = MAX_VISIBLE_ROWS as isize;

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => state.abort(),
        KeyCode::Enter => state.confirm(),

        KeyCode::Up | KeyCode::Char('k') => state.move_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => state.move_cursor(1),
        KeyCode::PageUp => state.move_cursor(-page),
        KeyCode::PageDown => state.move_cursor(page),
        KeyCode::Home | KeyCode::Char('g') => state.cursor_to_first(),
        KeyCode::End | KeyCode::Char('G') => state.cursor_to_last(),

        KeyCode::Char(' ') | KeyCode::Char('x') => state.toggle_current(),
        KeyCode::Char('a') => state.toggle_all(),

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::Outcome;

    fn press(state: &mut PickerState, code: KeyCode) {
        handle_key_event(state, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_abort_on_esc() {
        let mut state = PickerState::new(2);
        press(&mut state, KeyCode::Esc);
        assert_eq!(state.outcome, Some(Outcome::Aborted));
    }

    #[test]
    fn test_abort_on_q() {
        let mut state = PickerState::new(2);
        press(&mut state, KeyCode::Char('q'));
        assert_eq!(state.outcome, Some(Outcome::Aborted));
    }

    #[test]
    fn test_abort_on_ctrl_c() {
        let mut state = PickerState::new(2);
        handle_key_event(
            &mut state,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert_eq!(state.outcome, Some(Outcome::Aborted));
    }

    #[test]
    fn test_confirm_on_enter() {
        let mut state = PickerState::new(2);
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.outcome, Some(Outcome::Confirmed));
    }

    #[test]
    fn test_navigation_and_toggle() {
        let mut state = PickerState::new(3);
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Char(' '));
        press(&mut state, KeyCode::Char('j'));
        press(&mut state, KeyCode::Char('x'));
        press(&mut state, KeyCode::Char('k'));
        press(&mut state, KeyCode::Char(' '));

        assert_eq!(state.checked, vec![false, false, true]);
        assert_eq!(state.cursor, 1);
        assert!(!state.is_done());
    }

    #[test]
    fn test_home_end_and_paging() {
        let mut state = PickerState::new(40);
        press(&mut state, KeyCode::End);
        assert_eq!(state.cursor, 39);
        press(&mut state, KeyCode::Char('g'));
        assert_eq!(state.cursor, 0);
        press(&mut state, KeyCode::PageDown);
        assert_eq!(state.cursor, MAX_VISIBLE_ROWS);
        press(&mut state, KeyCode::PageUp);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_toggle_all_key() {
        let mut state = PickerState::new(3);
        press(&mut state, KeyCode::Char('a'));
        assert_eq!(state.checked_count(), 3);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut state = PickerState::new(1);
        let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        handle_key_event(&mut state, key);
        assert!(!state.is_done());
    }
}
