use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::actions::Action;
use crate::ui::app::{AppState, Focus, UiEvent};

/// Map keyboard input to UiEvent for the current state
pub fn handle_key(key: KeyEvent, state: &AppState) -> Option<UiEvent> {
    // A visible warning swallows the next key
    if state.warning.is_some() {
        return Some(UiEvent::DismissWarning);
    }

    match key.code {
        KeyCode::Esc => return Some(UiEvent::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(UiEvent::Quit);
        }
        KeyCode::Char('q') if key.modifiers.is_empty() => return Some(UiEvent::Quit),
        KeyCode::Tab | KeyCode::Down => return Some(UiEvent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => return Some(UiEvent::FocusPrev),
        KeyCode::Enter => return Some(UiEvent::Activate),
        KeyCode::F(n @ 1..=6) => return Some(UiEvent::Run(Action::ALL[n as usize - 1])),
        _ => {}
    }

    match state.focused() {
        Focus::Field(_) => match key.code {
            KeyCode::Char(c) if is_numeric_char(c) => Some(UiEvent::Input(c)),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            _ => None,
        },
        Focus::Button(_) => match key.code {
            KeyCode::Char(' ') => Some(UiEvent::ToggleSave),
            _ => None,
        },
    }
}

fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}

pub fn key_hints(state: &AppState) -> Vec<(&'static str, &'static str)> {
    if state.warning.is_some() {
        return vec![("any key", "Dismiss")];
    }
    let mut hints = vec![("Tab/↑↓", "Move"), ("F1-F6", "Run")];
    match state.focused() {
        Focus::Field(_) => hints.push(("0-9 . - e", "Edit")),
        Focus::Button(_) => {
            hints.push(("Enter", "Run"));
            hints.push(("Space", "Toggle Save"));
        }
    }
    hints.push(("Esc/Q", "Quit"));
    hints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Field, FormValues};
    use crate::ui::app::Warning;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_function_keys_run_actions() {
        let state = AppState::new(FormValues::default());
        assert_eq!(
            handle_key(press(KeyCode::F(1)), &state),
            Some(UiEvent::Run(Action::PlaySound))
        );
        assert_eq!(
            handle_key(press(KeyCode::F(6)), &state),
            Some(UiEvent::Run(Action::PlotPsd))
        );
        assert_eq!(handle_key(press(KeyCode::F(7)), &state), None);
    }

    #[test]
    fn test_field_accepts_only_numeric_chars() {
        let mut state = AppState::new(FormValues::default());
        state.focus = Field::Snr.index();

        assert_eq!(
            handle_key(press(KeyCode::Char('-')), &state),
            Some(UiEvent::Input('-'))
        );
        assert_eq!(handle_key(press(KeyCode::Char('x')), &state), None);
        assert_eq!(handle_key(press(KeyCode::Char(' ')), &state), None);
    }

    #[test]
    fn test_space_toggles_on_buttons() {
        let mut state = AppState::new(FormValues::default());
        state.focus = Field::ALL.len();
        assert_eq!(
            handle_key(press(KeyCode::Char(' ')), &state),
            Some(UiEvent::ToggleSave)
        );
        assert_eq!(handle_key(press(KeyCode::Char('5')), &state), None);
    }

    #[test]
    fn test_warning_swallows_any_key() {
        let mut state = AppState::new(FormValues::default());
        state.warning = Some(Warning {
            title: "Invalid Duration".into(),
            message: "Duration must be greater than 0.".into(),
        });
        assert_eq!(
            handle_key(press(KeyCode::Esc), &state),
            Some(UiEvent::DismissWarning)
        );
    }

    #[test]
    fn test_quit_keys() {
        let state = AppState::new(FormValues::default());
        assert_eq!(handle_key(press(KeyCode::Esc), &state), Some(UiEvent::Quit));
        assert_eq!(
            handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), &state),
            Some(UiEvent::Quit)
        );
    }
}
