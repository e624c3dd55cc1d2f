//! Terminal front-end state.

use crate::actions::{Action, ActionOutcome};
use crate::error::ToneError;
use crate::input::{Field, FormValues};
use crate::plot::Figure;

/// Focusable items: every field, then every button
pub const FOCUS_COUNT: usize = Field::ALL.len() + Action::ALL.len();

/// What keyboard focus is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(Field),
    Button(Action),
}

impl Focus {
    pub fn from_index(index: usize) -> Self {
        let index = index % FOCUS_COUNT;
        if index < Field::ALL.len() {
            Focus::Field(Field::ALL[index])
        } else {
            Focus::Button(Action::ALL[index - Field::ALL.len()])
        }
    }
}

/// Modal warning shown after a rejected action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub title: String,
    pub message: String,
}

impl From<&ToneError> for Warning {
    fn from(err: &ToneError) -> Self {
        Self {
            title: err.title().to_string(),
            message: err.to_string(),
        }
    }
}

/// Messages from key handling to the state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Quit,
    FocusNext,
    FocusPrev,
    /// Type a character into the focused field
    Input(char),
    Backspace,
    /// Enter: run the focused button, or move past the focused field
    Activate,
    /// Flip the save toggle of the focused button
    ToggleSave,
    Run(Action),
    DismissWarning,
}

pub struct AppState {
    pub form: FormValues,
    pub focus: usize,
    pub save_toggles: [bool; Action::ALL.len()],
    pub warning: Option<Warning>,
    pub figure: Option<Figure>,
    pub last_summary: Option<String>,
    /// Action currently running (drawn while playback blocks)
    pub busy: Option<Action>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(form: FormValues) -> Self {
        Self {
            form,
            focus: 0,
            save_toggles: [false; Action::ALL.len()],
            warning: None,
            figure: None,
            last_summary: None,
            busy: None,
            should_quit: false,
        }
    }

    pub fn focused(&self) -> Focus {
        Focus::from_index(self.focus)
    }

    pub fn is_saved(&self, action: Action) -> bool {
        self.save_toggles[action.index()]
    }

    /// Action an event would run, if any
    pub fn action_for(&self, event: &UiEvent) -> Option<Action> {
        match (event, self.focused()) {
            (UiEvent::Run(action), _) => Some(*action),
            (UiEvent::Activate, Focus::Button(action)) => Some(action),
            _ => None,
        }
    }

    /// Apply an event; `run` performs actions
    pub fn apply<F>(&mut self, event: UiEvent, run: &mut F)
    where
        F: FnMut(Action, &FormValues, bool) -> Result<ActionOutcome, ToneError>,
    {
        if let Some(action) = self.action_for(&event) {
            self.run_action(action, run);
            return;
        }

        match event {
            UiEvent::Quit => self.should_quit = true,
            UiEvent::DismissWarning => self.warning = None,
            UiEvent::FocusNext | UiEvent::Activate => {
                self.focus = (self.focus + 1) % FOCUS_COUNT;
            }
            UiEvent::FocusPrev => {
                self.focus = (self.focus + FOCUS_COUNT - 1) % FOCUS_COUNT;
            }
            UiEvent::Input(c) => {
                if let Focus::Field(field) = self.focused() {
                    self.form.text_mut(field).push(c);
                }
            }
            UiEvent::Backspace => {
                if let Focus::Field(field) = self.focused() {
                    self.form.text_mut(field).pop();
                }
            }
            UiEvent::ToggleSave => {
                if let Focus::Button(action) = self.focused() {
                    let toggle = &mut self.save_toggles[action.index()];
                    *toggle = !*toggle;
                }
            }
            UiEvent::Run(_) => {}
        }
    }

    fn run_action<F>(&mut self, action: Action, run: &mut F)
    where
        F: FnMut(Action, &FormValues, bool) -> Result<ActionOutcome, ToneError>,
    {
        let save = self.is_saved(action);
        match run(action, &self.form, save) {
            Ok(outcome) => {
                if let Some(figure) = outcome.figure {
                    self.figure = Some(figure);
                }
                let mut summary = format!("{}: {}", action.label(), outcome.summary);
                for path in &outcome.saved {
                    summary.push_str(&format!(" (saved {})", path.display()));
                }
                self.last_summary = Some(summary);
            }
            Err(err) => self.warning = Some(Warning::from(&err)),
        }
        self.busy = None;
    }
}
