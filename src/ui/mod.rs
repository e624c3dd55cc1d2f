//! Interactive terminal front end.
//!
//! One screen: the form on the left, the latest figure and the status pane on
//! the right. Actions run on the UI thread, so playback blocks input until
//! the sound has finished.

pub mod app;
pub mod input;
pub mod layout;
pub mod theme;
pub mod widgets;

use std::io;
use std::path::Path;

use anyhow::Context;
use crossterm::cursor::Show;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::Rng;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal};

use crate::actions::ToneMixer;
use crate::audio::AudioOutput;
use crate::input::FormValues;
use crate::logging::LogHistory;
use crate::params::UiConfig;
use crate::ui::app::AppState;
use crate::ui::layout::ScreenLayout;
use crate::ui::widgets::dialog::WarningDialog;
use crate::ui::widgets::form::FormWidget;
use crate::ui::widgets::keyboard_hint::KeyboardHintWidget;
use crate::ui::widgets::plot_view::PlotViewWidget;
use crate::ui::widgets::status::StatusWidget;

/// Take over the terminal until the user quits
pub fn run<O: AudioOutput, R: Rng>(
    mixer: &mut ToneMixer<O, R>,
    form: FormValues,
    history: &LogHistory,
    config: &UiConfig,
) -> anyhow::Result<()> {
    enable_raw_mode().context("Failed to enable raw terminal mode")?;
    with_restore(
        || {
            io::stdout()
                .execute(EnterAlternateScreen)
                .context("Failed to enter the alternate screen")?;
            let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
            terminal.clear()?;
            event_loop(&mut terminal, mixer, AppState::new(form), history, config)
        },
        restore_terminal,
    )
}

/// Run `body`, then `restore` whether or not `body` failed.
/// The body's error wins over the restore error.
fn with_restore<T>(
    body: impl FnOnce() -> anyhow::Result<T>,
    restore: impl FnOnce() -> anyhow::Result<()>,
) -> anyhow::Result<T> {
    let result = body();
    let restored = restore();
    let value = result?;
    restored?;
    Ok(value)
}

fn restore_terminal() -> anyhow::Result<()> {
    let raw = disable_raw_mode().context("Failed to leave raw terminal mode");
    io::stdout()
        .execute(LeaveAlternateScreen)
        .and_then(|out| out.execute(Show))
        .context("Failed to leave the alternate screen")?;
    raw
}

fn event_loop<B: Backend, O: AudioOutput, R: Rng>(
    terminal: &mut Terminal<B>,
    mixer: &mut ToneMixer<O, R>,
    mut state: AppState,
    history: &LogHistory,
    config: &UiConfig,
) -> anyhow::Result<()> {
    let output = mixer.output_dir().root().to_path_buf();
    loop {
        terminal.draw(|frame| draw(frame, &state, &output, history, config))?;

        if state.should_quit {
            return Ok(());
        }

        if !event::poll(config.tick())? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let Some(evt) = input::handle_key(key, &state) else {
            continue;
        };

        // Show the running action before blocking on it
        if let Some(action) = state.action_for(&evt) {
            state.busy = Some(action);
            terminal.draw(|frame| draw(frame, &state, &output, history, config))?;
        }
        state.apply(evt, &mut |action, form, save| mixer.run(action, form, save));
    }
}

fn draw(
    frame: &mut Frame,
    state: &AppState,
    output: &Path,
    history: &LogHistory,
    config: &UiConfig,
) {
    let layout = ScreenLayout::new(frame.area(), config.form_width);

    let mut header = vec![Span::styled(
        " TONE MIXER ",
        Style::default()
            .fg(theme::BG)
            .bg(theme::ACCENT)
            .add_modifier(Modifier::BOLD),
    )];
    header.push(Span::styled(
        format!("  saving to {}", output.display()),
        Style::default().fg(theme::DIM),
    ));
    if let Some(action) = state.busy {
        header.push(Span::styled(
            format!("  {}...", action.label()),
            Style::default().fg(theme::SAVE_YELLOW),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(header)).style(Style::default().bg(theme::HEADER_BG)),
        layout.header,
    );

    frame.render_widget(FormWidget { state }, layout.form);
    frame.render_widget(
        PlotViewWidget {
            figure: state.figure.as_ref(),
        },
        layout.plot,
    );

    let log_lines = history
        .lock()
        .map(|lines| lines.iter().cloned().collect())
        .unwrap_or_default();
    frame.render_widget(
        StatusWidget {
            summary: state.last_summary.as_deref(),
            log_lines,
        },
        layout.status,
    );

    frame.render_widget(
        KeyboardHintWidget {
            hints: input::key_hints(state),
            warning: state.warning.is_some(),
        },
        layout.footer,
    );

    if let Some(warning) = &state.warning {
        frame.render_widget(WarningDialog { warning }, frame.area());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_restore_runs_after_failed_setup() {
        let restored = Cell::new(false);
        let result: anyhow::Result<()> = with_restore(
            || anyhow::bail!("terminal unavailable"),
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert!(restored.get());
        assert_eq!(result.unwrap_err().to_string(), "terminal unavailable");
    }

    #[test]
    fn test_restore_error_reported_after_clean_run() {
        let result = with_restore(|| Ok(7), || anyhow::bail!("still raw"));
        assert_eq!(result.unwrap_err().to_string(), "still raw");
        assert_eq!(with_restore(|| Ok(7), || Ok(())).unwrap(), 7);
    }
}
