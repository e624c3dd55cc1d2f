use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Widget};

use crate::actions::Action;
use crate::input::Field;
use crate::ui::app::AppState;
use crate::ui::theme;

const LABEL_WIDTH: u16 = 30;
const BUTTON_WIDTH: u16 = 36;

/// Input fields followed by the action buttons and their save toggles
pub struct FormWidget<'a> {
    pub state: &'a AppState,
}

impl Widget for FormWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" Signal ")
            .border_style(Style::default().fg(theme::DIM));
        let inner = block.inner(area);
        block.render(area, buf);

        let x = inner.x + 1;
        let value_x = x + LABEL_WIDTH;
        let value_width = inner.width.saturating_sub(LABEL_WIDTH + 2) as usize;
        let mut y = inner.y;

        for (index, field) in Field::ALL.iter().enumerate() {
            if y >= inner.bottom() {
                return;
            }
            let focused = self.state.focus == index;

            let label_style = if focused {
                Style::default().fg(theme::ACCENT)
            } else {
                Style::default().fg(theme::FG)
            };
            buf.set_stringn(x, y, field.label(), LABEL_WIDTH as usize, label_style);

            let text = self.state.form.get(*field);
            let (shown, style) = if focused {
                (
                    format!("{}▏", text),
                    Style::default().fg(theme::FG).bg(theme::SELECTED_BG),
                )
            } else {
                (text.to_string(), Style::default().fg(theme::FG))
            };
            let padded = format!("{:<width$}", shown, width = value_width);
            buf.set_stringn(value_x, y, padded, value_width, style);
            y += 1;
        }

        y += 1;
        for action in Action::ALL {
            if y >= inner.bottom() {
                return;
            }
            let focused = self.state.focus == Field::ALL.len() + action.index();

            let button_style = if self.state.busy == Some(action) {
                Style::default()
                    .fg(theme::SAVE_YELLOW)
                    .add_modifier(Modifier::BOLD)
            } else if focused {
                Style::default().fg(theme::BG).bg(theme::ACCENT)
            } else {
                Style::default().fg(theme::FG)
            };
            let button = format!("[ {} ]", action.label());
            buf.set_stringn(x, y, button, BUTTON_WIDTH as usize, button_style);

            let saved = self.state.is_saved(action);
            let toggle_style = if saved {
                Style::default().fg(theme::SAVE_YELLOW)
            } else {
                Style::default().fg(theme::DIM)
            };
            let toggle = format!(
                "{} {}",
                if saved { "[x]" } else { "[ ]" },
                action.save_label()
            );
            let toggle_x = x + BUTTON_WIDTH;
            let toggle_width = inner.right().saturating_sub(toggle_x) as usize;
            buf.set_stringn(toggle_x, y, toggle, toggle_width, toggle_style);
            y += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::FormValues;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_form_shows_fields_and_toggles() {
        let mut state = AppState::new(FormValues::default());
        state.save_toggles[Action::PlotFft.index()] = true;

        let area = Rect::new(0, 0, 58, 22);
        let mut buf = Buffer::empty(area);
        FormWidget { state: &state }.render(area, &mut buf);

        assert!(row_text(&buf, 1).contains("Mixer Sampling Rate (Hz)"));
        assert!(row_text(&buf, 1).contains("44100"));
        // Fields, a blank row, then buttons in order
        let fft_row = 1 + Field::ALL.len() as u16 + 1 + Action::PlotFft.index() as u16;
        let row = row_text(&buf, fft_row);
        assert!(row.contains("[ Plot FFT ]"));
        assert!(row.contains("[x] Save as PNG"));
    }
}
