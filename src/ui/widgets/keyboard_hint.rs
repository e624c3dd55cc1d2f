//! Footer line listing the keys that do something right now.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use crate::ui::theme;

const SEPARATOR: &str = " · ";
const OVERFLOW: &str = "…";

pub struct KeyboardHintWidget {
    pub hints: Vec<(&'static str, &'static str)>,
    /// A warning dialog is open; keys are drawn in the warning colour
    pub warning: bool,
}

impl KeyboardHintWidget {
    fn key_style(&self) -> Style {
        if self.warning {
            Style::default()
                .fg(theme::WARNING_RED)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::ACCENT)
        }
    }
}

impl Widget for KeyboardHintWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 || area.width < 2 {
            return;
        }

        let right = area.x + area.width;
        let y = area.y;
        let key_style = self.key_style();
        let mut x = area.x + 1;

        for (i, (key, desc)) in self.hints.iter().enumerate() {
            let sep = if i == 0 { "" } else { SEPARATOR };
            let entry = format!("{sep}{key} {desc}");
            // Keep one column free for the overflow marker
            if x + entry.chars().count() as u16 >= right {
                buf.set_string(x, y, OVERFLOW, Style::default().fg(theme::DIM));
                break;
            }
            x = buf.set_stringn(x, y, sep, usize::MAX, Style::default().fg(theme::DIM)).0;
            x = buf.set_stringn(x, y, key, usize::MAX, key_style).0;
            x = buf.set_stringn(x + 1, y, desc, usize::MAX, Style::default().fg(theme::FG)).0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(hints: Vec<(&'static str, &'static str)>, warning: bool, width: u16) -> Buffer {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        KeyboardHintWidget { hints, warning }.render(area, &mut buf);
        buf
    }

    fn line(buf: &Buffer) -> String {
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_hints_joined_with_separator() {
        let buf = render(vec![("Tab", "Move"), ("Esc", "Quit")], false, 40);
        assert!(line(&buf).starts_with(" Tab Move · Esc Quit"));
        assert_eq!(buf[(1, 0)].fg, theme::ACCENT);
    }

    #[test]
    fn test_warning_keys_use_warning_colour() {
        let buf = render(vec![("any key", "Dismiss")], true, 40);
        assert!(line(&buf).starts_with(" any key Dismiss"));
        assert_eq!(buf[(1, 0)].fg, theme::WARNING_RED);
        assert!(buf[(1, 0)].modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_narrow_footer_marks_overflow() {
        let buf = render(vec![("Tab", "Move"), ("Esc", "Quit")], false, 14);
        let text = line(&buf);
        assert!(text.starts_with(" Tab Move…"));
        assert!(!text.contains("Quit"));
    }
}
