use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph, Widget, Wrap};

use crate::ui::app::Warning;
use crate::ui::layout::centered;
use crate::ui::theme;

const DIALOG_WIDTH: u16 = 60;

/// Modal warning popup
pub struct WarningDialog<'a> {
    pub warning: &'a Warning,
}

impl Widget for WarningDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text_width = DIALOG_WIDTH.min(area.width).saturating_sub(4).max(1) as usize;
        let message_rows = self.warning.message.chars().count().div_ceil(text_width).max(1);
        // Borders, message, blank row, hint
        let height = message_rows as u16 + 4;
        let rect = centered(area, DIALOG_WIDTH, height);

        Clear.render(rect, buf);
        Paragraph::new(vec![
            Line::styled(self.warning.message.as_str(), Style::default().fg(theme::FG)),
            Line::from(""),
            Line::styled("Press any key to continue", Style::default().fg(theme::DIM)),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::bordered()
                .title(format!(" {} ", self.warning.title))
                .border_style(Style::default().fg(theme::WARNING_RED))
                .style(Style::default().bg(theme::HEADER_BG)),
        )
        .render(rect, buf);
    }
}
