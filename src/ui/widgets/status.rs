use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::ui::theme;

/// Last action result and the tail of the log
pub struct StatusWidget<'a> {
    pub summary: Option<&'a str>,
    pub log_lines: Vec<String>,
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" Status ")
            .border_style(Style::default().fg(theme::DIM));
        let rows = block.inner(area).height as usize;

        let mut lines = Vec::with_capacity(rows);
        if let Some(summary) = self.summary {
            lines.push(Line::styled(summary.to_string(), Style::default().fg(theme::ACCENT)));
        }
        let room = rows.saturating_sub(lines.len());
        let skip = self.log_lines.len().saturating_sub(room);
        lines.extend(
            self.log_lines
                .into_iter()
                .skip(skip)
                .map(|line| Line::styled(line, Style::default().fg(theme::DIM))),
        );

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
