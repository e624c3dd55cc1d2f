use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout regions
pub struct ScreenLayout {
    pub header: Rect,
    pub form: Rect,
    pub plot: Rect,
    pub status: Rect,
    pub footer: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect, form_width: u16) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(10),   // Form + plot
                Constraint::Length(1), // Key hints
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(form_width), Constraint::Min(20)])
            .split(rows[1]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(7)])
            .split(columns[1]);

        Self {
            header: rows[0],
            form: columns[0],
            plot: right[0],
            status: right[1],
            footer: rows[2],
        }
    }
}

/// Rect of `width` x `height` centred in `area`, clipped to it
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_covers_screen() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 120, 40), 58);
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.footer.y, 39);
        assert_eq!(layout.form.width, 58);
        assert_eq!(layout.plot.x, 58);
        assert_eq!(layout.status.height, 7);
    }

    #[test]
    fn test_centered_clips_to_area() {
        let rect = centered(Rect::new(0, 0, 20, 10), 40, 4);
        assert_eq!(rect, Rect::new(0, 3, 20, 4));
    }
}
