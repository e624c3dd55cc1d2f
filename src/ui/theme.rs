use ratatui::style::Color;

use crate::plot::SeriesColor;

pub const BG: Color = Color::Rgb(20, 20, 25);
pub const FG: Color = Color::Rgb(200, 200, 210);
pub const DIM: Color = Color::Rgb(80, 80, 90);
pub const ACCENT: Color = Color::Rgb(0, 200, 150);
pub const WARNING_RED: Color = Color::Rgb(220, 50, 50);
pub const SAVE_YELLOW: Color = Color::Rgb(220, 200, 50);
pub const HEADER_BG: Color = Color::Rgb(35, 35, 45);
pub const SELECTED_BG: Color = Color::Rgb(40, 45, 55);

/// Terminal colour for a figure series; black is unreadable on the dark background
pub fn series_color(color: SeriesColor) -> Color {
    match color {
        SeriesColor::Blue => Color::Rgb(100, 170, 255),
        SeriesColor::Black => FG,
        SeriesColor::Red => Color::Rgb(255, 90, 90),
    }
}
