use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::{Axis, Block, Chart, Dataset, GraphType, Paragraph, Widget};

use crate::plot::{Figure, Panel, SeriesStyle};
use crate::ui::theme;

/// Latest figure drawn as terminal charts, one per panel
pub struct PlotViewWidget<'a> {
    pub figure: Option<&'a Figure>,
}

impl Widget for PlotViewWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(figure) = self.figure else {
            Paragraph::new(Line::styled(
                "No plot yet. Run a plot action (F2-F6).",
                Style::default().fg(theme::DIM),
            ))
            .block(
                Block::bordered()
                    .title(" Plot ")
                    .border_style(Style::default().fg(theme::DIM)),
            )
            .render(area, buf);
            return;
        };

        let block = Block::bordered()
            .title(format!(" {} ", figure.title))
            .border_style(Style::default().fg(theme::DIM));
        let inner = block.inner(area);
        block.render(area, buf);

        if figure.panels.is_empty() {
            return;
        }
        let count = figure.panels.len() as u32;
        let rows = Layout::vertical(vec![Constraint::Ratio(1, count); figure.panels.len()])
            .split(inner);
        for (panel, rect) in figure.panels.iter().zip(rows.iter()) {
            render_panel(panel, *rect, buf);
        }
    }
}

fn render_panel(panel: &Panel, area: Rect, buf: &mut Buffer) {
    // Braille packs two dots per cell horizontally
    let max_points = (area.width as usize * 2).max(2);
    let data: Vec<Vec<(f64, f64)>> = panel
        .series
        .iter()
        .map(|series| decimate(&series.points, max_points))
        .collect();

    let datasets: Vec<Dataset> = panel
        .series
        .iter()
        .zip(&data)
        .map(|(series, points)| {
            let (marker, graph_type) = match series.style {
                SeriesStyle::Line | SeriesStyle::LineMarkers => (Marker::Braille, GraphType::Line),
                SeriesStyle::Dotted => (Marker::Dot, GraphType::Scatter),
                SeriesStyle::Stem => (Marker::Braille, GraphType::Bar),
            };
            let dataset = Dataset::default()
                .marker(marker)
                .graph_type(graph_type)
                .style(Style::default().fg(theme::series_color(series.color)))
                .data(points);
            if series.label.is_empty() {
                dataset
            } else {
                dataset.name(series.label.clone())
            }
        })
        .collect();

    let axis_style = Style::default().fg(theme::DIM);
    Chart::new(datasets)
        .block(Block::default().title(panel.title.clone()))
        .x_axis(
            Axis::default()
                .title(panel.x_label.clone())
                .style(axis_style)
                .bounds([panel.x_range.0, panel.x_range.1])
                .labels(axis_labels(panel.x_range)),
        )
        .y_axis(
            Axis::default()
                .title(panel.y_label.clone())
                .style(axis_style)
                .bounds([panel.y_range.0, panel.y_range.1])
                .labels(axis_labels(panel.y_range)),
        )
        .render(area, buf);
}

/// Reduce to about `max_points` by keeping each bucket's minimum and maximum
///
/// Non-finite points are dropped. Peaks survive, so dense audio still shows
/// its envelope.
pub fn decimate(points: &[(f64, f64)], max_points: usize) -> Vec<(f64, f64)> {
    let finite = |(x, y): &(f64, f64)| x.is_finite() && y.is_finite();
    if points.len() <= max_points {
        return points.iter().copied().filter(finite).collect();
    }

    let buckets = (max_points / 2).max(1);
    let size = points.len().div_ceil(buckets);
    let mut out = Vec::with_capacity(buckets * 2);

    for chunk in points.chunks(size) {
        let mut lo: Option<(f64, f64)> = None;
        let mut hi: Option<(f64, f64)> = None;
        for &point in chunk.iter().filter(|p| finite(*p)) {
            if lo.map_or(true, |l| point.1 < l.1) {
                lo = Some(point);
            }
            if hi.map_or(true, |h| point.1 > h.1) {
                hi = Some(point);
            }
        }
        if let (Some(lo), Some(hi)) = (lo, hi) {
            let (first, second) = if lo.0 <= hi.0 { (lo, hi) } else { (hi, lo) };
            out.push(first);
            if second != first {
                out.push(second);
            }
        }
    }
    out
}

fn axis_labels((lo, hi): (f64, f64)) -> Vec<String> {
    [lo, (lo + hi) / 2.0, hi].iter().map(|&v| format_tick(v)).collect()
}

fn format_tick(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1000.0 {
        format!("{:.0}", value)
    } else if magnitude >= 1.0 {
        format!("{:.1}", value)
    } else {
        format!("{:.3}", value)
    }
}
