//! PNG rendering with plotters.

use std::path::Path;

use log::info;
use plotters::coord::Shift;
use plotters::prelude::*;

use super::figure::{Figure, Panel, SeriesColor, SeriesStyle};
use super::font::ensure_font;
use crate::error::ToneError;
use crate::params::PlotConfig;

/// Target number of dots drawn for a dotted series
const DOTTED_POINTS: usize = 400;

/// Markers are skipped on denser line-marker series
const MAX_MARKERS: usize = 2000;

fn plot_err<E: std::fmt::Display>(e: E) -> ToneError {
    ToneError::Plot(e.to_string())
}

fn rgb(color: SeriesColor) -> RGBColor {
    let (r, g, b) = color.rgb();
    RGBColor(r, g, b)
}

/// Render `figure` and save it as a PNG at `path`
pub fn render_png(figure: &Figure, path: &Path, config: &PlotConfig) -> Result<(), ToneError> {
    let (width, height) = (figure.size.width_px, figure.size.height_px);
    let mut buffer = vec![0u8; width as usize * height as usize * 3];

    draw_figure(figure, &mut buffer, config)?;

    image::save_buffer(path, &buffer, width, height, image::ColorType::Rgb8)?;
    info!("Plot saved as {}", path.display());
    Ok(())
}

/// Draw `figure` into an RGB8 buffer sized to `figure.size`
pub fn draw_figure(figure: &Figure, buffer: &mut [u8], config: &PlotConfig) -> Result<(), ToneError> {
    let text = ensure_font(config);
    let size = (figure.size.width_px, figure.size.height_px);

    let root = BitMapBackend::with_buffer(buffer, size).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let body = if figure.panels.len() > 1 && text {
        root.titled(
            &figure.title,
            (config.font_family, config.title_font_px + 2).into_font(),
        )
        .map_err(plot_err)?
    } else {
        root.clone()
    };

    let areas = body.split_evenly((figure.panels.len().max(1), 1));
    for (panel, area) in figure.panels.iter().zip(areas.iter()) {
        draw_panel(panel, area, text, config)?;
    }

    root.present().map_err(plot_err)?;
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    panel: &Panel,
    area: &DrawingArea<DB, Shift>,
    text: bool,
    config: &PlotConfig,
) -> Result<(), ToneError> {
    let mut builder = ChartBuilder::on(area);
    builder.margin(8);
    if text {
        builder
            .caption(&panel.title, (config.font_family, config.title_font_px).into_font())
            .x_label_area_size(32)
            .y_label_area_size(56);
    }

    let (x0, x1) = panel.x_range;
    let (y0, y1) = panel.y_range;
    let mut chart = builder
        .build_cartesian_2d(x0..x1, y0..y1)
        .map_err(plot_err)?;

    let mut mesh = chart.configure_mesh();
    if !panel.grid {
        mesh.disable_mesh();
    }
    if text {
        mesh.x_desc(panel.x_label.as_str()).y_desc(panel.y_label.as_str());
    } else {
        mesh.x_labels(0).y_labels(0);
    }
    mesh.draw().map_err(plot_err)?;

    for series in &panel.series {
        let color = rgb(series.color);
        let points = &series.points;

        match series.style {
            SeriesStyle::Line => {
                chart
                    .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(1)))
                    .map_err(plot_err)?;
            }
            SeriesStyle::Dotted => {
                let step = (points.len() / DOTTED_POINTS).max(1);
                chart
                    .draw_series(
                        points
                            .iter()
                            .step_by(step)
                            .map(|&p| Circle::new(p, 1, color.filled())),
                    )
                    .map_err(plot_err)?;
            }
            SeriesStyle::Stem => {
                chart
                    .draw_series(
                        points
                            .iter()
                            .map(|&(x, y)| PathElement::new(vec![(x, 0.0), (x, y)], color)),
                    )
                    .map_err(plot_err)?;
                chart
                    .draw_series(points.iter().map(|&p| {
                        Circle::new(p, config.marker_radius_px, color.filled())
                    }))
                    .map_err(plot_err)?;
            }
            SeriesStyle::LineMarkers => {
                chart
                    .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(1)))
                    .map_err(plot_err)?;
                if points.len() <= MAX_MARKERS {
                    chart
                        .draw_series(points.iter().map(|&p| Circle::new(p, 2, color.filled())))
                        .map_err(plot_err)?;
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::figures::signal_figure;
    use crate::synth::Signal;

    #[test]
    fn test_render_png_writes_figure_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("signal.png");
        let config = PlotConfig::default();
        let signal = Signal::new((0..200).map(|i| (i as f32 * 0.1).sin() * 0.5).collect(), 100);

        render_png(&signal_figure(&signal, &config), &path, &config).unwrap();

        let img = image::open(&path).unwrap();
        assert_eq!(img.width(), config.time_size.width_px);
        assert_eq!(img.height(), config.time_size.height_px);
    }
}
