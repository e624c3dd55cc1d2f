//! Renderer-neutral plot description.
//!
//! The terminal chart and the PNG renderer both draw from a `Figure`.

use crate::params::FigureSize;

/// How a series is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesStyle {
    /// Connected line
    Line,
    /// Sparse dots along the data
    Dotted,
    /// Vertical stem from zero with a marker on top
    Stem,
    /// Connected line with a marker at every point
    LineMarkers,
}

/// Palette shared by both renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesColor {
    Blue,
    Black,
    Red,
}

impl SeriesColor {
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            SeriesColor::Blue => (31, 119, 180),
            SeriesColor::Black => (40, 40, 40),
            SeriesColor::Red => (214, 39, 40),
        }
    }
}

/// One data series in a panel
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub style: SeriesStyle,
    pub color: SeriesColor,
    pub points: Vec<(f64, f64)>,
}

impl Series {
    pub fn new(
        label: impl Into<String>,
        style: SeriesStyle,
        color: SeriesColor,
        points: Vec<(f64, f64)>,
    ) -> Self {
        Self {
            label: label.into(),
            style,
            color,
            points,
        }
    }
}

/// One set of axes
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub grid: bool,
    pub series: Vec<Series>,
}

/// A titled stack of panels with its output size
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: String,
    pub size: FigureSize,
    pub panels: Vec<Panel>,
}

/// Smallest and largest finite value, `None` if there are none
pub fn finite_bounds(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Axis range around `bounds`, padded by `ratio` of the largest magnitude
///
/// Degenerate or empty data gets a unit-wide range so the axes stay drawable.
pub fn padded_range(bounds: Option<(f64, f64)>, ratio: f64) -> (f64, f64) {
    match bounds {
        None => (-1.0, 1.0),
        Some((lo, hi)) => {
            let pad = lo.abs().max(hi.abs()) * ratio;
            if hi - lo + 2.0 * pad <= f64::EPSILON {
                (lo - 1.0, hi + 1.0)
            } else {
                (lo - pad, hi + pad)
            }
        }
    }
}

/// Range spanning `bounds` exactly, widened only when degenerate
pub fn exact_range(bounds: Option<(f64, f64)>) -> (f64, f64) {
    match bounds {
        Some((lo, hi)) if hi > lo => (lo, hi),
        Some((lo, hi)) => (lo - 1.0, hi + 1.0),
        None => (0.0, 1.0),
    }
}
