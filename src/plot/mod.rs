//! Plot descriptions, per-action figures and PNG rendering.

mod figure;
mod figures;
mod font;
mod render;

pub use figure::{
    exact_range, finite_bounds, padded_range, Figure, Panel, Series, SeriesColor, SeriesStyle,
};
pub use figures::{fft_figure, power_figure, psd_figure, sampled_figure, signal_figure};
pub use render::{draw_figure, render_png};
