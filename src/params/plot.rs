//! Plot rendering configuration.

/// Pixel size of a rendered figure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FigureSize {
    pub width_px: u32,
    pub height_px: u32,
}

impl FigureSize {
    pub const fn new(width_px: u32, height_px: u32) -> Self {
        Self {
            width_px,
            height_px,
        }
    }
}

/// Plot rendering configuration
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Time-domain plots (signal, power, discrete samples)
    /// 8 x 2.2 inches @ 100 dpi
    pub time_size: FigureSize,

    /// Two-panel FFT magnitude/phase plot
    /// 8 x 4 inches @ 100 dpi
    pub fft_size: FigureSize,

    /// Power spectral density plot
    /// 6.4 x 4.8 inches @ 100 dpi
    pub psd_size: FigureSize,

    /// Padding applied around the data range of time-domain plots
    /// 0.1 = 10% of the largest absolute sample
    pub y_padding_ratio: f64,

    /// Font family used for titles and axis labels
    pub font_family: &'static str,

    /// TrueType files tried in order when registering the plot font.
    /// Without any of them, figures are drawn without text.
    pub font_candidates: &'static [&'static str],

    /// Title font size (pixels)
    pub title_font_px: u32,

    /// Stem marker radius (pixels)
    pub marker_radius_px: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            time_size: FigureSize::new(800, 220),
            fft_size: FigureSize::new(800, 400),
            psd_size: FigureSize::new(640, 480),
            y_padding_ratio: 0.1,
            font_family: "sans-serif",
            font_candidates: &[
                "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
                "/usr/share/fonts/dejavu/DejaVuSans.ttf",
                "/usr/share/fonts/TTF/DejaVuSans.ttf",
                "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
                "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
                "/System/Library/Fonts/Supplemental/Arial.ttf",
                "/Library/Fonts/Arial.ttf",
                "C:\\Windows\\Fonts\\arial.ttf",
            ],
            title_font_px: 16,
            marker_radius_px: 3,
        }
    }
}
