//! Figures for each tone mixer action.

use super::figure::{
    exact_range, finite_bounds, padded_range, Figure, Panel, Series, SeriesColor, SeriesStyle,
};
use crate::analysis::{instantaneous_power_db, SampledSignal, Spectrum};
use crate::noise::average_power_db;
use crate::params::PlotConfig;
use crate::synth::Signal;

/// Dynamic range shown below the loudest sample on the power plot (dB)
const POWER_VIEW_RANGE_DB: f64 = 80.0;

fn time_points(signal: &Signal) -> Vec<(f64, f64)> {
    signal
        .time_axis()
        .into_iter()
        .zip(signal.samples.iter().map(|&s| s as f64))
        .collect()
}

fn amplitude_range(signal: &Signal, config: &PlotConfig) -> (f64, f64) {
    padded_range(
        finite_bounds(signal.samples.iter().map(|&s| s as f64)),
        config.y_padding_ratio,
    )
}

/// Mixed signal against time
pub fn signal_figure(signal: &Signal, config: &PlotConfig) -> Figure {
    let title = "Mixed Signal".to_string();
    Figure {
        title: title.clone(),
        size: config.time_size,
        panels: vec![Panel {
            title,
            x_label: "Time (s)".to_string(),
            y_label: "Amplitude".to_string(),
            x_range: exact_range(Some((0.0, signal.duration_s()))),
            y_range: amplitude_range(signal, config),
            grid: true,
            series: vec![Series::new(
                "signal",
                SeriesStyle::Line,
                SeriesColor::Blue,
                time_points(signal),
            )],
        }],
    }
}

/// Instantaneous power in dB with the average power as a reference line
pub fn power_figure(signal: &Signal, config: &PlotConfig) -> Figure {
    let power_db = instantaneous_power_db(&signal.samples);
    let average_db = average_power_db(&signal.samples);

    // Exact zeros sit at the power floor; show only the top of the range
    let (y_lo, y_hi) = match finite_bounds(power_db.iter().copied()) {
        Some((lo, hi)) => (lo.max(hi - POWER_VIEW_RANGE_DB) - 1.0, hi + 3.0),
        None => (-1.0, 1.0),
    };

    let points: Vec<(f64, f64)> = signal
        .time_axis()
        .into_iter()
        .zip(power_db.iter().map(|&db| db.clamp(y_lo, y_hi)))
        .collect();

    let duration = signal.duration_s();
    let mut series = vec![Series::new(
        "power",
        SeriesStyle::Line,
        SeriesColor::Blue,
        points,
    )];
    if average_db.is_finite() {
        series.push(Series::new(
            format!("average {:.2} dB", average_db),
            SeriesStyle::Line,
            SeriesColor::Red,
            vec![(0.0, average_db), (duration, average_db)],
        ));
    }

    let title = if average_db.is_finite() {
        format!("Signal Power (average {:.2} dB)", average_db)
    } else {
        "Signal Power (silent)".to_string()
    };

    Figure {
        title: title.clone(),
        size: config.time_size,
        panels: vec![Panel {
            title,
            x_label: "Time (s)".to_string(),
            y_label: "Power (dB)".to_string(),
            x_range: exact_range(Some((0.0, duration))),
            y_range: (y_lo, y_hi),
            grid: true,
            series,
        }],
    }
}

/// Original signal (dotted) with the discrete samples as stems
pub fn sampled_figure(signal: &Signal, sampled: &SampledSignal, config: &PlotConfig) -> Figure {
    let title = format!(
        "DT-Signal obtained by sampling with Fs = {} Hz",
        sampled.rate_hz
    );
    let stems = sampled
        .times
        .iter()
        .copied()
        .zip(sampled.values.iter().map(|&v| v as f64))
        .collect();
    let x_end = signal
        .duration_s()
        .max(sampled.times.last().copied().unwrap_or(0.0));

    Figure {
        title: title.clone(),
        size: config.time_size,
        panels: vec![Panel {
            title,
            x_label: "Time (seconds)".to_string(),
            y_label: String::new(),
            x_range: exact_range(Some((0.0, x_end))),
            y_range: amplitude_range(signal, config),
            grid: false,
            series: vec![
                Series::new(
                    "continuous",
                    SeriesStyle::Dotted,
                    SeriesColor::Black,
                    time_points(signal),
                ),
                Series::new("samples", SeriesStyle::Stem, SeriesColor::Red, stems),
            ],
        }],
    }
}

/// FFT magnitude and phase, one panel each
pub fn fft_figure(spectrum: &Spectrum, config: &PlotConfig) -> Figure {
    let x_range = exact_range(finite_bounds(spectrum.frequencies.iter().copied()));
    let panel = |title: &str, y_label: &str, values: &[f64]| Panel {
        title: title.to_string(),
        x_label: "Frequency (Hz)".to_string(),
        y_label: y_label.to_string(),
        x_range,
        y_range: padded_range(finite_bounds(values.iter().copied()), 0.05),
        grid: false,
        series: vec![Series::new(
            title,
            SeriesStyle::LineMarkers,
            SeriesColor::Blue,
            spectrum
                .frequencies
                .iter()
                .copied()
                .zip(values.iter().copied())
                .collect(),
        )],
    };

    Figure {
        title: "FFT".to_string(),
        size: config.fft_size,
        panels: vec![
            panel("FFT Magnitude", "Magnitude", &spectrum.magnitude),
            panel("FFT Phase", "Phase", &spectrum.phase),
        ],
    }
}

/// Power spectral density in dB against frequency
pub fn psd_figure(frequencies: &[f64], psd_db: &[f64], config: &PlotConfig) -> Figure {
    let title = "Power Spectral Density".to_string();
    Figure {
        title: title.clone(),
        size: config.psd_size,
        panels: vec![Panel {
            title,
            x_label: "Frequency (Hz)".to_string(),
            y_label: "Magnitude (dB)".to_string(),
            x_range: exact_range(finite_bounds(frequencies.iter().copied())),
            y_range: padded_range(finite_bounds(psd_db.iter().copied()), 0.05),
            grid: true,
            series: vec![Series::new(
                "psd",
                SeriesStyle::LineMarkers,
                SeriesColor::Blue,
                frequencies
                    .iter()
                    .copied()
                    .zip(psd_db.iter().copied())
                    .collect(),
            )],
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{psd_db, sample_signal, spectrum};

    fn ramp() -> Signal {
        Signal::new(vec![-0.5, -0.25, 0.0, 0.25, 0.5], 4)
    }

    #[test]
    fn test_signal_figure_axes() {
        let figure = signal_figure(&ramp(), &PlotConfig::default());
        let panel = &figure.panels[0];

        assert_eq!(figure.size, PlotConfig::default().time_size);
        assert_eq!(panel.series[0].points.len(), 5);
        assert_eq!(panel.x_range, (0.0, 1.25));
        assert!(panel.y_range.0 < -0.5 && panel.y_range.1 > 0.5);
    }

    #[test]
    fn test_power_figure_marks_average() {
        let signal = Signal::new(vec![0.5; 8], 8);
        let figure = power_figure(&signal, &PlotConfig::default());
        let panel = &figure.panels[0];

        assert_eq!(panel.series.len(), 2);
        let average = panel.series[1].points[0].1;
        assert!((average - (-6.0206)).abs() < 1e-3);
        assert!(panel.y_range.0 <= average && average <= panel.y_range.1);
    }

    #[test]
    fn test_power_figure_of_silence() {
        let signal = Signal::new(vec![0.0; 8], 8);
        let figure = power_figure(&signal, &PlotConfig::default());
        assert_eq!(figure.panels[0].series.len(), 1);
        assert!(figure.title.contains("silent"));
    }

    #[test]
    fn test_sampled_figure_has_stems() {
        let signal = ramp();
        let sampled = sample_signal(&signal, 2.0, 1.0, 100).unwrap();
        let figure = sampled_figure(&signal, &sampled, &PlotConfig::default());
        let panel = &figure.panels[0];

        assert!(figure.title.contains("Fs = 2 Hz"));
        assert_eq!(panel.series[0].style, SeriesStyle::Dotted);
        assert_eq!(panel.series[1].style, SeriesStyle::Stem);
        assert_eq!(panel.series[1].points.len(), 2);
    }

    #[test]
    fn test_fft_and_psd_figures() {
        let signal = Signal::new(vec![1.0, 0.0, -1.0, 0.0, 1.0, 0.0, -1.0, 0.0], 8);
        let spec = spectrum(&signal.samples, 8, 8);
        let fft = fft_figure(&spec, &PlotConfig::default());
        assert_eq!(fft.panels.len(), 2);
        assert_eq!(fft.panels[0].x_range, (-4.0, 3.0));

        let psd = psd_db(&signal.samples, 8, 8);
        let figure = psd_figure(&spec.frequencies, &psd, &PlotConfig::default());
        assert_eq!(figure.panels[0].series[0].points.len(), 8);
        assert!(figure.panels[0].grid);
    }
}
