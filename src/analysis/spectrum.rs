//! FFT magnitude/phase and power spectral density.

use rustfft::{num_complex::Complex, FftPlanner};

use super::power::POWER_FLOOR;
use crate::error::ToneError;

/// Spectral plots need one FFT bin per hertz
pub fn check_fft_size(fft_size: u32, sample_rate_hz: u32) -> Result<(), ToneError> {
    if fft_size != sample_rate_hz {
        return Err(ToneError::FftSizeMismatch {
            fft_size,
            sample_rate: sample_rate_hz,
        });
    }
    Ok(())
}

/// Rotate a spectrum so the zero-frequency bin sits at index `n / 2`
pub fn fft_shift<T: Clone>(values: &[T]) -> Vec<T> {
    let n = values.len();
    let split = n - n / 2;
    values[split..]
        .iter()
        .chain(values[..split].iter())
        .cloned()
        .collect()
}

/// Bin frequencies (Hz) matching `fft_shift` order
pub fn frequency_axis(fft_size: usize, sample_rate_hz: u32) -> Vec<f64> {
    let resolution = sample_rate_hz as f64 / fft_size as f64;
    let half = (fft_size / 2) as f64;
    (0..fft_size)
        .map(|k| (k as f64 - half) * resolution)
        .collect()
}

/// Forward FFT over exactly `fft_size` points (truncated or zero-padded)
fn forward_fft(samples: &[f32], fft_size: usize) -> Vec<Complex<f64>> {
    let mut buffer: Vec<Complex<f64>> = samples
        .iter()
        .take(fft_size)
        .map(|&s| Complex::new(s as f64, 0.0))
        .collect();
    buffer.resize(fft_size, Complex::new(0.0, 0.0));

    if fft_size > 0 {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(fft_size);
        fft.process(&mut buffer);
    }
    buffer
}

/// Centred FFT magnitude and phase
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    pub frequencies: Vec<f64>,
    pub magnitude: Vec<f64>,
    /// Radians in (-pi, pi]
    pub phase: Vec<f64>,
}

impl Spectrum {
    /// Frequency of the largest magnitude bin
    pub fn peak_frequency(&self) -> Option<f64> {
        self.magnitude
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| self.frequencies[i])
    }
}

/// FFT of `samples`, shifted so frequencies run from -fs/2 to fs/2
pub fn spectrum(samples: &[f32], fft_size: usize, sample_rate_hz: u32) -> Spectrum {
    let shifted = fft_shift(&forward_fft(samples, fft_size));
    Spectrum {
        frequencies: frequency_axis(fft_size, sample_rate_hz),
        magnitude: shifted.iter().map(|c| c.norm()).collect(),
        phase: shifted.iter().map(|c| c.arg()).collect(),
    }
}

/// Power spectral density in dB: `10 log10(|X|^2 / (n * fs))`, shifted
pub fn psd_db(samples: &[f32], fft_size: usize, sample_rate_hz: u32) -> Vec<f64> {
    let scale = fft_size as f64 * sample_rate_hz as f64;
    let psd: Vec<f64> = forward_fft(samples, fft_size)
        .iter()
        .map(|c| 10.0 * (c.norm_sqr() / scale).max(POWER_FLOOR).log10())
        .collect();
    fft_shift(&psd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn sine(freq: f32, sample_rate: u32, len: usize) -> Vec<f32> {
        (0..len)
            .map(|i| (2.0 * PI * freq * i as f32 / sample_rate as f32).sin())
            .collect()
    }

    #[test]
    fn test_fft_size_must_match_sample_rate() {
        assert!(check_fft_size(44100, 44100).is_ok());
        for (fft, rate) in [(1024, 44100), (44100, 48000), (1, 2), (8000, 7999)] {
            assert!(matches!(
                check_fft_size(fft, rate),
                Err(ToneError::FftSizeMismatch { .. })
            ));
        }
    }

    #[test]
    fn test_fft_shift_even_and_odd() {
        assert_eq!(fft_shift(&[0, 1, 2, 3]), vec![2, 3, 0, 1]);
        assert_eq!(fft_shift(&[0, 1, 2, 3, 4]), vec![3, 4, 0, 1, 2]);
        assert!(fft_shift::<i32>(&[]).is_empty());
    }

    #[test]
    fn test_frequency_axis_is_centred() {
        let freqs = frequency_axis(8, 8);
        assert_eq!(freqs, vec![-4.0, -3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_spectrum_peaks_at_tone() {
        let rate = 1000;
        let samples = sine(125.0, rate, rate as usize);
        let spec = spectrum(&samples, rate as usize, rate);

        assert_eq!(spec.magnitude.len(), 1000);
        let peak = spec.peak_frequency().unwrap();
        assert!((peak.abs() - 125.0).abs() < 1e-9);
    }

    #[test]
    fn test_spectrum_zero_pads_short_buffers() {
        let spec = spectrum(&[1.0, 1.0], 8, 8);
        assert_eq!(spec.magnitude.len(), 8);
        // DC bin sits at n/2 after shifting
        assert!((spec.magnitude[4] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_psd_of_silence_is_finite() {
        let psd = psd_db(&[0.0; 16], 16, 16);
        assert_eq!(psd.len(), 16);
        assert!(psd.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_psd_scaling() {
        // Unit impulse: |X|^2 = 1 in every bin, so PSD = 1 / (n * fs)
        let mut samples = vec![0.0f32; 10];
        samples[0] = 1.0;
        let psd = psd_db(&samples, 10, 10);
        for value in psd {
            assert!((value - (-20.0)).abs() < 1e-9);
        }
    }
}
