//! Discrete-time sampling by linear interpolation.

use crate::error::ToneError;
use crate::synth::Signal;

/// `n` evenly spaced points over `[start, stop]`, both ends included
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { stop } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Linear interpolation of `(xp, fp)` at `x`, clamped to the end values
///
/// `xp` must be increasing and the same length as `fp`.
pub fn interp(x: f64, xp: &[f64], fp: &[f32]) -> f32 {
    let n = xp.len().min(fp.len());
    if n == 0 {
        return 0.0;
    }
    if x <= xp[0] {
        return fp[0];
    }
    if x >= xp[n - 1] {
        return fp[n - 1];
    }

    // First grid point strictly greater than x
    let hi = xp[..n].partition_point(|&p| p <= x);
    let lo = hi - 1;
    let span = xp[hi] - xp[lo];
    if span <= 0.0 {
        return fp[lo];
    }
    let t = (x - xp[lo]) / span;
    (fp[lo] as f64 + (fp[hi] as f64 - fp[lo] as f64) * t) as f32
}

/// Result of sampling a signal at a new rate
#[derive(Debug, Clone, PartialEq)]
pub struct SampledSignal {
    /// Sampling rate (Hz)
    pub rate_hz: f64,
    pub times: Vec<f64>,
    pub values: Vec<f32>,
}

/// Sample `signal` at `rate_hz` over `duration_s` seconds
///
/// Produces `floor(rate * duration)` points spread evenly over the duration,
/// each linearly interpolated from the original buffer laid out on
/// `linspace(0, len / fs, len)`. More than `max_points` is an error.
pub fn sample_signal(
    signal: &Signal,
    rate_hz: f64,
    duration_s: f64,
    max_points: usize,
) -> Result<SampledSignal, ToneError> {
    if rate_hz <= 0.0 {
        return Err(ToneError::InvalidSamplingRate);
    }
    if duration_s <= 0.0 {
        return Err(ToneError::InvalidDuration);
    }

    let points = (rate_hz * duration_s).floor();
    if points > max_points as f64 {
        return Err(ToneError::TooManySamplingPoints {
            rate: rate_hz,
            duration: duration_s,
            points,
            max: max_points,
        });
    }

    let count = points as usize;
    if count == 0 {
        return Err(ToneError::EmptySampling {
            rate: rate_hz,
            duration: duration_s,
        });
    }

    let original_times = signal.time_axis();
    let times = linspace(0.0, duration_s, count);
    let values = times
        .iter()
        .map(|&t| interp(t, &original_times, &signal.samples))
        .collect();

    Ok(SampledSignal {
        rate_hz,
        times,
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX_POINTS: usize = 1_000_000;

    #[test]
    fn test_linspace_endpoints() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_interp_between_points() {
        let xp = [0.0, 1.0, 2.0];
        let fp = [0.0f32, 10.0, -10.0];

        assert_eq!(interp(0.5, &xp, &fp), 5.0);
        assert_eq!(interp(1.0, &xp, &fp), 10.0);
        assert_eq!(interp(1.25, &xp, &fp), 5.0);
        // Clamped outside the grid
        assert_eq!(interp(-1.0, &xp, &fp), 0.0);
        assert_eq!(interp(3.0, &xp, &fp), -10.0);
    }

    #[test]
    fn test_sample_count_is_floor_of_rate_times_duration() {
        let signal = Signal::new((0..1000).map(|i| i as f32).collect(), 1000);
        for (rate, duration, expected) in [(10.0, 1.0, 10), (7.5, 0.5, 3), (33.0, 0.9, 29)] {
            let sampled = sample_signal(&signal, rate, duration, MAX_POINTS).unwrap();
            assert_eq!(sampled.times.len(), expected);
            assert_eq!(sampled.values.len(), expected);
        }
    }

    #[test]
    fn test_sampled_values_interpolate_neighbours() {
        let samples: Vec<f32> = (0..101).map(|i| ((i * 37) % 11) as f32 - 5.0).collect();
        let signal = Signal::new(samples.clone(), 100);
        let original_times = signal.time_axis();
        let sampled = sample_signal(&signal, 7.0, 1.0, MAX_POINTS).unwrap();

        for (&t, &v) in sampled.times.iter().zip(&sampled.values) {
            let hi = original_times
                .iter()
                .position(|&p| p >= t)
                .unwrap_or(samples.len() - 1);
            let lo = hi.saturating_sub(1);
            let expected = if hi == lo || original_times[hi] == t {
                samples[hi]
            } else {
                let frac = (t - original_times[lo]) / (original_times[hi] - original_times[lo]);
                (samples[lo] as f64 + (samples[hi] - samples[lo]) as f64 * frac) as f32
            };
            assert!((v - expected).abs() < 1e-4, "t {} got {} want {}", t, v, expected);
        }
    }

    #[test]
    fn test_sampling_rejects_bad_input() {
        let signal = Signal::new(vec![0.0; 10], 10);
        assert!(matches!(
            sample_signal(&signal, 0.0, 1.0, MAX_POINTS),
            Err(ToneError::InvalidSamplingRate)
        ));
        assert!(matches!(
            sample_signal(&signal, 10.0, -1.0, MAX_POINTS),
            Err(ToneError::InvalidDuration)
        ));
        assert!(matches!(
            sample_signal(&signal, 0.5, 1.0, MAX_POINTS),
            Err(ToneError::EmptySampling { .. })
        ));
    }

    #[test]
    fn test_sampling_point_limit() {
        let signal = Signal::new(vec![0.0; 100], 100);
        assert_eq!(sample_signal(&signal, 50.0, 1.0, 50).unwrap().values.len(), 50);

        let err = sample_signal(&signal, 1e13, 1.0, MAX_POINTS).unwrap_err();
        assert!(matches!(err, ToneError::TooManySamplingPoints { max: MAX_POINTS, .. }));
        assert_eq!(err.title(), "Invalid Sampling Rate");
    }
}
