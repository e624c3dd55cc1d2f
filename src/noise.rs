//! Additive Gaussian noise at a requested SNR or absolute power.

use log::debug;
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::ToneError;

/// How much noise to add to a mixed signal
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoiseSpec {
    /// Leave the signal untouched
    None,

    /// Noise level relative to the signal's average power (dB)
    Snr { db: f64 },

    /// Absolute noise power (dB, 0 dB = unit variance)
    Power { db: f64 },
}

impl NoiseSpec {
    /// Build from the SNR and noise-power fields (0 means unset)
    pub fn from_fields(snr_db: f64, noise_power_db: f64) -> Result<Self, ToneError> {
        match (snr_db != 0.0, noise_power_db != 0.0) {
            (true, true) => Err(ToneError::ConflictingNoise),
            (true, false) => Ok(NoiseSpec::Snr { db: snr_db }),
            (false, true) => Ok(NoiseSpec::Power { db: noise_power_db }),
            (false, false) => Ok(NoiseSpec::None),
        }
    }
}

/// Convert decibels to a linear power ratio
pub fn db_to_linear(db: f64) -> f64 {
    10f64.powf(db / 10.0)
}

/// Mean of the squared samples
pub fn average_power(samples: &[f32]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().map(|&s| (s as f64) * (s as f64)).sum::<f64>() / samples.len() as f64
}

/// Average signal power in dB (negative infinity for silence)
pub fn average_power_db(samples: &[f32]) -> f64 {
    10.0 * average_power(samples).log10()
}

/// Linear noise variance for `spec` given the clean signal
pub fn noise_variance(spec: NoiseSpec, samples: &[f32]) -> Result<f64, ToneError> {
    match spec {
        NoiseSpec::None => Ok(0.0),
        NoiseSpec::Power { db } => Ok(db_to_linear(db)),
        NoiseSpec::Snr { db } => {
            let signal_db = average_power_db(samples);
            if !signal_db.is_finite() {
                return Err(ToneError::SilentSignal);
            }
            Ok(db_to_linear(signal_db - db))
        }
    }
}

/// Add zero-mean Gaussian noise in place, returning the variance used
pub fn add_noise<R: Rng + ?Sized>(
    samples: &mut [f32],
    spec: NoiseSpec,
    rng: &mut R,
) -> Result<f64, ToneError> {
    let variance = noise_variance(spec, samples)?;
    if variance == 0.0 {
        return Ok(0.0);
    }

    let normal = Normal::new(0.0, variance.sqrt())
        .map_err(|e| ToneError::Synthesis(format!("Invalid noise distribution: {}", e)))?;

    for sample in samples.iter_mut() {
        *sample += normal.sample(rng) as f32;
    }

    debug!("Added noise: {:?}, variance {:.6}", spec, variance);
    Ok(variance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn variance(values: &[f32]) -> f64 {
        let mean = values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64;
        values
            .iter()
            .map(|&v| (v as f64 - mean).powi(2))
            .sum::<f64>()
            / values.len() as f64
    }

    #[test]
    fn test_noise_spec_from_fields() {
        assert_eq!(NoiseSpec::from_fields(0.0, 0.0).unwrap(), NoiseSpec::None);
        assert_eq!(
            NoiseSpec::from_fields(20.0, 0.0).unwrap(),
            NoiseSpec::Snr { db: 20.0 }
        );
        assert_eq!(
            NoiseSpec::from_fields(0.0, -10.0).unwrap(),
            NoiseSpec::Power { db: -10.0 }
        );
    }

    #[test]
    fn test_conflicting_noise_always_rejected() {
        for (snr, power) in [(1.0, 1.0), (-5.0, 3.0), (40.0, -40.0), (0.001, -0.001)] {
            assert!(matches!(
                NoiseSpec::from_fields(snr, power),
                Err(ToneError::ConflictingNoise)
            ));
        }
    }

    #[test]
    fn test_average_power_of_constant() {
        let samples = vec![0.5f32; 100];
        assert!((average_power(&samples) - 0.25).abs() < 1e-9);
        assert!((average_power_db(&samples) - (-6.0206)).abs() < 1e-3);
    }

    #[test]
    fn test_noise_power_variance_converges() {
        let mut rng = StdRng::seed_from_u64(7);
        for db in [-20.0, -6.0, 0.0] {
            let mut samples = vec![0.0f32; 200_000];
            let used = add_noise(&mut samples, NoiseSpec::Power { db }, &mut rng).unwrap();
            let expected = db_to_linear(db);

            assert!((used - expected).abs() < 1e-12);
            let measured = variance(&samples);
            assert!(
                (measured - expected).abs() / expected < 0.03,
                "db {} measured {} expected {}",
                db,
                measured,
                expected
            );
        }
    }

    #[test]
    fn test_snr_sets_noise_relative_to_signal() {
        // Signal power 0.25 (-6.02 dB), SNR 10 dB -> noise power 0.025
        let samples = vec![0.5f32; 1000];
        let var = noise_variance(NoiseSpec::Snr { db: 10.0 }, &samples).unwrap();
        assert!((var - 0.025).abs() < 1e-9);
    }

    #[test]
    fn test_snr_on_silence_is_rejected() {
        let samples = vec![0.0f32; 1000];
        assert!(matches!(
            noise_variance(NoiseSpec::Snr { db: 10.0 }, &samples),
            Err(ToneError::SilentSignal)
        ));
    }

    #[test]
    fn test_no_noise_leaves_signal_untouched() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut samples = vec![0.1f32, -0.2, 0.3];
        let used = add_noise(&mut samples, NoiseSpec::None, &mut rng).unwrap();
        assert_eq!(used, 0.0);
        assert_eq!(samples, vec![0.1, -0.2, 0.3]);
    }
}
