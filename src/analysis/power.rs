//! Per-sample power in decibels.

/// Smallest positive power, so silent samples still map to a finite dB value
pub const POWER_FLOOR: f64 = f64::MIN_POSITIVE;

/// dB value of the power floor (about -3077 dB)
pub fn power_floor_db() -> f64 {
    10.0 * POWER_FLOOR.log10()
}

/// `10 * log10(x^2)` for every sample
pub fn instantaneous_power_db(samples: &[f32]) -> Vec<f64> {
    samples
        .iter()
        .map(|&s| {
            let power = (s as f64) * (s as f64);
            10.0 * power.max(POWER_FLOOR).log10()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instantaneous_power_db() {
        let db = instantaneous_power_db(&[1.0, -0.1, 0.0]);
        assert!(db[0].abs() < 1e-9);
        assert!((db[1] - (-20.0)).abs() < 1e-4);
        assert!(db[2].is_finite());
        assert_eq!(db[2], power_floor_db());
    }
}
