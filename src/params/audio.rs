//! Mixer and playback defaults.

/// Defaults applied when a mixer field is left blank (or zero)
#[derive(Debug, Clone)]
pub struct MixerDefaults {
    /// Mixer sample rate (Hz)
    pub sample_rate_hz: u32,

    /// Mixer output amplitude (linear, 1.0 = full scale)
    pub amplitude: f32,

    /// Longest buffer any action may allocate (samples, sampled points or FFT bins)
    /// 10M = about 3.8 minutes @ 44.1kHz
    pub max_samples: usize,
}

impl Default for MixerDefaults {
    fn default() -> Self {
        Self {
            sample_rate_hz: 44100,
            amplitude: 0.5,
            max_samples: 10_000_000,
        }
    }
}

/// Audio constants (compile-time, match Glicol engine setup)
pub mod audio_constants {
    /// Audio block size (samples per buffer)
    /// 128 = 2.9ms @ 44.1kHz
    pub const BLOCK_SIZE: usize = 128;

    /// Drain wait after the last buffer when the device reports no latency (ms)
    pub const DRAIN_TAIL_MS: u64 = 100;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixer_defaults() {
        let defaults = MixerDefaults::default();
        assert_eq!(defaults.sample_rate_hz, 44100);
        assert!((defaults.amplitude - 0.5).abs() < f32::EPSILON);
        assert_eq!(defaults.max_samples, 10_000_000);
    }
}
