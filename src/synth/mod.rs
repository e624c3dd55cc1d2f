//! Tone synthesis and mixing.
//!
//! Tracks are rendered by the Glicol engine, which sums them into a single
//! mono buffer of exactly `round(sample_rate * duration)` samples.

mod composition;

use glicol::Engine;
use log::debug;

use crate::error::ToneError;
use crate::params::audio_constants::BLOCK_SIZE;

pub use composition::compose;

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
    Sawtooth,
}

impl Waveform {
    pub const ALL: [Waveform; 4] = [
        Waveform::Sine,
        Waveform::Square,
        Waveform::Triangle,
        Waveform::Sawtooth,
    ];
}

/// A waveform playing at a fixed frequency for the whole mix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    pub waveform: Waveform,
    pub frequency_hz: f64,
}

/// Mixer settings for one generation request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixerConfig {
    /// Output sample rate (Hz)
    pub sample_rate_hz: u32,

    /// Peak amplitude of the mix (linear)
    pub amplitude: f32,

    /// Mix length (seconds)
    pub duration_s: f64,
}

impl MixerConfig {
    /// Number of samples the mix will contain
    pub fn sample_count(&self) -> usize {
        (self.sample_rate_hz as f64 * self.duration_s).round() as usize
    }
}

/// Mono sample buffer with its sample rate
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    pub samples: Vec<f32>,
    pub sample_rate_hz: u32,
}

impl Signal {
    pub fn new(samples: Vec<f32>, sample_rate_hz: u32) -> Self {
        Self {
            samples,
            sample_rate_hz,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Length of the buffer in seconds
    pub fn duration_s(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate_hz as f64
    }

    /// Time of each sample, spread evenly over `[0, duration]`
    pub fn time_axis(&self) -> Vec<f64> {
        crate::analysis::linspace(0.0, self.duration_s(), self.samples.len())
    }
}

/// Sums tracks into one buffer
#[derive(Debug, Clone)]
pub struct Mixer {
    config: MixerConfig,
    tracks: Vec<Track>,
}

impl Mixer {
    pub fn new(config: MixerConfig) -> Self {
        Self {
            config,
            tracks: Vec::new(),
        }
    }

    pub fn add_track(&mut self, track: Track) {
        self.tracks.push(track);
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Render every track and sum them
    ///
    /// With no tracks the result is silence of the configured length.
    pub fn mix(&self) -> Result<Signal, ToneError> {
        if self.config.duration_s <= 0.0 {
            return Err(ToneError::InvalidDuration);
        }

        let total = self.config.sample_count();
        let limit = self.config.amplitude.abs();

        let Some(code) = compose(&self.tracks, self.config.amplitude) else {
            return Ok(Signal::new(vec![0.0; total], self.config.sample_rate_hz));
        };
        debug!("Glicol composition:\n{}", code);

        let mut engine = Engine::<BLOCK_SIZE>::new();
        engine.set_sr(self.config.sample_rate_hz as usize);
        engine.update_with_code(&code);
        engine
            .update()
            .map_err(|e| ToneError::Synthesis(format!("Glicol engine init failed: {:?}", e)))?;

        let mut samples = Vec::with_capacity(total);
        while samples.len() < total {
            let (buffers, _) = engine.next_block(vec![]);
            let to_copy = (total - samples.len()).min(BLOCK_SIZE);

            // Hard limiter keeps the sum inside the requested amplitude
            samples.extend((0..to_copy).map(|i| buffers[0][i].clamp(-limit, limit)));
        }

        debug!(
            "Mixed {} track(s) into {} samples @ {}Hz",
            self.tracks.len(),
            samples.len(),
            self.config.sample_rate_hz
        );

        Ok(Signal::new(samples, self.config.sample_rate_hz))
    }
}
