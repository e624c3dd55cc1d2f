//! Form fields and their numeric parsing.
//!
//! Every field is free text. A blank field reads as `0.0`; anything else
//! must parse as a finite number or the whole request is rejected.

use crate::error::ToneError;
use crate::noise::NoiseSpec;
use crate::params::MixerDefaults;
use crate::synth::{MixerConfig, Track, Waveform};

/// One numeric input of the tone mixer form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    SampleRate,
    Amplitude,
    SineFrequency,
    SquareFrequency,
    TriangleFrequency,
    SawtoothFrequency,
    Snr,
    NoisePower,
    Duration,
    SamplingRate,
    FftSize,
}

impl Field {
    /// Fields in form order
    pub const ALL: [Field; 11] = [
        Field::SampleRate,
        Field::Amplitude,
        Field::SineFrequency,
        Field::SquareFrequency,
        Field::TriangleFrequency,
        Field::SawtoothFrequency,
        Field::Snr,
        Field::NoisePower,
        Field::Duration,
        Field::SamplingRate,
        Field::FftSize,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::SampleRate => "Mixer Sampling Rate (Hz)",
            Field::Amplitude => "Mixer Amplitude",
            Field::SineFrequency => "Sine Wave Frequency (Hz)",
            Field::SquareFrequency => "Square Wave Frequency (Hz)",
            Field::TriangleFrequency => "Triangle Wave Frequency (Hz)",
            Field::SawtoothFrequency => "Sawtooth Wave Frequency (Hz)",
            Field::Snr => "SNR (dB)",
            Field::NoisePower => "Noise Power (dB)",
            Field::Duration => "Duration (seconds)",
            Field::SamplingRate => "Discrete Sampling Rate (Hz)",
            Field::FftSize => "FFT Size",
        }
    }

    /// Frequency field for a waveform
    pub fn for_waveform(waveform: Waveform) -> Self {
        match waveform {
            Waveform::Sine => Field::SineFrequency,
            Waveform::Square => Field::SquareFrequency,
            Waveform::Triangle => Field::TriangleFrequency,
            Waveform::Sawtooth => Field::SawtoothFrequency,
        }
    }
}

/// Parse one field: blank is `0.0`, anything else must be a finite number
pub fn parse_field(label: &str, text: &str) -> Result<f64, ToneError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ToneError::InvalidNumber {
            field: label.to_string(),
            text: trimmed.to_string(),
        }),
    }
}

/// Raw text of every form field
#[derive(Debug, Clone, PartialEq)]
pub struct FormValues {
    texts: [String; Field::ALL.len()],
}

impl Default for FormValues {
    fn default() -> Self {
        Self::with_defaults(&MixerDefaults::default())
    }
}

impl FormValues {
    /// All fields blank except the mixer sample rate and amplitude
    pub fn with_defaults(defaults: &MixerDefaults) -> Self {
        let mut values = Self {
            texts: Default::default(),
        };
        values.set(Field::SampleRate, defaults.sample_rate_hz.to_string());
        values.set(Field::Amplitude, defaults.amplitude.to_string());
        values
    }

    pub fn get(&self, field: Field) -> &str {
        &self.texts[field.index()]
    }

    pub fn set(&mut self, field: Field, text: impl Into<String>) {
        self.texts[field.index()] = text.into();
    }

    pub fn text_mut(&mut self, field: Field) -> &mut String {
        &mut self.texts[field.index()]
    }

    fn value(&self, field: Field) -> Result<f64, ToneError> {
        parse_field(field.label(), self.get(field))
    }

    /// Parse every field into a request
    pub fn parse(&self) -> Result<ToneRequest, ToneError> {
        Ok(ToneRequest {
            sample_rate_hz: self.value(Field::SampleRate)?,
            amplitude: self.value(Field::Amplitude)?,
            sine_hz: self.value(Field::SineFrequency)?,
            square_hz: self.value(Field::SquareFrequency)?,
            triangle_hz: self.value(Field::TriangleFrequency)?,
            sawtooth_hz: self.value(Field::SawtoothFrequency)?,
            snr_db: self.value(Field::Snr)?,
            noise_power_db: self.value(Field::NoisePower)?,
            duration_s: self.value(Field::Duration)?,
            sampling_rate_hz: self.value(Field::SamplingRate)?,
            fft_size: self.value(Field::FftSize)?,
        })
    }
}

/// Parsed numeric form values
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ToneRequest {
    pub sample_rate_hz: f64,
    pub amplitude: f64,
    pub sine_hz: f64,
    pub square_hz: f64,
    pub triangle_hz: f64,
    pub sawtooth_hz: f64,
    pub snr_db: f64,
    pub noise_power_db: f64,
    pub duration_s: f64,
    pub sampling_rate_hz: f64,
    pub fft_size: f64,
}

impl ToneRequest {
    /// Mixer configuration; zero sample rate or amplitude fall back to defaults
    ///
    /// Rejects mixes longer than `defaults.max_samples` before anything is allocated.
    pub fn mixer_config(&self, defaults: &MixerDefaults) -> Result<MixerConfig, ToneError> {
        if self.duration_s <= 0.0 {
            return Err(ToneError::InvalidDuration);
        }

        let sample_rate_hz = if self.sample_rate_hz == 0.0 {
            defaults.sample_rate_hz
        } else {
            let truncated = self.sample_rate_hz.trunc();
            if truncated < 1.0 || truncated > u32::MAX as f64 {
                return Err(ToneError::InvalidSampleRate(self.sample_rate_hz));
            }
            truncated as u32
        };

        let samples = (sample_rate_hz as f64 * self.duration_s).round();
        if samples > defaults.max_samples as f64 {
            return Err(ToneError::SignalTooLong {
                sample_rate: sample_rate_hz,
                duration: self.duration_s,
                samples,
                max: defaults.max_samples,
            });
        }

        let amplitude = if self.amplitude == 0.0 {
            defaults.amplitude
        } else {
            self.amplitude as f32
        };

        Ok(MixerConfig {
            sample_rate_hz,
            amplitude,
            duration_s: self.duration_s,
        })
    }

    /// One track per waveform with a strictly positive frequency
    pub fn tracks(&self) -> Vec<Track> {
        [
            (Waveform::Sine, self.sine_hz),
            (Waveform::Square, self.square_hz),
            (Waveform::Triangle, self.triangle_hz),
            (Waveform::Sawtooth, self.sawtooth_hz),
        ]
        .into_iter()
        .filter(|(_, hz)| *hz > 0.0)
        .map(|(waveform, frequency_hz)| Track {
            waveform,
            frequency_hz,
        })
        .collect()
    }

    pub fn noise_spec(&self) -> Result<NoiseSpec, ToneError> {
        NoiseSpec::from_fields(self.snr_db, self.noise_power_db)
    }

    /// FFT length as an integer (truncated)
    pub fn fft_size(&self) -> Result<u32, ToneError> {
        let truncated = self.fft_size.trunc();
        if truncated < 1.0 || truncated > u32::MAX as f64 {
            return Err(ToneError::InvalidFftSize(self.fft_size));
        }
        Ok(truncated as u32)
    }
}
