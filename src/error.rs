//! User-facing failures.
//!
//! Every rejected action ends up here. The terminal front end shows
//! `title()` as the warning dialog title and the `Display` text as its body.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToneError {
    #[error("'{text}' is not a number. Please enter a numeric value for {field}.")]
    InvalidNumber { field: String, text: String },

    #[error("Duration must be greater than 0.")]
    InvalidDuration,

    #[error("Mixer sample rate must be a positive integer, got {0}.")]
    InvalidSampleRate(f64),

    #[error("Sampling rate must be greater than 0.")]
    InvalidSamplingRate,

    #[error("Sampling at {rate} Hz for {duration} s yields no samples.")]
    EmptySampling { rate: f64, duration: f64 },

    #[error("A {duration} s mix at {sample_rate} Hz needs {samples} samples, more than the limit of {max}.")]
    SignalTooLong {
        sample_rate: u32,
        duration: f64,
        samples: f64,
        max: usize,
    },

    #[error("Sampling at {rate} Hz for {duration} s yields {points} points, more than the limit of {max}.")]
    TooManySamplingPoints {
        rate: f64,
        duration: f64,
        points: f64,
        max: usize,
    },

    #[error("Specify either an SNR or a noise power, not both.")]
    ConflictingNoise,

    #[error("The signal has no power, so an SNR cannot be applied. Add a tone or use a noise power instead.")]
    SilentSignal,

    #[error("The FFT size must match the sample rate ({sample_rate}), got {fft_size}. Please adjust your input.")]
    FftSizeMismatch { fft_size: u32, sample_rate: u32 },

    #[error("FFT size must be a positive integer, got {0}.")]
    InvalidFftSize(f64),

    #[error("FFT size {fft_size} exceeds the limit of {max} points.")]
    FftTooLarge { fft_size: u32, max: usize },

    #[error("The output device does not support {rate} Hz: {reason}")]
    UnsupportedSampleRate { rate: u32, reason: String },

    #[error("No audio output device found.")]
    NoOutputDevice,

    #[error("Playback failed: {0}")]
    Playback(String),

    #[error("Synthesis failed: {0}")]
    Synthesis(String),

    #[error("Plot rendering failed: {0}")]
    Plot(String),

    #[error("Failed to write WAV file: {0}")]
    Wav(#[from] hound::Error),

    #[error("Failed to write PNG file: {0}")]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ToneError {
    /// Warning dialog title for this failure
    pub fn title(&self) -> &'static str {
        match self {
            ToneError::InvalidNumber { .. } => "Invalid Input",
            ToneError::InvalidDuration | ToneError::SignalTooLong { .. } => "Invalid Duration",
            ToneError::InvalidSampleRate(_) => "Invalid Sample Rate",
            ToneError::InvalidSamplingRate
            | ToneError::EmptySampling { .. }
            | ToneError::TooManySamplingPoints { .. } => "Invalid Sampling Rate",
            ToneError::ConflictingNoise | ToneError::SilentSignal => "Invalid Noise Settings",
            ToneError::FftSizeMismatch { .. }
            | ToneError::InvalidFftSize(_)
            | ToneError::FftTooLarge { .. } => "FFT Size Mismatch",
            ToneError::UnsupportedSampleRate { .. } => "Unsupported Sample Rate",
            ToneError::NoOutputDevice | ToneError::Playback(_) => "Playback Error",
            ToneError::Synthesis(_) => "Synthesis Error",
            ToneError::Plot(_) | ToneError::Image(_) => "Plot Error",
            ToneError::Wav(_) | ToneError::Io(_) => "File Error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles_match_dialogs() {
        assert_eq!(ToneError::InvalidDuration.title(), "Invalid Duration");
        assert_eq!(
            ToneError::FftSizeMismatch {
                fft_size: 1024,
                sample_rate: 44100
            }
            .title(),
            "FFT Size Mismatch"
        );
        assert_eq!(ToneError::ConflictingNoise.title(), "Invalid Noise Settings");
    }

    #[test]
    fn test_mismatch_message_names_both_values() {
        let msg = ToneError::FftSizeMismatch {
            fft_size: 1024,
            sample_rate: 44100,
        }
        .to_string();
        assert!(msg.contains("1024"));
        assert!(msg.contains("44100"));
    }
}
