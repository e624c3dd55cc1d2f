//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::actions::Action;
use crate::input::{Field, FormValues};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "tonemixer")]
#[command(about = "Synthesize, plot and audition test tones", long_about = None)]
pub struct Args {
    /// Directory for saved plots and WAV files
    #[arg(long, value_name = "DIR", default_value = ".", global = true)]
    pub output_dir: PathBuf,

    /// Log verbosity
    #[arg(long, value_name = "LEVEL", value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    #[command(flatten)]
    pub fields: FieldArgs,

    /// Run one action and exit instead of opening the terminal UI
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Form values given on the command line (pre-fill the UI or drive a subcommand)
#[derive(clap::Args, Debug, Clone, Default, PartialEq)]
pub struct FieldArgs {
    /// Mixer sample rate (Hz)
    #[arg(long, value_name = "HZ", global = true)]
    pub sample_rate: Option<f64>,

    /// Mixer amplitude (linear)
    #[arg(long, global = true)]
    pub amplitude: Option<f64>,

    /// Sine wave frequency (Hz)
    #[arg(long, value_name = "HZ", global = true)]
    pub sine: Option<f64>,

    /// Square wave frequency (Hz)
    #[arg(long, value_name = "HZ", global = true)]
    pub square: Option<f64>,

    /// Triangle wave frequency (Hz)
    #[arg(long, value_name = "HZ", global = true)]
    pub triangle: Option<f64>,

    /// Sawtooth wave frequency (Hz)
    #[arg(long, value_name = "HZ", global = true)]
    pub sawtooth: Option<f64>,

    /// Signal-to-noise ratio (dB)
    #[arg(long, value_name = "DB", global = true, allow_hyphen_values = true)]
    pub snr: Option<f64>,

    /// Absolute noise power (dB)
    #[arg(long, value_name = "DB", global = true, allow_hyphen_values = true)]
    pub noise_power: Option<f64>,

    /// Duration (seconds)
    #[arg(long, value_name = "SECONDS", global = true)]
    pub duration: Option<f64>,

    /// Discrete sampling rate (Hz)
    #[arg(long, value_name = "HZ", global = true)]
    pub sampling_rate: Option<f64>,

    /// FFT size (must equal the sample rate)
    #[arg(long, value_name = "N", global = true)]
    pub fft_size: Option<f64>,
}

impl FieldArgs {
    fn pairs(&self) -> [(Field, Option<f64>); 11] {
        [
            (Field::SampleRate, self.sample_rate),
            (Field::Amplitude, self.amplitude),
            (Field::SineFrequency, self.sine),
            (Field::SquareFrequency, self.square),
            (Field::TriangleFrequency, self.triangle),
            (Field::SawtoothFrequency, self.sawtooth),
            (Field::Snr, self.snr),
            (Field::NoisePower, self.noise_power),
            (Field::Duration, self.duration),
            (Field::SamplingRate, self.sampling_rate),
            (Field::FftSize, self.fft_size),
        ]
    }

    /// Overwrite every field given on the command line
    pub fn apply_to(&self, form: &mut FormValues) {
        for (field, value) in self.pairs() {
            if let Some(value) = value {
                form.set(field, value.to_string());
            }
        }
    }
}

/// Headless actions
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play the mix on the default output device
    Play {
        /// Also write the mix to a timestamped WAV file
        #[arg(long)]
        save_wav: bool,
    },
    /// Save a time-domain plot of the mix
    Plot,
    /// Save a plot of the mix's power in dB
    Power,
    /// Save a discrete-time sampling plot
    Sample,
    /// Save an FFT magnitude/phase plot
    Fft,
    /// Save a power spectral density plot
    Psd,
}

impl Command {
    pub fn action(self) -> Action {
        match self {
            Command::Play { .. } => Action::PlaySound,
            Command::Plot => Action::PlotSignal,
            Command::Power => Action::PlotPower,
            Command::Sample => Action::SampleSignal,
            Command::Fft => Action::PlotFft,
            Command::Psd => Action::PlotPsd,
        }
    }

    /// Headless plots have nowhere to be shown, so they are always saved
    pub fn save(self) -> bool {
        match self {
            Command::Play { save_wav } => save_wav,
            _ => true,
        }
    }
}
