use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;

use tonemixer::actions::ToneMixer;
use tonemixer::audio::AudioOutput;
use tonemixer::error::ToneError;
use tonemixer::input::{Field, FormValues};
use tonemixer::output::OutputDir;
use tonemixer::params::{MixerDefaults, PlotConfig};
use tonemixer::synth::Signal;

/// Output device that accepts a single sample rate and records what it played
pub struct FakeOutput {
    pub supported_rate: u32,
    pub played: Vec<(usize, u32)>,
}

impl FakeOutput {
    pub fn new(supported_rate: u32) -> Self {
        Self {
            supported_rate,
            played: Vec::new(),
        }
    }
}

impl AudioOutput for FakeOutput {
    fn check_rate(&self, sample_rate_hz: u32) -> Result<(), ToneError> {
        if sample_rate_hz == self.supported_rate {
            Ok(())
        } else {
            Err(ToneError::UnsupportedSampleRate {
                rate: sample_rate_hz,
                reason: format!("fake device only runs at {} Hz", self.supported_rate),
            })
        }
    }

    fn play(&mut self, signal: &Signal) -> Result<(), ToneError> {
        self.played.push((signal.len(), signal.sample_rate_hz));
        Ok(())
    }
}

pub fn test_mixer(dir: &Path, supported_rate: u32) -> ToneMixer<FakeOutput, StdRng> {
    ToneMixer::with_parts(
        MixerDefaults::default(),
        PlotConfig::default(),
        OutputDir::new(dir),
        FakeOutput::new(supported_rate),
        StdRng::seed_from_u64(42),
    )
}

pub fn form(values: &[(Field, &str)]) -> FormValues {
    let mut form = FormValues::default();
    for (field, text) in values {
        form.set(*field, *text);
    }
    form
}

/// Files in `dir` whose names start with `prefix`
pub fn files_with_prefix(dir: &Path, prefix: &str) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with(prefix))
        .collect();
    names.sort();
    names
}
