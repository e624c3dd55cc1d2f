//! The tone mixer's button actions.
//!
//! Every action regenerates the signal from the current form values, so
//! nothing carries over between actions except what the caller keeps.

use std::path::PathBuf;

use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::analysis::{check_fft_size, frequency_axis, psd_db, sample_signal, spectrum};
use crate::audio::{write_wav, AudioOutput, DeviceOutput};
use crate::error::ToneError;
use crate::input::{FormValues, ToneRequest};
use crate::noise::{add_noise, NoiseSpec};
use crate::output::OutputDir;
use crate::params::{MixerDefaults, PlotConfig};
use crate::plot::{
    fft_figure, power_figure, psd_figure, render_png, sampled_figure, signal_figure, Figure,
};
use crate::synth::{Mixer, Signal};

/// A button on the tone mixer form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    PlaySound,
    PlotSignal,
    PlotPower,
    SampleSignal,
    PlotFft,
    PlotPsd,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::PlaySound,
        Action::PlotSignal,
        Action::PlotPower,
        Action::SampleSignal,
        Action::PlotFft,
        Action::PlotPsd,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Button text
    pub fn label(self) -> &'static str {
        match self {
            Action::PlaySound => "Play Sound",
            Action::PlotSignal => "Plot Signal",
            Action::PlotPower => "Plot Signal Power",
            Action::SampleSignal => "Sample and Plot Discrete Signal",
            Action::PlotFft => "Plot FFT",
            Action::PlotPsd => "Plot PSD",
        }
    }

    /// Output file name prefix
    pub fn prefix(self) -> &'static str {
        match self {
            Action::PlaySound => "play_sound",
            Action::PlotSignal => "plot_signal",
            Action::PlotPower => "plot_power",
            Action::SampleSignal => "sample_signal",
            Action::PlotFft => "plot_fft",
            Action::PlotPsd => "plot_psd",
        }
    }

    /// Output file extension
    pub fn extension(self) -> &'static str {
        match self {
            Action::PlaySound => "wav",
            _ => "png",
        }
    }

    /// Text of the save toggle next to the button
    pub fn save_label(self) -> &'static str {
        match self {
            Action::PlaySound => "Save as WAV",
            _ => "Save as PNG",
        }
    }
}

/// What a successful action produced
#[derive(Debug, Clone)]
pub struct ActionOutcome {
    pub action: Action,
    /// Figure to display (plot actions only)
    pub figure: Option<Figure>,
    /// Files written
    pub saved: Vec<PathBuf>,
    /// One-line description for the status pane
    pub summary: String,
}

/// Mixed signal plus the request it came from
#[derive(Debug, Clone)]
pub struct Generated {
    pub request: ToneRequest,
    pub signal: Signal,
    pub track_count: usize,
    pub noise: NoiseSpec,
    pub noise_variance: f64,
}

impl Generated {
    fn describe(&self) -> String {
        let noise = match self.noise {
            NoiseSpec::None => "no noise".to_string(),
            NoiseSpec::Snr { db } => format!("SNR {} dB (variance {:.3e})", db, self.noise_variance),
            NoiseSpec::Power { db } => {
                format!("noise {} dB (variance {:.3e})", db, self.noise_variance)
            }
        };
        format!(
            "{} track(s), {} samples @ {}Hz, {}",
            self.track_count,
            self.signal.len(),
            self.signal.sample_rate_hz,
            noise
        )
    }
}

/// Runs actions against an audio output and a noise source
pub struct ToneMixer<O, R> {
    defaults: MixerDefaults,
    plot: PlotConfig,
    output: OutputDir,
    audio: O,
    rng: R,
}

impl ToneMixer<DeviceOutput, StdRng> {
    /// Default output device and an entropy-seeded noise source
    pub fn new(plot: PlotConfig, output: OutputDir) -> Self {
        Self::with_parts(
            MixerDefaults::default(),
            plot,
            output,
            DeviceOutput::new(),
            StdRng::from_entropy(),
        )
    }
}

impl<O: AudioOutput, R: Rng> ToneMixer<O, R> {
    pub fn with_parts(
        defaults: MixerDefaults,
        plot: PlotConfig,
        output: OutputDir,
        audio: O,
        rng: R,
    ) -> Self {
        Self {
            defaults,
            plot,
            output,
            audio,
            rng,
        }
    }

    pub fn audio(&self) -> &O {
        &self.audio
    }

    pub fn output_dir(&self) -> &OutputDir {
        &self.output
    }

    /// Parse the form, mix the enabled tracks and add the requested noise
    pub fn generate_signal(&mut self, form: &FormValues) -> Result<Generated, ToneError> {
        let request = form.parse()?;
        let config = request.mixer_config(&self.defaults)?;
        let noise = request.noise_spec()?;

        let mut mixer = Mixer::new(config);
        for track in request.tracks() {
            mixer.add_track(track);
        }
        let track_count = mixer.tracks().len();
        let mut signal = mixer.mix()?;

        let noise_variance = add_noise(&mut signal.samples, noise, &mut self.rng)?;

        Ok(Generated {
            request,
            signal,
            track_count,
            noise,
            noise_variance,
        })
    }

    /// Run `action`; `save` is the state of its save toggle
    pub fn run(
        &mut self,
        action: Action,
        form: &FormValues,
        save: bool,
    ) -> Result<ActionOutcome, ToneError> {
        let result = match action {
            Action::PlaySound => self.play_sound(form, save),
            Action::PlotSignal => self.plot_signal(form, save),
            Action::PlotPower => self.plot_signal_power(form, save),
            Action::SampleSignal => self.sample_and_plot(form, save),
            Action::PlotFft => self.plot_fft(form, save),
            Action::PlotPsd => self.plot_psd(form, save),
        };

        match &result {
            Ok(outcome) => info!("{}: {}", action.label(), outcome.summary),
            Err(e) => warn!("{} rejected: {}", action.label(), e),
        }
        result
    }

    pub fn play_sound(&mut self, form: &FormValues, save: bool) -> Result<ActionOutcome, ToneError> {
        let generated = self.generate_signal(form)?;
        let mut saved = Vec::new();

        if save {
            let path = self.output.path_for(Action::PlaySound.prefix(), "wav");
            write_wav(&path, &generated.signal)?;
            saved.push(path);
        }

        self.audio.check_rate(generated.signal.sample_rate_hz)?;
        info!("Playing the mixed signal...");
        self.audio.play(&generated.signal)?;

        Ok(ActionOutcome {
            action: Action::PlaySound,
            figure: None,
            saved,
            summary: format!("played {}", generated.describe()),
        })
    }

    pub fn plot_signal(&mut self, form: &FormValues, save: bool) -> Result<ActionOutcome, ToneError> {
        let generated = self.generate_signal(form)?;
        let figure = signal_figure(&generated.signal, &self.plot);
        self.finish_plot(Action::PlotSignal, figure, save, generated.describe())
    }

    pub fn plot_signal_power(
        &mut self,
        form: &FormValues,
        save: bool,
    ) -> Result<ActionOutcome, ToneError> {
        let generated = self.generate_signal(form)?;
        let figure = power_figure(&generated.signal, &self.plot);
        self.finish_plot(Action::PlotPower, figure, save, generated.describe())
    }

    pub fn sample_and_plot(
        &mut self,
        form: &FormValues,
        save: bool,
    ) -> Result<ActionOutcome, ToneError> {
        let generated = self.generate_signal(form)?;
        let request = generated.request;
        let sampled = sample_signal(
            &generated.signal,
            request.sampling_rate_hz,
            request.duration_s,
            self.defaults.max_samples,
        )?;

        let summary = format!(
            "{} points @ {} Hz from {}",
            sampled.values.len(),
            sampled.rate_hz,
            generated.describe()
        );
        let figure = sampled_figure(&generated.signal, &sampled, &self.plot);
        self.finish_plot(Action::SampleSignal, figure, save, summary)
    }

    pub fn plot_fft(&mut self, form: &FormValues, save: bool) -> Result<ActionOutcome, ToneError> {
        let generated = self.generate_signal(form)?;
        let fft_size = self.checked_fft_size(&generated)?;

        let spec = spectrum(
            &generated.signal.samples,
            fft_size,
            generated.signal.sample_rate_hz,
        );
        let summary = match spec.peak_frequency() {
            Some(peak) => format!("peak at {:.1} Hz, {}", peak.abs(), generated.describe()),
            None => generated.describe(),
        };
        let figure = fft_figure(&spec, &self.plot);
        self.finish_plot(Action::PlotFft, figure, save, summary)
    }

    pub fn plot_psd(&mut self, form: &FormValues, save: bool) -> Result<ActionOutcome, ToneError> {
        let generated = self.generate_signal(form)?;
        let fft_size = self.checked_fft_size(&generated)?;
        let sample_rate = generated.signal.sample_rate_hz;

        let psd = psd_db(&generated.signal.samples, fft_size, sample_rate);
        let frequencies = frequency_axis(fft_size, sample_rate);
        let figure = psd_figure(&frequencies, &psd, &self.plot);
        self.finish_plot(Action::PlotPsd, figure, save, generated.describe())
    }

    fn checked_fft_size(&self, generated: &Generated) -> Result<usize, ToneError> {
        let fft_size = generated.request.fft_size()?;
        check_fft_size(fft_size, generated.signal.sample_rate_hz)?;
        if fft_size as usize > self.defaults.max_samples {
            return Err(ToneError::FftTooLarge {
                fft_size,
                max: self.defaults.max_samples,
            });
        }
        Ok(fft_size as usize)
    }

    fn finish_plot(
        &self,
        action: Action,
        figure: Figure,
        save: bool,
        summary: String,
    ) -> Result<ActionOutcome, ToneError> {
        let mut saved = Vec::new();
        if save {
            let path = self.output.path_for(action.prefix(), action.extension());
            render_png(&figure, &path, &self.plot)?;
            saved.push(path);
        }

        Ok(ActionOutcome {
            action,
            figure: Some(figure),
            saved,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_prefixes_and_extensions() {
        assert_eq!(Action::PlaySound.prefix(), "play_sound");
        assert_eq!(Action::PlaySound.extension(), "wav");
        assert_eq!(Action::SampleSignal.prefix(), "sample_signal");
        for action in Action::ALL.into_iter().skip(1) {
            assert_eq!(action.extension(), "png");
            assert_eq!(action.save_label(), "Save as PNG");
        }
    }

    #[test]
    fn test_action_indices_follow_form_order() {
        for (i, action) in Action::ALL.into_iter().enumerate() {
            assert_eq!(action.index(), i);
        }
    }
}
