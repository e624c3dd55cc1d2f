//! Blocking playback on the default output device.

use std::time::Duration;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, SampleFormat, SampleRate, SizedSample, SupportedStreamConfig};
use crossbeam_channel::bounded;
use log::{debug, error, info};

use crate::error::ToneError;
use crate::params::audio_constants::DRAIN_TAIL_MS;
use crate::synth::Signal;

/// Somewhere to send a finished mix
pub trait AudioOutput {
    /// Fail if `sample_rate_hz` cannot be played
    fn check_rate(&self, sample_rate_hz: u32) -> Result<(), ToneError>;

    /// Play the whole signal, returning once it has finished
    fn play(&mut self, signal: &Signal) -> Result<(), ToneError>;
}

/// The host's default output device
#[derive(Debug, Default)]
pub struct DeviceOutput;

impl DeviceOutput {
    pub fn new() -> Self {
        Self
    }

    fn device() -> Result<cpal::Device, ToneError> {
        let host = cpal::default_host();
        host.default_output_device().ok_or(ToneError::NoOutputDevice)
    }

    /// Pick a device configuration running at `sample_rate_hz`, preferring f32
    fn config_for(
        device: &cpal::Device,
        sample_rate_hz: u32,
    ) -> Result<SupportedStreamConfig, ToneError> {
        let ranges: Vec<_> = device
            .supported_output_configs()
            .map_err(|e| ToneError::UnsupportedSampleRate {
                rate: sample_rate_hz,
                reason: e.to_string(),
            })?
            .collect();

        let matching = ranges.iter().filter(|range| {
            range.min_sample_rate().0 <= sample_rate_hz
                && sample_rate_hz <= range.max_sample_rate().0
        });

        let best = matching
            .clone()
            .find(|range| range.sample_format() == SampleFormat::F32)
            .or_else(|| matching.clone().next());

        match best {
            Some(range) => Ok(range.with_sample_rate(SampleRate(sample_rate_hz))),
            None => {
                let supported: Vec<String> = ranges
                    .iter()
                    .map(|r| format!("{}-{} Hz", r.min_sample_rate().0, r.max_sample_rate().0))
                    .collect();
                Err(ToneError::UnsupportedSampleRate {
                    rate: sample_rate_hz,
                    reason: format!("device supports {}", supported.join(", ")),
                })
            }
        }
    }
}

impl AudioOutput for DeviceOutput {
    fn check_rate(&self, sample_rate_hz: u32) -> Result<(), ToneError> {
        let device = Self::device()?;
        Self::config_for(&device, sample_rate_hz).map(|_| ())
    }

    fn play(&mut self, signal: &Signal) -> Result<(), ToneError> {
        let device = Self::device()?;
        let supported = Self::config_for(&device, signal.sample_rate_hz)?;

        info!(
            "Playing {:.2}s on {} @ {}Hz",
            signal.duration_s(),
            device.name().unwrap_or_else(|_| "Unknown".to_string()),
            signal.sample_rate_hz
        );

        match supported.sample_format() {
            SampleFormat::F32 => play_on::<f32>(&device, &supported, signal),
            SampleFormat::I16 => play_on::<i16>(&device, &supported, signal),
            SampleFormat::U16 => play_on::<u16>(&device, &supported, signal),
            SampleFormat::I32 => play_on::<i32>(&device, &supported, signal),
            SampleFormat::F64 => play_on::<f64>(&device, &supported, signal),
            other => Err(ToneError::Playback(format!(
                "Unsupported sample format {:?}",
                other
            ))),
        }
    }
}

/// Stream `signal` through `device`, blocking until the last sample is queued
fn play_on<T>(
    device: &cpal::Device,
    supported: &SupportedStreamConfig,
    signal: &Signal,
) -> Result<(), ToneError>
where
    T: SizedSample + FromSample<f32>,
{
    let config: cpal::StreamConfig = supported.config();
    let channels = config.channels as usize;

    let samples = signal.samples.clone();
    let sample_rate_hz = signal.sample_rate_hz;
    let mut cursor = 0usize;
    let mut finished = false;
    let (done_tx, done_rx) = bounded::<Duration>(1);

    let stream = device
        .build_output_stream(
            &config,
            move |data: &mut [T], info: &cpal::OutputCallbackInfo| {
                let start = cursor;
                for frame in data.chunks_mut(channels) {
                    let value = samples.get(cursor).copied().unwrap_or(0.0);
                    cursor = cursor.saturating_add(1);
                    for out in frame.iter_mut() {
                        *out = T::from_sample(value);
                    }
                }
                if !finished && cursor >= samples.len() {
                    finished = true;
                    let timestamp = info.timestamp();
                    let latency = timestamp.playback.duration_since(&timestamp.callback);
                    let frames_left = samples.len().saturating_sub(start);
                    let _ = done_tx.try_send(drain_time(latency, frames_left, sample_rate_hz));
                }
            },
            |err| error!("Audio stream error: {}", err),
            None,
        )
        .map_err(|e| ToneError::Playback(format!("Failed to build audio stream: {}", e)))?;

    stream
        .play()
        .map_err(|e| ToneError::Playback(format!("Failed to start audio stream: {}", e)))?;

    // Generous timeout in case the device stalls
    let timeout = Duration::from_secs_f64(signal.duration_s()) + Duration::from_secs(5);
    let tail = done_rx
        .recv_timeout(timeout)
        .map_err(|_| ToneError::Playback("Playback timed out".to_string()))?;

    // The last buffer is queued, not yet heard
    debug!("Waiting {:?} for the device to drain", tail);
    std::thread::sleep(tail);
    info!("Playback finished.");
    Ok(())
}

/// Time until the last queued sample reaches the speaker
///
/// `latency` is the device's callback-to-playback delay for the final buffer,
/// which still holds `frames_left` frames of signal. Without a reported
/// latency, `DRAIN_TAIL_MS` stands in for it.
fn drain_time(latency: Option<Duration>, frames_left: usize, sample_rate_hz: u32) -> Duration {
    let latency = latency.unwrap_or(Duration::from_millis(DRAIN_TAIL_MS));
    latency + Duration::from_secs_f64(frames_left as f64 / sample_rate_hz.max(1) as f64)
}
