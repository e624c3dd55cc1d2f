//! WAV file output.

use std::path::Path;

use log::info;

use crate::error::ToneError;
use crate::synth::Signal;

/// Write `signal` as a mono 32-bit float WAV file
pub fn write_wav(path: &Path, signal: &Signal) -> Result<(), ToneError> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: signal.sample_rate_hz,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };

    let mut writer = hound::WavWriter::create(path, spec)?;
    for &sample in &signal.samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;

    info!(
        "Sound saved as {} ({} samples @ {}Hz)",
        path.display(),
        signal.len(),
        signal.sample_rate_hz
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wav_round_trip_header_and_length() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tone.wav");
        let signal = Signal::new(vec![0.0, 0.25, -0.25, 0.5], 8000);

        write_wav(&path, &signal).unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 8000);
        assert_eq!(spec.sample_format, hound::SampleFormat::Float);
        assert_eq!(reader.duration(), 4);

        let samples: Vec<f32> = reader
            .into_samples::<f32>()
            .map(|s| s.unwrap())
            .collect();
        assert_eq!(samples, signal.samples);
    }
}
