//! Audio output: device playback and WAV files.

mod playback;
mod wav;

// Re-export public types
pub use playback::{AudioOutput, DeviceOutput};
pub use wav::write_wav;
