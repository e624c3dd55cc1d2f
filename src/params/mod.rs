//! Parameter definitions with physical units and documented semantics.
//!
//! All magic numbers are extracted here with:
//! - Physical units (Hz, seconds, pixels, etc.)
//! - Documented ranges and meanings

mod audio;
mod plot;
mod ui;

// Re-export all types
pub use audio::{audio_constants, MixerDefaults};
pub use plot::{FigureSize, PlotConfig};
pub use ui::UiConfig;
