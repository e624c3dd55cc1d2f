//! Tone mixer library - synthesize, analyse, plot and audition test tones

pub mod actions;
pub mod analysis;
pub mod audio;
pub mod cli;
pub mod error;
pub mod input;
pub mod logging;
pub mod noise;
pub mod output;
pub mod params;
pub mod plot;
pub mod synth;
pub mod ui;
