//! Glicol composition text for a set of tracks.

use super::{Track, Waveform};

impl Waveform {
    /// Glicol oscillator node name
    pub fn glicol_node(self) -> &'static str {
        match self {
            Waveform::Sine => "sin",
            Waveform::Square => "squ",
            Waveform::Triangle => "tri",
            Waveform::Sawtooth => "saw",
        }
    }

    /// Glicol reference name for this waveform's track
    fn reference(self) -> &'static str {
        match self {
            Waveform::Sine => "~sine",
            Waveform::Square => "~square",
            Waveform::Triangle => "~triangle",
            Waveform::Sawtooth => "~sawtooth",
        }
    }
}

/// Build Glicol code mixing `tracks` with equal weight summing to `amplitude`
///
/// One reference chain per track, each scaled by `amplitude / tracks.len()`,
/// summed by a single `mix` output node. Returns `None` for an empty mix.
pub fn compose(tracks: &[Track], amplitude: f32) -> Option<String> {
    if tracks.is_empty() {
        return None;
    }

    // Glicol parses numbers as f32
    let gain = amplitude / tracks.len() as f32;
    let mut code = String::new();
    let mut refs = Vec::with_capacity(tracks.len());

    for track in tracks {
        let name = track.waveform.reference();
        code.push_str(&format!(
            "{}: {} {} >> mul {}\n",
            name,
            track.waveform.glicol_node(),
            track.frequency_hz,
            gain
        ));
        refs.push(name);
    }

    code.push_str(&format!("o: mix {}\n", refs.join(" ")));
    Some(code)
}
