//! Runtime registration of the plot font.

use std::sync::OnceLock;

use log::{debug, warn};
use plotters::style::{register_font, FontStyle};

use crate::params::PlotConfig;

static FONT_READY: OnceLock<bool> = OnceLock::new();

/// Register the first readable candidate font once per process
///
/// Returns whether text can be drawn.
pub fn ensure_font(config: &PlotConfig) -> bool {
    *FONT_READY.get_or_init(|| register_first(config))
}

fn register_first(config: &PlotConfig) -> bool {
    for path in config.font_candidates {
        let Ok(bytes) = std::fs::read(path) else {
            continue;
        };
        // plotters keeps a reference to the font for the life of the process
        let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
        if register_font(config.font_family, FontStyle::Normal, bytes).is_ok() {
            debug!("Plot font: {}", path);
            return true;
        }
        warn!("Could not load plot font {}", path);
    }

    warn!("No plot font found, figures will be drawn without text");
    false
}
