//! Numeric helpers behind the plots: spectra, resampling and power.

mod power;
mod sampling;
mod spectrum;

pub use power::{instantaneous_power_db, power_floor_db};
pub use sampling::{interp, linspace, sample_signal, SampledSignal};
pub use spectrum::{check_fft_size, fft_shift, frequency_axis, psd_db, spectrum, Spectrum};
