//! Gravity-vector to glide-ratio computation and its value types.

pub mod common;
mod glide_engine;
mod glide_error;
mod gravity_sample;
mod loadable;
mod orientation_regime;
mod readout;
#[cfg(test)]
mod tests;

pub use glide_engine::{GlideEngine, GlideReading};
pub use glide_error::GlideError;
pub use gravity_sample::GravitySample;
pub use loadable::{CalibrationState, GlideResult, Loadable};
pub use orientation_regime::OrientationRegime;
pub use readout::{GlideReadout, ReadoutFormat};
