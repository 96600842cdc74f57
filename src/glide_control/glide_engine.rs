use super::{GlideError, GlideResult, GravitySample, Loadable, OrientationRegime};
use std::f64::consts::PI;

/// Outcome of one successful engine step, with the intermediate angles kept
/// for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlideReading {
    regime: Option<OrientationRegime>,
    glide_ratio: f64,
    tilt_deg: f64,
    inclination_deg: f64,
    angle_deg: Option<f64>,
}

impl GlideReading {
    pub fn regime(&self) -> Option<OrientationRegime> { self.regime }
    pub fn glide_ratio(&self) -> f64 { self.glide_ratio }
    pub fn tilt_deg(&self) -> f64 { self.tilt_deg }
    pub fn inclination_deg(&self) -> f64 { self.inclination_deg }
    pub fn angle_deg(&self) -> Option<f64> { self.angle_deg }
    pub fn is_flat(&self) -> bool { self.regime.is_none() }
}

/// Stateless transform from a gravity sample to an orientation regime and a
/// glide ratio.
///
/// The engine holds no state between samples; the caller decides the cadence.
pub struct GlideEngine;

impl GlideEngine {
    /// Glide ratio reported for a flat or undefined attitude.
    pub const FLAT_GLIDE_RATIO: f64 = 0.0;
    const RIGHT_ANGLE_DEG: f64 = 90.0;
    const STRAIGHT_ANGLE_DEG: f64 = 180.0;

    /// Runs one engine step and folds any failure into the returned
    /// [`GlideResult`]. A failed step never carries a regime.
    ///
    /// # Arguments
    /// * `sample` – The gravity vector to evaluate.
    ///
    /// # Returns
    /// A tuple of the regime (`None` for flat) and `Loaded(ratio)` or `Failed(msg)`.
    pub fn compute(sample: &GravitySample) -> (Option<OrientationRegime>, GlideResult) {
        match Self::evaluate(sample) {
            Ok(reading) => (reading.regime, Loadable::Loaded(reading.glide_ratio)),
            Err(e) => (None, Loadable::Failed(e.to_string())),
        }
    }

    /// Runs one engine step.
    ///
    /// # Errors
    /// * [`GlideError::DegenerateSample`] for a zero or non-finite vector.
    /// * [`GlideError::UndefinedRatio`] if the working angle yields no finite cotangent.
    pub fn evaluate(sample: &GravitySample) -> Result<GlideReading, GlideError> {
        let nz = Self::normalized_z(sample)?;
        let tilt_deg = Self::rad_to_deg(nz.clamp(-1.0, 1.0).acos());
        let inclination_deg = Self::STRAIGHT_ANGLE_DEG - tilt_deg;
        let (regime, angle_deg) = Self::classify(inclination_deg);

        let glide_ratio = match angle_deg {
            Some(angle) => Self::cotangent_deg(angle)?,
            None => Self::FLAT_GLIDE_RATIO,
        };
        Ok(GlideReading { regime, glide_ratio, tilt_deg, inclination_deg, angle_deg })
    }

    /// Splits the inclination into a regime and the working angle. Inclinations
    /// of exactly 0°, 90° and 180° (or anything outside the open intervals)
    /// have neither.
    pub fn classify(inclination_deg: f64) -> (Option<OrientationRegime>, Option<f64>) {
        if inclination_deg > 0.0 && inclination_deg < Self::RIGHT_ANGLE_DEG {
            (Some(OrientationRegime::FromTakeoff), Some(Self::RIGHT_ANGLE_DEG - inclination_deg))
        } else if inclination_deg > Self::RIGHT_ANGLE_DEG && inclination_deg < Self::STRAIGHT_ANGLE_DEG {
            (Some(OrientationRegime::FromLanding), Some(inclination_deg - Self::RIGHT_ANGLE_DEG))
        } else {
            (None, None)
        }
    }

    fn normalized_z(sample: &GravitySample) -> Result<f64, GlideError> {
        let (_, _, nz) = sample.normalized().ok_or(GlideError::DegenerateSample)?;
        Ok(nz)
    }

    fn cotangent_deg(angle_deg: f64) -> Result<f64, GlideError> {
        let tan = Self::deg_to_rad(angle_deg).tan();
        let cot = 1.0 / tan;
        if tan == 0.0 || !cot.is_finite() {
            return Err(GlideError::UndefinedRatio { angle_deg });
        }
        Ok(cot)
    }

    fn rad_to_deg(rad: f64) -> f64 { rad * Self::STRAIGHT_ANGLE_DEG / PI }

    fn deg_to_rad(deg: f64) -> f64 { deg * PI / Self::STRAIGHT_ANGLE_DEG }
}
