use crate::glide_control::{
    CalibrationState, GlideReadout, GlideResult, Loadable, OrientationRegime, ReadoutFormat,
};

/// Immutable view of the published session values.
///
/// `glide` and `regime` always stem from the same engine step.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GlideSnapshot {
    calibration: CalibrationState,
    glide: GlideResult,
    regime: Option<OrientationRegime>,
}

impl GlideSnapshot {
    pub fn new(
        calibration: CalibrationState,
        glide: GlideResult,
        regime: Option<OrientationRegime>,
    ) -> Self {
        Self { calibration, glide, regime }
    }

    /// Snapshot of an idle session.
    pub fn not_requested() -> Self {
        Self::new(Loadable::NotRequested, Loadable::NotRequested, None)
    }

    pub fn calibration(&self) -> &CalibrationState { &self.calibration }
    pub fn glide(&self) -> &GlideResult { &self.glide }
    pub fn regime(&self) -> Option<OrientationRegime> { self.regime }

    /// Overlay text for this snapshot.
    pub fn readout(&self, fmt: ReadoutFormat) -> GlideReadout {
        GlideReadout::new(&self.calibration, &self.glide, self.regime, fmt)
    }
}
