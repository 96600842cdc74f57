use std::fmt::{Display, Formatter};

/// Failure conditions of a glide session.
///
/// All variants end up in the published state as `Failed(message)`; none of
/// them are propagated as faults to the observer.
#[derive(Debug, Clone, PartialEq)]
pub enum GlideError {
    /// Motion sensing hardware is missing. Fatal for the session.
    SensorUnavailable(String),
    /// A single sample could not be delivered. The subscription stays alive.
    SampleDelivery(String),
    /// The gravity vector was zero or contained non-finite components.
    DegenerateSample,
    /// The working angle produced a non-finite cotangent.
    UndefinedRatio { angle_deg: f64 },
}

impl Display for GlideError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GlideError::SensorUnavailable(reason) => write!(f, "{reason}"),
            GlideError::SampleDelivery(reason) => write!(f, "Sample delivery failed: {reason}"),
            GlideError::DegenerateSample => write!(f, "Degenerate gravity sample."),
            GlideError::UndefinedRatio { angle_deg } => {
                write!(f, "Glide ratio undefined at {angle_deg}°.")
            }
        }
    }
}

impl std::error::Error for GlideError {}
