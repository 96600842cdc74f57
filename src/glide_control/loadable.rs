use std::fmt::Display;

/// A value that may not have been requested yet, may be in flight, may have
/// arrived, or may have failed.
///
/// `Loading` optionally carries the last known value so consumers can keep
/// showing something meaningful while a fresh value is pending.
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    NotRequested,
    Loading(Option<T>),
    Loaded(T),
    Failed(String),
}

/// Calibration progress of the sensor session.
pub type CalibrationState = Loadable<String>;

/// Current glide ratio (horizontal distance per unit of altitude lost).
pub type GlideResult = Loadable<f64>;

impl<T> Loadable<T> {
    /// The loaded value, or the last value carried by `Loading`.
    pub fn value(&self) -> Option<&T> {
        match self {
            Loadable::Loaded(v) | Loadable::Loading(Some(v)) => Some(v),
            Loadable::NotRequested | Loadable::Loading(None) | Loadable::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Loadable::Failed(e) => Some(e.as_str()),
            _ => None,
        }
    }

    pub fn is_not_requested(&self) -> bool { matches!(self, Loadable::NotRequested) }
    pub fn is_loading(&self) -> bool { matches!(self, Loadable::Loading(_)) }
    pub fn is_loaded(&self) -> bool { matches!(self, Loadable::Loaded(_)) }
    pub fn is_failed(&self) -> bool { matches!(self, Loadable::Failed(_)) }

    /// Converts a computation result into a `Loaded`/`Failed` value.
    pub fn from_result<E: Display>(res: Result<T, E>) -> Self {
        match res {
            Ok(v) => Loadable::Loaded(v),
            Err(e) => Loadable::Failed(e.to_string()),
        }
    }
}

impl<T> Default for Loadable<T> {
    fn default() -> Self { Loadable::NotRequested }
}
