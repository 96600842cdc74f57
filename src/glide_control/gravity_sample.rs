use std::fmt::Display;

/// A single gravity-vector reading in the device frame.
///
/// Components are unit-free and nominally within `[-1, 1]`. A sample is
/// created once per sensor tick and consumed immediately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravitySample {
    x: f64,
    y: f64,
    z: f64,
}

impl GravitySample {
    pub const fn new(x: f64, y: f64, z: f64) -> Self { Self { x, y, z } }

    pub fn x(&self) -> f64 { self.x }
    pub fn y(&self) -> f64 { self.y }
    pub fn z(&self) -> f64 { self.z }

    /// Largest absolute component.
    fn max_abs(&self) -> f64 { self.x.abs().max(self.y.abs()).max(self.z.abs()) }

    /// Euclidean length of the vector. May be `inf` for components near `f64::MAX`.
    pub fn magnitude(&self) -> f64 { self.x.hypot(self.y).hypot(self.z) }

    /// Returns `true` if the sample cannot be normalized, i.e. all components
    /// are exactly zero or any component is non-finite.
    pub fn is_degenerate(&self) -> bool {
        let finite = self.x.is_finite() && self.y.is_finite() && self.z.is_finite();
        !finite || self.max_abs() == 0.0
    }

    /// The vector scaled to unit length, or `None` for a degenerate sample.
    ///
    /// Components are divided by the largest absolute component before
    /// squaring, so neither tiny nor huge finite vectors under- or overflow.
    pub fn normalized(&self) -> Option<(f64, f64, f64)> {
        if self.is_degenerate() {
            return None;
        }
        let scale = self.max_abs();
        let (xs, ys, zs) = (self.x / scale, self.y / scale, self.z / scale);
        let len = (xs * xs + ys * ys + zs * zs).sqrt();
        Some((xs / len, ys / len, zs / len))
    }

    /// Builds a sample lying in the `y`/`z` plane whose tilt against the
    /// device's vertical axis is `tilt_deg`.
    pub fn from_tilt_deg(tilt_deg: f64) -> Self {
        let tilt_rad = tilt_deg.to_radians();
        Self::new(0.0, tilt_rad.sin(), tilt_rad.cos())
    }
}

impl From<(f64, f64, f64)> for GravitySample {
    fn from(value: (f64, f64, f64)) -> Self { Self::new(value.0, value.1, value.2) }
}

impl Display for GravitySample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.4}, {:.4}, {:.4}]", self.x, self.y, self.z)
    }
}
