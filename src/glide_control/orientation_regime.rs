use strum_macros::{Display, EnumIter, IntoStaticStr};

/// Classification of the device attitude relative to the flight path.
///
/// A flat or undefined attitude is represented by the absence of a regime
/// (`Option<OrientationRegime>::None`), matching the engine's flat fallback.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Display, EnumIter, IntoStaticStr)]
pub enum OrientationRegime {
    /// Device aimed back down towards the takeoff point.
    #[strum(to_string = "from takeoff")]
    FromTakeoff,
    /// Device aimed ahead up towards the landing point.
    #[strum(to_string = "from landing")]
    FromLanding,
}

impl OrientationRegime {
    /// Icon shown next to the ratio for this regime.
    pub fn icon_name(self) -> &'static str {
        match self {
            OrientationRegime::FromTakeoff => "arrow.down.left",
            OrientationRegime::FromLanding => "arrow.up.right",
        }
    }

    /// Label used when no regime applies.
    pub const FLAT_LABEL: &'static str = "flat";
    /// Icon used when no regime applies.
    pub const FLAT_ICON: &'static str = "line.horizontal.3";
}
