use super::{CalibrationState, GlideResult, Loadable, OrientationRegime, common::math::format_rounded};

/// Display parameters for turning published values into overlay text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadoutFormat {
    /// Ratios above this value are not shown.
    pub max_display_ratio: f64,
    /// Decimal places of the ratio text.
    pub display_places: u32,
}

impl Default for ReadoutFormat {
    fn default() -> Self { Self { max_display_ratio: 20.0, display_places: 1 } }
}

/// Text and icon an overlay renders for one published snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlideReadout {
    calibration_text: String,
    regime_label: &'static str,
    icon_name: &'static str,
    ratio_text: String,
}

impl GlideReadout {
    const LOADING_TEXT: &'static str = "Loading";
    const UNKNOWN_ISSUE_TEXT: &'static str = "Unknown issue.";

    /// Builds the readout for a calibration state, glide result and regime
    /// taken from the same engine step.
    ///
    /// A failed glide result replaces the ratio text with its message. A ratio
    /// above `fmt.max_display_ratio` renders as empty text with the flat label.
    pub fn new(
        calibration: &CalibrationState,
        glide: &GlideResult,
        regime: Option<OrientationRegime>,
        fmt: ReadoutFormat,
    ) -> Self {
        let mut regime_label = OrientationRegime::FLAT_LABEL;
        let mut icon_name = OrientationRegime::FLAT_ICON;
        let mut ratio_text = String::new();

        if let Some(err) = glide.error() {
            ratio_text = err.to_string();
        } else if let Some(value) = glide.value().filter(|v| **v <= fmt.max_display_ratio) {
            if let Some(r) = regime {
                regime_label = r.into();
                icon_name = r.icon_name();
            }
            ratio_text = format_rounded(*value, fmt.display_places);
        }

        Self {
            calibration_text: Self::describe_calibration(calibration),
            regime_label,
            icon_name,
            ratio_text,
        }
    }

    fn describe_calibration(calibration: &CalibrationState) -> String {
        match calibration {
            Loadable::NotRequested | Loadable::Loading(None) => Self::LOADING_TEXT.to_string(),
            Loadable::Loading(Some(last)) | Loadable::Loaded(last) => last.clone(),
            Loadable::Failed(reason) if reason.is_empty() => Self::UNKNOWN_ISSUE_TEXT.to_string(),
            Loadable::Failed(reason) => reason.clone(),
        }
    }

    pub fn calibration_text(&self) -> &str { &self.calibration_text }
    pub fn regime_label(&self) -> &'static str { self.regime_label }
    pub fn icon_name(&self) -> &'static str { self.icon_name }
    pub fn ratio_text(&self) -> &str { &self.ratio_text }
}
