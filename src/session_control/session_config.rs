use crate::glide_control::{ReadoutFormat, common::math::MAX_PLACES};
use crate::warn;
use std::{env, str::FromStr, time::Duration};

/// Tunables of a glide session.
///
/// Defaults match a phone motion sensor: a two second warm-up before the
/// first availability check and a 10 Hz sample rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    /// Delay between `start()` and the sensor availability check.
    settle_delay_ms: u64,
    /// Interval requested from the sensor feed.
    sample_interval_ms: u64,
    /// Overlay formatting.
    readout: ReadoutFormat,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: Self::DEFAULT_SETTLE_DELAY_MS,
            sample_interval_ms: Self::DEFAULT_SAMPLE_INTERVAL_MS,
            readout: ReadoutFormat::default(),
        }
    }
}

impl SessionConfig {
    const DEFAULT_SETTLE_DELAY_MS: u64 = 2000;
    const DEFAULT_SAMPLE_INTERVAL_MS: u64 = 100;

    pub const SETTLE_DELAY_VAR: &'static str = "GLIDE_SETTLE_DELAY_MS";
    pub const SAMPLE_INTERVAL_VAR: &'static str = "GLIDE_SAMPLE_INTERVAL_MS";
    pub const MAX_DISPLAY_RATIO_VAR: &'static str = "GLIDE_MAX_DISPLAY_RATIO";
    pub const DISPLAY_PLACES_VAR: &'static str = "GLIDE_DISPLAY_PLACES";

    pub fn new(settle_delay: Duration, sample_interval: Duration) -> Self {
        Self {
            settle_delay_ms: u64::try_from(settle_delay.as_millis()).unwrap_or(u64::MAX),
            sample_interval_ms: u64::try_from(sample_interval.as_millis()).unwrap_or(u64::MAX),
            readout: ReadoutFormat::default(),
        }
    }

    /// Reads overrides from the process environment on top of the defaults.
    pub fn from_env() -> Self { Self::from_lookup(|key| env::var(key).ok()) }

    /// Builds a config from a key lookup, falling back to the default for every
    /// missing or unparsable key.
    ///
    /// # Arguments
    /// * `lookup` – Returns the raw value for a variable name, if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(v) = Self::parse_var(&lookup, Self::SETTLE_DELAY_VAR) {
            config.settle_delay_ms = v;
        }
        if let Some(v) = Self::parse_var::<u64>(&lookup, Self::SAMPLE_INTERVAL_VAR) {
            if v == 0 {
                warn!("Ignoring {}=0, keeping {}ms.", Self::SAMPLE_INTERVAL_VAR, config.sample_interval_ms);
            } else {
                config.sample_interval_ms = v;
            }
        }
        if let Some(v) = Self::parse_var(&lookup, Self::MAX_DISPLAY_RATIO_VAR) {
            config.readout.max_display_ratio = v;
        }
        if let Some(v) = Self::parse_var::<u32>(&lookup, Self::DISPLAY_PLACES_VAR) {
            if v > MAX_PLACES {
                warn!("Clamping {}={v} to {MAX_PLACES}.", Self::DISPLAY_PLACES_VAR);
            }
            config.readout.display_places = v.min(MAX_PLACES);
        }
        config
    }

    fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
        let raw = lookup(key)?;
        let parsed = raw.trim().parse::<T>().ok();
        if parsed.is_none() {
            warn!("Ignoring unparsable {key}={raw:?}.");
        }
        parsed
    }

    pub fn settle_delay(&self) -> Duration { Duration::from_millis(self.settle_delay_ms) }
    pub fn sample_interval(&self) -> Duration { Duration::from_millis(self.sample_interval_ms) }
    pub fn readout(&self) -> ReadoutFormat { self.readout }

    #[must_use]
    pub fn with_readout(mut self, readout: ReadoutFormat) -> Self {
        self.readout = readout;
        self
    }
}
