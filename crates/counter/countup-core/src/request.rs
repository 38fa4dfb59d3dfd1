//! Animation request: the configuration surface of a single counter.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::error::RequestError;

pub const DEFAULT_DURATION_MS: f64 = 2000.0;

/// Largest accepted `decimals`, the same ceiling as JS `toFixed`.
pub const MAX_DECIMALS: u32 = 100;

fn default_duration() -> f64 {
    DEFAULT_DURATION_MS
}

/// What a counter animates and how it is displayed.
///
/// JSON field names follow the host-facing option names (`duration`, `delay`);
/// everything except `end` is optional.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationRequest {
    #[serde(default)]
    pub start: f64,
    pub end: f64,
    #[serde(rename = "duration", alias = "duration_ms", default = "default_duration")]
    pub duration_ms: f64,
    #[serde(rename = "delay", alias = "delay_ms", default)]
    pub delay_ms: f64,
    #[serde(default)]
    pub decimals: u32,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
    #[serde(default)]
    pub easing: Easing,
}

impl AnimationRequest {
    /// Count from 0 to `end` with every other option at its default.
    pub fn to(end: f64) -> Self {
        Self {
            start: 0.0,
            end,
            duration_ms: DEFAULT_DURATION_MS,
            delay_ms: 0.0,
            decimals: 0,
            prefix: String::new(),
            suffix: String::new(),
            easing: Easing::default(),
        }
    }

    pub fn with_start(mut self, start: f64) -> Self {
        self.start = start;
        self
    }

    pub fn with_duration(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Reject misuse instead of clamping it.
    pub fn validate(&self) -> Result<(), RequestError> {
        if !self.start.is_finite() {
            return Err(RequestError::NonFiniteBound {
                field: "start".into(),
                value: self.start,
            });
        }
        if !self.end.is_finite() {
            return Err(RequestError::NonFiniteBound {
                field: "end".into(),
                value: self.end,
            });
        }
        if !self.duration_ms.is_finite() || self.duration_ms <= 0.0 {
            return Err(RequestError::InvalidDuration {
                duration_ms: self.duration_ms,
            });
        }
        if !self.delay_ms.is_finite() || self.delay_ms < 0.0 {
            return Err(RequestError::InvalidDelay {
                delay_ms: self.delay_ms,
            });
        }
        if self.decimals > MAX_DECIMALS {
            return Err(RequestError::InvalidDecimals {
                decimals: self.decimals,
                max: MAX_DECIMALS,
            });
        }
        Ok(())
    }
}
