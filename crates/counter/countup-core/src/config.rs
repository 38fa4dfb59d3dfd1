//! Board configuration.

use serde::{Deserialize, Serialize};

use crate::error::RequestError;
use crate::trigger::DEFAULT_VISIBILITY_THRESHOLD;

/// Settings shared by every counter on a board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fraction of a counter's area that must intersect the viewport before
    /// it starts counting.
    pub visibility_threshold: f64,
    /// Extra delay per position when mounting a row of counters together.
    pub stagger_ms: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
            stagger_ms: 200.0,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), RequestError> {
        let t = self.visibility_threshold;
        if !(t > 0.0 && t <= 1.0) {
            return Err(RequestError::InvalidThreshold { threshold: t });
        }
        if !self.stagger_ms.is_finite() || self.stagger_ms < 0.0 {
            return Err(RequestError::InvalidDelay {
                delay_ms: self.stagger_ms,
            });
        }
        Ok(())
    }
}
