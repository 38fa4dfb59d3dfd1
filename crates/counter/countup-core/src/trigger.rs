//! Edge-triggered visibility latch.
//!
//! The host reports how much of the element intersects the viewport; the
//! latch fires once, on the first report at or above the threshold, and
//! ignores everything after that (including the element leaving the view).

use serde::{Deserialize, Serialize};

use crate::error::RequestError;

pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.3;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerState {
    #[default]
    NotTriggered,
    Triggered,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityTrigger {
    threshold: f64,
    state: TriggerState,
}

impl Default for VisibilityTrigger {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_VISIBILITY_THRESHOLD,
            state: TriggerState::NotTriggered,
        }
    }
}

impl VisibilityTrigger {
    /// `threshold` is the fraction of the element's area that must intersect.
    pub fn new(threshold: f64) -> Result<Self, RequestError> {
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(RequestError::InvalidThreshold { threshold });
        }
        Ok(Self {
            threshold,
            state: TriggerState::NotTriggered,
        })
    }

    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[inline]
    pub fn state(&self) -> TriggerState {
        self.state
    }

    #[inline]
    pub fn is_triggered(&self) -> bool {
        self.state == TriggerState::Triggered
    }

    /// Report an intersection ratio. Returns `true` only on the
    /// `NotTriggered -> Triggered` transition.
    pub fn observe(&mut self, ratio: f64) -> bool {
        self.observe_visible(ratio >= self.threshold)
    }

    /// Report an already-thresholded visibility flag.
    pub fn observe_visible(&mut self, visible: bool) -> bool {
        match (self.state, visible) {
            (TriggerState::NotTriggered, true) => {
                self.state = TriggerState::Triggered;
                true
            }
            _ => false,
        }
    }
}
