//! Input contracts for `Board::update`.
//!
//! Hosts forward viewport observations (e.g. `IntersectionObserver` entries)
//! here; they are applied after the frame's due wake-ups are delivered.

use serde::{Deserialize, Serialize};

use crate::ids::CounterId;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Inputs {
    #[serde(default)]
    pub visibility: Vec<VisibilityUpdate>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VisibilityUpdate {
    pub counter: CounterId,
    /// Intersection ratio in `[0, 1]`.
    pub ratio: f64,
}

impl Inputs {
    pub fn visible(counter: CounterId) -> Self {
        Self {
            visibility: vec![VisibilityUpdate {
                counter,
                ratio: 1.0,
            }],
        }
    }

    pub fn with_ratio(mut self, counter: CounterId, ratio: f64) -> Self {
        self.visibility.push(VisibilityUpdate { counter, ratio });
        self
    }
}
