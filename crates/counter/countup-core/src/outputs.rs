//! Output contracts from `Board::update`.
//!
//! `changes` carries only counters whose display text changed this frame.
//! The scheduling hints tell the host whether to request another animation
//! frame or just arm a timer, so an idle page stops repainting.

use serde::{Deserialize, Serialize};

use crate::ids::CounterId;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Change {
    pub counter: CounterId,
    pub text: String,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CounterEvent {
    /// The visibility latch fired.
    Triggered { counter: CounterId, time_ms: f64 },
    /// Interpolation began (after any delay).
    Started { counter: CounterId, time_ms: f64 },
    /// Final value written.
    Completed { counter: CounterId, value: f64 },
    /// Removed from the board; `completed` says whether it finished first.
    Unmounted { counter: CounterId, completed: bool },
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    /// Host time this frame was evaluated at.
    pub time_ms: f64,
    #[serde(default)]
    pub changes: Vec<Change>,
    #[serde(default)]
    pub events: Vec<CounterEvent>,
    /// At least one counter wants the next display frame.
    pub wants_frame: bool,
    /// Earliest pending delay timer, if any.
    pub next_timer_ms: Option<f64>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.changes.clear();
        self.events.clear();
        self.wants_frame = false;
        self.next_timer_ms = None;
    }

    #[inline]
    pub fn push_change(&mut self, change: Change) {
        self.changes.push(change);
    }

    #[inline]
    pub fn push_event(&mut self, event: CounterEvent) {
        self.events.push(event);
    }

    /// Nothing changed and nothing is scheduled.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.changes.is_empty()
            && self.events.is_empty()
            && !self.wants_frame
            && self.next_timer_ms.is_none()
    }

    pub fn text_for(&self, counter: CounterId) -> Option<&str> {
        self.changes
            .iter()
            .rev()
            .find(|c| c.counter == counter)
            .map(|c| c.text.as_str())
    }
}
