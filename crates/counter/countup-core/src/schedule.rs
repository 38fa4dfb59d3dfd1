//! Step scheduling: how a counter asks to be woken up again.
//!
//! A counter never loops on its own. After every step it hands the host a
//! [`Wake`] request (next display frame, or a one-shot timer) and receives a
//! [`Ticket`] it must present when woken. Hosts implement [`StepScheduler`]
//! on top of `requestAnimationFrame`/`setTimeout`; [`FrameQueue`] is the
//! deterministic in-process implementation used by the board and tests.

use serde::{Deserialize, Serialize};

/// Opaque handle for one scheduled wake-up.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Ticket(pub u64);

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Wake {
    /// Resume on the next display refresh.
    NextFrame,
    /// Resume once the host clock reaches this time (ms).
    At(f64),
}

pub trait StepScheduler {
    fn schedule(&mut self, wake: Wake) -> Ticket;
    /// Cancelling an unknown or already-fired ticket is a no-op.
    fn cancel(&mut self, ticket: Ticket);
}

impl<S: StepScheduler + ?Sized> StepScheduler for &mut S {
    fn schedule(&mut self, wake: Wake) -> Ticket {
        (**self).schedule(wake)
    }

    fn cancel(&mut self, ticket: Ticket) {
        (**self).cancel(ticket)
    }
}

/// Deterministic scheduler: frame requests fire on the next drain, timers
/// fire on the first drain at or after their due time.
#[derive(Debug, Default)]
pub struct FrameQueue {
    next: u64,
    frames: Vec<Ticket>,
    timers: Vec<(f64, Ticket)>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return everything due at `now_ms`: timers first (by due
    /// time, then scheduling order), then frame requests in request order.
    /// Anything scheduled while the caller processes the result waits for
    /// the next drain.
    pub fn drain_due(&mut self, now_ms: f64) -> Vec<Ticket> {
        let mut due: Vec<(f64, Ticket)> = Vec::new();
        self.timers.retain(|&(at, t)| {
            if at <= now_ms {
                due.push((at, t));
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        let mut out: Vec<Ticket> = due.into_iter().map(|(_, t)| t).collect();
        out.append(&mut self.frames);
        out
    }

    #[inline]
    pub fn has_frame_requests(&self) -> bool {
        !self.frames.is_empty()
    }

    /// Earliest pending timer, if any.
    pub fn next_timer_ms(&self) -> Option<f64> {
        self.timers
            .iter()
            .map(|&(at, _)| at)
            .min_by(|a, b| a.total_cmp(b))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len() + self.timers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, ticket: Ticket) -> bool {
        self.frames.contains(&ticket) || self.timers.iter().any(|&(_, t)| t == ticket)
    }
}

impl StepScheduler for FrameQueue {
    fn schedule(&mut self, wake: Wake) -> Ticket {
        let ticket = Ticket(self.next);
        self.next = self.next.wrapping_add(1);
        match wake {
            Wake::NextFrame => self.frames.push(ticket),
            Wake::At(at) => self.timers.push((at, ticket)),
        }
        ticket
    }

    fn cancel(&mut self, ticket: Ticket) {
        self.frames.retain(|t| *t != ticket);
        self.timers.retain(|&(_, t)| t != ticket);
    }
}
