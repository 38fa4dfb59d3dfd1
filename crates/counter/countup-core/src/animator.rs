//! Value animator: single-shot, frame-driven interpolation from `start` to
//! `end`.
//!
//! The animator is a plain state machine. It does not own a clock or a
//! scheduler; callers pass `now_ms` into [`ValueAnimator::begin`] and
//! [`ValueAnimator::step`] and schedule whatever [`Wake`] comes back.
//!
//! Phases: `Idle -> Delayed -> Running -> Complete` (`Delayed` is skipped when
//! the delay is zero). `Complete` is terminal.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::error::RequestError;
use crate::request::AnimationRequest;
use crate::schedule::Wake;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    Delayed { until_ms: f64 },
    Running { started_at_ms: f64 },
    Complete,
}

/// Observable state of one counter.
///
/// `is_running` latches `true` when the animation is begun (including any
/// delay) and stays `true` after completion.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationState {
    pub current_value: f64,
    pub is_running: bool,
    pub is_complete: bool,
}

#[derive(Clone, Debug)]
pub struct ValueAnimator {
    start: f64,
    end: f64,
    duration_ms: f64,
    delay_ms: f64,
    easing: Easing,
    phase: Phase,
    state: AnimationState,
    progress: f64,
}

impl ValueAnimator {
    pub fn new(req: &AnimationRequest) -> Result<Self, RequestError> {
        req.validate()?;
        Ok(Self {
            start: req.start,
            end: req.end,
            duration_ms: req.duration_ms,
            delay_ms: req.delay_ms,
            easing: req.easing,
            phase: Phase::Idle,
            state: AnimationState {
                current_value: req.start,
                is_running: false,
                is_complete: false,
            },
            progress: 0.0,
        })
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn state(&self) -> AnimationState {
        self.state
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.state.current_value
    }

    /// Normalized linear progress of the last step, in `[0, 1]`.
    #[inline]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Interpolated value `elapsed_ms` after interpolation began. Pure; does
    /// not touch the animator's state.
    pub fn sample_at(&self, elapsed_ms: f64) -> f64 {
        let p = (elapsed_ms.max(0.0) / self.duration_ms).min(1.0);
        self.interpolate(p)
    }

    #[inline]
    fn interpolate(&self, p: f64) -> f64 {
        self.start + (self.end - self.start) * self.easing.apply(p)
    }

    /// Start the run. Only the first call has an effect; later calls return
    /// `None` without touching state.
    pub fn begin(&mut self, now_ms: f64) -> Option<Wake> {
        if self.phase != Phase::Idle {
            debug!("animator already begun ({:?}); ignoring repeated trigger", self.phase);
            return None;
        }
        self.state.is_running = true;
        if self.delay_ms > 0.0 {
            let until_ms = now_ms + self.delay_ms;
            self.phase = Phase::Delayed { until_ms };
            debug!("animator delayed until {until_ms}ms");
            Some(Wake::At(until_ms))
        } else {
            Some(self.start_running(now_ms))
        }
    }

    fn start_running(&mut self, now_ms: f64) -> Wake {
        self.phase = Phase::Running {
            started_at_ms: now_ms,
        };
        debug!(
            "animator running {} -> {} over {}ms",
            self.start, self.end, self.duration_ms
        );
        Wake::NextFrame
    }

    /// Advance to `now_ms`. Returns the next wake-up, or `None` when there is
    /// nothing left to schedule (idle or complete).
    pub fn step(&mut self, now_ms: f64) -> Option<Wake> {
        match self.phase {
            Phase::Idle | Phase::Complete => None,
            Phase::Delayed { until_ms } => {
                if now_ms < until_ms {
                    Some(Wake::At(until_ms))
                } else {
                    Some(self.start_running(now_ms))
                }
            }
            Phase::Running { started_at_ms } => {
                let elapsed = (now_ms - started_at_ms).max(0.0);
                // A clock that steps backwards must not move the value backwards.
                let p = (elapsed / self.duration_ms).min(1.0).max(self.progress);
                self.progress = p;
                if p >= 1.0 {
                    self.finish();
                    None
                } else {
                    self.state.current_value = self.interpolate(p);
                    Some(Wake::NextFrame)
                }
            }
        }
    }

    fn finish(&mut self) {
        self.progress = 1.0;
        self.state.current_value = self.end;
        self.state.is_complete = true;
        self.phase = Phase::Complete;
        debug!("animator complete at {}", self.end);
    }
}
