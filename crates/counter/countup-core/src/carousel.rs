//! Swipeable slide carousel with timed auto-advance.
//!
//! Like the counters, the carousel owns no timer. It schedules a one-shot
//! [`Wake::At`] through the injected [`StepScheduler`] and keeps the single
//! outstanding [`Ticket`]; any other ticket delivered to [`Carousel::wake`]
//! is stale and ignored. Every navigation (swipe, arrow, dot) re-arms the
//! auto-advance timer from the moment of navigation.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::RequestError;
use crate::schedule::{StepScheduler, Ticket, Wake};

pub const DEFAULT_AUTO_ADVANCE_MS: f64 = 5000.0;
pub const DEFAULT_MIN_SWIPE_PX: f64 = 50.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Time on one slide before moving to the next.
    pub auto_advance_ms: f64,
    /// Horizontal travel a touch must exceed to count as a swipe.
    pub min_swipe_px: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_advance_ms: DEFAULT_AUTO_ADVANCE_MS,
            min_swipe_px: DEFAULT_MIN_SWIPE_PX,
        }
    }
}

impl CarouselConfig {
    pub fn validate(&self) -> Result<(), RequestError> {
        if !self.auto_advance_ms.is_finite() || self.auto_advance_ms <= 0.0 {
            return Err(RequestError::InvalidInterval {
                interval_ms: self.auto_advance_ms,
            });
        }
        if !self.min_swipe_px.is_finite() || self.min_swipe_px < 0.0 {
            return Err(RequestError::InvalidSwipeDistance {
                distance_px: self.min_swipe_px,
            });
        }
        Ok(())
    }
}

/// Direction of a recognised swipe. A left swipe shows the next slide.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Swipe {
    Left,
    Right,
}

/// Touch positions of the gesture in progress.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SwipeGesture {
    start_x: Option<f64>,
    end_x: Option<f64>,
}

impl SwipeGesture {
    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
        self.end_x = None;
    }

    pub fn track(&mut self, x: f64) {
        self.end_x = Some(x);
    }

    /// Finish the gesture. A touch that never moved is a tap, not a swipe.
    pub fn finish(&mut self, min_swipe_px: f64) -> Option<Swipe> {
        let (start, end) = (self.start_x.take()?, self.end_x.take()?);
        let distance = start - end;
        if distance > min_swipe_px {
            Some(Swipe::Left)
        } else if distance < -min_swipe_px {
            Some(Swipe::Right)
        } else {
            None
        }
    }
}

#[derive(Clone, Debug)]
pub struct Carousel {
    cfg: CarouselConfig,
    len: usize,
    current: usize,
    gesture: SwipeGesture,
    pending: Option<Ticket>,
    running: bool,
}

impl Carousel {
    pub fn new(len: usize, cfg: CarouselConfig) -> Result<Self, RequestError> {
        cfg.validate()?;
        if len == 0 {
            return Err(RequestError::EmptyCarousel);
        }
        Ok(Self {
            cfg,
            len,
            current: 0,
            gesture: SwipeGesture::default(),
            pending: None,
            running: false,
        })
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn pending(&self) -> Option<Ticket> {
        self.pending
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start auto-advancing. Calling it again while running is a no-op.
    pub fn start<S: StepScheduler + ?Sized>(&mut self, now_ms: f64, sched: &mut S) {
        if self.running {
            return;
        }
        self.running = true;
        self.rearm(now_ms, sched);
    }

    /// Cancel the auto-advance timer. Manual navigation still works.
    pub fn stop<S: StepScheduler + ?Sized>(&mut self, sched: &mut S) {
        if let Some(ticket) = self.pending.take() {
            sched.cancel(ticket);
        }
        self.running = false;
    }

    fn rearm<S: StepScheduler + ?Sized>(&mut self, now_ms: f64, sched: &mut S) {
        if let Some(ticket) = self.pending.take() {
            sched.cancel(ticket);
        }
        if self.running {
            self.pending = Some(sched.schedule(Wake::At(now_ms + self.cfg.auto_advance_ms)));
        }
    }

    /// Deliver the auto-advance timer. Returns `true` if the slide changed.
    pub fn wake<S: StepScheduler + ?Sized>(
        &mut self,
        ticket: Ticket,
        now_ms: f64,
        sched: &mut S,
    ) -> bool {
        if self.pending != Some(ticket) {
            debug!("carousel ignoring stale wake {ticket:?}");
            return false;
        }
        self.pending = None;
        self.next(now_ms, sched)
    }

    pub fn next<S: StepScheduler + ?Sized>(&mut self, now_ms: f64, sched: &mut S) -> bool {
        self.go_to((self.current + 1) % self.len, now_ms, sched)
    }

    pub fn previous<S: StepScheduler + ?Sized>(&mut self, now_ms: f64, sched: &mut S) -> bool {
        self.go_to((self.current + self.len - 1) % self.len, now_ms, sched)
    }

    /// Jump straight to a slide (dot navigation).
    pub fn select<S: StepScheduler + ?Sized>(
        &mut self,
        index: usize,
        now_ms: f64,
        sched: &mut S,
    ) -> Result<bool, RequestError> {
        if index >= self.len {
            return Err(RequestError::SlideOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(self.go_to(index, now_ms, sched))
    }

    fn go_to<S: StepScheduler + ?Sized>(&mut self, index: usize, now_ms: f64, sched: &mut S) -> bool {
        let changed = index != self.current;
        self.current = index;
        self.rearm(now_ms, sched);
        debug!("carousel at slide {index} of {}", self.len);
        changed
    }

    pub fn touch_start(&mut self, x: f64) {
        self.gesture.begin(x);
    }

    pub fn touch_move(&mut self, x: f64) {
        self.gesture.track(x);
    }

    /// End the touch; a recognised swipe navigates and is returned.
    pub fn touch_end<S: StepScheduler + ?Sized>(
        &mut self,
        now_ms: f64,
        sched: &mut S,
    ) -> Option<Swipe> {
        let swipe = self.gesture.finish(self.cfg.min_swipe_px)?;
        match swipe {
            Swipe::Left => self.next(now_ms, sched),
            Swipe::Right => self.previous(now_ms, sched),
        };
        Some(swipe)
    }
}
