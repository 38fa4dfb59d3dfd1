//! One mounted count-up display: visibility latch + animator + formatter.
//!
//! A `CountUp` holds at most one outstanding [`Ticket`]. Wake-ups carrying any
//! other ticket (already fired, cancelled, or from before an unmount) are
//! ignored, so a late host callback can never write into a dead instance.

use log::{debug, warn};

use crate::animator::{AnimationState, Phase, ValueAnimator};
use crate::error::RequestError;
use crate::format::Formatter;
use crate::request::AnimationRequest;
use crate::schedule::{StepScheduler, Ticket};
use crate::trigger::VisibilityTrigger;

#[derive(Clone, Debug)]
pub struct CountUp {
    trigger: VisibilityTrigger,
    animator: ValueAnimator,
    formatter: Formatter,
    pending: Option<Ticket>,
    mounted: bool,
    text: String,
}

impl CountUp {
    pub fn new(req: &AnimationRequest, threshold: f64) -> Result<Self, RequestError> {
        let trigger = VisibilityTrigger::new(threshold)?;
        let animator = ValueAnimator::new(req)?;
        let formatter = Formatter::from_request(req);
        let text = formatter.format(animator.value());
        Ok(Self {
            trigger,
            animator,
            formatter,
            pending: None,
            mounted: true,
            text,
        })
    }

    /// Current display string.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn state(&self) -> AnimationState {
        self.animator.state()
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.animator.phase()
    }

    #[inline]
    pub fn pending(&self) -> Option<Ticket> {
        self.pending
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[inline]
    pub fn is_triggered(&self) -> bool {
        self.trigger.is_triggered()
    }

    /// Feed an intersection ratio. Returns `true` if this observation started
    /// the animation.
    pub fn observe<S: StepScheduler + ?Sized>(
        &mut self,
        ratio: f64,
        now_ms: f64,
        sched: &mut S,
    ) -> bool {
        if !self.mounted {
            return false;
        }
        if !self.trigger.observe(ratio) {
            return false;
        }
        self.start(now_ms, sched)
    }

    /// Like [`CountUp::observe`] for hosts that already applied the threshold.
    pub fn observe_visible<S: StepScheduler + ?Sized>(
        &mut self,
        visible: bool,
        now_ms: f64,
        sched: &mut S,
    ) -> bool {
        if !self.mounted {
            return false;
        }
        if !self.trigger.observe_visible(visible) {
            return false;
        }
        self.start(now_ms, sched)
    }

    fn start<S: StepScheduler + ?Sized>(&mut self, now_ms: f64, sched: &mut S) -> bool {
        debug!("count-up visible at {now_ms}ms");
        match self.animator.begin(now_ms) {
            Some(wake) => {
                self.pending = Some(sched.schedule(wake));
                true
            }
            None => false,
        }
    }

    /// Deliver a scheduled wake-up. Returns `true` if the display text changed.
    pub fn wake<S: StepScheduler + ?Sized>(
        &mut self,
        ticket: Ticket,
        now_ms: f64,
        sched: &mut S,
    ) -> bool {
        if !self.mounted || self.pending != Some(ticket) {
            warn!("ignoring stale wake {ticket:?} (pending {:?})", self.pending);
            return false;
        }
        self.pending = None;
        if let Some(wake) = self.animator.step(now_ms) {
            self.pending = Some(sched.schedule(wake));
        }
        self.render()
    }

    fn render(&mut self) -> bool {
        let text = self.formatter.format(self.animator.value());
        if text == self.text {
            return false;
        }
        self.text = text;
        true
    }

    /// Cancel any outstanding wake-up and freeze the instance. Safe to call
    /// more than once.
    pub fn unmount<S: StepScheduler + ?Sized>(&mut self, sched: &mut S) {
        if let Some(ticket) = self.pending.take() {
            sched.cancel(ticket);
            debug!("count-up unmounted; cancelled {ticket:?}");
        }
        self.mounted = false;
    }
}
