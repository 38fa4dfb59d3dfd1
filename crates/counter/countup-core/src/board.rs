//! Board: hosts any number of independent counters on one frame loop.
//!
//! Methods:
//! - new, mount, mount_staggered, unmount, update (deliver due wake-ups → apply inputs)
//!
//! Counters share the board's clock and [`FrameQueue`] but nothing else; each
//! ticket is routed back to the counter that scheduled it.

use hashbrown::HashMap;
use log::{debug, warn};

use crate::animator::Phase;
use crate::clock::{Clock, ManualClock};
use crate::config::Config;
use crate::counter::CountUp;
use crate::error::RequestError;
use crate::ids::{CounterId, IdAllocator};
use crate::inputs::Inputs;
use crate::outputs::{Change, CounterEvent, Outputs};
use crate::request::AnimationRequest;
use crate::schedule::{FrameQueue, StepScheduler, Ticket, Wake};
use crate::AnimationState;

/// Scheduler view handed to one counter: records which counter owns each
/// ticket it creates.
struct Routed<'a> {
    queue: &'a mut FrameQueue,
    routes: &'a mut HashMap<Ticket, CounterId>,
    owner: CounterId,
}

impl StepScheduler for Routed<'_> {
    fn schedule(&mut self, wake: Wake) -> Ticket {
        let ticket = self.queue.schedule(wake);
        self.routes.insert(ticket, self.owner);
        ticket
    }

    fn cancel(&mut self, ticket: Ticket) {
        self.queue.cancel(ticket);
        self.routes.remove(&ticket);
    }
}

#[derive(Debug)]
pub struct Board<C: Clock = ManualClock> {
    cfg: Config,
    clock: C,
    ids: IdAllocator,
    counters: HashMap<CounterId, CountUp>,
    queue: FrameQueue,
    routes: HashMap<Ticket, CounterId>,
    // Counters whose text the host has not seen yet (freshly mounted).
    unseen: Vec<CounterId>,
    // Events raised outside update(), flushed on the next update.
    deferred: Vec<CounterEvent>,
    outputs: Outputs,
}

impl<C: Clock> Board<C> {
    pub fn new(cfg: Config, clock: C) -> Result<Self, RequestError> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            clock,
            ids: IdAllocator::new(),
            counters: HashMap::new(),
            queue: FrameQueue::new(),
            routes: HashMap::new(),
            unseen: Vec::new(),
            deferred: Vec::new(),
            outputs: Outputs::default(),
        })
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.counters.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// No counter is waiting on a frame or a timer.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Mount a counter. It shows its start value until it becomes visible.
    pub fn mount(&mut self, req: &AnimationRequest) -> Result<CounterId, RequestError> {
        let counter = CountUp::new(req, self.cfg.visibility_threshold)?;
        let id = self.ids.alloc().ok_or(RequestError::IdsExhausted)?;
        debug!("mounted counter {:?} -> {}", id, req.end);
        self.counters.insert(id, counter);
        self.unseen.push(id);
        Ok(id)
    }

    /// Mount a row of counters, adding `index * stagger_ms` to each one's
    /// delay so they start one after another. Nothing is mounted if any
    /// request is invalid.
    pub fn mount_staggered(
        &mut self,
        reqs: &[AnimationRequest],
    ) -> Result<Vec<CounterId>, RequestError> {
        let staggered: Vec<AnimationRequest> = reqs
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let mut r = r.clone();
                r.delay_ms += i as f64 * self.cfg.stagger_ms;
                r
            })
            .collect();
        for r in &staggered {
            r.validate()?;
        }
        staggered.iter().map(|r| self.mount(r)).collect()
    }

    /// Remove a counter, cancelling whatever it had scheduled. Returns
    /// `false` for unknown ids.
    pub fn unmount(&mut self, id: CounterId) -> bool {
        let Some(mut counter) = self.counters.remove(&id) else {
            warn!("unmount: unknown counter {id:?}");
            return false;
        };
        let mut sched = Routed {
            queue: &mut self.queue,
            routes: &mut self.routes,
            owner: id,
        };
        counter.unmount(&mut sched);
        self.unseen.retain(|u| *u != id);
        self.deferred.push(CounterEvent::Unmounted {
            counter: id,
            completed: counter.state().is_complete,
        });
        true
    }

    pub fn text(&self, id: CounterId) -> Option<&str> {
        self.counters.get(&id).map(|c| c.text())
    }

    pub fn state(&self, id: CounterId) -> Option<AnimationState> {
        self.counters.get(&id).map(|c| c.state())
    }

    pub fn counter(&self, id: CounterId) -> Option<&CountUp> {
        self.counters.get(&id)
    }

    /// Evaluate one frame at the clock's current time.
    ///
    /// Wake-ups already due are delivered first; visibility inputs are
    /// applied afterwards, so a counter that becomes visible this frame takes
    /// its first interpolation step on the next one.
    pub fn update(&mut self, inputs: Inputs) -> &Outputs {
        self.outputs.clear();
        let now = self.clock.now_ms();
        self.outputs.time_ms = now;
        self.outputs.events.append(&mut self.deferred);

        for id in std::mem::take(&mut self.unseen) {
            if let Some(c) = self.counters.get(&id) {
                self.outputs.push_change(Change {
                    counter: id,
                    text: c.text().to_string(),
                    value: c.state().current_value,
                });
            }
        }

        // 1) Deliver due wake-ups in queue order.
        for ticket in self.queue.drain_due(now) {
            let Some(id) = self.routes.remove(&ticket) else {
                continue;
            };
            let Some(counter) = self.counters.get_mut(&id) else {
                continue;
            };
            let was_running = matches!(counter.phase(), Phase::Running { .. });
            let mut sched = Routed {
                queue: &mut self.queue,
                routes: &mut self.routes,
                owner: id,
            };
            let changed = counter.wake(ticket, now, &mut sched);
            let state = counter.state();

            if !was_running {
                if let Phase::Running { started_at_ms } = counter.phase() {
                    self.outputs.push_event(CounterEvent::Started {
                        counter: id,
                        time_ms: started_at_ms,
                    });
                }
            }
            if changed {
                self.outputs.push_change(Change {
                    counter: id,
                    text: counter.text().to_string(),
                    value: state.current_value,
                });
            }
            if state.is_complete && counter.pending().is_none() && was_running {
                self.outputs.push_event(CounterEvent::Completed {
                    counter: id,
                    value: state.current_value,
                });
            }
        }

        // 2) Apply visibility observations.
        for upd in inputs.visibility {
            let Some(counter) = self.counters.get_mut(&upd.counter) else {
                warn!("visibility for unknown counter {:?}", upd.counter);
                continue;
            };
            let mut sched = Routed {
                queue: &mut self.queue,
                routes: &mut self.routes,
                owner: upd.counter,
            };
            if counter.observe(upd.ratio, now, &mut sched) {
                self.outputs.push_event(CounterEvent::Triggered {
                    counter: upd.counter,
                    time_ms: now,
                });
                if let Phase::Running { started_at_ms } = counter.phase() {
                    self.outputs.push_event(CounterEvent::Started {
                        counter: upd.counter,
                        time_ms: started_at_ms,
                    });
                }
            }
        }

        self.outputs.wants_frame = self.queue.has_frame_requests();
        self.outputs.next_timer_ms = self.queue.next_timer_ms();
        &self.outputs
    }
}

impl Board<ManualClock> {
    /// Board on a fresh manual clock starting at 0 ms.
    pub fn manual(cfg: Config) -> Result<Self, RequestError> {
        Self::new(cfg, ManualClock::new(0.0))
    }
}
