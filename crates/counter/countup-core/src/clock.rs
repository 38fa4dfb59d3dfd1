//! Time sources. Counters never read wall time directly; a `Clock` is
//! injected so hosts and tests decide what "now" means.

use std::cell::Cell;
use std::rc::Rc;

use instant::Instant;

pub trait Clock {
    /// Milliseconds on a monotonic timeline with an arbitrary origin.
    fn now_ms(&self) -> f64;
}

/// Externally driven clock. Clones share the same timeline, so a test (or a
/// host forwarding `requestAnimationFrame` timestamps) keeps one handle and
/// gives another to the board.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn set(&self, now_ms: f64) {
        self.now.set(now_ms);
    }

    pub fn advance(&self, dt_ms: f64) {
        self.now.set(self.now.get() + dt_ms);
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

/// Monotonic wall clock measured from construction. On wasm32 this reads
/// `performance.now()`.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now_ms(&self) -> f64 {
        (**self).now_ms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_clones_share_time() {
        let a = ManualClock::new(10.0);
        let b = a.clone();
        a.advance(5.5);
        assert_eq!(b.now_ms(), 15.5);
        b.set(100.0);
        assert_eq!(a.now_ms(), 100.0);
    }

    #[test]
    fn system_clock_is_monotonic() {
        let c = SystemClock::default();
        let t0 = c.now_ms();
        let t1 = c.now_ms();
        assert!(t1 >= t0);
    }
}
