use js_sys::{Object, Reflect};
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use countup_core::{
    format_number, AnimationRequest, Board, Carousel, CarouselConfig, Config, CounterId,
    FrameQueue, Inputs, ManualClock, Outputs, Swipe,
};

/// Browser-facing board. The page owns the `IntersectionObserver` and the
/// `requestAnimationFrame` loop:
///
/// ```js
/// const board = new CountUpBoard({ visibility_threshold: 0.3 });
/// const id = board.mount({ end: 500, duration: 2500, suffix: "+" });
/// observer callback: board.observe(id, entry.intersectionRatio);
/// frame(ts): const out = board.update(ts);
///            apply out.changes; if (out.wants_frame) requestAnimationFrame(frame);
///            else if (out.next_timer_ms != null) setTimeout(..., out.next_timer_ms - ts);
/// ```
#[wasm_bindgen]
pub struct CountUpBoard {
    core: Board<ManualClock>,
    pending: Inputs,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

#[wasm_bindgen]
impl CountUpBoard {
    /// Create a board. Pass a JSON config object or undefined/null for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<CountUpBoard, JsError> {
        console_error_panic_hook::set_once();

        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        let core = Board::new(cfg, ManualClock::new(0.0))
            .map_err(|e| JsError::new(&format!("config error: {e}")))?;

        Ok(CountUpBoard {
            core,
            pending: Inputs::default(),
        })
    }

    /// Mount a counter from an options object (`end` required). Returns its id.
    #[wasm_bindgen]
    pub fn mount(&mut self, request: JsValue) -> Result<u32, JsError> {
        let req: AnimationRequest = swb::from_value(request)
            .map_err(|e| JsError::new(&format!("mount parse error: {e}")))?;
        self.mount_request(&req)
    }

    /// Same as `mount`, taking a JSON string.
    #[wasm_bindgen(js_name = mount_json)]
    pub fn mount_json(&mut self, request_json: &str) -> Result<u32, JsError> {
        let req: AnimationRequest = serde_json::from_str(request_json)
            .map_err(|e| JsError::new(&format!("mount parse error: {e}")))?;
        self.mount_request(&req)
    }

    fn mount_request(&mut self, req: &AnimationRequest) -> Result<u32, JsError> {
        self.core
            .mount(req)
            .map(|id| id.0)
            .map_err(|e| JsError::new(&format!("mount error: {e}")))
    }

    /// Mount an array of option objects with staggered delays. Returns ids in order.
    #[wasm_bindgen(js_name = mount_staggered)]
    pub fn mount_staggered(&mut self, requests: JsValue) -> Result<Vec<u32>, JsError> {
        let reqs: Vec<AnimationRequest> = swb::from_value(requests)
            .map_err(|e| JsError::new(&format!("mount_staggered parse error: {e}")))?;
        let ids = self
            .core
            .mount_staggered(&reqs)
            .map_err(|e| JsError::new(&format!("mount error: {e}")))?;
        Ok(ids.into_iter().map(|id| id.0).collect())
    }

    /// Record an intersection ratio; applied on the next `update`.
    #[wasm_bindgen]
    pub fn observe(&mut self, id: u32, ratio: f64) {
        let pending = std::mem::take(&mut self.pending);
        self.pending = pending.with_ratio(CounterId(id), ratio);
    }

    /// Remove a counter and cancel its pending frame/timer.
    #[wasm_bindgen]
    pub fn unmount(&mut self, id: u32) -> bool {
        self.core.unmount(CounterId(id))
    }

    /// Evaluate one frame at host time `now_ms` (e.g. the rAF timestamp).
    /// Returns Outputs JSON.
    #[wasm_bindgen]
    pub fn update(&mut self, now_ms: f64) -> Result<JsValue, JsError> {
        self.core.clock().set(now_ms);
        let inputs = std::mem::take(&mut self.pending);
        let out: &Outputs = self.core.update(inputs);
        swb::to_value(out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    /// Current display text of one counter.
    #[wasm_bindgen]
    pub fn text(&self, id: u32) -> Option<String> {
        self.core.text(CounterId(id)).map(str::to_string)
    }

    /// `{ [id]: text }` for the given ids; unknown ids are skipped.
    #[wasm_bindgen]
    pub fn texts(&self, ids: Vec<u32>) -> Result<Object, JsError> {
        let obj = Object::new();
        for id in ids {
            if let Some(text) = self.core.text(CounterId(id)) {
                Reflect::set(&obj, &JsValue::from(id), &JsValue::from_str(text))
                    .map_err(|e| JsError::new(&format!("texts error: {e:?}")))?;
            }
        }
        Ok(obj)
    }

    /// True when no counter needs a frame or a timer.
    #[wasm_bindgen(js_name = is_idle)]
    pub fn is_idle(&self) -> bool {
        self.core.is_idle()
    }
}

/// Portfolio slide deck: touch swipes, arrows, dots and timed auto-advance.
///
/// The page forwards touch x positions and calls `update(now)` from a timer
/// armed for `next_timer_ms()`; every method returns the current slide.
#[wasm_bindgen]
pub struct SlideCarousel {
    core: Carousel,
    timers: FrameQueue,
}

#[wasm_bindgen]
impl SlideCarousel {
    /// `len` slides; pass a JSON config object or undefined/null for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(len: u32, config: JsValue) -> Result<SlideCarousel, JsError> {
        console_error_panic_hook::set_once();

        let cfg: CarouselConfig = if jsvalue_is_undefined_or_null(&config) {
            CarouselConfig::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        let core = Carousel::new(len as usize, cfg)
            .map_err(|e| JsError::new(&format!("carousel error: {e}")))?;
        Ok(SlideCarousel {
            core,
            timers: FrameQueue::new(),
        })
    }

    #[wasm_bindgen]
    pub fn current(&self) -> u32 {
        self.core.current() as u32
    }

    /// Start auto-advancing from `now_ms`.
    #[wasm_bindgen]
    pub fn start(&mut self, now_ms: f64) -> u32 {
        self.core.start(now_ms, &mut self.timers);
        self.current()
    }

    #[wasm_bindgen]
    pub fn stop(&mut self) {
        self.core.stop(&mut self.timers);
    }

    #[wasm_bindgen]
    pub fn next(&mut self, now_ms: f64) -> u32 {
        self.core.next(now_ms, &mut self.timers);
        self.current()
    }

    #[wasm_bindgen]
    pub fn previous(&mut self, now_ms: f64) -> u32 {
        self.core.previous(now_ms, &mut self.timers);
        self.current()
    }

    /// Dot navigation.
    #[wasm_bindgen]
    pub fn select(&mut self, index: u32, now_ms: f64) -> Result<u32, JsError> {
        self.core
            .select(index as usize, now_ms, &mut self.timers)
            .map_err(|e| JsError::new(&format!("select error: {e}")))?;
        Ok(self.current())
    }

    #[wasm_bindgen(js_name = touch_start)]
    pub fn touch_start(&mut self, x: f64) {
        self.core.touch_start(x);
    }

    #[wasm_bindgen(js_name = touch_move)]
    pub fn touch_move(&mut self, x: f64) {
        self.core.touch_move(x);
    }

    /// Returns `"left"`, `"right"`, or undefined when the touch was not a swipe.
    #[wasm_bindgen(js_name = touch_end)]
    pub fn touch_end(&mut self, now_ms: f64) -> Option<String> {
        self.core
            .touch_end(now_ms, &mut self.timers)
            .map(|swipe| match swipe {
                Swipe::Left => "left".to_string(),
                Swipe::Right => "right".to_string(),
            })
    }

    /// Deliver the auto-advance timer if it is due.
    #[wasm_bindgen]
    pub fn update(&mut self, now_ms: f64) -> u32 {
        for ticket in self.timers.drain_due(now_ms) {
            self.core.wake(ticket, now_ms, &mut self.timers);
        }
        self.current()
    }

    #[wasm_bindgen(js_name = next_timer_ms)]
    pub fn next_timer_ms(&self) -> Option<f64> {
        self.timers.next_timer_ms()
    }
}

/// Stateless formatting helper matching the counters' display rules.
/// `decimals` above 100 is clamped.
#[wasm_bindgen(js_name = format_count)]
pub fn format_count(value: f64, decimals: u32, prefix: &str, suffix: &str) -> String {
    format!("{prefix}{}{suffix}", format_number(value, decimals))
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
