//! Count-up core (engine-agnostic)
//!
//! Animated statistic counters: a value that eases from `start` to `end` once
//! its display element scrolls into view, rendered with fixed precision and
//! optional affixes.
//!
//! The crate owns no clock and no event loop. Hosts inject a [`Clock`], feed
//! viewport observations in, and honour the [`Wake`] requests that come back
//! (next display frame, or a one-shot delay timer). [`Board`] bundles that
//! plumbing for any number of counters on one frame loop. [`Carousel`] uses
//! the same scheduler contract for a swipeable, auto-advancing slide deck.
//!
//! ```
//! use countup_core::{AnimationRequest, Board, Config, Inputs};
//!
//! let mut board = Board::manual(Config::default()).unwrap();
//! let id = board
//!     .mount(&AnimationRequest::to(500.0).with_duration(2500.0).with_suffix("+"))
//!     .unwrap();
//! assert_eq!(board.text(id), Some("0+"));
//!
//! board.update(Inputs::visible(id));
//! board.clock().advance(3000.0);
//! board.update(Inputs::default());
//! assert_eq!(board.text(id), Some("500+"));
//! ```

pub mod animator;
pub mod board;
pub mod carousel;
pub mod clock;
pub mod config;
pub mod counter;
pub mod easing;
pub mod error;
pub mod format;
pub mod ids;
pub mod inputs;
pub mod outputs;
pub mod request;
pub mod schedule;
pub mod trigger;

// Re-exports for consumers (adapters)
pub use animator::{AnimationState, Phase, ValueAnimator};
pub use board::Board;
pub use carousel::{Carousel, CarouselConfig, Swipe, SwipeGesture};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Config;
pub use counter::CountUp;
pub use easing::Easing;
pub use error::RequestError;
pub use format::{format_number, Formatter};
pub use ids::CounterId;
pub use inputs::{Inputs, VisibilityUpdate};
pub use outputs::{Change, CounterEvent, Outputs};
pub use request::AnimationRequest;
pub use schedule::{FrameQueue, StepScheduler, Ticket, Wake};
pub use trigger::{TriggerState, VisibilityTrigger};
