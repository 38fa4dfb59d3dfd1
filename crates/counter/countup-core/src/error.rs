//! Error types for count-up configuration.

use serde::{Deserialize, Serialize};

/// Rejected configuration. Requests are developer-supplied, so every variant
/// is a programming error surfaced at construction time.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum RequestError {
    /// Duration must be a finite, strictly positive number of milliseconds.
    #[error("Invalid duration: {duration_ms}ms (must be finite and > 0)")]
    InvalidDuration { duration_ms: f64 },

    /// Delay must be finite and non-negative.
    #[error("Invalid delay: {delay_ms}ms (must be finite and >= 0)")]
    InvalidDelay { delay_ms: f64 },

    /// Start/end bounds must be finite.
    #[error("Non-finite {field} value: {value}")]
    NonFiniteBound { field: String, value: f64 },

    /// Visibility threshold must lie in (0, 1].
    #[error("Invalid visibility threshold: {threshold} (must be in (0, 1])")]
    InvalidThreshold { threshold: f64 },

    /// Fixed precision is capped at `MAX_DECIMALS`.
    #[error("Invalid decimals: {decimals} (must be <= {max})")]
    InvalidDecimals { decimals: u32, max: u32 },

    /// Carousel auto-advance interval must be finite and > 0.
    #[error("Invalid auto-advance interval: {interval_ms}ms (must be finite and > 0)")]
    InvalidInterval { interval_ms: f64 },

    /// Minimum swipe distance must be finite and non-negative.
    #[error("Invalid swipe distance: {distance_px}px (must be finite and >= 0)")]
    InvalidSwipeDistance { distance_px: f64 },

    #[error("Carousel needs at least one slide")]
    EmptyCarousel,

    #[error("Slide {index} out of range (carousel has {len})")]
    SlideOutOfRange { index: usize, len: usize },

    /// The board has handed out every counter id.
    #[error("Counter ids exhausted")]
    IdsExhausted,
}

impl RequestError {
    /// Get error category for logging.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidDuration { .. }
            | Self::InvalidDelay { .. }
            | Self::InvalidInterval { .. } => "timing",
            Self::NonFiniteBound { .. } | Self::InvalidDecimals { .. } => "value",
            Self::InvalidThreshold { .. }
            | Self::InvalidSwipeDistance { .. }
            | Self::EmptyCarousel => "config",
            Self::SlideOutOfRange { .. } => "navigation",
            Self::IdsExhausted => "capacity",
        }
    }
}
