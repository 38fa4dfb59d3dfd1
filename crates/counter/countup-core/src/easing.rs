//! Easing curves mapping linear progress to perceptual progress.
//!
//! Every curve is monotonic on `[0, 1]` with `f(0) = 0` and `f(1) = 1`.
//! Inputs outside the unit interval are clamped first.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    /// `1 - (1 - p)^4`: fast start, slow approach to the final value.
    #[default]
    EaseOutQuart,
    /// `1 - (1 - p)^3`.
    EaseOutCubic,
    Linear,
}

impl Easing {
    /// Apply the curve to normalized progress `p`.
    #[inline]
    pub fn apply(self, p: f64) -> f64 {
        let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        match self {
            Easing::EaseOutQuart => ease_out_quart(p),
            Easing::EaseOutCubic => 1.0 - (1.0 - p).powi(3),
            Easing::Linear => p,
        }
    }

    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Easing::EaseOutQuart => "easeOutQuart",
            Easing::EaseOutCubic => "easeOutCubic",
            Easing::Linear => "linear",
        }
    }
}

#[inline]
pub fn ease_out_quart(p: f64) -> f64 {
    1.0 - (1.0 - p).powi(4)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 3] = [Easing::EaseOutQuart, Easing::EaseOutCubic, Easing::Linear];

    #[test]
    fn endpoints_are_exact() {
        for e in ALL {
            assert_eq!(e.apply(0.0), 0.0, "{}", e.name());
            assert_eq!(e.apply(1.0), 1.0, "{}", e.name());
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        for e in ALL {
            assert_eq!(e.apply(-3.0), 0.0);
            assert_eq!(e.apply(7.5), 1.0);
            assert_eq!(e.apply(f64::NAN), 0.0);
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for e in ALL {
            let mut prev = e.apply(0.0);
            for i in 1..=1000 {
                let v = e.apply(i as f64 / 1000.0);
                assert!(v >= prev, "{} decreased at step {i}", e.name());
                prev = v;
            }
        }
    }

    #[test]
    fn quart_is_front_loaded() {
        // Half the time covers 15/16 of the distance.
        assert!((ease_out_quart(0.5) - 0.9375).abs() < 1e-12);
    }

    #[test]
    fn serde_names_are_camel_case() {
        let s = serde_json::to_string(&Easing::EaseOutQuart).unwrap();
        assert_eq!(s, "\"easeOutQuart\"");
        let e: Easing = serde_json::from_str("\"linear\"").unwrap();
        assert_eq!(e, Easing::Linear);
    }
}
