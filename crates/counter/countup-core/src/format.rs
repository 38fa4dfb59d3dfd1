//! Display formatting for counter values.
//!
//! With `decimals > 0` the value is rounded by Rust's `{:.N}` formatter, which
//! rounds the exact binary value and breaks exact ties to even. With
//! `decimals == 0` the fractional part is dropped (truncation toward zero) so
//! intermediate frames never jump ahead at `.5` boundaries.

use serde::{Deserialize, Serialize};

use crate::request::{AnimationRequest, MAX_DECIMALS};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formatter {
    pub decimals: u32,
    pub prefix: String,
    pub suffix: String,
}

impl Formatter {
    pub fn new(decimals: u32, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            decimals,
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    pub fn from_request(req: &AnimationRequest) -> Self {
        Self::new(req.decimals, req.prefix.clone(), req.suffix.clone())
    }

    /// `prefix + number + suffix`, no separators.
    pub fn format(&self, value: f64) -> String {
        let number = format_number(value, self.decimals);
        let mut out = String::with_capacity(self.prefix.len() + number.len() + self.suffix.len());
        out.push_str(&self.prefix);
        out.push_str(&number);
        out.push_str(&self.suffix);
        out
    }
}

/// Render just the numeric part. `decimals` above `MAX_DECIMALS` is clamped.
pub fn format_number(value: f64, decimals: u32) -> String {
    if decimals > 0 {
        format!("{:.*}", decimals.min(MAX_DECIMALS) as usize, value)
    } else {
        let t = value.trunc();
        // -0.4 truncates to -0.0
        let t = if t == 0.0 { 0.0 } else { t };
        format!("{t:.0}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_decimals_truncates() {
        assert_eq!(format_number(4.97, 0), "4");
        assert_eq!(format_number(499.999, 0), "499");
        assert_eq!(format_number(500.0, 0), "500");
    }

    #[test]
    fn zero_decimals_truncates_toward_zero_for_negatives() {
        assert_eq!(format_number(-4.97, 0), "-4");
        assert_eq!(format_number(-0.4, 0), "0");
    }

    #[test]
    fn fixed_decimals_round() {
        assert_eq!(format_number(4.97, 1), "5.0");
        assert_eq!(format_number(4.94, 1), "4.9");
        assert_eq!(format_number(5.0, 1), "5.0");
        assert_eq!(format_number(0.0, 2), "0.00");
        assert_eq!(format_number(1234.5678, 3), "1234.568");
    }

    #[test]
    fn affixes_wrap_number() {
        let f = Formatter::new(0, "$", "+");
        assert_eq!(f.format(499.9), "$499+");
        let f = Formatter::new(1, "", "%");
        assert_eq!(f.format(99.0), "99.0%");
    }

    #[test]
    fn oversized_precision_is_clamped() {
        let s = format_number(5.0, 70_000);
        assert_eq!(s.len(), "5.".len() + MAX_DECIMALS as usize);
        assert_eq!(Formatter::new(u32::MAX, "", "").format(1.5), format_number(1.5, MAX_DECIMALS));
    }

    #[test]
    fn large_values_do_not_use_exponent_notation() {
        assert_eq!(format_number(1.0e12, 0), "1000000000000");
    }
}
