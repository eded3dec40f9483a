// Monetary amounts as the payment demos print them.

use std::fmt;

/// A monetary amount in dollars.
///
/// `Display` renders the value with a mandatory fractional digit, so
/// `Amount::new(100.0)` prints as `100.0` rather than `100`. Magnitudes
/// below `1e-3` or at least `1e7` switch to `<mantissa>E<exponent>`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Amount(f64);

impl Amount {
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return f.write_str("NaN");
        }
        if value.is_infinite() {
            return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
        }

        let magnitude = value.abs();
        if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
            let plain = value.to_string();
            if plain.contains('.') {
                f.write_str(&plain)
            } else {
                write!(f, "{plain}.0")
            }
        } else {
            let scientific = format!("{value:e}");
            let (mantissa, exponent) = scientific
                .split_once('e')
                .unwrap_or((scientific.as_str(), "0"));
            if mantissa.contains('.') {
                write!(f, "{mantissa}E{exponent}")
            } else {
                write!(f, "{mantissa}.0E{exponent}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_integral_amounts_keep_fraction() {
        assert_eq!(Amount::new(100.0).to_string(), "100.0");
        assert_eq!(Amount::new(150.0).to_string(), "150.0");
        assert_eq!(Amount::new(50.0).to_string(), "50.0");
        assert_eq!(Amount::new(0.0).to_string(), "0.0");
        assert_eq!(Amount::new(-0.0).to_string(), "-0.0");
    }

    #[test]
    fn test_fractional_amounts() {
        assert_eq!(Amount::new(99.99).to_string(), "99.99");
        assert_eq!(Amount::new(0.5).to_string(), "0.5");
        assert_eq!(Amount::new(0.001).to_string(), "0.001");
        assert_eq!(Amount::new(-12.25).to_string(), "-12.25");
    }

    #[test]
    fn test_scientific_boundaries() {
        assert_eq!(Amount::new(1e7).to_string(), "1.0E7");
        assert_eq!(Amount::new(12345678.9).to_string(), "1.23456789E7");
        assert_eq!(Amount::new(0.0001).to_string(), "1.0E-4");
        assert_eq!(Amount::new(9999999.0).to_string(), "9999999.0");
    }

    #[test]
    fn test_from_f64() {
        let amount: Amount = 42.5_f64.into();
        assert_eq!(amount, Amount::new(42.5));
        assert_eq!(amount.value(), 42.5);
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(Amount::new(f64::NAN).to_string(), "NaN");
        assert_eq!(Amount::new(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Amount::new(f64::NEG_INFINITY).to_string(), "-Infinity");
    }

    proptest! {
        #[test]
        fn test_whole_dollars_render_with_one_decimal(n in -1_000_000i32..1_000_000) {
            prop_assert_eq!(Amount::new(n as f64).to_string(), format!("{n}.0"));
        }

        #[test]
        fn test_rendering_round_trips(value in proptest::num::f64::NORMAL) {
            let rendered = Amount::new(value).to_string();
            let parsed: f64 = rendered.parse().unwrap();
            prop_assert_eq!(parsed, value);
            prop_assert!(rendered.contains('.'));
        }
    }
}
