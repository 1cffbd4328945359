//! Price value object.
//!
//! Prices are kept as whole cents so that ordering and equality are exact.
//! Text such as `19.99` is parsed digit by digit, never through a float.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use liquorstore_core::{DomainError, ValueObject};

const CENTS_PER_UNIT: u64 = 100;

/// Non-negative price in the smallest currency unit (cents).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl ValueObject for Price {}

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: u64) -> Self {
        Price(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / CENTS_PER_UNIT, self.0 % CENTS_PER_UNIT)
    }
}

/// Parses `123`, `123.`, `123.4`, `123.45` or `.45`.
///
/// Trailing fractional zeros are ignored, so `19.990` is `19.99`. Signs,
/// exponents, whitespace and any non-zero digit below the cent are rejected.
impl FromStr for Price {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::validation(format!("'{s}' is not a non-negative price"));

        let (whole, fraction) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        // Cents are exact; only zeros may follow the second fractional digit.
        let fraction = match fraction.get(2..) {
            Some(rest) if rest.bytes().all(|b| b == b'0') => &fraction[..2],
            Some(_) => return Err(invalid()),
            None => fraction,
        };

        let units: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let mut cents: u64 = if fraction.is_empty() {
            0
        } else {
            fraction.parse().map_err(|_| invalid())?
        };
        if fraction.len() == 1 {
            cents *= 10;
        }

        units
            .checked_mul(CENTS_PER_UNIT)
            .and_then(|c| c.checked_add(cents))
            .map(Price)
            .ok_or_else(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_two_decimal_price() {
        assert_eq!("19.99".parse::<Price>().unwrap(), Price::from_cents(1999));
    }

    #[test]
    fn parses_short_forms() {
        assert_eq!("20".parse::<Price>().unwrap().cents(), 2000);
        assert_eq!("20.".parse::<Price>().unwrap().cents(), 2000);
        assert_eq!("20.5".parse::<Price>().unwrap().cents(), 2050);
        assert_eq!(".99".parse::<Price>().unwrap().cents(), 99);
        assert_eq!("0".parse::<Price>().unwrap(), Price::ZERO);
    }

    #[test]
    fn ignores_trailing_fractional_zeros() {
        assert_eq!("19.990".parse::<Price>().unwrap().cents(), 1999);
        assert_eq!("1.5000".parse::<Price>().unwrap().cents(), 150);
        assert_eq!("7.000000".parse::<Price>().unwrap().cents(), 700);
        assert!("1.9901".parse::<Price>().is_err());
        assert!("1.00x".parse::<Price>().is_err());
    }

    #[test]
    fn rejects_negative_and_malformed_text() {
        for bad in ["", ".", "-1.00", "+1", "1.999", "1e3", " 1", "abc", "1.2.3", "NaN"] {
            assert!(bad.parse::<Price>().is_err(), "expected '{bad}' to be rejected");
        }
    }

    #[test]
    fn rejects_overflow() {
        assert!("184467440737095517".parse::<Price>().is_err());
    }

    #[test]
    fn displays_with_two_decimals() {
        assert_eq!(Price::from_cents(1999).to_string(), "19.99");
        assert_eq!(Price::from_cents(500).to_string(), "5.00");
        assert_eq!(Price::from_cents(7).to_string(), "0.07");
    }

    #[test]
    fn ordering_does_not_collapse_sub_unit_differences() {
        // 19.10 and 19.90 differ by less than one unit but are not equal.
        let a: Price = "19.10".parse().unwrap();
        let b: Price = "19.90".parse().unwrap();
        assert!(a < b);
        assert_ne!(a, b);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: whatever Display renders, FromStr reads back unchanged.
        #[test]
        fn display_is_parseable(cents in 0u64..10_000_000_000u64) {
            let price = Price::from_cents(cents);
            prop_assert_eq!(price.to_string().parse::<Price>().unwrap(), price);
        }
    }
}
