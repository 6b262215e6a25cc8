//! Money with precise decimal arithmetic
//!
//! This module provides a type-safe representation of monetary values
//! using rust_decimal for precise calculations without floating-point errors.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// A monetary amount
///
/// Money uses rust_decimal for precise arithmetic without floating-point
/// errors. All amounts in the system share one implicit currency, so the
/// type carries no currency dimension. Amounts are stored exactly as given;
/// no rounding is applied.
///
/// Negative amounts are representable. Claimed amounts are not validated,
/// and payout arithmetic relies on subtraction going below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// The zero amount
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Creates a new Money value
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Creates a zero amount
    pub fn zero() -> Self {
        Self::ZERO
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns the smaller of the two amounts
    pub fn min(self, other: Money) -> Money {
        Self(self.0.min(other.0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    proptest! {
        #[test]
        fn money_addition_is_commutative(
            a in -1_000_000i64..1_000_000i64,
            b in -1_000_000i64..1_000_000i64
        ) {
            let ma = Money::new(Decimal::new(a, 2));
            let mb = Money::new(Decimal::new(b, 2));

            prop_assert_eq!(ma + mb, mb + ma);
        }

        #[test]
        fn money_sub_then_add_round_trips(
            a in -1_000_000i64..1_000_000i64,
            b in -1_000_000i64..1_000_000i64
        ) {
            let ma = Money::new(Decimal::new(a, 2));
            let mb = Money::new(Decimal::new(b, 2));

            prop_assert_eq!((ma - mb) + mb, ma);
        }

        #[test]
        fn min_never_exceeds_either_operand(
            a in -1_000_000i64..1_000_000i64,
            b in -1_000_000i64..1_000_000i64
        ) {
            let ma = Money::new(Decimal::new(a, 2));
            let mb = Money::new(Decimal::new(b, 2));

            let m = ma.min(mb);
            prop_assert!(m <= ma);
            prop_assert!(m <= mb);
        }
    }
}
