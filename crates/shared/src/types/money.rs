//! Fixed-point money amounts.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are stored as signed integer minor units (cents), so equality
//! checks are exact and a balance of zero really means zero.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minor units in one major unit (cents per whole).
const MINOR_UNITS_PER_MAJOR: i64 = 100;

/// A signed monetary amount in integer minor units.
///
/// The sign carries direction: a positive pairwise balance means the
/// counterparty owes, a negative one means the debt runs the other way.
/// `Decimal` appears only at the API boundary; internal arithmetic is
/// saturating integer arithmetic, clamping to the `i64` minor-unit range
/// instead of overflowing.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(i64);

/// Errors from converting a decimal value into an [`Amount`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AmountError {
    /// The value has digits finer than one minor unit.
    #[error("{0} is finer than one minor unit")]
    TooPrecise(Decimal),
    /// The value does not fit in the representable range.
    #[error("{0} is outside the representable amount range")]
    OutOfRange(Decimal),
}

impl Amount {
    /// Zero minor units.
    pub const ZERO: Self = Self(0);

    /// Creates an amount from a count of minor units.
    #[must_use]
    pub const fn from_minor_units(minor_units: i64) -> Self {
        Self(minor_units)
    }

    /// Creates an amount from a whole number of major units.
    ///
    /// Saturates when the value exceeds the `i64` minor-unit range.
    #[must_use]
    pub const fn from_major_units(major_units: i64) -> Self {
        Self(major_units.saturating_mul(MINOR_UNITS_PER_MAJOR))
    }

    /// Converts a decimal major-unit value into an amount.
    ///
    /// Rejects values finer than one minor unit rather than rounding:
    /// callers deal in exact cents or not at all.
    pub fn try_from_decimal(value: Decimal) -> Result<Self, AmountError> {
        let minor = value
            .checked_mul(Decimal::from(MINOR_UNITS_PER_MAJOR))
            .ok_or(AmountError::OutOfRange(value))?;
        if !minor.fract().is_zero() {
            return Err(AmountError::TooPrecise(value));
        }
        minor
            .to_i64()
            .map(Self)
            .ok_or(AmountError::OutOfRange(value))
    }

    /// Returns the amount as a decimal major-unit value.
    #[must_use]
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Returns the underlying count of minor units.
    #[must_use]
    pub const fn minor_units(self) -> i64 {
        self.0
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns true if the amount is strictly negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Returns true if the amount is strictly positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Returns the magnitude of the amount.
    #[must_use]
    pub const fn abs(self) -> Self {
        Self(self.0.saturating_abs())
    }
}

impl std::ops::Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl std::ops::Sub for Amount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl std::ops::Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::ops::AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl std::ops::SubAssign for Amount {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, std::ops::Add::add)
    }
}

impl<'a> std::iter::Sum<&'a Self> for Amount {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let units = MINOR_UNITS_PER_MAJOR.unsigned_abs();
        let minor = self.0.unsigned_abs();
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{sign}{}.{:02}", minor / units, minor % units)
    }
}
