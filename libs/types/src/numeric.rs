//! Exact decimal types for prices and quantities.
//!
//! Newtypes over `rust_decimal::Decimal`. Binary floats are unsound for
//! money, and the matching boundary comparisons must be exact, so all
//! arithmetic stays in decimal. Serialized as JSON strings to prevent
//! number precision loss on the wire.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

/// A strictly positive price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(Decimal);

impl Price {
    /// Create a price, returning `None` unless the value is positive.
    pub fn try_new(value: Decimal) -> Option<Self> {
        (value > Decimal::ZERO).then_some(Self(value))
    }

    /// Create from an integer (test/bench convenience).
    ///
    /// # Panics
    /// Panics on zero.
    pub fn from_u64(value: u64) -> Self {
        assert!(value > 0, "price must be positive");
        Self(Decimal::from(value))
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Price {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let decimal = Decimal::from_str(&s).map_err(serde::de::Error::custom)?;
        Self::try_new(decimal).ok_or_else(|| serde::de::Error::custom("price must be positive"))
    }
}

/// A non-negative quantity.
///
/// Zero is a legal value: a resting order's remaining quantity passes
/// through zero at the instant it is fully consumed, and result fields
/// report zero fills. Subtraction is checked so a would-be-negative value
/// surfaces as `None` for the caller to treat as an invariant fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(Decimal);

impl Quantity {
    /// Create a strictly positive quantity (the only kind accepted as input).
    pub fn try_new(value: Decimal) -> Option<Self> {
        (value > Decimal::ZERO).then_some(Self(value))
    }

    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Create from an integer (test/bench convenience).
    pub fn from_u64(value: u64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == Decimal::ZERO
    }

    /// Subtract, returning `None` if the result would be negative.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        (self.0 >= rhs.0).then(|| Self(self.0 - rhs.0))
    }

    pub fn min(self, other: Self) -> Self {
        if self.0 <= other.0 {
            self
        } else {
            other
        }
    }
}

impl Add for Quantity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Quantity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let decimal = Decimal::from_str(&s).map_err(serde::de::Error::custom)?;
        if decimal >= Decimal::ZERO {
            Ok(Self(decimal))
        } else {
            Err(serde::de::Error::custom("quantity cannot be negative"))
        }
    }
}
