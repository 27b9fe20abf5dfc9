use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, AddAssign},
};

/// A monetary amount held as integer minor units (cents).
///
/// Conversion from a decimal multiplies by 100 and truncates, so fractional cents are dropped.
/// A nudge of [`Price::REPRESENTATION_SLACK`] is added before truncating so that amounts which
/// are exact in decimal but not in binary (`4.35 * 100 == 434.99999...`) land on the intended
/// cent.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u64);

impl Price {
    pub const MINOR_UNITS: u64 = 100;
    pub const REPRESENTATION_SLACK: f64 = 1e-6;
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Negative and non-finite amounts collapse to zero.
    pub fn from_f64(value: f64) -> Self {
        if !value.is_finite() || value <= 0.0 {
            return Self::ZERO;
        }
        let units = value * Self::MINOR_UNITS as f64 + Self::REPRESENTATION_SLACK;
        if units >= u64::MAX as f64 {
            Self(u64::MAX)
        } else {
            Self(units.trunc() as u64)
        }
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / Self::MINOR_UNITS as f64
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{:02}",
            self.0 / Self::MINOR_UNITS,
            self.0 % Self::MINOR_UNITS
        )
    }
}

impl Serialize for Price {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.to_f64())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        if !value.is_finite() || value < 0.0 {
            return Err(serde::de::Error::custom(format!(
                "price must be a non-negative amount, got {}",
                value
            )));
        }
        Ok(Self::from_f64(value))
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Price(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<'a> Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Price>>(iter: I) -> Self {
        iter.fold(Price::ZERO, |acc, x| acc + *x)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::ZERO, |acc, x| acc + x)
    }
}
