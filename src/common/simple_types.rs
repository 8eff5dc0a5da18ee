use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::errors::PricingError;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId {
    value: String,
}

impl ListingId {
    pub fn new(id: impl Into<String>) -> Self {
        Self { value: id.into() }
    }
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Price of a single night. Never negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Price {
    value: Decimal,
}

impl Price {
    pub fn new(value: Decimal) -> Result<Self, PricingError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(PricingError::NegativePrice { value });
        }
        Ok(Self { value })
    }
    pub fn zero() -> Self {
        Self {
            value: Decimal::ZERO,
        }
    }
    pub fn value(&self) -> Decimal {
        self.value
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = <Decimal as Deserialize>::deserialize(deserializer)?;
        Price::new(value).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

/// Signed money amount. Used for subtotals, discounts (zero or negative)
/// and totals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount {
    value: Decimal,
}

impl Amount {
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }
    pub fn zero() -> Self {
        Self::new(Decimal::ZERO)
    }
    pub fn value(&self) -> Decimal {
        self.value
    }
    /// Adds two amounts, failing instead of rounding or overflowing.
    pub fn try_add(self, rhs: Self) -> Result<Self, PricingError> {
        exact_add(self.value, rhs.value).map(Self::new)
    }
    pub fn sum_prices(mut prices: impl Iterator<Item = Price>) -> Result<Amount, PricingError> {
        prices.try_fold(Amount::zero(), |acc, price| acc.try_add(price.into()))
    }
}

impl From<Price> for Amount {
    fn from(price: Price) -> Self {
        Self::new(price.value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

// `Decimal` rounds a sum whose digits do not fit its 96-bit mantissa. The
// rounded result comes back with a smaller scale than the finer operand.
fn exact_add(lhs: Decimal, rhs: Decimal) -> Result<Decimal, PricingError> {
    let sum = lhs
        .checked_add(rhs)
        .ok_or(PricingError::Overflow { lhs, rhs })?;
    if sum.scale() < lhs.scale().max(rhs.scale()) {
        return Err(PricingError::PrecisionLoss { lhs, rhs });
    }
    Ok(sum)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct NightCount {
    value: usize,
}

impl NightCount {
    pub fn new(value: usize) -> Self {
        Self { value }
    }
    pub fn value(&self) -> usize {
        self.value
    }
}

impl fmt::Display for NightCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "USD")]
    Usd,
}

impl Currency {
    pub fn value(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}
