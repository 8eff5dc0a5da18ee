use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    #[error("Price must not be negative, got {value}")]
    NegativePrice { value: Decimal },

    #[error("Amount overflow adding {lhs} and {rhs}")]
    Overflow { lhs: Decimal, rhs: Decimal },

    #[error("Adding {lhs} and {rhs} exceeds decimal precision")]
    PrecisionLoss { lhs: Decimal, rhs: Decimal },
}
