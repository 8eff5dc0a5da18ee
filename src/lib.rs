//! Prices a stay from its per-night prices, with the discount policy
//! supplied by the caller.

pub mod common;
pub mod price_booking;
pub mod telemetry;

pub use common::errors::PricingError;
pub use common::simple_types::{Amount, Currency, ListingId, NightCount, Price};
pub use price_booking::api::PricingService;
pub use price_booking::implementation::{
    calculate, calculate_async, calculate_for_listing, no_discount, DiscountCalculator,
    GetDiscountAmount,
};
pub use price_booking::public_types::{PriceBreakdown, PricedDay};
