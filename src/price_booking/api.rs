use anyhow::Result;

use crate::common::simple_types::ListingId;
use crate::price_booking::implementation::{self, DiscountCalculator};
use crate::price_booking::public_types::{PriceBreakdown, PricedDay};

/// Entry point for callers that want the discount policy wired once.
#[derive(Clone, Debug)]
pub struct PricingService<D> {
    discount_calculator: D,
}

impl<D: DiscountCalculator> PricingService<D> {
    pub fn new(discount_calculator: D) -> Self {
        Self {
            discount_calculator,
        }
    }

    pub fn calculate(&self, days: &[PricedDay]) -> Result<PriceBreakdown> {
        implementation::calculate(&self.discount_calculator, days)
    }

    pub fn calculate_for_listing(
        &self,
        listing: &ListingId,
        days: &[PricedDay],
    ) -> Result<PriceBreakdown> {
        implementation::calculate_for_listing(&self.discount_calculator, listing, days)
    }
}
