use anyhow::Result;
use async_fn_traits::AsyncFn2;
use tracing::{debug, instrument};

use crate::common::simple_types::*;
use crate::price_booking::public_types::*;

// ======================================================
// Section 1 : Dependencies of the workflow
// ======================================================

/// Computes the discount for a stay from its subtotal and length.
///
/// The returned amount is added to the subtotal, so a reduction is
/// expressed as a negative amount.
pub trait DiscountCalculator {
    fn discount_amount(&self, subtotal: Amount, nights: NightCount) -> Result<Amount>;
}

impl<T> DiscountCalculator for T
where
    T: Fn(Amount, NightCount) -> Result<Amount>,
{
    fn discount_amount(&self, subtotal: Amount, nights: NightCount) -> Result<Amount> {
        self(subtotal, nights)
    }
}

/// Async flavour of [`DiscountCalculator`], for policies that live behind
/// a remote call.
pub trait GetDiscountAmount: AsyncFn2<Amount, NightCount, Output = Result<Amount>> {}
impl<T> GetDiscountAmount for T where T: AsyncFn2<Amount, NightCount, Output = Result<Amount>> {}

pub fn no_discount(_subtotal: Amount, _nights: NightCount) -> Result<Amount> {
    Ok(Amount::zero())
}

// ======================================================
// Section 2 : Implementation
// ======================================================

fn count_nights(days: &[PricedDay]) -> NightCount {
    NightCount::new(days.len())
}

fn sum_day_prices(days: &[PricedDay]) -> Result<Amount> {
    Ok(Amount::sum_prices(days.iter().map(PricedDay::price))?)
}

fn assemble_breakdown(subtotal: Amount, discount: Amount) -> Result<PriceBreakdown> {
    let breakdown = PriceBreakdown::new(subtotal, discount)?;
    debug!(
        subtotal = %breakdown.subtotal(),
        discount = %breakdown.discount(),
        total_amount = %breakdown.total_amount(),
        currency = %breakdown.currency(),
        "priced stay"
    );
    Ok(breakdown)
}

#[instrument(skip_all, fields(nights = days.len()))]
pub fn calculate<D>(discount_calculator: &D, days: &[PricedDay]) -> Result<PriceBreakdown>
where
    D: DiscountCalculator + ?Sized,
{
    let nights = count_nights(days);
    let subtotal = sum_day_prices(days)?;

    let discount = discount_calculator.discount_amount(subtotal, nights)?;

    assemble_breakdown(subtotal, discount)
}

/// Prices a stay at a given listing.
///
/// The listing does not take part in the computation yet; the result is
/// the same as [`calculate`] for the same days.
#[instrument(skip_all, fields(listing = %listing, nights = days.len()))]
pub fn calculate_for_listing<D>(
    discount_calculator: &D,
    listing: &ListingId,
    days: &[PricedDay],
) -> Result<PriceBreakdown>
where
    D: DiscountCalculator + ?Sized,
{
    calculate(discount_calculator, days)
}

#[instrument(skip_all, fields(nights = days.len()))]
pub async fn calculate_async<F>(get_discount_amount: F, days: &[PricedDay]) -> Result<PriceBreakdown>
where
    F: GetDiscountAmount,
{
    let nights = count_nights(days);
    let subtotal = sum_day_prices(days)?;

    let discount = get_discount_amount(subtotal, nights).await?;

    assemble_breakdown(subtotal, discount)
}
