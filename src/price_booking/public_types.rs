use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::errors::PricingError;
use crate::common::simple_types::*;

/// One night of a stay with its price.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedDay {
    date: NaiveDate,
    price: Price,
}

impl PricedDay {
    pub fn new(date: NaiveDate, price: Price) -> Self {
        Self { date, price }
    }
    pub fn date(&self) -> NaiveDate {
        self.date
    }
    pub fn price(&self) -> Price {
        self.price
    }
}

/// Price summary of a stay.
///
/// Only built by the pricing workflow, which keeps
/// `total_amount == subtotal + discount`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    subtotal: Amount,
    discount: Amount,
    total_amount: Amount,
    currency: Currency,
}

impl PriceBreakdown {
    pub(crate) fn new(subtotal: Amount, discount: Amount) -> Result<Self, PricingError> {
        Ok(Self {
            subtotal,
            discount,
            total_amount: subtotal.try_add(discount)?,
            currency: Currency::Usd,
        })
    }
    pub fn subtotal(&self) -> Amount {
        self.subtotal
    }
    pub fn discount(&self) -> Amount {
        self.discount
    }
    pub fn total_amount(&self) -> Amount {
        self.total_amount
    }
    pub fn currency(&self) -> Currency {
        self.currency
    }
}
