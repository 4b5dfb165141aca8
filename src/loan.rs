//! Loan and cost data structures with domain validation

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected input configuration.
///
/// Validation is all-or-nothing: the projector checks every field before
/// producing any output, so a failed request never yields a partial grid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidConfiguration {
    #[error("purchase price must be non-negative, got {0}")]
    NegativePurchasePrice(f64),

    #[error("down payment must be non-negative, got {0}")]
    NegativeDownPayment(f64),

    #[error("down payment {down_payment} exceeds purchase price {purchase_price}")]
    DownPaymentExceedsPrice { down_payment: f64, purchase_price: f64 },

    #[error("annual rate must be non-negative, got {0}")]
    NegativeRate(f64),

    #[error("loan term must be at least one year")]
    ZeroTermYears,

    #[error("projection horizon must be at least one year")]
    ZeroHorizonYears,

    #[error("sale fee percentage must be non-negative, got {0}")]
    NegativeFeePct(f64),

    #[error("flat sale fee must be non-negative, got {0}")]
    NegativeFlatFee(f64),

    #[error("annual service charge must be non-negative, got {0}")]
    NegativeServiceCharge(f64),

    #[error("resale price must be non-negative, got {0}")]
    NegativeSalePrice(f64),
}

/// Fixed-rate mortgage terms agreed at purchase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanTerms {
    /// Property purchase price
    pub purchase_price: f64,

    /// Upfront down payment amount (not a percentage)
    pub down_payment: f64,

    /// Annual interest rate as a fraction, e.g. 0.0474 for 4.74%
    pub annual_rate: f64,

    /// Loan term in years
    pub term_years: u32,
}

impl LoanTerms {
    /// Financed amount: purchase price minus the down payment.
    pub fn loan_principal(&self) -> f64 {
        self.purchase_price - self.down_payment
    }

    /// Check every field against its domain.
    pub fn validate(&self) -> Result<(), InvalidConfiguration> {
        if self.purchase_price < 0.0 {
            return Err(InvalidConfiguration::NegativePurchasePrice(self.purchase_price));
        }
        if self.down_payment < 0.0 {
            return Err(InvalidConfiguration::NegativeDownPayment(self.down_payment));
        }
        if self.down_payment > self.purchase_price {
            return Err(InvalidConfiguration::DownPaymentExceedsPrice {
                down_payment: self.down_payment,
                purchase_price: self.purchase_price,
            });
        }
        if self.annual_rate < 0.0 {
            return Err(InvalidConfiguration::NegativeRate(self.annual_rate));
        }
        if self.term_years == 0 {
            return Err(InvalidConfiguration::ZeroTermYears);
        }
        Ok(())
    }
}

/// Selling and holding costs applied when a sale is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostSchedule {
    /// Selling fees as a fraction of the sale price, e.g. 0.04 for 4%
    pub fees_pct_of_sale: f64,

    /// Flat selling fee, independent of the sale price
    pub fees_flat: f64,

    /// Recurring service charge per year of ownership
    pub service_charge_per_year: f64,
}

impl CostSchedule {
    /// Check every field against its domain.
    pub fn validate(&self) -> Result<(), InvalidConfiguration> {
        if self.fees_pct_of_sale < 0.0 {
            return Err(InvalidConfiguration::NegativeFeePct(self.fees_pct_of_sale));
        }
        if self.fees_flat < 0.0 {
            return Err(InvalidConfiguration::NegativeFlatFee(self.fees_flat));
        }
        if self.service_charge_per_year < 0.0 {
            return Err(InvalidConfiguration::NegativeServiceCharge(
                self.service_charge_per_year,
            ));
        }
        Ok(())
    }

    /// Total one-off selling cost for a given sale price.
    pub fn sale_fees(&self, sale_price: f64) -> f64 {
        sale_price * self.fees_pct_of_sale + self.fees_flat
    }

    /// Accumulated service charges after `years` years of ownership.
    pub fn service_total(&self, years: u32) -> f64 {
        self.service_charge_per_year * years as f64
    }
}
