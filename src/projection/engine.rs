//! Equity projection engine

use crate::loan::{CostSchedule, InvalidConfiguration, LoanTerms};
use super::amortization::{monthly_payment, remaining_balance};
use super::grid::{EquityCell, ProjectionGrid};

/// Projects net equity positions for one fixed loan across resale prices
/// and holding years.
///
/// Construction is infallible; `project` validates the whole configuration
/// up front and either returns a complete grid or no grid at all. The
/// projector holds no mutable state, so one instance can serve any number
/// of projections.
#[derive(Debug, Clone)]
pub struct EquityProjector {
    terms: LoanTerms,
    costs: CostSchedule,
}

impl EquityProjector {
    pub fn new(terms: LoanTerms, costs: CostSchedule) -> Self {
        Self { terms, costs }
    }

    pub fn terms(&self) -> &LoanTerms {
        &self.terms
    }

    pub fn costs(&self) -> &CostSchedule {
        &self.costs
    }

    /// Evaluate every year in `1..=horizon_years` against every sale price.
    ///
    /// Prices are evaluated in caller order with duplicates preserved; cells
    /// come back year-major. An empty price list yields an empty grid, not
    /// an error. Horizons past the loan term are valid and extrapolate the
    /// balance below zero.
    pub fn project(
        &self,
        sale_prices: &[f64],
        horizon_years: u32,
    ) -> Result<ProjectionGrid, InvalidConfiguration> {
        self.terms.validate()?;
        self.costs.validate()?;
        if horizon_years == 0 {
            return Err(InvalidConfiguration::ZeroHorizonYears);
        }
        for &price in sale_prices {
            if price < 0.0 {
                return Err(InvalidConfiguration::NegativeSalePrice(price));
            }
        }

        let principal = self.terms.loan_principal();
        let payment = monthly_payment(principal, self.terms.annual_rate, self.terms.term_years);

        let mut cells = Vec::with_capacity(horizon_years as usize * sale_prices.len());
        for year in 1..=horizon_years {
            let balance =
                remaining_balance(principal, self.terms.annual_rate, self.terms.term_years, year);
            let service = self.costs.service_total(year);
            for &sale_price in sale_prices {
                let net_before_costs = sale_price - balance;
                let net_after_costs =
                    net_before_costs - self.costs.sale_fees(sale_price) - service;
                cells.push(EquityCell {
                    year,
                    sale_price,
                    monthly_payment: payment,
                    remaining_balance: balance,
                    net_after_costs,
                    equity_above_down_payment: net_after_costs - self.terms.down_payment,
                });
            }
        }

        Ok(ProjectionGrid {
            horizon_years,
            sale_prices: sale_prices.to_vec(),
            cells,
        })
    }

    /// Monthly payment for the configured loan, as shown in UI previews
    /// before any resale price is entered.
    pub fn payment_preview(&self) -> Result<f64, InvalidConfiguration> {
        self.terms.validate()?;
        Ok(monthly_payment(
            self.terms.loan_principal(),
            self.terms.annual_rate,
            self.terms.term_years,
        ))
    }
}
