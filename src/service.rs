//! JSON request/response boundary shared by the Lambda handler and the CLI

use serde::{Deserialize, Serialize};

use crate::loan::{CostSchedule, InvalidConfiguration, LoanTerms};
use crate::projection::{EquityCell, EquityProjector, PriceOutcome};
use crate::report::OutcomeTable;

/// Input configuration for an outcome projection.
///
/// All monetary fields are plain amounts and all rates are fractions;
/// percent-to-fraction conversion belongs to whichever front end collected
/// the input.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeRequest {
    /// Property purchase price
    pub purchase_price: f64,

    /// Upfront down payment amount
    pub down_payment: f64,

    /// Annual interest rate as a fraction, e.g. 0.0474 for 4.74%
    pub apr: f64,

    /// Loan term in years
    pub term_years: u32,

    /// Selling fees as a fraction of the sale price (default: 0)
    #[serde(default)]
    pub fees_percent_of_sale: f64,

    /// Flat selling fee (default: 0)
    #[serde(default)]
    pub fees_flat: f64,

    /// Recurring annual service charge (default: 0)
    #[serde(default)]
    pub service_charge_per_year: f64,

    /// Hypothetical resale prices to evaluate, in display order
    pub resale_prices: Vec<f64>,

    /// Projection horizon in years (default: 10)
    #[serde(default = "default_horizon_years")]
    pub horizon_years: u32,

    /// Fractional digits in the rounded table (default: 0, max: 2)
    #[serde(default)]
    pub rounding_digits: u8,
}

fn default_horizon_years() -> u32 {
    10
}

impl OutcomeRequest {
    /// Loan terms portion of the request.
    pub fn terms(&self) -> LoanTerms {
        LoanTerms {
            purchase_price: self.purchase_price,
            down_payment: self.down_payment,
            annual_rate: self.apr,
            term_years: self.term_years,
        }
    }

    /// Cost schedule portion of the request.
    pub fn costs(&self) -> CostSchedule {
        CostSchedule {
            fees_pct_of_sale: self.fees_percent_of_sale,
            fees_flat: self.fees_flat,
            service_charge_per_year: self.service_charge_per_year,
        }
    }
}

/// Output from an outcome projection.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeResponse {
    /// Financed amount (purchase price minus down payment)
    pub loan_amount: f64,

    /// Level monthly payment on the loan
    pub monthly_payment: f64,

    pub horizon_years: u32,

    /// Rounded year-by-price table, ready to render
    pub table: OutcomeTable,

    /// Raw full-precision cells, year-major
    pub cells: Vec<EquityCell>,

    /// Break-even summary per distinct price
    pub price_outcomes: Vec<PriceOutcome>,

    pub execution_time_ms: u64,
}

/// Run the full pipeline for one request: validate, project, shape,
/// summarize. Everything is request-local; nothing persists between calls.
pub fn run_request(request: &OutcomeRequest) -> Result<OutcomeResponse, InvalidConfiguration> {
    let start = std::time::Instant::now();

    let terms = request.terms();
    let projector = EquityProjector::new(terms, request.costs());
    let grid = projector.project(&request.resale_prices, request.horizon_years)?;
    let monthly_payment = projector.payment_preview()?;
    let table = OutcomeTable::from_grid(&grid, request.rounding_digits);
    let price_outcomes = grid.outcomes_by_price();

    Ok(OutcomeResponse {
        loan_amount: terms.loan_principal(),
        monthly_payment,
        horizon_years: grid.horizon_years,
        table,
        cells: grid.cells,
        price_outcomes,
        execution_time_ms: start.elapsed().as_millis() as u64,
    })
}
