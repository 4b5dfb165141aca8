//! Scenario runner for efficient batch projections
//!
//! Pre-binds the market context (cost schedule, resale prices, horizon)
//! once, then runs many loan configurations against it without rebuilding
//! anything per run.

use crate::loan::{CostSchedule, InvalidConfiguration, LoanTerms};
use crate::projection::{EquityProjector, ProjectionGrid};

/// Pre-bound scenario runner for efficient batch projections
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(costs, prices, 10);
///
/// // Run many loan variants against the same market context
/// for rate in [0.03, 0.04, 0.05] {
///     let terms = LoanTerms { annual_rate: rate, ..base };
///     let grid = runner.run(&terms)?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    costs: CostSchedule,
    sale_prices: Vec<f64>,
    horizon_years: u32,
}

impl ScenarioRunner {
    /// Create a runner for a fixed cost schedule, price list, and horizon.
    pub fn new(costs: CostSchedule, sale_prices: Vec<f64>, horizon_years: u32) -> Self {
        Self { costs, sale_prices, horizon_years }
    }

    /// Run a single projection for one loan configuration.
    pub fn run(&self, terms: &LoanTerms) -> Result<ProjectionGrid, InvalidConfiguration> {
        let projector = EquityProjector::new(*terms, self.costs);
        projector.project(&self.sale_prices, self.horizon_years)
    }

    /// Run projections for multiple loan configurations against the same
    /// context. Fails atomically: one invalid configuration fails the batch.
    pub fn run_batch(
        &self,
        terms: &[LoanTerms],
    ) -> Result<Vec<ProjectionGrid>, InvalidConfiguration> {
        terms.iter().map(|t| self.run(t)).collect()
    }

    /// Run rate variants of a base configuration, one grid per annual rate
    /// (rates as fractions). Each variant is an independent fixed-rate loan.
    pub fn run_rate_scenarios(
        &self,
        base: &LoanTerms,
        annual_rates: &[f64],
    ) -> Result<Vec<ProjectionGrid>, InvalidConfiguration> {
        annual_rates
            .iter()
            .map(|&annual_rate| self.run(&LoanTerms { annual_rate, ..*base }))
            .collect()
    }

    pub fn costs(&self) -> &CostSchedule {
        &self.costs
    }

    pub fn sale_prices(&self) -> &[f64] {
        &self.sale_prices
    }

    pub fn horizon_years(&self) -> u32 {
        self.horizon_years
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_terms() -> LoanTerms {
        LoanTerms {
            purchase_price: 3_150_000.0,
            down_payment: 630_000.0,
            annual_rate: 0.0474,
            term_years: 20,
        }
    }

    fn runner() -> ScenarioRunner {
        ScenarioRunner::new(CostSchedule::default(), vec![3_000_000.0], 10)
    }

    #[test]
    fn test_rate_scenarios_order_equity() {
        let grids = runner()
            .run_rate_scenarios(&base_terms(), &[0.03, 0.04, 0.05])
            .unwrap();
        assert_eq!(grids.len(), 3);

        // A higher rate amortizes slower, so year-10 equity is lower
        let final_equity =
            |grid: &ProjectionGrid| grid.cells.last().unwrap().equity_above_down_payment;
        assert!(final_equity(&grids[0]) > final_equity(&grids[1]));
        assert!(final_equity(&grids[1]) > final_equity(&grids[2]));
    }

    #[test]
    fn test_batch_fails_atomically() {
        let bad = LoanTerms { annual_rate: -0.01, ..base_terms() };
        let result = runner().run_batch(&[base_terms(), bad]);
        assert_eq!(result, Err(InvalidConfiguration::NegativeRate(-0.01)));
    }

    #[test]
    fn test_batch_preserves_input_order() {
        let short = LoanTerms { term_years: 10, ..base_terms() };
        let grids = runner().run_batch(&[base_terms(), short]).unwrap();
        assert_eq!(grids.len(), 2);

        // The 10-year loan is fully paid at the horizon; the 20-year is not
        assert!(grids[1].cells.last().unwrap().remaining_balance.abs() < 1e-6);
        assert!(grids[0].cells.last().unwrap().remaining_balance > 0.0);
    }
}
