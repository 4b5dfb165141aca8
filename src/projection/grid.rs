//! Equity grid output structures

use serde::{Deserialize, Serialize};

/// One evaluated (year, resale price) combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquityCell {
    /// Years elapsed since purchase, 1-based
    pub year: u32,

    /// Hypothetical gross resale price under evaluation
    pub sale_price: f64,

    /// Level monthly payment on the loan (constant across years)
    pub monthly_payment: f64,

    /// Outstanding loan principal after `year` years of payments
    pub remaining_balance: f64,

    /// Sale proceeds net of the remaining balance and all selling costs
    pub net_after_costs: f64,

    /// Net proceeds minus the original down payment
    pub equity_above_down_payment: f64,
}

/// Break-even summary for one distinct resale price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceOutcome {
    pub sale_price: f64,

    /// First year the equity position turns non-negative, if any within the horizon
    pub break_even_year: Option<u32>,

    /// Equity above the down payment at the final horizon year
    pub final_equity: f64,
}

/// Complete projection output: one cell per (year, price) combination.
///
/// Cells are year-major: the year-1 row comes first, and within a row prices
/// appear in the caller's original order, duplicates included. The grid is a
/// pure value recomputed per request; there is no persisted state behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionGrid {
    /// Number of projected years (rows)
    pub horizon_years: u32,

    /// Caller-supplied prices in original order, duplicates preserved
    pub sale_prices: Vec<f64>,

    /// Year-major cell list of length `horizon_years * sale_prices.len()`
    pub cells: Vec<EquityCell>,
}

impl ProjectionGrid {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells for a single year, in input price order. Out-of-range years
    /// yield an empty slice.
    pub fn cells_for_year(&self, year: u32) -> &[EquityCell] {
        let width = self.sale_prices.len();
        if width == 0 || year == 0 || year > self.horizon_years {
            return &[];
        }
        let start = (year as usize - 1) * width;
        &self.cells[start..start + width]
    }

    /// Distinct sale prices in first-occurrence order.
    pub fn distinct_prices(&self) -> Vec<f64> {
        let mut distinct: Vec<f64> = Vec::new();
        for &price in &self.sale_prices {
            if !distinct.iter().any(|&seen| seen == price) {
                distinct.push(price);
            }
        }
        distinct
    }

    /// Break-even and horizon-end summary per distinct price, in
    /// first-occurrence order.
    pub fn outcomes_by_price(&self) -> Vec<PriceOutcome> {
        self.distinct_prices()
            .into_iter()
            .map(|price| {
                let mut break_even_year = None;
                let mut final_equity = 0.0;
                for cell in self.cells.iter().filter(|c| c.sale_price == price) {
                    if break_even_year.is_none() && cell.equity_above_down_payment >= 0.0 {
                        break_even_year = Some(cell.year);
                    }
                    if cell.year == self.horizon_years {
                        final_equity = cell.equity_above_down_payment;
                    }
                }
                PriceOutcome { sale_price: price, break_even_year, final_equity }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(year: u32, sale_price: f64, equity: f64) -> EquityCell {
        EquityCell {
            year,
            sale_price,
            monthly_payment: 0.0,
            remaining_balance: 0.0,
            net_after_costs: equity,
            equity_above_down_payment: equity,
        }
    }

    fn grid_two_prices() -> ProjectionGrid {
        // Price 100 breaks even in year 2, price 50 never does
        ProjectionGrid {
            horizon_years: 3,
            sale_prices: vec![100.0, 50.0],
            cells: vec![
                cell(1, 100.0, -10.0),
                cell(1, 50.0, -60.0),
                cell(2, 100.0, 0.0),
                cell(2, 50.0, -50.0),
                cell(3, 100.0, 10.0),
                cell(3, 50.0, -40.0),
            ],
        }
    }

    #[test]
    fn test_cells_for_year_slices_rows() {
        let grid = grid_two_prices();
        let year_2 = grid.cells_for_year(2);
        assert_eq!(year_2.len(), 2);
        assert_eq!(year_2[0].sale_price, 100.0);
        assert_eq!(year_2[1].sale_price, 50.0);

        assert!(grid.cells_for_year(0).is_empty());
        assert!(grid.cells_for_year(4).is_empty());
    }

    #[test]
    fn test_distinct_prices_keep_first_occurrence_order() {
        let grid = ProjectionGrid {
            horizon_years: 1,
            sale_prices: vec![200.0, 100.0, 200.0, 300.0],
            cells: vec![
                cell(1, 200.0, 0.0),
                cell(1, 100.0, 0.0),
                cell(1, 200.0, 0.0),
                cell(1, 300.0, 0.0),
            ],
        };
        assert_eq!(grid.distinct_prices(), vec![200.0, 100.0, 300.0]);
    }

    #[test]
    fn test_outcomes_by_price() {
        let outcomes = grid_two_prices().outcomes_by_price();
        assert_eq!(outcomes.len(), 2);

        // Equity of exactly zero counts as broken even
        assert_eq!(outcomes[0].sale_price, 100.0);
        assert_eq!(outcomes[0].break_even_year, Some(2));
        assert_eq!(outcomes[0].final_equity, 10.0);

        assert_eq!(outcomes[1].sale_price, 50.0);
        assert_eq!(outcomes[1].break_even_year, None);
        assert_eq!(outcomes[1].final_equity, -40.0);
    }

    #[test]
    fn test_empty_grid() {
        let grid = ProjectionGrid {
            horizon_years: 10,
            sale_prices: Vec::new(),
            cells: Vec::new(),
        };
        assert!(grid.is_empty());
        assert!(grid.cells_for_year(1).is_empty());
        assert!(grid.outcomes_by_price().is_empty());
    }

    #[test]
    fn test_cell_serializes_camel_case() {
        let json = serde_json::to_value(cell(1, 100.0, -10.0)).unwrap();
        assert!(json.get("salePrice").is_some());
        assert!(json.get("equityAboveDownPayment").is_some());
        assert!(json.get("remainingBalance").is_some());
        assert!(json.get("sale_price").is_none());
    }
}
