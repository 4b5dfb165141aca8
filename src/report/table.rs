//! Tabular shaping of projection grids
//!
//! Turns the raw year-by-price grid into the rounded table rendered by the
//! CLI and serialized across the service boundary. Rounding happens here
//! and nowhere else; the grid itself always carries full-precision values.

use serde::{Deserialize, Serialize};

use crate::projection::ProjectionGrid;

/// Hard cap on rounding precision for exported values.
const MAX_ROUNDING_DIGITS: u8 = 2;

/// One output column: a distinct resale price and its display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceColumn {
    /// Display label, e.g. `Sale 2,500,000`
    pub label: String,
    pub sale_price: f64,
}

/// One output row: a year and the rounded equity value per column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeRow {
    pub year: u32,
    /// Rounded `equity_above_down_payment`, aligned with the column order
    pub values: Vec<f64>,
}

/// Year-by-price table of rounded equity positions.
///
/// Columns carry distinct sale prices in first-occurrence order; duplicate
/// prices in the input collapse into a single column, which loses nothing
/// because identical inputs produce identical cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeTable {
    /// Fractional digits the values were rounded to (0..=2)
    pub rounding_digits: u8,
    pub columns: Vec<PriceColumn>,
    pub rows: Vec<OutcomeRow>,
}

impl OutcomeTable {
    /// Shape a grid into labeled columns and rounded rows.
    ///
    /// `rounding_digits` above 2 clamps to 2. An empty grid yields a table
    /// with no columns and no rows.
    pub fn from_grid(grid: &ProjectionGrid, rounding_digits: u8) -> Self {
        let digits = rounding_digits.min(MAX_ROUNDING_DIGITS);

        let mut columns: Vec<PriceColumn> = Vec::new();
        for price in grid.distinct_prices() {
            let label = unique_label(price, &columns);
            columns.push(PriceColumn { label, sale_price: price });
        }

        let mut rows = Vec::with_capacity(grid.horizon_years as usize);
        for year in 1..=grid.horizon_years {
            let year_cells = grid.cells_for_year(year);
            if year_cells.is_empty() {
                break;
            }
            // Row cells arrive in input price order, so taking the first
            // occurrence per price lines values up with the columns
            let mut values = Vec::with_capacity(columns.len());
            let mut seen: Vec<f64> = Vec::with_capacity(columns.len());
            for cell in year_cells {
                if seen.iter().any(|&price| price == cell.sale_price) {
                    continue;
                }
                seen.push(cell.sale_price);
                values.push(round_half_even(cell.equity_above_down_payment, digits));
            }
            rows.push(OutcomeRow { year, values });
        }

        OutcomeTable { rounding_digits: digits, columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Label for a price column, made unique against the labels already taken.
///
/// Distinct prices that collide after 0-decimal formatting (2,500,000.2 and
/// 2,500,000.4 both read "Sale 2,500,000") get a positional suffix so CSV
/// headers stay unambiguous.
fn unique_label(price: f64, existing: &[PriceColumn]) -> String {
    let base = format!("Sale {}", group_thousands(price));
    if !existing.iter().any(|c| c.label == base) {
        return base;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{} ({})", base, n);
        if !existing.iter().any(|c| c.label == candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Format an amount with thousands separators and no decimals, e.g.
/// `2,500,000`. Shared by column labels and the CLI metric cards.
pub fn group_thousands(value: f64) -> String {
    let rounded = value.round_ties_even();
    let raw = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Round to `digits` fractional digits with ties going to the even
/// neighbour, the same policy the table and CSV export are pinned to.
pub fn round_half_even(value: f64, digits: u8) -> f64 {
    let scale = 10.0_f64.powi(digits as i32);
    let rounded = (value * scale).round_ties_even() / scale;
    // Collapse negative zero so exports never print "-0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loan::{CostSchedule, LoanTerms};
    use crate::projection::EquityProjector;

    fn small_grid(prices: &[f64], horizon: u32) -> ProjectionGrid {
        let terms = LoanTerms {
            purchase_price: 100_000.0,
            down_payment: 20_000.0,
            annual_rate: 0.0,
            term_years: 10,
        };
        EquityProjector::new(terms, CostSchedule::default())
            .project(prices, horizon)
            .unwrap()
    }

    #[test]
    fn test_round_half_even_tie_breaks() {
        assert_eq!(round_half_even(12.5, 0), 12.0);
        assert_eq!(round_half_even(13.5, 0), 14.0);
        assert_eq!(round_half_even(-12.5, 0), -12.0);
        assert_eq!(round_half_even(0.125, 2), 0.12);
        assert_eq!(round_half_even(0.375, 2), 0.38);
        assert_eq!(round_half_even(1.005, 0), 1.0);
    }

    #[test]
    fn test_round_half_even_collapses_negative_zero() {
        let rounded = round_half_even(-0.2, 0);
        assert_eq!(rounded, 0.0);
        assert!(rounded.is_sign_positive());
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1_000.0), "1,000");
        assert_eq!(group_thousands(2_500_000.0), "2,500,000");
        assert_eq!(group_thousands(-1_234_567.0), "-1,234,567");
        // Rounds before grouping
        assert_eq!(group_thousands(2_500_000.4), "2,500,000");
    }

    #[test]
    fn test_from_grid_shapes_rows_and_columns() {
        // Zero-rate loan of 80k over 10 years: equity(y, p) = p - 100,000 + 8,000 * y
        let table = OutcomeTable::from_grid(&small_grid(&[85_000.0, 60_000.0], 3), 0);

        assert_eq!(table.columns.len(), 2);
        assert_eq!(table.columns[0].label, "Sale 85,000");
        assert_eq!(table.columns[1].label, "Sale 60,000");

        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[0].year, 1);
        assert_eq!(table.rows[0].values, vec![-7_000.0, -32_000.0]);
        assert_eq!(table.rows[2].values, vec![9_000.0, -16_000.0]);
    }

    #[test]
    fn test_duplicate_prices_collapse_into_one_column() {
        let table = OutcomeTable::from_grid(&small_grid(&[85_000.0, 85_000.0, 60_000.0], 2), 0);
        assert_eq!(table.columns.len(), 2);
        assert_eq!(table.rows[0].values.len(), 2);
    }

    #[test]
    fn test_colliding_labels_get_positional_suffixes() {
        let table = OutcomeTable::from_grid(&small_grid(&[85_000.2, 85_000.4], 1), 0);
        assert_eq!(table.columns[0].label, "Sale 85,000");
        assert_eq!(table.columns[1].label, "Sale 85,000 (2)");
    }

    #[test]
    fn test_rounding_digits_clamp_to_two() {
        let table = OutcomeTable::from_grid(&small_grid(&[85_000.0], 1), 9);
        assert_eq!(table.rounding_digits, 2);
    }

    #[test]
    fn test_empty_grid_yields_empty_table() {
        let table = OutcomeTable::from_grid(&small_grid(&[], 10), 0);
        assert!(table.is_empty());
        assert!(table.columns.is_empty());
    }
}
