//! Closed-form fixed-rate amortization
//!
//! Level-payment annuity formulas evaluated at monthly frequency. These are
//! the only two financial primitives in the system; everything else is
//! arithmetic on their outputs.

/// Calculate the level monthly payment that fully amortizes `principal`
/// over the loan term.
///
/// Uses the standard annuity formula with `r = annual_rate / 12` and
/// `n = term_years * 12`:
///
/// `payment = principal * r * (1+r)^n / ((1+r)^n - 1)`
///
/// A zero rate degenerates to straight-line repayment `principal / n`.
/// Rates are fractions (0.0474 for 4.74%), never percentages.
pub fn monthly_payment(principal: f64, annual_rate: f64, term_years: u32) -> f64 {
    let monthly_rate = annual_rate / 12.0;
    let n_months = term_years * 12;

    if monthly_rate == 0.0 {
        return principal / n_months as f64;
    }

    let growth = (1.0 + monthly_rate).powi(n_months as i32);
    principal * monthly_rate * growth / (growth - 1.0)
}

/// Calculate the outstanding principal after `years_paid` full years of
/// level payments.
///
/// `balance = principal * ((1+r)^N - (1+r)^k) / ((1+r)^N - 1)` where `N` is
/// the total number of monthly payments and `k` the number already made.
/// A zero rate amortizes linearly: `principal * (1 - k/N)`.
///
/// The formula is evaluated as-is beyond the loan term, where it
/// extrapolates below zero; late-sale scenarios rely on the negative branch
/// to represent surplus past payoff. `years_paid == 0` returns the full
/// principal.
pub fn remaining_balance(
    principal: f64,
    annual_rate: f64,
    term_years: u32,
    years_paid: u32,
) -> f64 {
    let monthly_rate = annual_rate / 12.0;
    let n_total = term_years * 12;
    let n_paid = years_paid * 12;

    if monthly_rate == 0.0 {
        return principal * (1.0 - n_paid as f64 / n_total as f64);
    }

    let growth_total = (1.0 + monthly_rate).powi(n_total as i32);
    let growth_paid = (1.0 + monthly_rate).powi(n_paid as i32);
    principal * (growth_total - growth_paid) / (growth_total - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_zero_rate_payment_is_straight_line() {
        assert_eq!(monthly_payment(120_000.0, 0.0, 10), 1_000.0);
        assert_eq!(monthly_payment(0.0, 0.0, 30), 0.0);
    }

    #[test]
    fn test_zero_rate_balance_declines_linearly() {
        assert_abs_diff_eq!(
            remaining_balance(120_000.0, 0.0, 10, 4),
            72_000.0,
            epsilon = 1e-9
        );
        assert_eq!(remaining_balance(120_000.0, 0.0, 10, 0), 120_000.0);
        assert_abs_diff_eq!(remaining_balance(120_000.0, 0.0, 10, 10), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_known_payment_values() {
        // 100k at 12% for 1 year: the textbook EMI is 8,884.88
        assert_abs_diff_eq!(monthly_payment(100_000.0, 0.12, 1), 8_884.88, epsilon = 0.01);

        // 2.52M at 4.74% for 20 years
        assert_abs_diff_eq!(
            monthly_payment(2_520_000.0, 0.0474, 20),
            16_271.08,
            epsilon = 0.5
        );
    }

    #[test]
    fn test_balance_boundaries() {
        let principal = 2_520_000.0;
        assert_eq!(remaining_balance(principal, 0.0474, 20, 0), principal);
        assert_abs_diff_eq!(
            remaining_balance(principal, 0.0474, 20, 20),
            0.0,
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            remaining_balance(principal, 0.0474, 20, 1),
            2_442_526.4,
            epsilon = 5.0
        );
    }

    #[test]
    fn test_balance_matches_month_by_month_simulation() {
        let principal = 2_520_000.0;
        let annual_rate = 0.0474;
        let term_years = 20;
        let payment = monthly_payment(principal, annual_rate, term_years);
        let monthly_rate = annual_rate / 12.0;

        let mut balance = principal;
        for month in 1..=term_years * 12 {
            balance = balance * (1.0 + monthly_rate) - payment;
            if month % 12 == 0 {
                let closed_form =
                    remaining_balance(principal, annual_rate, term_years, month / 12);
                assert_abs_diff_eq!(balance, closed_form, epsilon = 1e-3);
            }
        }

        // Exactly n payments retire the loan
        assert_abs_diff_eq!(balance, 0.0, epsilon = 0.01);
    }

    #[test]
    fn test_balance_extrapolates_negative_past_term() {
        let after_term = remaining_balance(100_000.0, 0.05, 10, 15);
        assert!(after_term < 0.0);

        // Zero-rate extrapolation is linear past zero too
        let linear = remaining_balance(120_000.0, 0.0, 10, 15);
        assert_abs_diff_eq!(linear, -60_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_balance_is_monotone_in_years_paid() {
        let mut previous = f64::INFINITY;
        for years in 0..=25 {
            let balance = remaining_balance(500_000.0, 0.035, 25, years);
            assert!(balance < previous);
            previous = balance;
        }
    }
}
