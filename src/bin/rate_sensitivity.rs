//! APR sensitivity sweep over one mortgage configuration
//!
//! Projects the same loan at a range of annual rates and writes a
//! Year-by-rate equity table to rate_sensitivity.csv, with a break-even
//! summary per rate on stdout. Each swept rate is an independent
//! fixed-rate loan; this is not an adjustable-rate model.
//!
//! Accepts config via environment variables:
//!   PURCHASE_PRICE, DOWN_PAYMENT_PCT, TERM_YEARS, SALE_PRICE,
//!   HORIZON_YEARS, FEES_PCT, RATES (comma-separated annual percents)

use anyhow::Context;
use rayon::prelude::*;
use std::env;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

use mortgage_outcomes::projection::ProjectionGrid;
use mortgage_outcomes::report::group_thousands;
use mortgage_outcomes::{CostSchedule, LoanTerms, ScenarioRunner};

const OUTPUT_PATH: &str = "rate_sensitivity.csv";

fn env_f64(name: &str, default: f64) -> f64 {
    env::var(name).ok().and_then(|s| s.parse().ok()).unwrap_or(default)
}

fn env_u32(name: &str, default: u32) -> u32 {
    env::var(name).ok().and_then(|s| s.parse().ok()).unwrap_or(default)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let start = Instant::now();

    // Read config from environment or use defaults
    let purchase_price = env_f64("PURCHASE_PRICE", 3_150_000.0);
    let down_payment_pct = env_f64("DOWN_PAYMENT_PCT", 20.0);
    let term_years = env_u32("TERM_YEARS", 20);
    let sale_price = env_f64("SALE_PRICE", purchase_price);
    let horizon_years = env_u32("HORIZON_YEARS", 10);
    let fees_pct = env_f64("FEES_PCT", 4.0);

    // Annual rates in percent, converted to fractions before the core
    let rate_pcts: Vec<f64> = env::var("RATES")
        .unwrap_or_else(|_| "3.5,4.0,4.5,4.74,5.0,5.5".to_string())
        .split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect();
    anyhow::ensure!(!rate_pcts.is_empty(), "RATES contained no parseable rates");

    let base = LoanTerms {
        purchase_price,
        down_payment: purchase_price * down_payment_pct / 100.0,
        annual_rate: 0.0,
        term_years,
    };
    let costs = CostSchedule {
        fees_pct_of_sale: fees_pct / 100.0,
        ..CostSchedule::default()
    };
    let runner = ScenarioRunner::new(costs, vec![sale_price], horizon_years);

    println!("Rate Sensitivity Sweep");
    println!("  Purchase Price: {}", group_thousands(purchase_price));
    println!("  Down Payment:   {} ({:.1}%)", group_thousands(base.down_payment), down_payment_pct);
    println!("  Sale Price:     {}", group_thousands(sale_price));
    println!("  Term: {} years, horizon: {} years, fees: {:.2}%", term_years, horizon_years, fees_pct);
    println!("  Rates: {:?}%", rate_pcts);

    // One independent projection per rate
    let grids: Vec<ProjectionGrid> = rate_pcts
        .par_iter()
        .map(|&pct| runner.run(&LoanTerms { annual_rate: pct / 100.0, ..base }))
        .collect::<Result<_, _>>()
        .context("projection failed")?;

    println!("Projections complete in {:?}", start.elapsed());

    let mut file = File::create(OUTPUT_PATH)
        .with_context(|| format!("failed to create {}", OUTPUT_PATH))?;

    let header: Vec<String> = rate_pcts.iter().map(|pct| format!("Equity@{}%", pct)).collect();
    writeln!(file, "Year,{}", header.join(","))?;

    for year in 1..=horizon_years {
        let row: Vec<String> = grids
            .iter()
            .map(|grid| format!("{:.2}", grid.cells_for_year(year)[0].equity_above_down_payment))
            .collect();
        writeln!(file, "{},{}", year, row.join(","))?;
    }

    println!("Output written to {}", OUTPUT_PATH);

    println!("\nBreak-even by rate:");
    for (pct, grid) in rate_pcts.iter().zip(&grids) {
        let outcome = &grid.outcomes_by_price()[0];
        match outcome.break_even_year {
            Some(year) => println!(
                "  {:>5}%: year {} (final equity {})",
                pct,
                year,
                group_thousands(outcome.final_equity)
            ),
            None => println!(
                "  {:>5}%: not within {} years (final equity {})",
                pct,
                horizon_years,
                group_thousands(outcome.final_equity)
            ),
        }
    }

    Ok(())
}
