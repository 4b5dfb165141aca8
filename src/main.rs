//! Mortgage Outcomes CLI
//!
//! Command-line front end for the equity projection engine. Flags mirror
//! the original web form: percent-denominated rates, a comma-separated
//! resale price field, and a CSV download of the outcome table.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;

use mortgage_outcomes::input::parse_price_list;
use mortgage_outcomes::report::{group_thousands, to_csv, CSV_FILE_NAME};
use mortgage_outcomes::{run_request, OutcomeRequest, OutcomeResponse};

/// Display currency. Decorative only; no conversion happens anywhere.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Currency {
    Aed,
    Usd,
    Eur,
}

impl Currency {
    fn label(self) -> &'static str {
        match self {
            Currency::Aed => "AED",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "mortgage_outcomes",
    about = "Equity above down payment for a fixed-rate mortgage across resale prices"
)]
struct Cli {
    #[arg(long, default_value_t = 3_150_000.0, help = "Property purchase price")]
    purchase_price: f64,

    #[arg(
        long,
        default_value_t = 20.0,
        help = "Down payment as a percent of the purchase price"
    )]
    down_payment_pct: f64,

    #[arg(
        long,
        conflicts_with = "down_payment_pct",
        help = "Down payment as an absolute amount, instead of a percent"
    )]
    down_payment: Option<f64>,

    #[arg(
        long,
        default_value_t = 4.74,
        help = "Interest rate (APR) in percent, e.g. 4.74"
    )]
    apr: f64,

    #[arg(
        long,
        default_value_t = 20,
        value_parser = clap::value_parser!(u32).range(1..=40),
        help = "Loan term in years"
    )]
    term_years: u32,

    #[arg(
        long,
        default_value = "2500000,3000000,3150000",
        help = "Comma-separated resale price options"
    )]
    resale_prices: String,

    #[arg(
        long,
        default_value_t = 4.0,
        help = "Commission and fees in percent of the sale price"
    )]
    fees_pct: f64,

    #[arg(long, default_value_t = 0.0, help = "Flat fee amount")]
    fees_flat: f64,

    #[arg(long, default_value_t = 0.0, help = "Service charge per year of ownership")]
    service_charge: f64,

    #[arg(
        long,
        default_value_t = 10,
        value_parser = clap::value_parser!(u32).range(1..=30),
        help = "Show years 1..=N"
    )]
    horizon_years: u32,

    #[arg(
        long,
        default_value_t = 0,
        value_parser = clap::value_parser!(u8).range(0..=2),
        help = "Fractional digits in table values (0 = whole)"
    )]
    round_digits: u8,

    #[arg(long, value_enum, default_value_t = Currency::Aed, help = "Currency label for display")]
    currency: Currency,

    #[arg(long, default_value = CSV_FILE_NAME, help = "CSV output path")]
    output: PathBuf,

    #[arg(
        long,
        help = "Print the full response as JSON instead of the human layout (no CSV file)"
    )]
    json: bool,
}

/// Clamp a percent flag to its form-widget range.
fn clamp_percent(value: f64, max: f64, what: &str) -> f64 {
    let clamped = value.clamp(0.0, max);
    if clamped != value {
        log::debug!("{} {} clamped to {}", what, value, clamped);
    }
    clamped
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let currency = cli.currency.label();

    // Presentation clamps mirroring the form widget bounds. The engine
    // re-validates everything; these just keep flag typos from erroring
    // where the form would have refused the input.
    let purchase_price = cli.purchase_price.max(0.0);
    let down_payment = match cli.down_payment {
        Some(amount) => amount.max(0.0).min(purchase_price),
        None => {
            purchase_price * clamp_percent(cli.down_payment_pct, 100.0, "down payment %") / 100.0
        }
    };
    let down_payment_pct = if purchase_price > 0.0 {
        down_payment / purchase_price * 100.0
    } else {
        0.0
    };

    let request = OutcomeRequest {
        purchase_price,
        down_payment,
        apr: clamp_percent(cli.apr, 50.0, "APR %") / 100.0,
        term_years: cli.term_years,
        fees_percent_of_sale: clamp_percent(cli.fees_pct, 20.0, "fees %") / 100.0,
        fees_flat: cli.fees_flat.max(0.0),
        service_charge_per_year: cli.service_charge.max(0.0),
        resale_prices: parse_price_list(&cli.resale_prices),
        horizon_years: cli.horizon_years,
        rounding_digits: cli.round_digits,
    };

    let response = run_request(&request)?;

    if cli.json {
        println!("{}", serde_json::to_string(&response)?);
        return Ok(());
    }

    println!("Mortgage Outcomes v0.1.0");
    println!("========================\n");

    println!("  Purchase Price:  {} {}", group_thousands(request.purchase_price), currency);
    println!(
        "  Down Payment:    {} {} ({:.1}%)",
        group_thousands(request.down_payment),
        currency,
        down_payment_pct
    );
    println!("  Loan Amount:     {} {}", group_thousands(response.loan_amount), currency);
    println!("  APR:             {:.2}%", request.apr * 100.0);
    println!("  Monthly Payment: {} {}", group_thousands(response.monthly_payment), currency);

    if request.resale_prices.is_empty() {
        println!("\nAdd at least one resale price to see results.");
        return Ok(());
    }

    print_table(&response);
    print_break_even(&response, currency);

    let csv_bytes = to_csv(&response.table)
        .map_err(|e| anyhow::anyhow!("failed to encode CSV: {}", e))?;
    fs::write(&cli.output, csv_bytes)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    println!("\nFull results written to: {}", cli.output.display());

    Ok(())
}

/// Fixed-width equity table, values grouped like the on-screen original.
fn print_table(response: &OutcomeResponse) {
    let table = &response.table;

    let formatted: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row.values.iter().map(|&v| group_thousands(v)).collect())
        .collect();

    let mut widths: Vec<usize> = table
        .columns
        .iter()
        .map(|c| c.label.chars().count())
        .collect();
    for row in &formatted {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    println!("\nResults (years 1-{}):", response.horizon_years);
    print!("{:>5}", "Year");
    for (column, width) in table.columns.iter().zip(&widths) {
        print!("  {:>width$}", column.label, width = width);
    }
    println!();
    println!("{}", "-".repeat(5 + widths.iter().map(|w| w + 2).sum::<usize>()));

    for (row, cells) in table.rows.iter().zip(&formatted) {
        print!("{:>5}", row.year);
        for (cell, width) in cells.iter().zip(&widths) {
            print!("  {:>width$}", cell, width = width);
        }
        println!();
    }
}

fn print_break_even(response: &OutcomeResponse, currency: &str) {
    println!("\nBreak-even (first year equity reaches zero):");
    for (column, outcome) in response.table.columns.iter().zip(&response.price_outcomes) {
        match outcome.break_even_year {
            Some(year) => println!(
                "  {}: year {} (final equity {} {})",
                column.label,
                year,
                group_thousands(outcome.final_equity),
                currency
            ),
            None => println!(
                "  {}: not within {} years (final equity {} {})",
                column.label,
                response.horizon_years,
                group_thousands(outcome.final_equity),
                currency
            ),
        }
    }
}
