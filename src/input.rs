//! Free-text input parsing for the presentation layer
//!
//! The projection core only ever sees `&[f64]`; turning a comma-separated
//! text field into numbers is a front-end concern and lives here so the CLI
//! and any form UI share one contract.

/// Parse a comma-separated list of resale prices.
///
/// Tokens are trimmed; empty tokens and tokens that do not parse as a float
/// are skipped rather than failing the whole list, with a warning in the
/// log. Order and duplicates are preserved, so the result feeds straight
/// into a projection. Note that a price typed with its own thousands
/// separators splits into several tokens, exactly like the text field this
/// mirrors.
pub fn parse_price_list(input: &str) -> Vec<f64> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| match token.parse::<f64>() {
            Ok(price) => Some(price),
            Err(_) => {
                log::warn!("skipping unparseable resale price {:?}", token);
                None
            }
        })
        .collect()
}
