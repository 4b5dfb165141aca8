//! Mortgage Outcomes - Deterministic equity projection engine for fixed-rate mortgages
//!
//! This library provides:
//! - Closed-form amortization (level monthly payment, remaining balance)
//! - Year-by-price equity grids over hypothetical resale prices
//! - Break-even summaries per resale price
//! - Rounded outcome tables with CSV export
//! - A JSON request/response boundary shared by the CLI and Lambda front ends

pub mod input;
pub mod loan;
pub mod projection;
pub mod report;
pub mod scenario;
pub mod service;

// Re-export commonly used types
pub use loan::{CostSchedule, InvalidConfiguration, LoanTerms};
pub use projection::{EquityCell, EquityProjector, PriceOutcome, ProjectionGrid};
pub use report::{OutcomeTable, CSV_FILE_NAME};
pub use scenario::ScenarioRunner;
pub use service::{run_request, OutcomeRequest, OutcomeResponse};
