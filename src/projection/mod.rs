//! Equity projection over resale prices and holding years

mod amortization;
mod engine;
mod grid;

pub use amortization::{monthly_payment, remaining_balance};
pub use engine::EquityProjector;
pub use grid::{EquityCell, PriceOutcome, ProjectionGrid};
