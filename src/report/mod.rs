//! Output shaping: rounded tables and CSV export

mod export;
mod table;

pub use export::{to_csv, CSV_FILE_NAME};
pub use table::{group_thousands, round_half_even, OutcomeRow, OutcomeTable, PriceColumn};
