pub mod day_key;
pub mod ledger;
pub mod report;
pub mod snapshot;

pub use day_key::DayKey;
pub use ledger::StepLedger;
pub use report::MonthlyReport;
pub use snapshot::{LedgerSnapshot, StepEntry};
