pub mod calendar;
pub mod convert;
pub mod error;
pub mod model;
pub mod repository;
pub mod service;

pub use calendar::{days_in_month, month_index, month_name, resolve_day, MONTH_NAMES};
pub use error::{Result, TrackerError};
pub use model::day_key::DayKey;
pub use model::ledger::StepLedger;
pub use model::report::MonthlyReport;
pub use model::snapshot::{LedgerSnapshot, StepEntry};
pub use repository::{FileSnapshotRepository, SnapshotRepository};
pub use service::tracker::{StepTracker, DEFAULT_GOAL};
