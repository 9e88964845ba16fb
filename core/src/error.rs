use thiserror::Error;

/// Validation failures surfaced by the tracker. The ledger is never mutated
/// on an error path; user-facing wording is the front-end's job.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[error("steps must be greater than zero")]
    InvalidSteps,

    #[error("day {day} is outside the range 1..=31")]
    InvalidDay { day: u32 },

    #[error("'{name}' is not a known month name")]
    InvalidMonthName { name: String },

    #[error("day {day} exceeds the {days_in_month} days of that month")]
    DayOutOfRange { day: u32, days_in_month: u32 },
}

pub type Result<T> = std::result::Result<T, TrackerError>;
