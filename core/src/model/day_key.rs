use serde::{Deserialize, Serialize};

/// Identifies a day within a year by zero-based month index and day of
/// month. The year is deliberately absent: the ledger treats «1 марта» as
/// the same slot every year. The derived `Ord` gives the (month, day)
/// lexicographic ordering the ledger relies on.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey {
    month0: u32,
    day: u32,
}

impl DayKey {
    pub fn new(month0: u32, day: u32) -> Self {
        Self { month0, day }
    }

    pub fn month0(&self) -> u32 {
        self.month0
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}
