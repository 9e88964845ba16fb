use serde::{Deserialize, Serialize};

/// One persisted ledger entry. `month` is 1-based here so the JSON on disk
/// reads like a calendar date; the in-memory `DayKey` is zero-based.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepEntry {
    pub month: u32,
    pub day: u32,
    pub steps: u32,
}

/// On-disk shape of the tracker state: the configured goal plus every
/// recorded day. Day keys are year-agnostic, so the snapshot is too.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LedgerSnapshot {
    pub goal: u32,
    pub days: Vec<StepEntry>,
}

impl LedgerSnapshot {
    pub fn new(goal: u32) -> Self {
        Self {
            goal,
            days: Vec::new(),
        }
    }
}
