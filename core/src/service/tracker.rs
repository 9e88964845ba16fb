use chrono::{Datelike, Local};
use tracing::{debug, warn};

use crate::calendar;
use crate::convert;
use crate::error::{Result, TrackerError};
use crate::model::day_key::DayKey;
use crate::model::ledger::StepLedger;
use crate::model::report::MonthlyReport;
use crate::model::snapshot::{LedgerSnapshot, StepEntry};

pub const DEFAULT_GOAL: u32 = 10_000;

/// The statistics engine: owns the per-day ledger and the daily goal, and
/// computes monthly aggregates on demand.
///
/// A tracker operates on exactly one reference year, fixed at construction.
/// Day keys themselves are year-agnostic, so state restored from an old
/// snapshot is re-read against the current year; multi-year histories are
/// out of scope.
pub struct StepTracker {
    year: i32,
    goal: u32,
    ledger: StepLedger,
}

impl StepTracker {
    /// Tracker for the current local year with the default 10 000 goal.
    pub fn new() -> Self {
        Self::for_year(Local::now().year())
    }

    pub fn with_goal(goal: u32) -> Self {
        let mut tracker = Self::new();
        tracker.goal = goal;
        tracker
    }

    /// Explicit reference year; tests use this to stay off the wall clock.
    pub fn for_year(year: i32) -> Self {
        Self {
            year,
            goal: DEFAULT_GOAL,
            ledger: StepLedger::new(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn goal(&self) -> u32 {
        self.goal
    }

    /// Replaces the goal unconditionally. Positivity is the caller's
    /// responsibility; the front-end rejects non-numeric input before
    /// getting here.
    pub fn set_goal(&mut self, goal: u32) {
        self.goal = goal;
    }

    /// Records `steps` for the given calendar day. `accumulate` false
    /// overwrites any previous entry, true adds to it. Nothing is written
    /// unless every validation passes.
    pub fn record_steps(
        &mut self,
        month_name: &str,
        day: u32,
        steps: u32,
        accumulate: bool,
    ) -> Result<()> {
        if steps == 0 {
            return Err(TrackerError::InvalidSteps);
        }
        // Checked before the month name so a day error wins when both
        // inputs are bad.
        if !(1..=31).contains(&day) {
            return Err(TrackerError::InvalidDay { day });
        }

        let key = calendar::resolve_day(month_name, day, self.year)?;
        if accumulate {
            self.ledger.add(key, steps);
        } else {
            self.ledger.set(key, steps);
        }
        debug!(
            "recorded {} steps for month {} day {} (accumulate: {})",
            steps,
            key.month0(),
            key.day(),
            accumulate
        );
        Ok(())
    }

    /// Aggregates one month of the reference year. Absent days count as
    /// zero; only an unknown month name can fail here, since day 1 exists
    /// in every month.
    pub fn monthly_report(&self, month_name: &str) -> Result<MonthlyReport> {
        let probe = calendar::resolve_day(month_name, 1, self.year)?;
        let month0 = probe.month0();
        let days_in_month = calendar::days_in_month(self.year, month0);

        let mut steps_by_day = Vec::with_capacity(days_in_month as usize);
        let mut total_steps: u64 = 0;
        let mut max_steps: u32 = 0;
        let mut best_streak: u32 = 0;
        let mut current_streak: u32 = 0;

        for day in 1..=days_in_month {
            let steps = self.ledger.get(DayKey::new(month0, day)).unwrap_or(0);
            steps_by_day.push(steps);

            total_steps += u64::from(steps);
            if steps > max_steps {
                max_steps = steps;
            }

            // Strictly above the goal keeps the run alive; a run still open
            // after the last day of the month does not count toward the
            // best streak.
            if steps > self.goal {
                current_streak += 1;
            } else {
                if current_streak > best_streak {
                    best_streak = current_streak;
                }
                current_streak = 0;
            }
        }

        Ok(MonthlyReport {
            year: self.year,
            month0,
            month_name: calendar::month_name(month0).to_string(),
            total_steps,
            max_steps,
            average_steps: total_steps / u64::from(days_in_month),
            best_streak,
            distance_km: convert::kilometers(total_steps),
            kilocalories: convert::kilocalories(total_steps),
            steps_by_day,
        })
    }

    /// The monthly report rendered to its fixed text layout.
    pub fn statistic(&self, month_name: &str) -> Result<String> {
        Ok(self.monthly_report(month_name)?.render())
    }

    pub fn to_snapshot(&self) -> LedgerSnapshot {
        let days = self
            .ledger
            .iter()
            .map(|(key, steps)| StepEntry {
                month: key.month0() + 1,
                day: key.day(),
                steps,
            })
            .collect();
        LedgerSnapshot {
            goal: self.goal,
            days,
        }
    }

    /// Replaces goal and ledger with the snapshot contents. Entries outside
    /// the 1..=12 month or 1..=31 day ranges, or with zero steps, are
    /// dropped rather than poisoning the ledger.
    pub fn restore(&mut self, snapshot: LedgerSnapshot) {
        self.goal = snapshot.goal;
        self.ledger = StepLedger::new();
        for entry in snapshot.days {
            if !(1..=12).contains(&entry.month) || !(1..=31).contains(&entry.day) || entry.steps == 0
            {
                warn!(
                    "ignoring snapshot entry month {} day {} steps {}",
                    entry.month, entry.day, entry.steps
                );
                continue;
            }
            self.ledger.set(DayKey::new(entry.month - 1, entry.day), entry.steps);
        }
    }
}

impl Default for StepTracker {
    fn default() -> Self {
        Self::new()
    }
}
