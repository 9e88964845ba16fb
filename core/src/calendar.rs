use chrono::NaiveDate;
use tracing::debug;

use crate::error::{Result, TrackerError};
use crate::model::day_key::DayKey;

/// Full Russian month names in nominative form, indexed by zero-based month.
/// Matching is deliberately case-sensitive: the prompts show the canonical
/// spelling («Пример: Апрель») and the report header uppercases it.
pub const MONTH_NAMES: [&str; 12] = [
    "Январь",
    "Февраль",
    "Март",
    "Апрель",
    "Май",
    "Июнь",
    "Июль",
    "Август",
    "Сентябрь",
    "Октябрь",
    "Ноябрь",
    "Декабрь",
];

pub fn month_index(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|&m| m == name)
        .map(|i| i as u32)
}

/// Canonical name for a zero-based month index (0 = январь).
pub fn month_name(month0: u32) -> &'static str {
    MONTH_NAMES[month0 as usize]
}

/// Number of days in the given month of `year`, leap-year aware.
/// `month0` is the zero-based month index and must be in 0..=11.
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1).unwrap();
    let next = if month0 == 11 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(year, month0 + 2, 1).unwrap()
    };
    next.signed_duration_since(first).num_days() as u32
}

/// Resolves a human-entered (month name, day) pair against `year`.
///
/// The day range is checked before any month lookup, so `resolve_day("Не",
/// 40, ..)` reports the day, not the month. A day that exists in some months
/// but not the resolved one (31 апреля, 29 февраля in a non-leap year) is
/// `DayOutOfRange` rather than `InvalidDay`.
pub fn resolve_day(month_name: &str, day: u32, year: i32) -> Result<DayKey> {
    if !(1..=31).contains(&day) {
        return Err(TrackerError::InvalidDay { day });
    }

    let month0 = month_index(month_name).ok_or_else(|| TrackerError::InvalidMonthName {
        name: month_name.to_string(),
    })?;

    let days = days_in_month(year, month0);
    if day > days {
        return Err(TrackerError::DayOutOfRange {
            day,
            days_in_month: days,
        });
    }

    debug!("resolved calendar day: month {} day {}", month0, day);
    Ok(DayKey::new(month0, day))
}
