use anyhow::Result;
use steptracker_core::{StepTracker, MONTH_NAMES};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

// Helper struct for Table Row
#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Месяц")]
    month: &'static str,
    #[tabled(rename = "Дней с записями")]
    recorded_days: usize,
    #[tabled(rename = "Всего шагов")]
    total_steps: u64,
    #[tabled(rename = "Лучший день")]
    max_steps: u32,
    #[tabled(rename = "Лучшая серия")]
    best_streak: u32,
    #[tabled(rename = "Дистанция, км")]
    distance: String,
}

/// Prints a twelve-row table, one line per month of the tracked year.
pub fn show_year(tracker: &StepTracker) -> Result<()> {
    let mut rows = Vec::new();

    for name in MONTH_NAMES {
        let report = tracker.monthly_report(name)?;
        rows.push(MonthRow {
            month: name,
            recorded_days: report.steps_by_day.iter().filter(|&&steps| steps > 0).count(),
            total_steps: report.total_steps,
            max_steps: report.max_steps,
            best_streak: report.best_streak,
            distance: format!("{:.2}", report.distance_km),
        });
    }

    println!("Год: {}, цель: {} шагов в день", tracker.year(), tracker.goal());

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN)); // Header color

    println!("{}", table);
    Ok(())
}
