use std::fmt;

use serde::{Deserialize, Serialize};

const RULE: &str =
    "===============================================================================";

/// Aggregates for one calendar month. Computed on demand by the tracker and
/// never cached; `steps_by_day` carries an entry for every day of the month,
/// zeros included, so `steps_by_day.len()` is the month length.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MonthlyReport {
    pub year: i32,
    pub month0: u32,
    pub month_name: String,
    pub steps_by_day: Vec<u32>,
    pub total_steps: u64,
    pub max_steps: u32,
    pub average_steps: u64,
    pub best_streak: u32,
    pub distance_km: f64,
    pub kilocalories: f64,
}

impl MonthlyReport {
    pub fn days_in_month(&self) -> u32 {
        self.steps_by_day.len() as u32
    }

    /// Renders the fixed report layout:
    ///
    /// header, blank line, the day list («1 день: n, 2 день: n, …» with an
    /// extra line break after the 12th and 23rd entries, trailing «, »
    /// trimmed), blank line, the six summary lines, and a 79-character rule.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "📆 СТАТИСТИКА ЗА {} 📆\n\n",
            self.month_name.to_uppercase()
        ));

        for (i, steps) in self.steps_by_day.iter().enumerate() {
            out.push_str(&format!("{} день: {}, ", i + 1, steps));
            if i > 0 && i % 11 == 0 {
                out.push('\n');
            }
        }
        // The day list always ends with ", " — no month is short enough to
        // end on the inserted line break.
        out.truncate(out.len() - 2);

        out.push_str(&format!(
            "\n\nОбщее количество шагов за месяц: {}\n\
             Максимально пройденное количество шагов в месяце: {}\n\
             Среднее количество шагов за месяц: {}\n\
             Пройденная дистанция (в км): {:.2}\n\
             Количество сожжённых килокалорий: {:.2}\n\
             Лучшая серия: {}\n\
             {}\n",
            self.total_steps,
            self.max_steps,
            self.average_steps,
            self.distance_km,
            self.kilocalories,
            self.best_streak,
            RULE,
        ));
        out
    }
}

impl fmt::Display for MonthlyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
