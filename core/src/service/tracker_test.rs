
#[cfg(test)]
mod tests {
    use crate::error::TrackerError;
    use crate::model::snapshot::{LedgerSnapshot, StepEntry};
    use crate::service::tracker::{StepTracker, DEFAULT_GOAL};

    // 2025 is not a leap year, 2024 is.
    fn tracker() -> StepTracker {
        StepTracker::for_year(2025)
    }

    #[test]
    fn test_record_then_report_counts_that_day() {
        let mut t = tracker();
        t.record_steps("Март", 8, 3400, false).unwrap();

        let report = t.monthly_report("Март").unwrap();
        assert_eq!(report.steps_by_day[7], 3400);
        assert_eq!(report.total_steps, 3400);
        assert_eq!(report.max_steps, 3400);
    }

    #[test]
    fn test_record_overwrites_without_accumulate() {
        let mut t = tracker();
        t.record_steps("Март", 8, 3400, false).unwrap();
        t.record_steps("Март", 8, 1200, false).unwrap();

        let report = t.monthly_report("Март").unwrap();
        assert_eq!(report.steps_by_day[7], 1200);
    }

    #[test]
    fn test_record_accumulates_when_asked() {
        let mut t = tracker();
        t.record_steps("Март", 8, 5000, true).unwrap();
        t.record_steps("Март", 8, 2500, true).unwrap();

        let report = t.monthly_report("Март").unwrap();
        assert_eq!(report.steps_by_day[7], 7500);
    }

    #[test]
    fn test_accumulate_on_top_of_overwrite() {
        let mut t = tracker();
        t.record_steps("Март", 8, 3400, false).unwrap();
        t.record_steps("Март", 8, 600, true).unwrap();

        let report = t.monthly_report("Март").unwrap();
        assert_eq!(report.steps_by_day[7], 4000);
    }

    #[test]
    fn test_zero_steps_rejected_without_mutation() {
        let mut t = tracker();
        assert_eq!(
            t.record_steps("Март", 8, 0, false),
            Err(TrackerError::InvalidSteps)
        );

        let report = t.monthly_report("Март").unwrap();
        assert_eq!(report.total_steps, 0);
        assert_eq!(report.steps_by_day[7], 0);
    }

    #[test]
    fn test_day_outside_1_to_31_rejected() {
        let mut t = tracker();
        assert_eq!(
            t.record_steps("Март", 0, 1000, false),
            Err(TrackerError::InvalidDay { day: 0 })
        );
        assert_eq!(
            t.record_steps("Март", 32, 1000, false),
            Err(TrackerError::InvalidDay { day: 32 })
        );
        assert_eq!(t.monthly_report("Март").unwrap().total_steps, 0);
    }

    #[test]
    fn test_unknown_month_rejected() {
        let mut t = tracker();
        assert_eq!(
            t.record_steps("НеМесяц", 1, 1000, false),
            Err(TrackerError::InvalidMonthName {
                name: "НеМесяц".to_string()
            })
        );
        assert_eq!(
            t.statistic("НеМесяц"),
            Err(TrackerError::InvalidMonthName {
                name: "НеМесяц".to_string()
            })
        );
    }

    #[test]
    fn test_day_past_month_end_rejected() {
        let mut t = tracker();
        assert_eq!(
            t.record_steps("Апрель", 31, 1000, false),
            Err(TrackerError::DayOutOfRange {
                day: 31,
                days_in_month: 30
            })
        );
        assert_eq!(
            t.record_steps("Февраль", 29, 1000, false),
            Err(TrackerError::DayOutOfRange {
                day: 29,
                days_in_month: 28
            })
        );

        // Leap year: 29 февраля exists.
        let mut leap = StepTracker::for_year(2024);
        assert!(leap.record_steps("Февраль", 29, 1000, false).is_ok());
        assert_eq!(leap.monthly_report("Февраль").unwrap().days_in_month(), 29);
    }

    #[test]
    fn test_empty_february_report() {
        let t = tracker();
        let report = t.monthly_report("Февраль").unwrap();

        assert_eq!(report.days_in_month(), 28);
        assert_eq!(report.total_steps, 0);
        assert_eq!(report.max_steps, 0);
        assert_eq!(report.average_steps, 0);
        assert_eq!(report.best_streak, 0);

        let text = report.render();
        assert!(text.contains("Пройденная дистанция (в км): 0.00"));
        assert!(text.contains("Количество сожжённых килокалорий: 0.00"));
    }

    #[test]
    fn test_march_scenario_aggregates() {
        let mut t = tracker();
        assert_eq!(t.goal(), DEFAULT_GOAL);
        t.record_steps("Март", 1, 12000, false).unwrap();
        t.record_steps("Март", 2, 12000, false).unwrap();
        t.record_steps("Март", 3, 5000, false).unwrap();

        let report = t.monthly_report("Март").unwrap();
        assert_eq!(report.total_steps, 29000);
        assert_eq!(report.max_steps, 12000);
        assert_eq!(report.best_streak, 2);
        assert_eq!(report.average_steps, 29000 / 31);

        let text = report.render();
        assert!(text.contains("Пройденная дистанция (в км): 21.75"));
        assert!(text.contains("Количество сожжённых килокалорий: 1450.00"));
    }

    #[test]
    fn test_steps_equal_to_goal_do_not_extend_a_run() {
        let mut t = tracker();
        t.record_steps("Май", 1, 10000, false).unwrap();
        t.record_steps("Май", 2, 10001, false).unwrap();

        let report = t.monthly_report("Май").unwrap();
        // Day 1 sits exactly on the goal, so only day 2 qualifies.
        assert_eq!(report.best_streak, 1);
    }

    #[test]
    fn test_run_reaching_month_end_is_not_counted() {
        let mut t = tracker();
        t.record_steps("Январь", 29, 12000, false).unwrap();
        t.record_steps("Январь", 30, 12000, false).unwrap();
        t.record_steps("Январь", 31, 12000, false).unwrap();

        // The run is still open when the loop ends and never becomes the
        // best streak.
        assert_eq!(t.monthly_report("Январь").unwrap().best_streak, 0);

        // An earlier, closed run still wins.
        t.record_steps("Январь", 1, 12000, false).unwrap();
        t.record_steps("Январь", 2, 12000, false).unwrap();
        assert_eq!(t.monthly_report("Январь").unwrap().best_streak, 2);
    }

    #[test]
    fn test_set_goal_changes_streak_qualification() {
        let mut t = tracker();
        t.record_steps("Июнь", 1, 5000, false).unwrap();
        t.record_steps("Июнь", 2, 5000, false).unwrap();

        assert_eq!(t.monthly_report("Июнь").unwrap().best_streak, 0);

        t.set_goal(4000);
        assert_eq!(t.monthly_report("Июнь").unwrap().best_streak, 2);
    }

    #[test]
    fn test_with_goal_constructor() {
        let t = StepTracker::with_goal(15000);
        assert_eq!(t.goal(), 15000);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut t = tracker();
        t.set_goal(8000);
        t.record_steps("Март", 1, 12000, false).unwrap();
        t.record_steps("Сентябрь", 15, 7000, false).unwrap();

        let snapshot = t.to_snapshot();
        assert_eq!(snapshot.goal, 8000);
        assert_eq!(snapshot.days.len(), 2);

        let mut restored = StepTracker::for_year(2025);
        restored.restore(snapshot);
        assert_eq!(restored.goal(), 8000);
        assert_eq!(restored.statistic("Март"), t.statistic("Март"));
        assert_eq!(restored.statistic("Сентябрь"), t.statistic("Сентябрь"));
    }

    #[test]
    fn test_restore_drops_malformed_entries() {
        let mut snapshot = LedgerSnapshot::new(10000);
        snapshot.days.push(StepEntry {
            month: 0,
            day: 5,
            steps: 100,
        });
        snapshot.days.push(StepEntry {
            month: 13,
            day: 5,
            steps: 100,
        });
        snapshot.days.push(StepEntry {
            month: 3,
            day: 40,
            steps: 100,
        });
        snapshot.days.push(StepEntry {
            month: 3,
            day: 5,
            steps: 0,
        });
        snapshot.days.push(StepEntry {
            month: 3,
            day: 5,
            steps: 2500,
        });

        let mut t = tracker();
        t.restore(snapshot);

        // Only the one well-formed entry survives.
        assert_eq!(t.to_snapshot().days.len(), 1);
        assert_eq!(t.monthly_report("Март").unwrap().steps_by_day[4], 2500);
    }
}
