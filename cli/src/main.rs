mod chart;
mod overview;
mod repl;

use anyhow::Result;
use clap::Parser;
use steptracker_core::{FileSnapshotRepository, SnapshotRepository, StepTracker};
use tracing::debug;

#[derive(Parser)]
#[command(name = "steptracker")]
#[command(about = "Дневник шагов со статистикой за месяц", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Записать шаги за день (прежнее значение перезаписывается)
    Record {
        /// Месяц на русском языке (Пример: Апрель)
        month: String,
        /// День месяца (1-31)
        day: u32,
        /// Количество шагов
        steps: u32,
    },
    /// Добавить шаги к уже записанному дню
    Add {
        /// Месяц на русском языке (Пример: Апрель)
        month: String,
        /// День месяца (1-31)
        day: u32,
        /// Количество шагов
        steps: u32,
    },
    /// Вывести статистику за месяц
    Stats {
        /// Месяц на русском языке (Пример: Апрель)
        month: String,
    },
    /// Изменить цель шагов на день
    Goal {
        /// Новая цель (Пример: 10000)
        value: u32,
    },
    /// Сводная таблица по всем месяцам года
    Overview,
    /// Диаграмма шагов по дням месяца
    Chart,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let repo = FileSnapshotRepository::new(None)?;

    let mut tracker = StepTracker::new();
    if let Some(snapshot) = repo.load()? {
        debug!("restoring {} saved days", snapshot.days.len());
        tracker.restore(snapshot);
    }

    match cli.command {
        Some(Commands::Record { month, day, steps }) => {
            save_steps(&repo, &mut tracker, &month, day, steps, false)?;
        }
        Some(Commands::Add { month, day, steps }) => {
            save_steps(&repo, &mut tracker, &month, day, steps, true)?;
        }
        Some(Commands::Stats { month }) => match tracker.statistic(&month) {
            Ok(text) => println!("{}", text),
            Err(e) => repl::print_error(&e),
        },
        Some(Commands::Goal { value }) => {
            tracker.set_goal(value);
            repo.save(&tracker.to_snapshot())?;
            println!("Новая цель: {} шагов в день.", value);
        }
        Some(Commands::Overview) => {
            overview::show_year(&tracker)?;
        }
        Some(Commands::Chart) => {
            chart::run(&tracker)?;
        }
        None => {
            repl::run(&repo, &mut tracker)?;
        }
    }
    Ok(())
}

fn save_steps(
    repo: &FileSnapshotRepository,
    tracker: &mut StepTracker,
    month: &str,
    day: u32,
    steps: u32,
    accumulate: bool,
) -> Result<()> {
    match tracker.record_steps(month, day, steps, accumulate) {
        Ok(()) => {
            repo.save(&tracker.to_snapshot())?;
            if accumulate {
                println!("Добавлено {} шагов: {}, день {}.", steps, month, day);
            } else {
                println!("Записано: {}, день {}: {} шагов.", month, day, steps);
            }
        }
        Err(e) => repl::print_error(&e),
    }
    Ok(())
}
