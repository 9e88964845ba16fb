use std::io::{self, BufRead, Write};

use anyhow::Result;
use steptracker_core::{SnapshotRepository, StepTracker, TrackerError};

/// Interactive command vocabulary. Commands are matched against the full
/// Russian description, not a short code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    EnterSteps,
    AddSteps,
    PrintStat,
    ChangeGoal,
    Help,
    Exit,
}

impl ReplCommand {
    pub const ALL: [ReplCommand; 6] = [
        ReplCommand::EnterSteps,
        ReplCommand::AddSteps,
        ReplCommand::PrintStat,
        ReplCommand::ChangeGoal,
        ReplCommand::Help,
        ReplCommand::Exit,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            ReplCommand::EnterSteps => "Ввести шаги",
            ReplCommand::AddSteps => "Добавить шаги",
            ReplCommand::PrintStat => "Вывести статистику",
            ReplCommand::ChangeGoal => "Изменить цель",
            ReplCommand::Help => "Помощь",
            ReplCommand::Exit => "Выйти",
        }
    }

    /// Exact match after trimming outer whitespace. Month names elsewhere are
    /// case-sensitive and commands are too.
    pub fn from_input(input: &str) -> Option<ReplCommand> {
        let trimmed = input.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|command| command.description() == trimmed)
    }
}

pub fn run<R: SnapshotRepository>(repo: &R, tracker: &mut StepTracker) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    print_start_message();
    loop {
        prompt("Введите команду: ")?;
        let Some(line) = read_line(&mut input)? else {
            break;
        };
        let Some(command) = ReplCommand::from_input(&line) else {
            println!(
                "Ошибка! Такой команды не существует.\nЧтобы просмотреть список команд, введите {}",
                ReplCommand::Help.description()
            );
            continue;
        };
        match command {
            ReplCommand::EnterSteps => enter_steps(&mut input, repo, tracker, false)?,
            ReplCommand::AddSteps => enter_steps(&mut input, repo, tracker, true)?,
            ReplCommand::PrintStat => print_stat(&mut input, tracker)?,
            ReplCommand::ChangeGoal => change_goal(&mut input, repo, tracker)?,
            ReplCommand::Help => print_start_message(),
            ReplCommand::Exit => {
                println!("Надеюсь, наше приложение Вам помогло! Удачи!");
                break;
            }
        }
    }
    Ok(())
}

fn print_start_message() {
    println!(
        "               🔆Приветствую в приложении🔆
                    👟StepTracker👟
Именно здесь ты можешь отслеживать свои шаги за день и собирать статистику! 📈
🎯 Чтобы задать цель по шагам на день (изначально 10.000), введи {goal},
🚶‍♂️ Чтобы записать количество шагов за сегодня, введи {enter},
➕ Чтобы добавить шаги к нужной дате, введи {add},
📜 Чтобы просмотреть статистику за определенный месяц, введи {stat}

🚪 Для завершения работы приложения, введи {exit}.

             🔑Удачного пользования и успехов!🔑
",
        goal = ReplCommand::ChangeGoal.description(),
        enter = ReplCommand::EnterSteps.description(),
        add = ReplCommand::AddSteps.description(),
        stat = ReplCommand::PrintStat.description(),
        exit = ReplCommand::Exit.description(),
    );
}

fn enter_steps<R: SnapshotRepository>(
    input: &mut impl BufRead,
    repo: &R,
    tracker: &mut StepTracker,
    accumulate: bool,
) -> Result<()> {
    prompt("Введите месяц для добавления шагов (Пример: Апрель): ")?;
    let Some(month) = read_line(input)? else {
        return Ok(());
    };

    prompt("Введите день для добавления шагов (Пример: 10): ")?;
    let Some(day_line) = read_line(input)? else {
        return Ok(());
    };
    let Ok(day) = day_line.parse::<u32>() else {
        println!("Ошибка! Вы ввели не целое число. Операция отменена.");
        return Ok(());
    };

    prompt("Введите количество шагов для добавления (Пример: 3400): ")?;
    let Some(steps_line) = read_line(input)? else {
        return Ok(());
    };
    let Ok(steps) = steps_line.parse::<u32>() else {
        println!("Ошибка! Вы ввели не целое число. Операция отменена.");
        return Ok(());
    };

    match tracker.record_steps(&month, day, steps, accumulate) {
        Ok(()) => repo.save(&tracker.to_snapshot())?,
        Err(e) => print_error(&e),
    }
    Ok(())
}

fn print_stat(input: &mut impl BufRead, tracker: &StepTracker) -> Result<()> {
    prompt("Введите месяц на русском языке: ")?;
    let Some(month) = read_line(input)? else {
        return Ok(());
    };
    match tracker.statistic(&month) {
        Ok(text) => println!("{}", text),
        Err(e) => print_error(&e),
    }
    Ok(())
}

fn change_goal<R: SnapshotRepository>(
    input: &mut impl BufRead,
    repo: &R,
    tracker: &mut StepTracker,
) -> Result<()> {
    prompt("Введите желаемую цель шагов в день (Пример: 10000): ")?;
    let Some(line) = read_line(input)? else {
        return Ok(());
    };
    match line.parse::<u32>() {
        Ok(goal) => {
            tracker.set_goal(goal);
            repo.save(&tracker.to_snapshot())?;
        }
        Err(_) => println!("Ошибка! Вы ввели не целое число. Операция не завершена."),
    }
    Ok(())
}

pub fn print_error(err: &TrackerError) {
    println!("Ошибка! {}", russian_message(err));
}

pub fn russian_message(err: &TrackerError) -> &'static str {
    match err {
        TrackerError::InvalidSteps => "Шаги должны быть > 0",
        TrackerError::InvalidDay { .. } => "Дни должны быть в диапазоне от 1 до 31",
        TrackerError::InvalidMonthName { .. } => "Неверно введён месяц",
        TrackerError::DayOutOfRange { .. } => "День превышает количество в месяце",
    }
}

fn prompt(text: &str) -> Result<()> {
    print!("{}", text);
    io::stdout().flush()?;
    Ok(())
}

/// `None` on end of input, otherwise the line without its newline.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
