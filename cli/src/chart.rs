use std::{io, time::Duration};

use anyhow::Result;
use chrono::{Datelike, Local};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Gauge, Padding, Paragraph},
};
use steptracker_core::{MonthlyReport, StepTracker, MONTH_NAMES};

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    above: Color,
    below: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan, // Highlights
    muted: Color::DarkGray,
    text: Color::White,
    above: Color::Green, // Days over the goal
    below: Color::Blue,
};

pub struct ChartApp {
    pub reports: Vec<MonthlyReport>,
    pub goal: u32,
    pub month_index: usize,
}

impl ChartApp {
    pub fn new(reports: Vec<MonthlyReport>, goal: u32) -> Self {
        // Open on the current calendar month.
        let month_index =
            (Local::now().month0() as usize).min(reports.len().saturating_sub(1));
        Self {
            reports,
            goal,
            month_index,
        }
    }

    pub fn next_month(&mut self) {
        if !self.reports.is_empty() && self.month_index < self.reports.len() - 1 {
            self.month_index += 1;
        }
    }

    pub fn previous_month(&mut self) {
        if self.month_index > 0 {
            self.month_index -= 1;
        }
    }

    pub fn current_data(&self) -> Option<&MonthlyReport> {
        self.reports.get(self.month_index)
    }
}

pub fn run(tracker: &StepTracker) -> Result<()> {
    // Data setup
    let mut reports = Vec::new();
    for name in MONTH_NAMES {
        reports.push(tracker.monthly_report(name)?);
    }

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // App setup
    let mut app = ChartApp::new(reports, tracker.goal());

    // Main loop
    loop {
        terminal.draw(|f| ui(f, &app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        KeyCode::Left | KeyCode::Char('h') => app.previous_month(),
                        KeyCode::Right | KeyCode::Char('l') => app.next_month(),
                        _ => {}
                    }
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn ui(frame: &mut Frame, app: &ChartApp) {
    let size = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header / month selector
            Constraint::Min(10),   // Main content (chart + sidebar)
            Constraint::Length(1), // Footer / help
        ])
        .split(size);

    if let Some(report) = app.current_data() {
        // --- Header ---
        let title = format!(" {} {} ", report.month_name, report.year);
        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(THEME.muted));

        let header_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(20), // "StepTracker"
                Constraint::Min(1),     // Spacer
                Constraint::Length(30), // Month selector
            ])
            .split(main_layout[0]);

        let app_title = Paragraph::new(Span::styled(
            "STEPTRACKER",
            Style::default()
                .fg(THEME.primary)
                .add_modifier(Modifier::BOLD),
        ))
        .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
        frame.render_widget(app_title, header_layout[0]);

        let nav_text = Line::from(vec![
            Span::styled(
                " < ",
                Style::default().fg(if app.month_index > 0 {
                    THEME.text
                } else {
                    THEME.muted
                }),
            ),
            Span::styled(
                title,
                Style::default().fg(THEME.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                " > ",
                Style::default().fg(if app.month_index < app.reports.len() - 1 {
                    THEME.text
                } else {
                    THEME.muted
                }),
            ),
        ]);
        let nav = Paragraph::new(nav_text)
            .alignment(Alignment::Right)
            .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
        frame.render_widget(nav, header_layout[2]);

        frame.render_widget(header_block, main_layout[0]);

        // --- Main Content Split ---
        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(75), // Chart area
                Constraint::Length(1),      // Gutter
                Constraint::Percentage(25), // Info panel
            ])
            .split(main_layout[1]);

        // --- Chart ---
        draw_chart(frame, report, app.goal, content_chunks[0]);

        // --- Info Panel ---
        draw_info_panel(frame, report, app.goal, content_chunks[2]);

        // --- Footer ---
        let help = Line::from(vec![
            Span::styled("Месяц: ", Style::default().fg(THEME.muted)),
            Span::styled("←/→ ", Style::default().fg(THEME.text)),
            Span::raw("  "),
            Span::styled("Выход: ", Style::default().fg(THEME.muted)),
            Span::styled("q", Style::default().fg(THEME.text)),
        ]);
        let footer = Paragraph::new(help)
            .alignment(Alignment::Center)
            .style(Style::default().fg(THEME.muted));
        frame.render_widget(footer, main_layout[2]);
    } else {
        frame.render_widget(
            Paragraph::new("Нет данных").alignment(Alignment::Center),
            main_layout[1],
        );
    }
}

fn draw_chart(frame: &mut Frame, report: &MonthlyReport, goal: u32, area: Rect) {
    let bars: Vec<Bar> = report
        .steps_by_day
        .iter()
        .enumerate()
        .map(|(i, &steps)| {
            let color = if steps > goal {
                THEME.above
            } else if steps > 0 {
                THEME.below
            } else {
                THEME.muted
            };
            Bar::default()
                .label((i + 1).to_string())
                .value(u64::from(steps))
                .style(Style::default().fg(color))
                .text_value(String::new())
        })
        .collect();

    let chart_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.muted))
        .title(" Шаги по дням ");

    let chart = BarChart::default()
        .block(chart_block)
        .bar_width(2)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars))
        .max(u64::from(report.max_steps.max(goal)));

    frame.render_widget(chart, area);
}

fn draw_info_panel(frame: &mut Frame, report: &MonthlyReport, goal: u32, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(11), // Stats
            Constraint::Min(1),     // Goal gauge
        ])
        .split(area);

    // 1. Overview Card
    let info_text = vec![
        Line::from(vec![Span::styled(
            "Обзор",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Всего:    ", Style::default().fg(THEME.muted)),
            Span::styled(
                report.total_steps.to_string(),
                Style::default().fg(THEME.text).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Максимум: ", Style::default().fg(THEME.muted)),
            Span::styled(
                report.max_steps.to_string(),
                Style::default()
                    .fg(THEME.above)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Серия:    ", Style::default().fg(THEME.muted)),
            Span::styled(
                report.best_streak.to_string(),
                Style::default()
                    .fg(THEME.primary)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Км:       ", Style::default().fg(THEME.muted)),
            Span::styled(
                format!("{:.2}", report.distance_km),
                Style::default().fg(THEME.text),
            ),
        ]),
        Line::from(vec![
            Span::styled("Ккал:     ", Style::default().fg(THEME.muted)),
            Span::styled(
                format!("{:.2}", report.kilocalories),
                Style::default().fg(THEME.text),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Цель:     ", Style::default().fg(THEME.muted)),
            Span::styled(goal.to_string(), Style::default().fg(THEME.text)),
        ]),
    ];

    let info_block = Paragraph::new(info_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(THEME.muted))
            .title(" Сводка "),
    );
    frame.render_widget(info_block, chunks[0]);

    // 2. Goal gauge: share of days over the goal.
    let days = report.days_in_month();
    let above = report
        .steps_by_day
        .iter()
        .filter(|&&steps| steps > goal)
        .count();
    let ratio = if days > 0 {
        above as f64 / days as f64
    } else {
        0.0
    };

    let label = format!("{:.0}% дней выше цели", ratio * 100.0);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Цель ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(THEME.muted)),
        )
        .gauge_style(Style::default().fg(if above > 0 { THEME.above } else { THEME.muted }))
        .ratio(ratio.min(1.0))
        .label(label);

    frame.render_widget(gauge, chunks[1]);
}
