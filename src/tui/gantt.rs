//! Terminal Gantt chart view.
//!
//! Draws the rows and day axis produced by a render pass: a name column on the
//! left, one three-cell column per axis tick on the right, weekend columns
//! shaded, progress shown as the filled part of each bar. The render pass runs
//! lazily on the first frame, i.e. once the terminal is ready, and again only
//! after an explicit reload.

use std::cell::OnceCell;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{Datelike, NaiveDate};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use tracing::{info, warn};

use crate::axis::is_weekend;
use crate::chart::{render_chart, Chart, ChartRow};
use crate::db::{truncate, Database};
use crate::error::Result;
use crate::fields::RowKind;
use crate::task::Task;
use crate::tui::colors::{DARK_PURPLE, GOLD, TEAL, WEEKEND_SHADE};

const DAY_WIDTH: u16 = 3;
const NAME_WIDTH: u16 = 30;
const HEADER_LINES: u16 = 2;

/// State of the timeline screen.
pub struct GanttApp {
    db_path: PathBuf,
    include_completed: bool,
    tasks: Vec<Task>,
    chart: OnceCell<Chart>,
    row_offset: usize,
    day_offset: usize,
    status_message: String,
    should_quit: bool,
}

impl GanttApp {
    /// Create the view for the snapshot stored at `db_path`.
    pub fn new(db_path: &Path, include_completed: bool) -> Result<Self> {
        let db = Database::load(db_path)?;
        Ok(Self::with_tasks(
            db_path.to_path_buf(),
            include_completed,
            db.visible_tasks(include_completed),
        ))
    }

    fn with_tasks(db_path: PathBuf, include_completed: bool, tasks: Vec<Task>) -> Self {
        GanttApp {
            db_path,
            include_completed,
            tasks,
            chart: OnceCell::new(),
            row_offset: 0,
            day_offset: 0,
            status_message: String::new(),
            should_quit: false,
        }
    }

    /// Result of the current render pass, computed on first access.
    fn chart(&self) -> &Chart {
        self.chart.get_or_init(|| render_chart(&self.tasks))
    }

    /// Re-read the snapshot and discard the previous render pass.
    fn reload(&mut self) {
        match Database::load(&self.db_path) {
            Ok(db) => {
                self.tasks = db.visible_tasks(self.include_completed);
                self.chart = OnceCell::new();
                self.row_offset = 0;
                self.day_offset = 0;
                self.status_message = format!("Reloaded {} tasks", self.tasks.len());
                info!(path = %self.db_path.display(), tasks = self.tasks.len(), "snapshot reloaded");
            }
            Err(e) => {
                warn!(error = %e, "reload failed");
                self.status_message = format!("Reload failed: {e}");
            }
        }
    }

    fn extent(&self) -> (usize, usize) {
        match self.chart() {
            Chart::Empty { .. } => (0, 0),
            Chart::Ready { rows, ticks, .. } => (rows.len(), ticks.len()),
        }
    }

    /// Apply one key press.
    fn handle_key(&mut self, code: KeyCode) {
        let (row_count, tick_count) = self.extent();
        self.status_message.clear();
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => self.reload(),
            KeyCode::Left | KeyCode::Char('h') => {
                self.day_offset = self.day_offset.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.day_offset + 1 < tick_count {
                    self.day_offset += 1;
                }
            }
            KeyCode::PageDown | KeyCode::Char('L') => {
                self.day_offset = (self.day_offset + 7).min(tick_count.saturating_sub(1));
            }
            KeyCode::PageUp | KeyCode::Char('H') => {
                self.day_offset = self.day_offset.saturating_sub(7);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.row_offset = self.row_offset.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.row_offset + 1 < row_count {
                    self.row_offset += 1;
                }
            }
            KeyCode::Home => {
                self.row_offset = 0;
                self.day_offset = 0;
            }
            _ => {}
        }
    }

    fn handle_input(&mut self) -> io::Result<bool> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code);
                }
            }
        }
        Ok(self.should_quit)
    }

    /// Render the whole screen
    pub fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Chart
                Constraint::Length(1), // Status bar
            ])
            .split(f.area());

        self.render_header(f, chunks[0]);
        match self.chart() {
            Chart::Empty { message } => self.render_placeholder(f, chunks[1], message),
            Chart::Ready { rows, ticks, .. } => self.render_timeline(f, chunks[1], rows, ticks),
        }
        self.render_status_bar(f, chunks[2]);
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let header_text = Line::from(vec![
            Span::styled("TIMELINE", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(
                self.db_path.display().to_string(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::ITALIC),
            ),
        ]);

        let header_block = Paragraph::new(header_text)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(header_block, area);
    }

    fn render_placeholder(&self, f: &mut Frame, area: Rect, message: &str) {
        let placeholder = Paragraph::new(message)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(placeholder, area);
    }

    fn render_timeline(&self, f: &mut Frame, area: Rect, rows: &[ChartRow], ticks: &[NaiveDate]) {
        let block = Block::default().borders(Borders::ALL).title("Gantt");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let visible_days = (inner.width.saturating_sub(NAME_WIDTH) / DAY_WIDTH) as usize;
        let first = self.day_offset.min(ticks.len());
        let last = (first + visible_days).min(ticks.len());
        let days = &ticks[first..last];

        let mut lines = header_lines(days);
        let body_height = inner.height.saturating_sub(HEADER_LINES) as usize;
        for row in rows.iter().skip(self.row_offset).take(body_height) {
            lines.push(bar_line(row, days));
        }

        f.render_widget(Paragraph::new(lines), inner);
    }

    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else {
            let (rows, days) = self.extent();
            format!(
                "Rows: {} | Days: {} | ←/→ days | PgUp/PgDn week | ↑/↓ rows | r: Reload | q: Quit",
                rows, days
            )
        };

        let status = Paragraph::new(status_text)
            .style(Style::default().bg(DARK_PURPLE).fg(Color::White))
            .alignment(Alignment::Left);
        f.render_widget(status, area);
    }

    /// Main loop.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.handle_input()? {
                break;
            }
        }
        Ok(())
    }
}

fn pad_name(name: &str) -> String {
    let width = NAME_WIDTH as usize;
    format!("{:<width$}", truncate(name, width - 1), width = width)
}

fn day_style(d: NaiveDate) -> Style {
    if is_weekend(d) {
        Style::default().bg(WEEKEND_SHADE)
    } else {
        Style::default()
    }
}

/// Month labels and day numbers for the visible ticks.
fn header_lines(days: &[NaiveDate]) -> Vec<Line<'static>> {
    let mut month_spans = vec![Span::raw(pad_name(""))];
    let mut day_spans = vec![Span::styled(pad_name("Task"), Style::default().add_modifier(Modifier::BOLD))];
    let mut last_month = None;

    for (i, &d) in days.iter().enumerate() {
        if i == 0 || last_month != Some(d.month()) {
            month_spans.push(Span::styled(format!("{:<3}", d.format("%b")), Style::default().add_modifier(Modifier::BOLD)));
        } else {
            month_spans.push(Span::raw(" ".repeat(DAY_WIDTH as usize)));
        }
        last_month = Some(d.month());
        day_spans.push(Span::styled(format!("{:>2} ", d.day()), day_style(d)));
    }

    vec![Line::from(month_spans), Line::from(day_spans)]
}

/// Number of leading days of a bar drawn as complete.
fn done_days(row: &ChartRow) -> i64 {
    let span = (row.end - row.start).num_days() + 1;
    let pct = i64::from(row.percent_complete.unwrap_or(0).min(100));
    (span * pct + 50) / 100
}

fn bar_line(row: &ChartRow, days: &[NaiveDate]) -> Line<'static> {
    let bar_color = if row.resource == RowKind::Process.label() { TEAL } else { GOLD };
    let name_style = if bar_color == GOLD {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let done = done_days(row);

    let mut spans = vec![Span::styled(pad_name(&row.name), name_style)];
    for &d in days {
        if d >= row.start && d <= row.end {
            let cell = if (d - row.start).num_days() < done { "███" } else { "▒▒▒" };
            spans.push(Span::styled(cell, day_style(d).fg(bar_color)));
        } else {
            spans.push(Span::styled("   ", day_style(d)));
        }
    }
    Line::from(spans)
}
