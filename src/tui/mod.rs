mod charts;
mod help;

use crate::model::LatencyReport;
use anyhow::{Context, Result};
use charts::{render_histogram, render_summary_line, HistogramPlot};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use help::draw_help;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use std::io;

/// Show the histogram full screen and block until the user dismisses it.
pub fn run(report: &LatencyReport) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).ok();

    let backend = CrosstermBackend::new(stdout);
    let res = Terminal::new(backend)
        .context("create terminal")
        .and_then(|mut terminal| {
            terminal.clear().ok();
            let res = event_loop(&mut terminal, report);
            terminal.show_cursor().ok();
            res
        });

    // Restore the terminal even when drawing failed.
    disable_raw_mode().ok();
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen).ok();
    res
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, report: &LatencyReport) -> Result<()> {
    let plot = HistogramPlot::new(&report.histogram);
    loop {
        terminal
            .draw(|f| draw(f.area(), f, report, &plot))
            .context("draw histogram")?;

        // Nothing changes between events, so block instead of polling.
        match event::read().context("read terminal event")? {
            Event::Key(k) if k.kind == KeyEventKind::Press => match (k.modifiers, k.code) {
                (_, KeyCode::Char('q'))
                | (_, KeyCode::Esc)
                | (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(()),
                _ => {}
            },
            _ => {}
        }
    }
}

fn draw(area: Rect, f: &mut Frame, report: &LatencyReport, plot: &HistogramPlot) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3), // summary strip
                Constraint::Min(0),    // chart
                Constraint::Length(1), // keys
            ]
            .as_ref(),
        )
        .split(area);

    render_summary_line(f, chunks[0], &report.summary);
    render_histogram(f, chunks[1], plot, &report.title);
    draw_help(chunks[2], f, &report.source.display().to_string());
}
