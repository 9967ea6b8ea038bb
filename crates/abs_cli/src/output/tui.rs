//! Interactive terminal chart.
//!
//! Renders the valuation result as a two-series line chart with the dark
//! theme approximated in terminal colours: swap value in solid red-coral,
//! delta in teal dots standing in for the dashed line. The chart stays on
//! screen until the user presses `q` or `Esc`.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::symbols;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType};

use abs_pricing::ValuationResult;

use crate::Result;

/// Swap value series colour (#FF6B6B).
pub const SWAP_VALUE_COLOR: Color = Color::Rgb(0xFF, 0x6B, 0x6B);
/// Delta series colour (#4ECDC4).
pub const DELTA_COLOR: Color = Color::Rgb(0x4E, 0xCD, 0xC4);
/// Chart background colour (rgb(40, 40, 40)).
pub const BACKGROUND_COLOR: Color = Color::Rgb(40, 40, 40);

/// Splits the result into (time, value) point series for both curves
pub fn series_points(result: &ValuationResult) -> (Vec<(f64, f64)>, Vec<(f64, f64)>) {
    let swap = result
        .points()
        .iter()
        .map(|p| (p.time, p.swap_value))
        .collect();
    let delta = result.points().iter().map(|p| (p.time, p.delta)).collect();
    (swap, delta)
}

/// X-axis bounds: the full time horizon
pub fn x_bounds(result: &ValuationResult) -> [f64; 2] {
    let points = result.points();
    [points[0].time, points[points.len() - 1].time]
}

/// Y-axis bounds covering both series with a 10% margin
pub fn y_bounds(result: &ValuationResult) -> [f64; 2] {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for p in result.points() {
        for v in [p.swap_value, p.delta] {
            min = min.min(v);
            max = max.max(v);
        }
    }
    if !min.is_finite() || !max.is_finite() {
        return [0.0, 1.0];
    }
    let span = (max - min).max(1e-9);
    [min - 0.1 * span, max + 0.1 * span]
}

fn axis_labels(bounds: [f64; 2]) -> Vec<Span<'static>> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    vec![
        Span::raw(format!("{:.2}", bounds[0])),
        Span::raw(format!("{:.2}", mid)),
        Span::raw(format!("{:.2}", bounds[1])),
    ]
}

/// Draw the chart over the whole frame
pub fn draw(frame: &mut Frame, result: &ValuationResult) {
    let (swap_points, delta_points) = series_points(result);
    let x = x_bounds(result);
    let y = y_bounds(result);

    let datasets = vec![
        Dataset::default()
            .name("Swap Value")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(SWAP_VALUE_COLOR))
            .data(&swap_points),
        Dataset::default()
            .name("Delta (Forecast)")
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(DELTA_COLOR))
            .data(&delta_points),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(" ABS Derivative Pricing & Sensitivity ")
                .borders(Borders::ALL)
                .style(Style::default().bg(BACKGROUND_COLOR).fg(Color::White)),
        )
        .x_axis(
            Axis::default()
                .title("Time (Years)")
                .style(Style::default().fg(Color::White))
                .bounds(x)
                .labels(axis_labels(x)),
        )
        .y_axis(
            Axis::default()
                .title("Value / Delta")
                .style(Style::default().fg(Color::White))
                .bounds(y)
                .labels(axis_labels(y)),
        );

    frame.render_widget(chart, frame.size());
}

/// Display the chart until the user presses `q` or `Esc`
pub fn display(result: &ValuationResult) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let outcome = event_loop(&mut terminal, result);

    // Restore the terminal even when drawing failed.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    outcome
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    result: &ValuationResult,
) -> Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, result))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    return Ok(());
                }
            }
        }
    }
}
