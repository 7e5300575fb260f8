use budgetcast_core::DerivedRow;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};

use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::format_currency_short;

/// Line chart of forecast, actual and trend over the window
pub struct ForecastChart;

/// Point series drawn by the chart
#[derive(Debug, Default, PartialEq)]
pub struct ChartSeries {
    pub forecast: Vec<(f64, f64)>,
    pub actual: Vec<(f64, f64)>,
    /// Only the days with a trend value
    pub trend: Vec<(f64, f64)>,
    pub start_line: Vec<(f64, f64)>,
    pub target_line: Vec<(f64, f64)>,
}

impl ChartSeries {
    pub fn from_rows(rows: &[DerivedRow], start_amount: f64, target_amount: f64) -> Self {
        let last_day = rows.last().map(|r| r.day as f64).unwrap_or(0.0);
        Self {
            forecast: rows.iter().map(|r| (r.day as f64, r.baseline)).collect(),
            actual: rows.iter().map(|r| (r.day as f64, r.actual)).collect(),
            trend: rows
                .iter()
                .filter_map(|r| r.trend.map(|t| (r.day as f64, t)))
                .collect(),
            start_line: vec![(0.0, start_amount), (last_day, start_amount)],
            target_line: vec![(0.0, target_amount), (last_day, target_amount)],
        }
    }

    /// Vertical bounds covering every series, padded by 10%
    pub fn y_bounds(&self) -> [f64; 2] {
        let values = self
            .forecast
            .iter()
            .chain(&self.actual)
            .chain(&self.trend)
            .chain(&self.start_line)
            .chain(&self.target_line)
            .map(|(_, y)| *y);

        let min = values.clone().fold(f64::INFINITY, f64::min);
        let max = values.fold(f64::NEG_INFINITY, f64::max);
        if !min.is_finite() || !max.is_finite() {
            return [0.0, 1.0];
        }

        let padding = (max - min).abs().max(1.0) * 0.1;
        [min - padding, max + padding]
    }
}

impl ForecastChart {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ForecastChart {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ForecastChart {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let config = state.session.config();
        let series =
            ChartSeries::from_rows(state.session.rows(), config.start_amount, config.target_amount);

        let datasets = vec![
            Dataset::default()
                .name("Start")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::DarkGray))
                .data(&series.start_line),
            Dataset::default()
                .name("Target")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Yellow))
                .data(&series.target_line),
            Dataset::default()
                .name("Forecast")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Cyan))
                .data(&series.forecast),
            Dataset::default()
                .name("Actual")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Green))
                .data(&series.actual),
            Dataset::default()
                .name("Trend")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Magenta))
                .data(&series.trend),
        ];

        let x_max = config.day_count as f64;
        let [y_min, y_max] = series.y_bounds();

        let x_axis = Axis::default()
            .title("Day".dark_gray())
            .bounds([0.0, x_max])
            .labels(vec![
                Span::raw("0"),
                Span::raw(format!("{:.0}", x_max / 2.0)),
                Span::raw(format!("{:.0}", x_max)),
            ]);

        let y_axis = Axis::default()
            .bounds([y_min, y_max])
            .labels(vec![
                Span::raw(format_currency_short(y_min, &state.currency)),
                Span::raw(format_currency_short((y_min + y_max) / 2.0, &state.currency)),
                Span::raw(format_currency_short(y_max, &state.currency)),
            ]);

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" Forecast "),
            )
            .x_axis(x_axis)
            .y_axis(y_axis);

        frame.render_widget(chart, area);
    }
}
