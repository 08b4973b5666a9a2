use std::path::Path;

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::categories::load_categories;
use crate::cli::export;
use crate::error::Result;
use crate::fmt::money;
use crate::models::CategorySeries;
use crate::page::LedgerPage;
use crate::reports::{ReportBuilder, SeriesReport};
use crate::tui::{
    self, ReportView, ViewAction, FOOTER_STYLE, HEADER_STYLE, INFLUENCE_STYLE, OTHER_STYLE,
    PASSIVE_STYLE, TOTAL_STYLE,
};

// One style per series, in the order SeriesReport::series returns them.
const SERIES_STYLES: [Style; 4] = [TOTAL_STYLE, INFLUENCE_STYLE, PASSIVE_STYLE, OTHER_STYLE];

pub fn run(page_path: &str, categories: Option<&str>) -> Result<()> {
    let categories = load_categories(categories)?;
    let page = LedgerPage::load(Path::new(page_path))?;
    let report = ReportBuilder::new(&page, &categories).build(page.months())?;
    if report.is_empty() {
        println!("No months found on the page.");
        return Ok(());
    }
    let mut view = ChartView::new(report);
    tui::run_report_view(&mut view)
}

#[derive(Clone, Copy)]
enum ChartMode {
    Bars,
    Lines,
    Data,
}

pub struct ChartView {
    report: SeriesReport,
    mode: ChartMode,
    status_message: Option<String>,
}

impl ChartView {
    pub fn new(report: SeriesReport) -> Self {
        Self {
            report,
            mode: ChartMode::Bars,
            status_message: None,
        }
    }

    /// The four named series paired with their display styles.
    fn styled_series(&self) -> Vec<(CategorySeries, Style)> {
        self.report.series().into_iter().zip(SERIES_STYLES).collect()
    }

    /// Largest finite value across all four series. NaN never wins, so a
    /// poisoned month cannot blow up the axis scale.
    fn max_value(&self) -> f64 {
        let mut max = 0.0;
        for (series, _) in self.styled_series() {
            for v in series.values {
                if !v.is_nan() && v > max {
                    max = v;
                }
            }
        }
        max
    }

    fn legend_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (series, style) in self.styled_series() {
            spans.push(Span::styled(format!(" ■ {} ", series.label), style));
        }
        Line::from(spans)
    }

    fn draw_bars(&self, frame: &mut Frame, area: Rect) {
        let (top_tick, mid_tick) = y_axis_ticks(self.max_value());
        let top_label = compact_euro(top_tick);
        let mid_label = compact_euro(mid_tick);
        let y_label_width = top_label.len().max(mid_label.len()) as u16 + 1;

        let [y_axis_area, bar_area] =
            Layout::horizontal([Constraint::Length(y_label_width), Constraint::Fill(1)])
                .areas(area);

        // Y-axis labels: top tick on the first bar row, mid tick at the middle
        let inner_height = bar_area.height.saturating_sub(1); // month labels row
        let mid_row = inner_height / 2;
        let mut y_lines: Vec<Line> = Vec::new();
        for row in 0..inner_height {
            if row == 0 {
                y_lines.push(Line::from(Span::styled(
                    format!("{:>width$}", top_label, width = y_label_width as usize),
                    FOOTER_STYLE,
                )));
            } else if row == mid_row {
                y_lines.push(Line::from(Span::styled(
                    format!("{:>width$}", mid_label, width = y_label_width as usize),
                    FOOTER_STYLE,
                )));
            } else {
                y_lines.push(Line::from(""));
            }
        }
        frame.render_widget(Paragraph::new(y_lines), y_axis_area);

        let series = self.styled_series();
        let groups: Vec<BarGroup> = self
            .report
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let bars: Vec<Bar> = series
                    .iter()
                    .map(|(s, style)| {
                        // NaN.max(0.0) is 0.0: a poisoned value gets a zero bar.
                        Bar::default().value(s.values[i].max(0.0) as u64).style(*style)
                    })
                    .collect();
                BarGroup::default()
                    .label(Line::from(label.as_str()))
                    .bars(&bars)
            })
            .collect();

        let mut chart = BarChart::default()
            .bar_width(3)
            .bar_gap(0)
            .group_gap(2)
            .max(top_tick as u64);
        for group in &groups {
            chart = chart.data(group.clone());
        }
        frame.render_widget(chart, bar_area);
    }

    fn draw_lines(&self, frame: &mut Frame, area: Rect) {
        let (top_tick, mid_tick) = y_axis_ticks(self.max_value());
        let month_count = self.report.labels.len();
        let series = self.styled_series();

        // One point per month; NaN values drop out of their series.
        let points: Vec<Vec<(f64, f64)>> = series
            .iter()
            .map(|(s, _)| {
                s.values
                    .iter()
                    .enumerate()
                    .filter(|(_, v)| !v.is_nan())
                    .map(|(i, v)| (i as f64, *v))
                    .collect()
            })
            .collect();

        let datasets: Vec<Dataset> = series
            .iter()
            .zip(&points)
            .map(|((s, style), data)| {
                Dataset::default()
                    .name(s.label.clone())
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(*style)
                    .data(data)
            })
            .collect();

        let x_labels: Vec<Line> = self
            .report
            .labels
            .iter()
            .map(|l| Line::from(l.as_str()))
            .collect();
        let chart = Chart::new(datasets)
            .legend_position(None)
            .x_axis(
                Axis::default()
                    .bounds([0.0, month_count.saturating_sub(1).max(1) as f64])
                    .labels(x_labels)
                    .style(FOOTER_STYLE),
            )
            .y_axis(
                Axis::default()
                    .bounds([0.0, top_tick])
                    .labels([
                        Line::from("€0"),
                        Line::from(compact_euro(mid_tick)),
                        Line::from(compact_euro(top_tick)),
                    ])
                    .style(FOOTER_STYLE),
            );
        frame.render_widget(chart, area);
    }

    fn draw_data(&self, frame: &mut Frame, area: Rect) {
        let label_width = self
            .report
            .labels
            .iter()
            .map(String::len)
            .max()
            .unwrap_or(0)
            .max("Mese".len());

        let series = self.styled_series();
        let mut header = vec![Span::styled(
            format!(" {:<label_width$}", "Mese"),
            Style::new().add_modifier(Modifier::BOLD),
        )];
        for (s, style) in &series {
            header.push(Span::styled(
                format!("{:>14}", s.label),
                style.add_modifier(Modifier::BOLD),
            ));
        }
        let mut lines = vec![Line::from(header)];

        for (i, label) in self.report.labels.iter().enumerate() {
            let mut spans = vec![Span::raw(format!(" {label:<label_width$}"))];
            for (s, style) in &series {
                spans.push(Span::styled(format!("{:>14}", money(s.values[i])), *style));
            }
            lines.push(Line::from(spans));
        }
        frame.render_widget(Paragraph::new(lines), area);
    }
}

impl ReportView for ChartView {
    fn draw(&mut self, frame: &mut Frame) {
        let [header_area, chart_area, legend_area, hints_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(
            Paragraph::new(" Monthly gains by category").style(HEADER_STYLE),
            header_area,
        );

        match self.mode {
            ChartMode::Bars => self.draw_bars(frame, chart_area),
            ChartMode::Lines => self.draw_lines(frame, chart_area),
            ChartMode::Data => self.draw_data(frame, chart_area),
        }

        frame.render_widget(Paragraph::new(self.legend_line()), legend_area);

        if let Some(msg) = &self.status_message {
            frame.render_widget(
                Paragraph::new(format!(" {msg}")).style(Style::default().fg(Color::Yellow)),
                hints_area,
            );
        } else {
            frame.render_widget(
                Paragraph::new(" t=chart type  d=data  e=export csv  q=quit").style(FOOTER_STYLE),
                hints_area,
            );
        }
    }

    fn handle_key(&mut self, code: KeyCode) -> ViewAction {
        self.status_message = None;
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return ViewAction::Close,
            KeyCode::Char('t') => {
                self.mode = match self.mode {
                    ChartMode::Bars => ChartMode::Lines,
                    ChartMode::Lines | ChartMode::Data => ChartMode::Bars,
                };
            }
            KeyCode::Char('d') => {
                self.mode = match self.mode {
                    ChartMode::Data => ChartMode::Bars,
                    _ => ChartMode::Data,
                };
            }
            KeyCode::Char('e') => {
                let path = export::default_path();
                self.status_message = Some(match export::write_series_csv(&self.report, &path) {
                    Ok(()) => format!("Saved {}", path.display()),
                    Err(e) => format!("Export failed: {e}"),
                });
            }
            _ => {}
        }
        ViewAction::Continue
    }
}

/// Pick round y-axis tick values (top and mid) given the max data value.
fn y_axis_ticks(max_val: f64) -> (f64, f64) {
    let steps = [
        100.0, 250.0, 500.0, 1000.0, 2500.0, 5000.0, 10000.0, 25000.0, 50000.0, 100000.0,
        250000.0, 500000.0, 1000000.0,
    ];
    let top = steps
        .iter()
        .copied()
        .find(|s| *s >= max_val)
        .unwrap_or(max_val);
    (top, top / 2.0)
}

/// Compact euro amount for axis labels: "€250", "€2.5k", "€1M".
fn compact_euro(val: f64) -> String {
    if val >= 1_000_000.0 {
        let m = val / 1_000_000.0;
        if m == m.floor() {
            format!("€{}M", m as u64)
        } else {
            format!("€{m:.1}M")
        }
    } else if val >= 1000.0 {
        let k = val / 1000.0;
        if k == k.floor() {
            format!("€{}k", k as u64)
        } else {
            format!("€{k:.1}k")
        }
    } else {
        format!("€{}", val as u64)
    }
}
