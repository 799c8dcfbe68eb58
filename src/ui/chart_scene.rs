//! Decay curve chart screen.
//!
//! Renders a finished `RenderSpec` with ratatui's braille chart, summary
//! curves bold and individual trials dim, with a legend panel on the right.

use crate::aggregate::{RenderSpec, SeriesKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, List, ListItem, Paragraph},
    Frame,
};

// Matplotlib's black/orange/green/red summary palette, mapped to terminal
// colors (black would vanish on a dark background).
const SUMMARY_COLORS: [Color; 4] = [Color::White, Color::Yellow, Color::Green, Color::Red];

const TRIAL_COLORS: [Color; 6] = [
    Color::Cyan,
    Color::Magenta,
    Color::Blue,
    Color::LightBlue,
    Color::LightMagenta,
    Color::LightCyan,
];

pub struct ChartScreen {
    spec: RenderSpec,
    /// (round, percent) points per series, precomputed for the Chart widget.
    points: Vec<Vec<(f64, f64)>>,
}

impl ChartScreen {
    pub fn new(spec: RenderSpec) -> Self {
        let points = spec
            .series
            .iter()
            .map(|s| {
                s.points
                    .iter()
                    .enumerate()
                    .map(|(round, &pct)| (round as f64, pct))
                    .collect()
            })
            .collect();
        Self { spec, points }
    }

    fn series_color(&self, idx: usize) -> Color {
        let series = &self.spec.series[idx];
        match series.kind {
            SeriesKind::Summary => SUMMARY_COLORS[idx % SUMMARY_COLORS.len()],
            SeriesKind::Trial => TRIAL_COLORS[idx % TRIAL_COLORS.len()],
        }
    }

    pub fn draw(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(26)])
            .split(area);

        self.draw_chart(f, chunks[0]);
        self.draw_legend(f, chunks[1]);
    }

    fn draw_chart(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let datasets: Vec<Dataset> = self
            .spec
            .series
            .iter()
            .enumerate()
            .map(|(idx, series)| {
                let color = self.series_color(idx);
                let style = match series.kind {
                    SeriesKind::Summary => Style::default()
                        .fg(color)
                        .add_modifier(Modifier::BOLD),
                    SeriesKind::Trial => Style::default().fg(color),
                };
                Dataset::default()
                    .name(series.label.clone())
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(style)
                    .data(&self.points[idx])
            })
            .collect();

        let max_round = self.spec.max_len().saturating_sub(1).max(1) as f64;
        let x_axis = Axis::default()
            .title(self.spec.x_label)
            .style(Style::default().fg(Color::Gray))
            .bounds([0.0, max_round])
            .labels(vec![
                Span::raw("0"),
                Span::raw(format!("{}", (max_round / 2.0).round() as u64)),
                Span::raw(format!("{}", max_round as u64)),
            ]);
        let y_axis = Axis::default()
            .title(self.spec.y_label)
            .style(Style::default().fg(Color::Gray))
            .bounds([0.0, 100.0])
            .labels(vec![Span::raw("0"), Span::raw("50"), Span::raw("100")]);

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .title(" Parent Isotope Decay Over Time ")
                    .borders(Borders::ALL),
            )
            .x_axis(x_axis)
            .y_axis(y_axis)
            .hidden_legend_constraints((Constraint::Ratio(0, 1), Constraint::Ratio(0, 1)));
        f.render_widget(chart, chunks[0]);

        let controls = Paragraph::new("[r] Rerun  [n] New Experiment  [q/Esc] Quit")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(controls, chunks[1]);
    }

    fn draw_legend(&self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(format!(" {} ", self.spec.legend_title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        let mut items: Vec<ListItem> = Vec::new();
        let mut last_kind: Option<SeriesKind> = None;

        for (idx, series) in self.spec.series.iter().enumerate() {
            // Blank separator between summary curves and sampled trials.
            if last_kind == Some(SeriesKind::Summary) && series.kind == SeriesKind::Trial {
                items.push(ListItem::new(""));
                items.push(ListItem::new(Line::from(Span::styled(
                    "Random Trials",
                    Style::default().fg(Color::Gray),
                ))));
            }
            last_kind = Some(series.kind);

            let color = self.series_color(idx);
            items.push(ListItem::new(Line::from(vec![
                Span::styled("── ", Style::default().fg(color)),
                Span::raw(series.label.clone()),
            ])));
        }

        f.render_widget(List::new(items).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::Series;

    fn spec() -> RenderSpec {
        RenderSpec {
            series: vec![
                Series {
                    label: "Average Decay".into(),
                    points: vec![100.0, 50.0, 0.0],
                    kind: SeriesKind::Summary,
                },
                Series {
                    label: "Trial 3".into(),
                    points: vec![100.0, 0.0],
                    kind: SeriesKind::Trial,
                },
            ],
            x_label: "Roll(s)",
            y_label: "% Parent Isotopes Remaining",
            legend_title: "Summary",
        }
    }

    #[test]
    fn test_points_indexed_by_round() {
        let screen = ChartScreen::new(spec());
        assert_eq!(screen.points[0], vec![(0.0, 100.0), (1.0, 50.0), (2.0, 0.0)]);
        assert_eq!(screen.points[1], vec![(0.0, 100.0), (1.0, 0.0)]);
    }

    #[test]
    fn test_summary_and_trial_colors_differ() {
        let screen = ChartScreen::new(spec());
        assert_eq!(screen.series_color(0), Color::White);
        assert_ne!(screen.series_color(0), screen.series_color(1));
    }
}
