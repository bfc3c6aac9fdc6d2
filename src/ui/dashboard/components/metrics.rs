//! Dashboard metrics components
//!
//! Renders live metric gauges

use super::super::utils::ratio_color;
use crate::jitter::{Metric, MetricSnapshot};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge};

fn metric_gauge(metric: &Metric) -> Gauge<'_> {
    // Open-ended metrics have no meaningful fill; show them full and neutral
    let bounded = metric.spec().hi().is_finite();
    let (ratio, color) = if bounded {
        (metric.ratio(), ratio_color(metric.ratio()))
    } else {
        (1.0, Color::LightBlue)
    };

    Gauge::default()
        .block(
            Block::default()
                .title(metric.label.as_str())
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        )
        .gauge_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .ratio(ratio)
        .label(metric.display_value())
}

/// One gauge per metric, stacked vertically.
pub fn render_metric_gauges(f: &mut Frame, area: ratatui::layout::Rect, snapshot: &MetricSnapshot) {
    if snapshot.is_empty() {
        return;
    }
    let constraints: Vec<Constraint> = snapshot
        .iter()
        .map(|_| Constraint::Ratio(1, snapshot.len() as u32))
        .collect();
    let gauge_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (metric, chunk) in snapshot.iter().zip(gauge_chunks.iter()) {
        f.render_widget(metric_gauge(metric), *chunk);
    }
}
