//! Dashboard header component
//!
//! Renders the title, the section tabs and the transition gauge

use super::super::state::DashboardState;
use crate::content::COMPANY;
use crate::router::SectionId;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph, Tabs};
use strum::IntoEnumIterator;

/// Render header with title, section tabs and transition progress.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .split(area);

    let title = Paragraph::new(format!(
        "{} v{}",
        COMPANY.to_uppercase(),
        env!("CARGO_PKG_VERSION")
    ))
    .alignment(Alignment::Center)
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick),
    );
    f.render_widget(title, header_chunks[0]);

    let titles: Vec<Line> = SectionId::iter()
        .map(|id| Line::from(format!("{} {}", id.ordinal(), id.title())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(state.current_section().ordinal() - 1)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("|");
    f.render_widget(tabs, header_chunks[1]);

    let (label, color, ratio) = match state.transition() {
        Some(transition) => (
            format!("{} -> {}", transition.from.title(), transition.to.title()),
            Color::LightBlue,
            state.transition_progress(),
        ),
        None => (
            state.current_section().title().to_uppercase(),
            Color::LightGreen,
            1.0,
        ),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(label);

    f.render_widget(gauge, header_chunks[2]);
}
