//! Dashboard main renderer

use super::components::{footer, header, info_panel, logs, sections};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
        .split(main_chunks[1]);

    sections::render_section(f, content_chunks[0], state);

    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(11), Constraint::Fill(1)])
        .split(content_chunks[1]);

    info_panel::render_info_panel(f, side_chunks[0], state);
    logs::render_logs_panel(f, side_chunks[1], state);
    footer::render_footer(f, main_chunks[2], state.current_section());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::jitter::RngDeltaSource;
    use crate::router::SectionId;
    use crossterm::event::KeyCode;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Duration;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_section_renders() {
        let mut state =
            DashboardState::new(Config::default(), Box::new(RngDeltaSource::seeded(3))).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();

        for id in SectionId::iter() {
            state.select_section(id);
            state.update(Duration::from_millis(2000));
            terminal.draw(|f| render_dashboard(f, &state)).unwrap();

            let buffer = terminal.backend().buffer();
            let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
            assert!(text.contains("ACTIVITY LOG"), "{id}");
        }
    }

    #[test]
    fn test_cancer_type_chart_shows_patient_total() {
        let mut state =
            DashboardState::new(Config::default(), Box::new(RngDeltaSource::seeded(3))).unwrap();
        state.select_section(SectionId::ClinicalData);
        state.handle_key(KeyCode::Char(']'));
        let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();
        terminal.draw(|f| render_dashboard(f, &state)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Efficacy by Cancer Type (4050 patients)"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let state =
            DashboardState::new(Config::default(), Box::new(RngDeltaSource::seeded(3))).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
        terminal.draw(|f| render_dashboard(f, &state)).unwrap();
    }
}
