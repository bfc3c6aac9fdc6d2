//! Dashboard info panel component
//!
//! Renders deck status: section, sub-tab, uptime and live timers

use super::super::state::DashboardState;
use super::super::utils::{format_uptime, panel};
use crate::jitter::{AnalysisState, LiveMetrics, LoopState};
use crate::views::SectionView;

use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

/// Title of the mounted view's sub-tab, if it has one.
pub fn active_tab(view: &SectionView) -> Option<&'static str> {
    match view {
        SectionView::Technology(view) => Some(view.tab.current().title()),
        SectionView::ClinicalData(tab) => Some(tab.current().title()),
        SectionView::AiEngine(view) => Some(view.tab.current().title()),
        SectionView::Market(tab) => Some(tab.current().figure().title),
        SectionView::Static(_) | SectionView::Monitoring(_) => None,
    }
}

fn feed_status(live: &LiveMetrics) -> String {
    let ticker = live.ticker();
    match ticker.state() {
        LoopState::Running(_) => {
            format!("Feed: live, every {:.1}s", ticker.interval().as_secs_f64())
        }
        LoopState::Idle => "Feed: stopped".to_string(),
    }
}

fn line(text: String, color: Color) -> Line<'static> {
    Line::from(vec![Span::styled(text, Style::default().fg(color))])
}

pub fn render_info_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let section = state.current_section();
    let mut info_lines = vec![line(
        format!("Section: {} ({})", section.title(), section),
        Color::LightBlue,
    )];

    if let Some(tab) = active_tab(state.view()) {
        info_lines.push(line(format!("View: {}", tab), Color::Cyan));
    }

    match state.view() {
        SectionView::AiEngine(view) => {
            info_lines.push(line(feed_status(&view.live), Color::LightMagenta));
            let analysis = match view.analysis.state() {
                AnalysisState::Idle => "Analysis: ready".to_string(),
                AnalysisState::Processing { started_at, .. } => {
                    format!("Analysis: started at {}", format_uptime(started_at))
                }
            };
            info_lines.push(line(analysis, Color::LightMagenta));
        }
        SectionView::Monitoring(view) => {
            info_lines.push(line(feed_status(&view.vitals), Color::LightMagenta));
        }
        _ => {}
    }

    info_lines.push(line(
        format!("Uptime: {}", format_uptime(state.now())),
        Color::LightGreen,
    ));
    info_lines.push(line(
        format!("Live timers: {}", state.pending_timers()),
        Color::LightYellow,
    ));
    info_lines.push(line(
        format!("Version: {}", env!("CARGO_PKG_VERSION")),
        Color::Gray,
    ));

    let info_paragraph = Paragraph::new(info_lines)
        .block(panel("DECK"))
        .wrap(Wrap { trim: true });
    f.render_widget(info_paragraph, area);
}
