//! Dashboard footer component
//!
//! Renders the key hints for the active section

use crate::router::SectionId;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

fn section_hints(section: SectionId) -> &'static str {
    match section {
        SectionId::Technology => " | [ ] Feature | [Space] Play/Pause | [R] Reset",
        SectionId::ClinicalData => " | [ ] Dataset",
        SectionId::AiEngine => " | [ ] Model | [Enter] Run Live Analysis",
        SectionId::Market => " | [ ] Metric",
        SectionId::Overview | SectionId::Monitoring | SectionId::Team => "",
    }
}

pub fn footer_text(section: SectionId) -> String {
    format!(
        "[Q] Quit | [1-7] Section | [Tab] Next{}",
        section_hints(section)
    )
}

pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, section: SectionId) {
    let footer = Paragraph::new(footer_text(section))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
