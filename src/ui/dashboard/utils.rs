//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::content::AlertKind;
use crate::events::{EventType, Source};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::{Block, BorderType, Borders, Padding};
use std::time::Duration;

/// Get a ratatui color for an event source
pub fn get_source_color(source: &Source) -> Color {
    match source {
        Source::Router => Color::Cyan,
        Source::Analysis => Color::LightMagenta,
        Source::Player => Color::Yellow,
        Source::Deck => Color::Gray,
    }
}

pub fn status_icon(event_type: EventType) -> &'static str {
    match event_type {
        EventType::Success => "✅",
        EventType::Error => "❌",
        EventType::Warning => "⚠️",
        EventType::Info | EventType::StateChange => "•",
    }
}

pub fn alert_color(kind: AlertKind) -> Color {
    match kind {
        AlertKind::Success => Color::Green,
        AlertKind::Info => Color::LightBlue,
        AlertKind::Warning => Color::Yellow,
    }
}

/// Green in the upper part of a gauge, yellow in the middle, red at the bottom.
pub fn ratio_color(ratio: f64) -> Color {
    if ratio >= 0.66 {
        Color::LightGreen
    } else if ratio >= 0.33 {
        Color::Yellow
    } else {
        Color::LightRed
    }
}

/// Rounded, padded, cyan-bordered panel block used by every component
pub fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1))
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract MM-DD HH:MM from "YYYY-MM-DD HH:MM:SS"
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

pub fn format_uptime(uptime: Duration) -> String {
    let secs = uptime.as_secs();
    if secs >= 3600 {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
