//! Event System
//!
//! Types and implementations for deck events and logging

use crate::logging::{LogLevel, should_log_with_env};
use crate::router::SectionId;
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Source {
    /// Section switches.
    Router,
    /// The live analysis run on the AI engine section.
    Analysis,
    /// Technology demo phase player.
    Player,
    /// Deck lifecycle and configuration.
    Deck,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Info,
    Warning,
    Error,
    /// A section was entered. Not displayed in the activity log.
    StateChange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// Section entered, for state change events
    pub section: Option<SectionId>,
}

impl Event {
    fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            section: None,
        }
    }

    pub fn section_entered(section: SectionId, msg: String) -> Self {
        Self {
            section: Some(section),
            ..Self::new(Source::Router, msg, EventType::StateChange, LogLevel::Debug)
        }
    }

    pub fn with_level(
        source: Source,
        msg: impl Into<String>,
        event_type: EventType,
        log_level: LogLevel,
    ) -> Self {
        Self::new(source, msg.into(), event_type, log_level)
    }

    pub fn info(source: Source, msg: impl Into<String>) -> Self {
        Self::new(source, msg.into(), EventType::Info, LogLevel::Info)
    }

    pub fn success(source: Source, msg: impl Into<String>) -> Self {
        Self::new(source, msg.into(), EventType::Success, LogLevel::Info)
    }

    pub fn warning(source: Source, msg: impl Into<String>) -> Self {
        Self::new(source, msg.into(), EventType::Warning, LogLevel::Warn)
    }

    pub fn error(source: Source, msg: impl Into<String>) -> Self {
        Self::new(source, msg.into(), EventType::Error, LogLevel::Error)
    }

    pub fn should_display(&self) -> bool {
        // StateChange events drive the header, not the log
        if self.event_type == EventType::StateChange {
            return false;
        }
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}
