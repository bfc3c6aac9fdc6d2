//! Section routing
//!
//! A [`Selector`] picks exactly one member of a closed enum. The top-level
//! [`SectionRouter`] wraps one for [`SectionId`] and records the enter/exit
//! transition of each switch; section sub-tabs use a bare selector.

use std::time::Duration;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Top-level sections of the deck, in navigation order.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum SectionId {
    Overview,
    Technology,
    ClinicalData,
    AiEngine,
    Monitoring,
    Market,
    Team,
}

impl SectionId {
    pub fn title(&self) -> &'static str {
        match self {
            SectionId::Overview => "Overview",
            SectionId::Technology => "Technology",
            SectionId::ClinicalData => "Clinical Data",
            SectionId::AiEngine => "AI Engine",
            SectionId::Monitoring => "Monitoring",
            SectionId::Market => "Market",
            SectionId::Team => "Team",
        }
    }

    /// 1-based position, matching the number key that selects it.
    pub fn ordinal(&self) -> usize {
        SectionId::iter().position(|id| id == *self).unwrap_or(0) + 1
    }

    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        ordinal.checked_sub(1).and_then(|index| SectionId::iter().nth(index))
    }
}

/// Exactly one active member of a closed set. The initial member is the first.
#[derive(Debug, Clone)]
pub struct Selector<T> {
    items: Vec<T>,
    index: usize,
}

impl<T> Selector<T>
where
    T: IntoEnumIterator + Copy + PartialEq,
{
    pub fn new() -> Self {
        Self {
            items: T::iter().collect(),
            index: 0,
        }
    }

    pub fn current(&self) -> T {
        self.items[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns true if the active member changed.
    pub fn select(&mut self, item: T) -> bool {
        match self.items.iter().position(|candidate| *candidate == item) {
            Some(index) if index != self.index => {
                self.index = index;
                true
            }
            _ => false,
        }
    }

    pub fn next(&mut self) -> T {
        self.index = (self.index + 1) % self.items.len();
        self.current()
    }

    pub fn previous(&mut self) -> T {
        self.index = (self.index + self.items.len() - 1) % self.items.len();
        self.current()
    }
}

impl<T> Default for Selector<T>
where
    T: IntoEnumIterator + Copy + PartialEq,
{
    fn default() -> Self {
        Self::new()
    }
}

/// A switch from one section to another, stamped with scheduler time.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Section whose content is exiting.
    pub from: SectionId,
    /// Section whose content is entering.
    pub to: SectionId,
    pub started_at: Duration,
}

impl Transition {
    pub fn progress(&self, now: Duration, length: Duration) -> f64 {
        if length.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.started_at);
        (elapsed.as_secs_f64() / length.as_secs_f64()).min(1.0)
    }
}

#[derive(Debug)]
pub struct SectionRouter {
    sections: Selector<SectionId>,
    transition: Option<Transition>,
    transition_length: Duration,
}

impl SectionRouter {
    pub fn new(transition_length: Duration) -> Self {
        Self {
            sections: Selector::new(),
            transition: None,
            transition_length,
        }
    }

    pub fn current(&self) -> SectionId {
        self.sections.current()
    }

    /// Activate `id`. Selecting the active section does nothing.
    pub fn select(&mut self, id: SectionId, now: Duration) -> Option<Transition> {
        let from = self.current();
        if !self.sections.select(id) {
            return None;
        }
        Some(self.begin(from, now))
    }

    /// Select by id string. Strings outside the set are ignored.
    pub fn select_str(&mut self, raw: &str, now: Duration) -> Option<Transition> {
        match raw.parse::<SectionId>() {
            Ok(id) => self.select(id, now),
            Err(_) => {
                log::debug!("Ignoring unknown section id {raw:?}");
                None
            }
        }
    }

    pub fn next(&mut self, now: Duration) -> Transition {
        let from = self.current();
        self.sections.next();
        self.begin(from, now)
    }

    pub fn previous(&mut self, now: Duration) -> Transition {
        let from = self.current();
        self.sections.previous();
        self.begin(from, now)
    }

    /// The transition still animating, if any.
    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    pub fn transition_progress(&self, now: Duration) -> f64 {
        self.transition
            .map(|transition| transition.progress(now, self.transition_length))
            .unwrap_or(1.0)
    }

    /// Drop the transition once it has run its course.
    pub fn settle(&mut self, now: Duration) {
        if self.transition_progress(now) >= 1.0 {
            self.transition = None;
        }
    }

    fn begin(&mut self, from: SectionId, now: Duration) -> Transition {
        let transition = Transition {
            from,
            to: self.current(),
            started_at: now,
        };
        self.transition = Some(transition);
        transition
    }
}
