//! Dashboard state management
//!
//! `DashboardState` is the single owner of the router, the scheduler, the
//! random source and the mounted section view. Every mutation goes through it.

use crate::config::Config;
use crate::consts::deck_consts::MAX_ACTIVITY_LOGS;
use crate::events::{Event, Source};
use crate::jitter::{DeltaSource, MetricSnapshot};
use crate::router::{SectionId, SectionRouter, Transition};
use crate::scheduler::Scheduler;
use crate::views::{SectionView, ViewError};

use std::collections::VecDeque;
use std::time::Duration;
use strum::IntoEnumIterator;

pub struct DashboardState {
    router: SectionRouter,
    scheduler: Scheduler,
    source: Box<dyn DeltaSource>,
    view: SectionView,
    config: Config,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<Event>,
    /// Activity logs for display (last 100 events)
    pub activity_logs: VecDeque<Event>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,
}

impl DashboardState {
    /// Build the deck on its first section. Every section is mounted once
    /// against a scratch scheduler so a bad config fails here rather than on
    /// the first switch.
    pub fn new(config: Config, source: Box<dyn DeltaSource>) -> Result<Self, ViewError> {
        let mut scratch = Scheduler::new();
        for id in SectionId::iter() {
            SectionView::mount(id, &mut scratch, &config)?;
        }

        let router = SectionRouter::new(config.transition());
        let mut scheduler = Scheduler::new();
        let view = SectionView::mount(router.current(), &mut scheduler, &config)?;
        let with_background_color = config.with_background_color;

        Ok(Self {
            router,
            scheduler,
            source,
            view,
            config,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            with_background_color,
            tick: 0,
        })
    }

    pub fn current_section(&self) -> SectionId {
        self.router.current()
    }

    pub fn view(&self) -> &SectionView {
        &self.view
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Scheduler time since the deck started.
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Number of timers currently scheduled.
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    pub fn transition(&self) -> Option<&Transition> {
        self.router.transition()
    }

    pub fn transition_progress(&self) -> f64 {
        self.router.transition_progress(self.scheduler.now())
    }

    /// Live metrics of the mounted view; `None` for static sections.
    pub fn metric_snapshot(&self) -> Option<&MetricSnapshot> {
        self.view.metric_snapshot()
    }

    /// Make `id` the active section. Returns false when it already was.
    pub fn select_section(&mut self, id: SectionId) -> bool {
        let now = self.scheduler.now();
        match self.router.select(id, now) {
            Some(transition) => {
                self.enter(transition);
                true
            }
            None => false,
        }
    }

    /// Select by id string. Unknown ids leave the deck untouched.
    pub fn select_section_str(&mut self, raw: &str) -> bool {
        let now = self.scheduler.now();
        match self.router.select_str(raw, now) {
            Some(transition) => {
                self.enter(transition);
                true
            }
            None => false,
        }
    }

    pub fn next_section(&mut self) {
        let transition = self.router.next(self.scheduler.now());
        self.enter(transition);
    }

    pub fn previous_section(&mut self) {
        let transition = self.router.previous(self.scheduler.now());
        self.enter(transition);
    }

    /// Tear down the outgoing view and mount the incoming one.
    fn enter(&mut self, transition: Transition) {
        self.view.teardown(&mut self.scheduler);
        self.view = match SectionView::mount(transition.to, &mut self.scheduler, &self.config) {
            Ok(view) => view,
            Err(e) => {
                self.add_event(Event::error(
                    Source::Deck,
                    format!("Failed to load {}: {}", transition.to.title(), e),
                ));
                SectionView::Static(transition.to)
            }
        };
        self.add_event(Event::section_entered(
            self.view.id(),
            format!("{} -> {}", transition.from.title(), transition.to.title()),
        ));
    }

    /// Tear everything down. No timer survives.
    pub fn shutdown(&mut self) {
        self.view.teardown(&mut self.scheduler);
        self.scheduler.clear();
    }

    pub(super) fn view_mut(&mut self) -> (&mut SectionView, &mut Scheduler) {
        (&mut self.view, &mut self.scheduler)
    }

    pub(super) fn dispatch_timers(&mut self, elapsed: Duration) -> Vec<Event> {
        let fired = self.scheduler.advance(elapsed);
        fired
            .into_iter()
            .filter_map(|id| self.view.on_timer(id, self.source.as_mut()))
            .collect()
    }

    pub(super) fn settle_router(&mut self) {
        self.router.settle(self.scheduler.now());
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: Event) {
        self.pending_events.push_back(event);
    }
}
