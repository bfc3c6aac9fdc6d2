//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::events::Event;
use crate::jitter::MetricSnapshot;
use crate::ui::dashboard::DashboardState;
use serde::Serialize;
use std::error::Error;

/// Headless output options
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessOptions {
    /// Stop after this many ticks
    pub ticks: Option<u64>,
    /// One JSON object per line instead of human readable text
    pub json: bool,
}

/// One line of `--json` output
#[derive(Debug, Serialize)]
struct TickRecord<'a> {
    tick: u64,
    section: &'a str,
    elapsed_ms: u128,
    metrics: Option<&'a MetricSnapshot>,
    events: Vec<String>,
}

fn format_tick(tick: u64, state: &DashboardState) -> String {
    match state.metric_snapshot() {
        Some(snapshot) => {
            let values: Vec<String> = snapshot
                .iter()
                .map(|metric| format!("{}: {}", metric.label, metric.display_value()))
                .collect();
            format!("[tick {}] {}", tick, values.join(" | "))
        }
        None => format!(
            "[tick {}] {} has no live metrics",
            tick,
            state.current_section().title()
        ),
    }
}

fn record_json(tick: u64, state: &DashboardState, events: &[&Event]) -> serde_json::Result<String> {
    let section = state.current_section();
    let record = TickRecord {
        tick,
        section: section.as_ref(),
        elapsed_ms: state.now().as_millis(),
        metrics: state.metric_snapshot(),
        events: events.iter().map(|event| event.msg.clone()).collect(),
    };
    serde_json::to_string(&record)
}

/// Runs the deck without a terminal UI
///
/// Every tick interval the deck advances by one interval of scheduler time
/// and the live metrics of the current section are printed.
pub async fn run_headless_mode(
    mut session: SessionData,
    options: HeadlessOptions,
) -> Result<(), Box<dyn Error>> {
    let tick_interval = session.state.config().tick_interval();
    if !options.json {
        print_session_starting("headless", session.state.current_section());
    }

    // Trigger shutdown on Ctrl+C
    let shutdown_sender_clone = session.shutdown_sender.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_sender_clone.send(());
        }
    });
    let mut shutdown_receiver = session.shutdown_sender.subscribe();

    let mut interval = tokio::time::interval(tick_interval);
    // The first tick completes immediately
    interval.tick().await;

    let mut tick: u64 = 0;
    loop {
        if options.ticks.is_some_and(|max| tick >= max) {
            break;
        }
        tokio::select! {
            _ = interval.tick() => {
                tick += 1;
                let state = &mut session.state;
                let appended = state.update(tick_interval);
                let events: Vec<&Event> = state
                    .activity_logs
                    .iter()
                    .rev()
                    .take(appended)
                    .rev()
                    .filter(|event| event.should_display())
                    .collect();

                if options.json {
                    println!("{}", record_json(tick, state, &events)?);
                } else {
                    for event in events {
                        println!("{}", event);
                    }
                    println!("{}", format_tick(tick, state));
                }
            }
            _ = shutdown_receiver.recv() => {
                break;
            }
        }
    }

    session.state.shutdown();
    if !options.json {
        print_session_shutdown();
        print_session_exit_success();
    }
    Ok(())
}
