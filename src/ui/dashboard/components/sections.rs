//! Section content panels
//!
//! One renderer per section. Live sections read the mounted view; the rest
//! only show static content.

use super::super::state::DashboardState;
use super::super::utils::{alert_color, panel};
use super::metrics::render_metric_gauges;
use crate::content::{
    ADVANTAGES, ADVISORS, AI_STATIC_STATS, ALERTS, AWARD, CANCER_TYPES, Dataset, EFFICACY,
    HERO_STATS, INVESTORS, MarketMetric, PARTNERS, PHASES, SIDE_EFFECTS, Stat, TAGLINE, TEAM,
    Technology,
};
use crate::router::{SectionId, Selector};
use crate::views::{AiEngineView, MonitoringView, SectionView, TechDemoView};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Gauge, Paragraph, Tabs, Wrap};
use std::time::Duration;

pub fn render_section(f: &mut Frame, area: Rect, state: &DashboardState) {
    match state.view() {
        SectionView::Static(SectionId::Team) => render_team(f, area),
        SectionView::Static(SectionId::Overview) => render_overview(f, area),
        SectionView::Static(id) => {
            let msg = Paragraph::new(format!("{} is unavailable", id.title()))
                .block(panel(id.title()));
            f.render_widget(msg, area);
        }
        SectionView::Technology(view) => render_technology(f, area, view),
        SectionView::ClinicalData(tab) => render_clinical(f, area, tab),
        SectionView::AiEngine(view) => render_ai_engine(f, area, view, state.now()),
        SectionView::Monitoring(view) => render_monitoring(f, area, view),
        SectionView::Market(tab) => render_market(f, area, tab),
    }
}

fn bold(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn bullet(text: &str) -> Line<'_> {
    Line::from(vec![
        Span::styled("• ", Style::default().fg(Color::Cyan)),
        Span::raw(text),
    ])
}

fn stat_lines(stats: &[Stat]) -> Vec<Line<'static>> {
    stats
        .iter()
        .map(|stat| {
            Line::from(vec![
                Span::styled(format!("{:>12} ", stat.value), bold(Color::LightCyan)),
                Span::styled(stat.label, Style::default().fg(Color::Gray)),
            ])
        })
        .collect()
}

/// Tab strip for a section's sub-selector, above the panel content.
fn split_tabs(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Fill(1)])
        .split(area);
    (chunks[0], chunks[1])
}

fn tabs<'a>(titles: Vec<&'a str>, selected: usize) -> Tabs<'a> {
    Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(bold(Color::LightCyan))
        .divider("|")
}

fn render_overview(f: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(TAGLINE, bold(Color::White))),
        Line::from(Span::styled(AWARD, Style::default().fg(Color::Yellow))),
        Line::from(""),
    ];
    lines.extend(stat_lines(&HERO_STATS));

    let paragraph = Paragraph::new(lines)
        .block(panel("OVERVIEW"))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_technology(f: &mut Frame, area: Rect, view: &TechDemoView) {
    let (tab_area, body) = split_tabs(area);
    let titles = view.tab.items().iter().map(Technology::title).collect();
    f.render_widget(tabs(titles, view.tab.index()), tab_area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(body);

    let technology = view.tab.current();
    let features: Vec<Line> = technology.features().into_iter().map(bullet).collect();
    f.render_widget(
        Paragraph::new(features)
            .block(panel(technology.title()))
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    let current = view.player.phase();
    let phases: Vec<Line> = PHASES
        .iter()
        .enumerate()
        .map(|(index, phase)| {
            let style = if index == current {
                bold(Color::LightGreen)
            } else if index < current {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(vec![
                Span::styled(format!("{}. {:<20}", index + 1, phase.name), style),
                Span::styled(phase.description, Style::default().fg(Color::Gray)),
            ])
        })
        .collect();
    let title = if view.player.is_playing() {
        "DELIVERY DEMO (PLAYING)"
    } else {
        "DELIVERY DEMO (PAUSED)"
    };
    f.render_widget(
        Paragraph::new(phases)
            .block(panel(title))
            .wrap(Wrap { trim: true }),
        chunks[1],
    );
}

fn render_clinical(f: &mut Frame, area: Rect, tab: &Selector<Dataset>) {
    let (tab_area, body) = split_tabs(area);
    let titles = tab.items().iter().map(Dataset::title).collect();
    f.render_widget(tabs(titles, tab.index()), tab_area);

    let dataset = tab.current();
    let bars: Vec<Bar> = match dataset {
        Dataset::Efficacy => EFFICACY
            .iter()
            .flat_map(|point| {
                [
                    Bar::default()
                        .label(Line::from(point.month))
                        .value(point.tumor_target.round() as u64)
                        .text_value(format!("{:.1}", point.tumor_target))
                        .style(Style::default().fg(Color::LightCyan)),
                    Bar::default()
                        .value(point.traditional.round() as u64)
                        .text_value(format!("{:.0}", point.traditional))
                        .style(Style::default().fg(Color::DarkGray)),
                ]
            })
            .collect(),
        Dataset::CancerTypes => CANCER_TYPES
            .iter()
            .map(|cancer| {
                Bar::default()
                    .label(Line::from(cancer.name))
                    .value(cancer.efficacy.round() as u64)
                    .text_value(format!("{:.1}%", cancer.efficacy))
                    .style(Style::default().fg(Color::LightGreen))
            })
            .collect(),
        Dataset::SideEffects => SIDE_EFFECTS
            .iter()
            .map(|effect| {
                Bar::default()
                    .label(Line::from(effect.name))
                    .value(effect.percent)
                    .text_value(format!("{}%", effect.percent))
                    .style(Style::default().fg(Color::Yellow))
            })
            .collect(),
    };

    let title = match dataset {
        Dataset::CancerTypes => {
            let patients: u64 = CANCER_TYPES.iter().map(|cancer| cancer.patients).sum();
            format!("{} ({} patients)", dataset.title(), patients)
        }
        _ => dataset.title().to_string(),
    };
    let chart = BarChart::default()
        .block(panel(&title))
        .data(BarGroup::default().bars(&bars))
        .bar_width(9)
        .bar_gap(1)
        .max(100);
    f.render_widget(chart, body);
}

fn render_ai_engine(f: &mut Frame, area: Rect, view: &AiEngineView, now: Duration) {
    let (tab_area, body) = split_tabs(area);
    let titles = view.tab.items().iter().map(|model| model.title()).collect();
    f.render_widget(tabs(titles, view.tab.index()), tab_area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(body);

    let model = view.tab.current();
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Accuracy: ", Style::default().fg(Color::Gray)),
            Span::styled(model.accuracy(), bold(Color::LightGreen)),
        ]),
        Line::from(Span::styled(model.description(), Style::default().fg(Color::White))),
        Line::from(""),
    ];
    lines.extend(model.features().into_iter().map(bullet));
    lines.push(Line::from(""));
    lines.extend(stat_lines(&AI_STATIC_STATS));
    f.render_widget(
        Paragraph::new(lines)
            .block(panel(model.title()))
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(3)])
        .split(chunks[1]);

    render_metric_gauges(f, right[0], view.live.snapshot());

    let (label, ratio, color) = if view.analysis.is_processing() {
        (
            "Processing...".to_string(),
            view.analysis.progress(now),
            Color::LightMagenta,
        )
    } else {
        ("Ready [Enter] Run Live Analysis".to_string(), 0.0, Color::Gray)
    };
    let gauge = Gauge::default()
        .block(panel("ANALYSIS").padding(ratatui::widgets::Padding::ZERO))
        .gauge_style(bold(color))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(label);
    f.render_widget(gauge, right[1]);
}

fn render_monitoring(f: &mut Frame, area: Rect, view: &MonitoringView) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_metric_gauges(f, chunks[0], view.vitals.snapshot());

    let alerts: Vec<Line> = ALERTS
        .iter()
        .map(|alert| {
            Line::from(vec![
                Span::styled(format!("{:<8}", alert.kind), bold(alert_color(alert.kind))),
                Span::raw(format!("{} ", alert.message)),
                Span::styled(alert.time, Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();
    f.render_widget(
        Paragraph::new(alerts)
            .block(panel("ALERTS"))
            .wrap(Wrap { trim: true }),
        chunks[1],
    );
}

fn render_market(f: &mut Frame, area: Rect, tab: &Selector<MarketMetric>) {
    let (tab_area, body) = split_tabs(area);
    let titles = tab.items().iter().map(|metric| metric.figure().title).collect();
    f.render_widget(tabs(titles, tab.index()), tab_area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(body);

    let figure = tab.current().figure();
    let mut lines = vec![
        Line::from(vec![
            Span::styled(figure.value, bold(Color::LightCyan)),
            Span::raw("  "),
            Span::styled(figure.growth, Style::default().fg(Color::LightGreen)),
        ]),
        Line::from(Span::styled(figure.description, Style::default().fg(Color::Gray))),
        Line::from(""),
    ];
    lines.extend(figure.breakdown.iter().map(|segment| {
        Line::from(vec![
            Span::raw(format!("{:<22}", segment.name)),
            Span::styled(format!("{:>6} ", segment.value), bold(Color::White)),
            Span::styled(
                format!("{:>3}%", segment.percent),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    }));
    f.render_widget(
        Paragraph::new(lines)
            .block(panel(figure.title))
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    let mut side: Vec<Line> = ADVANTAGES
        .iter()
        .map(|(title, detail)| {
            Line::from(vec![
                Span::styled(format!("{title}: "), bold(Color::LightGreen)),
                Span::raw(*detail),
            ])
        })
        .collect();
    side.push(Line::from(""));
    side.extend(PARTNERS.iter().map(|(name, kind)| {
        Line::from(vec![
            Span::styled(format!("{name} "), bold(Color::White)),
            Span::styled(*kind, Style::default().fg(Color::DarkGray)),
        ])
    }));
    f.render_widget(
        Paragraph::new(side)
            .block(panel("ADVANTAGES & PARTNERS"))
            .wrap(Wrap { trim: true }),
        chunks[1],
    );
}

fn render_team(f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let mut members = Vec::new();
    for member in TEAM.iter() {
        members.push(Line::from(vec![
            Span::styled(member.name, bold(Color::LightCyan)),
            Span::styled(format!("  {}", member.role), Style::default().fg(Color::White)),
        ]));
        members.push(Line::from(Span::styled(
            format!("  {} | {}", member.expertise, member.education),
            Style::default().fg(Color::Gray),
        )));
    }
    f.render_widget(
        Paragraph::new(members)
            .block(panel("LEADERSHIP"))
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    let mut backers = vec![Line::from(Span::styled("Advisors", bold(Color::Yellow)))];
    backers.extend(ADVISORS.iter().map(|(name, role, org)| {
        Line::from(format!("{name}, {role} ({org})"))
    }));
    backers.push(Line::from(""));
    backers.push(Line::from(Span::styled("Investors", bold(Color::Yellow))));
    backers.extend(INVESTORS.iter().map(|(name, amount, kind)| {
        Line::from(vec![
            Span::styled(format!("{name} "), Style::default().fg(Color::White)),
            Span::styled(format!("{amount} "), bold(Color::LightGreen)),
            Span::styled(*kind, Style::default().fg(Color::DarkGray)),
        ])
    }));
    f.render_widget(
        Paragraph::new(backers)
            .block(panel("ADVISORS & INVESTORS"))
            .wrap(Wrap { trim: true }),
        chunks[1],
    );
}
