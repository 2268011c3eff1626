//! Analytics screen state.
//!
//! The summary, chart, and activity panels are fetched independently and each
//! keeps its own `Loadable`, so a failing endpoint only blanks its own panel.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use super::loadable::Loadable;
use crate::net::types::{Activity, ActivityKind, ChartData, DashboardSummary};

#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub summary: Loadable<DashboardSummary>,
    pub charts: Loadable<ChartData>,
    pub activity: Loadable<Vec<Activity>>,
}

/// One headline card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SummaryCard {
    pub label: &'static str,
    pub value: u64,
    /// CSS modifier for the card accent.
    pub tone: &'static str,
}

pub fn summary_cards(summary: &DashboardSummary) -> [SummaryCard; 4] {
    [
        SummaryCard { label: "Total Visitors", value: summary.total_visitors, tone: "blue" },
        SummaryCard { label: "Total Exhibitors", value: summary.total_exhibitors, tone: "green" },
        SummaryCard { label: "Stalls Booked", value: summary.stalls_booked, tone: "amber" },
        SummaryCard { label: "Messages", value: summary.messages, tone: "purple" },
    ]
}

/// Quick-access shortcuts below the activity table.
pub const QUICK_LINKS: [(&str, &str); 3] = [
    ("Manage Visitors", "/visitors"),
    ("Stall Bookings", "/bookings"),
    ("View Messages", "/messages"),
];

pub fn activity_label(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Visitor => "Visitor",
        ActivityKind::Exhibitor => "Exhibitor",
        ActivityKind::Message => "Message",
        ActivityKind::Other => "Other",
    }
}

pub fn activity_badge_class(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Visitor => "badge badge--blue",
        ActivityKind::Exhibitor => "badge badge--green",
        ActivityKind::Message => "badge badge--purple",
        ActivityKind::Other => "badge",
    }
}
