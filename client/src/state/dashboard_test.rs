use super::*;

#[test]
fn default_panels_start_loading_independently() {
    let state = DashboardState::default();
    assert!(state.summary.is_loading());
    assert!(state.charts.is_loading());
    assert!(state.activity.is_loading());
}

#[test]
fn one_failed_panel_leaves_others_intact() {
    let state = DashboardState {
        summary: Loadable::Failed("Not found.".to_owned()),
        charts: Loadable::Ready(ChartData::default()),
        activity: Loadable::Ready(Vec::new()),
    };
    assert_eq!(state.summary.error(), Some("Not found."));
    assert!(state.charts.ready().is_some());
    assert!(state.activity.ready().is_some());
}

#[test]
fn summary_cards_follow_display_order() {
    let summary = DashboardSummary { total_visitors: 120, total_exhibitors: 40, stalls_booked: 12, messages: 7 };
    let cards = summary_cards(&summary);
    let labels: Vec<&str> = cards.iter().map(|c| c.label).collect();
    assert_eq!(labels, vec!["Total Visitors", "Total Exhibitors", "Stalls Booked", "Messages"]);
    let values: Vec<u64> = cards.iter().map(|c| c.value).collect();
    assert_eq!(values, vec![120, 40, 12, 7]);
}

#[test]
fn quick_links_point_at_list_screens() {
    let paths: Vec<&str> = QUICK_LINKS.iter().map(|(_, path)| *path).collect();
    assert_eq!(paths, vec!["/visitors", "/bookings", "/messages"]);
}

#[test]
fn activity_styling_per_kind() {
    assert_eq!(activity_label(ActivityKind::Exhibitor), "Exhibitor");
    assert_eq!(activity_badge_class(ActivityKind::Message), "badge badge--purple");
    assert_eq!(activity_badge_class(ActivityKind::Other), "badge");
}
