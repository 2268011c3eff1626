use super::*;

fn registrant(id: i64, kind: RegistrantKind) -> Registrant {
    Registrant {
        id,
        name: format!("{} {id}", kind.as_str()),
        email: format!("r{id}@expo.test"),
        kind,
        registered_at: Some("2025-03-01".to_owned()),
    }
}

/// Seven visitors (ids 1..=7) followed by four exhibitors (ids 1..=4).
fn loaded() -> RegistrantsState {
    let mut items: Vec<Registrant> = (1..=7).map(|id| registrant(id, RegistrantKind::Visitor)).collect();
    items.extend((1..=4).map(|id| registrant(id, RegistrantKind::Exhibitor)));
    RegistrantsState { items: Loadable::Ready(items), ..RegistrantsState::default() }
}

#[test]
fn all_tab_pages_by_five() {
    let state = loaded();
    let view = state.visible();
    assert_eq!(view.total_matches, 11);
    assert_eq!(view.total_pages, 3);
    assert_eq!(view.rows.len(), 5);
}

#[test]
fn last_page_holds_remainder() {
    let mut state = loaded();
    state.next_page();
    state.next_page();
    let view = state.visible();
    assert_eq!(view.page, 3);
    assert_eq!(view.rows.len(), 1);
    state.next_page();
    assert_eq!(state.query.page, 3);
}

#[test]
fn switching_tab_resets_to_first_page() {
    let mut state = loaded();
    state.next_page();
    assert_eq!(state.query.page, 2);
    state.query.set_category(CategoryFilter::Only(RegistrantKind::Exhibitor));
    let view = state.visible();
    assert_eq!(view.page, 1);
    assert_eq!(view.total_pages, 1);
    assert!(view.rows.iter().all(|r| r.kind == RegistrantKind::Exhibitor));
    assert_eq!(view.rows.len(), 4);
}

#[test]
fn prev_page_stops_at_first() {
    let mut state = loaded();
    state.prev_page();
    assert_eq!(state.query.page, 1);
}

#[test]
fn visitors_tab_spans_two_pages() {
    let mut state = loaded();
    state.query.set_category(CategoryFilter::Only(RegistrantKind::Visitor));
    assert_eq!(state.visible().total_pages, 2);
    state.next_page();
    let ids: Vec<i64> = state.visible().rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![6, 7]);
}

#[test]
fn active_tab_label_tracks_category() {
    let mut state = loaded();
    assert_eq!(state.active_tab_label(), "All");
    state.query.set_category(CategoryFilter::Only(RegistrantKind::Exhibitor));
    assert_eq!(state.active_tab_label(), "Exhibitors");
}

#[test]
fn empty_listing_still_shows_page_one() {
    let state = RegistrantsState { items: Loadable::Ready(Vec::new()), ..RegistrantsState::default() };
    let view = state.visible();
    assert_eq!(view.page, 1);
    assert_eq!(view.total_pages, 0);
    assert!(view.is_empty());
}

#[test]
fn other_kind_rows_only_show_under_all() {
    let mut state = loaded();
    if let Loadable::Ready(items) = &mut state.items {
        items.push(registrant(8, RegistrantKind::Other));
    }
    assert_eq!(state.visible().total_matches, 12);
    state.query.set_category(CategoryFilter::Only(RegistrantKind::Visitor));
    assert!(state.visible().rows.iter().all(|r| r.kind == RegistrantKind::Visitor));
    state.query.set_category(CategoryFilter::Only(RegistrantKind::Exhibitor));
    assert_eq!(state.visible().total_matches, 4);
}
