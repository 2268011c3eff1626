use super::*;

// =============================================================
// Bookings
// =============================================================

#[test]
fn booking_status_parse_is_case_insensitive() {
    assert_eq!(BookingStatus::parse("pending"), Some(BookingStatus::Pending));
    assert_eq!(BookingStatus::parse("BOOKED"), Some(BookingStatus::Booked));
    assert_eq!(BookingStatus::parse(" Rejected "), Some(BookingStatus::Rejected));
    assert_eq!(BookingStatus::parse("cancelled"), None);
}

#[test]
fn booking_decodes_nulls_and_lowercase_status() {
    let raw = serde_json::json!({
        "id": 7,
        "full_name": "Asha Rao",
        "email": "asha@example.com",
        "phone": null,
        "company": "Rao Tools",
        "status": "booked",
        "created_at": "2025-04-10T09:30:00.000000Z"
    });
    let booking: Booking = serde_json::from_value(raw).unwrap();
    assert_eq!(booking.id, 7);
    assert_eq!(booking.phone, "");
    assert_eq!(booking.street, "");
    assert_eq!(booking.status, BookingStatus::Booked);
    assert_eq!(booking.created_at.as_deref(), Some("2025-04-10T09:30:00.000000Z"));
}

#[test]
fn booking_unknown_or_missing_status_reads_as_pending() {
    let unknown: Booking = serde_json::from_value(serde_json::json!({ "id": 1, "status": "hold" })).unwrap();
    assert_eq!(unknown.status, BookingStatus::Pending);
    let missing: Booking = serde_json::from_value(serde_json::json!({ "id": 2 })).unwrap();
    assert_eq!(missing.status, BookingStatus::Pending);
}

#[test]
fn status_update_serializes_capitalized_status() {
    let body = serde_json::to_value(StatusUpdate { status: BookingStatus::Booked }).unwrap();
    assert_eq!(body, serde_json::json!({ "status": "Booked" }));
}

// =============================================================
// Registrants
// =============================================================

#[test]
fn registrant_reads_type_and_camel_case_timestamp() {
    let raw = r#"{"id":3,"name":"Ben","email":"ben@example.com","type":"Exhibitor","registeredAt":"2025-03-01"}"#;
    let registrant: Registrant = serde_json::from_str(raw).unwrap();
    assert_eq!(registrant.kind, RegistrantKind::Exhibitor);
    assert_eq!(registrant.registered_at.as_deref(), Some("2025-03-01"));
    assert_eq!(registrant.row_key(), "Exhibitor-3");
}

#[test]
fn registrant_kind_is_case_insensitive() {
    let raw = r#"[
        {"id":1,"name":"Ana","email":"a@example.com","type":"exhibitor"},
        {"id":2,"name":"Raj","email":"r@example.com","type":" VISITOR "}
    ]"#;
    let rows: Vec<Registrant> = serde_json::from_str(raw).unwrap();
    assert_eq!(rows[0].kind, RegistrantKind::Exhibitor);
    assert_eq!(rows[1].kind, RegistrantKind::Visitor);
}

#[test]
fn unknown_or_missing_registrant_kind_falls_back_to_other() {
    let raw = r#"[
        {"id":1,"name":"Ana","email":"a@example.com","type":"Speaker"},
        {"id":2,"name":"Raj","email":"r@example.com","type":null},
        {"id":3,"name":"Lin","email":"l@example.com"},
        {"id":4,"name":"Bo","email":"b@example.com","type":"Visitor"}
    ]"#;
    let rows: Vec<Registrant> = serde_json::from_str(raw).unwrap();
    let kinds: Vec<RegistrantKind> = rows.iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![RegistrantKind::Other, RegistrantKind::Other, RegistrantKind::Other, RegistrantKind::Visitor]
    );
    assert_eq!(rows[0].row_key(), "Other-1");
}

#[test]
fn registrant_row_keys_differ_across_kinds_with_same_id() {
    let visitor = Registrant {
        id: 1,
        name: "A".to_owned(),
        email: String::new(),
        kind: RegistrantKind::Visitor,
        registered_at: None,
    };
    let exhibitor = Registrant { kind: RegistrantKind::Exhibitor, ..visitor.clone() };
    assert_ne!(visitor.row_key(), exhibitor.row_key());
}

// =============================================================
// Contact messages
// =============================================================

#[test]
fn contact_message_full_name_trims_missing_parts() {
    let raw = serde_json::json!({ "id": 1, "first_name": "Mia", "last_name": null, "email": "m@example.com" });
    let msg: ContactMessage = serde_json::from_value(raw).unwrap();
    assert_eq!(msg.full_name(), "Mia");
    assert_eq!(msg.updated_at, None);
}

// =============================================================
// Aggregates
// =============================================================

#[test]
fn summary_missing_counts_default_to_zero() {
    let summary: DashboardSummary = serde_json::from_str(r#"{"total_visitors":12}"#).unwrap();
    assert_eq!(summary.total_visitors, 12);
    assert_eq!(summary.total_exhibitors, 0);
    assert_eq!(summary.messages, 0);
}

#[test]
fn activity_unknown_type_maps_to_other() {
    let raw = r#"[{"name":"A","type":"Visitor","date":"today"},{"name":"B","type":"Booking","date":"today"}]"#;
    let rows: Vec<Activity> = serde_json::from_str(raw).unwrap();
    assert_eq!(rows[0].kind, ActivityKind::Visitor);
    assert_eq!(rows[1].kind, ActivityKind::Other);
}

#[test]
fn chart_data_reads_pie_and_bar_series() {
    let raw = r#"{"pie":[{"name":"Visitors","value":30},{"name":"Exhibitors","value":10}],"bar":[{"date":"2025-04-01","stalls":4}]}"#;
    let charts: ChartData = serde_json::from_str(raw).unwrap();
    assert_eq!(charts.pie.len(), 2);
    assert!((charts.pie[0].value - 30.0).abs() < f64::EPSILON);
    assert_eq!(charts.bar[0].date, "2025-04-01");
}

// =============================================================
// Auth + media
// =============================================================

#[test]
fn login_response_accepts_token_aliases() {
    let a: LoginResponse = serde_json::from_str(r#"{"token":"t1"}"#).unwrap();
    let b: LoginResponse = serde_json::from_str(r#"{"access_token":"t2","token_type":"Bearer"}"#).unwrap();
    assert_eq!(a.token, "t1");
    assert_eq!(b.token, "t2");
}

#[test]
fn media_kind_from_mime_accepts_only_images_and_videos() {
    assert_eq!(MediaKind::from_mime("image/png"), Some(MediaKind::Image));
    assert_eq!(MediaKind::from_mime("video/mp4"), Some(MediaKind::Video));
    assert_eq!(MediaKind::from_mime("application/pdf"), None);
    assert_eq!(MediaKind::from_mime(""), None);
}
