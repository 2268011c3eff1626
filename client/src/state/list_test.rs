use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Color {
    Red,
    Blue,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Row {
    id: u32,
    name: &'static str,
    email: &'static str,
    color: Color,
    date: Option<&'static str>,
}

impl Listable for Row {
    type Category = Color;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name, self.email]
    }

    fn category(&self) -> Color {
        self.color
    }

    fn date_key(&self) -> Option<&str> {
        self.date
    }
}

fn row(id: u32, name: &'static str, color: Color, date: Option<&'static str>) -> Row {
    Row { id, name, email: "", color, date }
}

fn sample() -> Vec<Row> {
    vec![
        Row { id: 1, name: "Alice", email: "alice@expo.test", color: Color::Red, date: Some("2025-04-10") },
        Row { id: 2, name: "Bob", email: "bob@expo.test", color: Color::Blue, date: Some("2025-04-08") },
        Row { id: 3, name: "Carla", email: "carla@mail.test", color: Color::Red, date: Some("2025-04-09 10:00:00") },
        Row { id: 4, name: "Dev", email: "dev@expo.test", color: Color::Blue, date: None },
        Row { id: 5, name: "Ebo", email: "ebo@mail.test", color: Color::Red, date: Some("2025-04-10") },
    ]
}

fn ids(rows: &[Row]) -> Vec<u32> {
    rows.iter().map(|r| r.id).collect()
}

// =============================================================
// Text filter
// =============================================================

#[test]
fn empty_search_matches_everything() {
    let rows = sample();
    assert!(rows.iter().all(|r| matches_search(r, "")));
}

#[test]
fn whitespace_in_search_is_matched_literally() {
    let rows = sample();
    assert!(rows.iter().all(|r| !matches_search(r, "   ")));
    assert!(!matches_search(&rows[0], "alice "));
}

#[test]
fn trailing_space_query_only_keeps_rows_containing_it() {
    let rows = vec![
        row(1, "Ana Lee", Color::Red, None),
        row(2, "Expo Hall", Color::Blue, None),
        row(3, "Lima Beans", Color::Red, None),
        row(4, "Mia", Color::Blue, None),
    ];
    let query = ListQuery { search: "A ".to_owned(), ..ListQuery::default() };
    let view = derive(&rows, &query, ListConfig::default());
    assert_eq!(ids(&view.rows), vec![1, 3]);
    assert!(view.rows.iter().all(|r| r.name.to_lowercase().contains("a ")));
}

#[test]
fn search_is_case_insensitive_across_fields() {
    let rows = sample();
    let hits: Vec<u32> = rows.iter().filter(|r| matches_search(*r, "MAIL.TEST")).map(|r| r.id).collect();
    assert_eq!(hits, vec![3, 5]);
    let by_name: Vec<u32> = rows.iter().filter(|r| matches_search(*r, "bo")).map(|r| r.id).collect();
    assert_eq!(by_name, vec![2, 5]);
}

#[test]
fn filtered_set_is_subset_satisfying_predicate() {
    let rows = sample();
    for query in ["a", "expo", "zz", "e", "AL", "a ", " e"] {
        let view = derive(&rows, &ListQuery { search: query.to_owned(), ..ListQuery::default() }, ListConfig::default());
        for item in &view.rows {
            assert!(rows.contains(item));
            let needle = query.to_lowercase();
            assert!(item.search_fields().iter().any(|f| f.to_lowercase().contains(&needle)));
        }
    }
}

// =============================================================
// Category filter
// =============================================================

#[test]
fn category_all_accepts_everything() {
    let filter: CategoryFilter<Color> = CategoryFilter::All;
    assert!(filter.accepts(&Color::Red));
    assert!(filter.accepts(&Color::Blue));
}

#[test]
fn category_only_requires_exact_match() {
    let rows = sample();
    let query = ListQuery { category: CategoryFilter::Only(Color::Blue), ..ListQuery::default() };
    let view = derive(&rows, &query, ListConfig::default());
    assert_eq!(ids(&view.rows), vec![2, 4]);
}

#[test]
fn category_and_search_combine() {
    let rows = sample();
    let query = ListQuery {
        search: "expo".to_owned(),
        category: CategoryFilter::Only(Color::Red),
        ..ListQuery::default()
    };
    assert_eq!(ids(&derive(&rows, &query, ListConfig::default()).rows), vec![1]);
}

// =============================================================
// Sorting
// =============================================================

#[test]
fn ascending_sort_orders_by_date_with_missing_first() {
    let mut rows = sample();
    sort_by_date(&mut rows, SortOrder::Ascending);
    assert_eq!(ids(&rows), vec![4, 2, 3, 1, 5]);
}

#[test]
fn descending_sort_keeps_ties_in_input_order() {
    let mut rows = sample();
    sort_by_date(&mut rows, SortOrder::Descending);
    assert_eq!(ids(&rows), vec![1, 5, 3, 2, 4]);
}

#[test]
fn sort_output_is_a_permutation() {
    let original = sample();
    for order in [SortOrder::Ascending, SortOrder::Descending] {
        let mut rows = original.clone();
        sort_by_date(&mut rows, order);
        let mut a = ids(&rows);
        let mut b = ids(&original);
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b);
    }
}

#[test]
fn unparseable_dates_sort_with_missing_ones() {
    let mut rows = vec![
        row(1, "x", Color::Red, Some("2025-01-01")),
        row(2, "y", Color::Red, Some("not a date")),
        row(3, "z", Color::Red, None),
    ];
    sort_by_date(&mut rows, SortOrder::Ascending);
    assert_eq!(ids(&rows), vec![2, 3, 1]);
}

#[test]
fn derive_without_sort_preserves_fetch_order() {
    let rows = sample();
    let view = derive(&rows, &ListQuery::default(), ListConfig::default());
    assert_eq!(ids(&view.rows), vec![1, 2, 3, 4, 5]);
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn page_count_is_ceiling_division() {
    assert_eq!(page_count(0, 5), 0);
    assert_eq!(page_count(1, 5), 1);
    assert_eq!(page_count(5, 5), 1);
    assert_eq!(page_count(6, 5), 2);
    assert_eq!(page_count(11, 5), 3);
}

#[test]
fn last_page_holds_the_remainder() {
    let items: Vec<u32> = (1..=12).collect();
    let (rows, page) = paginate(&items, 3, 5);
    assert_eq!(page, 3);
    assert_eq!(rows, vec![11, 12]);

    let even: Vec<u32> = (1..=10).collect();
    let (rows, _) = paginate(&even, 2, 5);
    assert_eq!(rows.len(), 5);
}

#[test]
fn page_index_is_clamped() {
    let items: Vec<u32> = (1..=7).collect();
    assert_eq!(paginate(&items, 0, 5).1, 1);
    assert_eq!(paginate(&items, 9, 5), (vec![6, 7], 2));
    assert_eq!(clamp_page(4, 0), 1);
}

#[test]
fn derive_paginates_after_filtering() {
    let rows: Vec<Row> = (1..=12)
        .map(|id| row(id, if id % 2 == 0 { "even" } else { "odd" }, Color::Red, None))
        .collect();
    let query = ListQuery { search: "even".to_owned(), page: 2, ..ListQuery::default() };
    let view = derive(&rows, &query, ListConfig { page_size: Some(5) });
    assert_eq!(view.total_matches, 6);
    assert_eq!(view.total_pages, 2);
    assert_eq!(view.page, 2);
    assert_eq!(ids(&view.rows), vec![12]);
    assert!(view.has_prev());
    assert!(!view.has_next());
}

#[test]
fn unpaginated_view_reports_single_page() {
    let rows = sample();
    let view = derive(&rows, &ListQuery::default(), ListConfig::default());
    assert_eq!(view.page, 1);
    assert_eq!(view.total_pages, 1);
    let none = derive(&rows, &ListQuery { search: "nobody".to_owned(), ..ListQuery::default() }, ListConfig::default());
    assert!(none.is_empty());
    assert_eq!(none.total_pages, 0);
}

// =============================================================
// Query transitions
// =============================================================

#[test]
fn changing_search_or_category_resets_page() {
    let mut query: ListQuery<Color> = ListQuery { page: 3, ..ListQuery::default() };
    query.set_search("a");
    assert_eq!(query.page, 1);
    query.page = 2;
    query.set_category(CategoryFilter::Only(Color::Red));
    assert_eq!(query.page, 1);
}

#[test]
fn next_and_prev_stay_in_bounds() {
    let mut query: ListQuery<Color> = ListQuery::default();
    query.prev_page(3);
    assert_eq!(query.page, 1);
    query.next_page(3);
    query.next_page(3);
    query.next_page(3);
    assert_eq!(query.page, 3);
}

#[test]
fn sorted_constructor_sets_order() {
    let query: ListQuery<Color> = ListQuery::sorted(SortOrder::Descending);
    assert_eq!(query.sort, Some(SortOrder::Descending));
    assert_eq!(query.page, 1);
}
