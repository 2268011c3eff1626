use super::*;

fn slice(name: &str, value: f64) -> PieSlice {
    PieSlice { name: name.to_owned(), value }
}

fn point(date: &str, stalls: f64) -> BarPoint {
    BarPoint { date: date.to_owned(), stalls }
}

const FRAME: BarFrame = BarFrame { width: 440.0, height: 220.0, inset_left: 40.0, inset_bottom: 20.0 };

#[test]
fn zero_total_pie_has_no_segments() {
    assert!(pie_segments(&[], 100.0, 100.0, 80.0).is_empty());
    assert!(pie_segments(&[slice("Visitors", 0.0), slice("Exhibitors", 0.0)], 100.0, 100.0, 80.0).is_empty());
}

#[test]
fn single_nonzero_slice_is_a_full_circle() {
    let segments = pie_segments(&[slice("Visitors", 12.0), slice("Exhibitors", 0.0)], 100.0, 100.0, 80.0);
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].shape, SliceShape::Circle);
    assert!((segments[0].percent - 100.0).abs() < 1e-9);
}

#[test]
fn even_split_produces_two_half_wedges() {
    let segments = pie_segments(&[slice("Visitors", 5.0), slice("Exhibitors", 5.0)], 100.0, 100.0, 80.0);
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].color, "#3b82f6");
    assert_eq!(segments[1].color, "#22c55e");
    let SliceShape::Path(first) = &segments[0].shape else { panic!("expected a wedge") };
    assert_eq!(first, "M 100.00 100.00 L 100.00 20.00 A 80.00 80.00 0 0 1 100.00 180.00 Z");
}

#[test]
fn majority_slice_uses_large_arc_flag() {
    let segments = pie_segments(&[slice("Visitors", 3.0), slice("Exhibitors", 1.0)], 0.0, 0.0, 10.0);
    let SliceShape::Path(path) = &segments[0].shape else { panic!("expected a wedge") };
    assert!(path.contains(" 0 1 1 "));
    let SliceShape::Path(path) = &segments[1].shape else { panic!("expected a wedge") };
    assert!(path.contains(" 0 0 1 "));
}

#[test]
fn negative_values_are_ignored() {
    let segments = pie_segments(&[slice("Visitors", -4.0), slice("Exhibitors", 2.0)], 0.0, 0.0, 10.0);
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].label, "Exhibitors");
    assert_eq!(segments[0].color, "#22c55e");
}

#[test]
fn axis_max_rounds_up_to_readable_steps() {
    assert!((axis_max([]) - 1.0).abs() < 1e-9);
    assert!((axis_max([0.0]) - 1.0).abs() < 1e-9);
    assert!((axis_max([3.0, 7.0]) - 10.0).abs() < 1e-9);
    assert!((axis_max([12.0]) - 20.0).abs() < 1e-9);
    assert!((axis_max([45.0]) - 50.0).abs() < 1e-9);
    assert!((axis_max([100.0]) - 100.0).abs() < 1e-9);
}

#[test]
fn bars_scale_against_axis_max() {
    let bars = bar_layout(&[point("2025-04-01", 5.0), point("2025-04-02", 10.0)], FRAME);
    assert_eq!(bars.len(), 2);
    assert!((bars[1].height - 200.0).abs() < 1e-9);
    assert!((bars[1].y - 0.0).abs() < 1e-9);
    assert!((bars[0].height - 100.0).abs() < 1e-9);
    assert!((bars[0].y - 100.0).abs() < 1e-9);
}

#[test]
fn bars_are_centered_in_equal_bands() {
    let bars = bar_layout(&[point("a", 1.0), point("b", 1.0)], FRAME);
    assert!((bars[0].width - 120.0).abs() < 1e-9);
    assert!((bars[0].center_x() - 140.0).abs() < 1e-9);
    assert!((bars[1].center_x() - 340.0).abs() < 1e-9);
}

#[test]
fn empty_series_has_no_bars() {
    assert!(bar_layout(&[], FRAME).is_empty());
}

#[test]
fn ticks_span_zero_to_max() {
    assert_eq!(axis_ticks(10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    assert_eq!(format_tick(2.0), "2");
    assert_eq!(format_tick(0.5), "0.5");
}
