use super::*;

#[test]
fn first_window_starts_at_zero() {
    let triggers = [100, 250];
    assert_eq!(
        TimeWindow::for_trigger(&triggers, 0),
        Some(TimeWindow::new(0, 100))
    );
    assert_eq!(
        TimeWindow::for_trigger(&triggers, 1),
        Some(TimeWindow::new(100, 250))
    );
    assert_eq!(TimeWindow::for_trigger(&triggers, 2), None);
}

#[test]
fn window_contains_boundaries() {
    let w = TimeWindow::new(100, 250);
    assert!(!w.contains(99));
    assert!(w.contains(100));
    assert!(w.contains(249));
    assert!(!w.contains(250));
}

#[test]
fn reversed_triggers_give_empty_windows() {
    let triggers = [300, 200];
    let w = TimeWindow::for_trigger(&triggers, 1).unwrap();
    assert_eq!(w, TimeWindow::new(300, 200));
    assert!(w.is_empty());
    assert!(!w.contains(250));
}

#[test]
fn negative_first_trigger_is_empty() {
    let w = TimeWindow::for_trigger(&[-5], 0).unwrap();
    assert!(w.is_empty());
    assert!(!w.contains(-1));
}

#[test]
fn canvas_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 4).is_err());
    assert!(Canvas::new(4, 0).is_err());
    assert_eq!(Canvas::new(640, 480).unwrap().pixel_count(), 640 * 480);
}

#[test]
fn canvas_rejects_oversized_dimensions() {
    let err = Canvas::new(70_000, 4).unwrap_err();
    assert!(matches!(err, EvframeError::Validation(_)));
    assert!(Canvas::new(4, MAX_CANVAS_DIM + 1).is_err());
    assert!(Canvas::new(u32::MAX, u32::MAX).is_err());
    assert!(Canvas::new(MAX_CANVAS_DIM, 1).is_ok());
}

#[test]
fn canvas_rejects_frames_over_byte_limit() {
    let err = Canvas::new(MAX_CANVAS_DIM, MAX_CANVAS_DIM).unwrap_err();
    assert!(err.to_string().contains("frame limit"));
    assert!(Canvas::new(16_384, 16_384).is_ok());
}

#[test]
fn canvas_clamp_saturates() {
    let c = Canvas::new(4, 3).unwrap();
    assert_eq!(c.clamp(0, 0), (0, 0));
    assert_eq!(c.clamp(3, 2), (3, 2));
    assert_eq!(c.clamp(10, 10), (3, 2));
    assert_eq!(c.clamp(u16::MAX, 1), (3, 1));
}

#[test]
fn single_pixel_canvas_clamps_everything_to_origin() {
    let c = Canvas::new(1, 1).unwrap();
    assert_eq!(c.clamp(500, 7), (0, 0));
}
