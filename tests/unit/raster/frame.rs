use super::*;

fn canvas(w: u32, h: u32) -> Canvas {
    Canvas::new(w, h).unwrap()
}

fn count_non_background(frame: &RasterFrame) -> usize {
    frame
        .data
        .chunks_exact(3)
        .filter(|px| *px != BACKGROUND_RGB)
        .count()
}

#[test]
fn empty_window_is_all_background() {
    let frame = rasterize(&[] as &[Event], canvas(5, 3), Orientation::Identity);
    assert_eq!(frame.width, 5);
    assert_eq!(frame.height, 3);
    assert_eq!(frame.data.len(), 5 * 3 * 3);
    assert_eq!(count_non_background(&frame), 0);
}

#[test]
fn polarity_sets_black_and_white() {
    let events = [Event::new(0, 0, 1, 0), Event::new(2, 1, 0, 1)];
    let frame = rasterize(&events, canvas(4, 4), Orientation::Identity);
    assert_eq!(frame.pixel(0, 0), Some(BLACK_RGB));
    assert_eq!(frame.pixel(2, 1), Some(WHITE_RGB));
    assert_eq!(count_non_background(&frame), 2);
}

#[test]
fn out_of_bounds_events_clamp_to_edge() {
    let events = [
        Event::new(10, 10, 1, 0),
        Event::new(u16::MAX, 0, 0, 1),
        Event::new(1, 900, 0, 2),
    ];
    let frame = rasterize(&events, canvas(4, 4), Orientation::Identity);
    assert_eq!(frame.pixel(3, 3), Some(BLACK_RGB));
    assert_eq!(frame.pixel(3, 0), Some(WHITE_RGB));
    assert_eq!(frame.pixel(1, 3), Some(WHITE_RGB));
    assert_eq!(count_non_background(&frame), 3);
}

#[test]
fn unrecognized_polarity_leaves_background() {
    let events = [Event::new(1, 1, 2, 0), Event::new(2, 2, -1, 1)];
    let frame = rasterize(&events, canvas(4, 4), Orientation::Identity);
    assert_eq!(frame.pixel(1, 1), Some(BACKGROUND_RGB));
    assert_eq!(count_non_background(&frame), 0);
}

#[test]
fn unrecognized_polarity_keeps_earlier_write() {
    let events = [Event::new(1, 1, 0, 0), Event::new(1, 1, 7, 1)];
    let frame = rasterize(&events, canvas(4, 4), Orientation::Identity);
    assert_eq!(frame.pixel(1, 1), Some(WHITE_RGB));
}

#[test]
fn last_write_wins_at_shared_coordinate() {
    let events = [Event::new(3, 3, 1, 0), Event::new(9, 9, 0, 1)];
    let frame = rasterize(&events, canvas(4, 4), Orientation::Identity);
    assert_eq!(frame.pixel(3, 3), Some(WHITE_RGB));

    let events = [Event::new(9, 9, 0, 0), Event::new(3, 3, 1, 1)];
    let frame = rasterize(&events, canvas(4, 4), Orientation::Identity);
    assert_eq!(frame.pixel(3, 3), Some(BLACK_RGB));
}

#[test]
fn rotation_applies_after_clamp() {
    let events = [Event::new(50, 50, 1, 0), Event::new(0, 1, 0, 1)];
    let frame = rasterize(&events, canvas(4, 3), Orientation::Rotate180);
    assert_eq!(frame.pixel(0, 0), Some(BLACK_RGB));
    assert_eq!(frame.pixel(3, 1), Some(WHITE_RGB));
}

#[test]
fn pixel_outside_frame_is_none() {
    let frame = RasterFrame::background(canvas(2, 2));
    assert_eq!(frame.pixel(2, 0), None);
    assert_eq!(frame.pixel(0, 2), None);
}

#[test]
fn digest_tracks_content() {
    let a = rasterize(&[Event::new(0, 0, 1, 0)], canvas(4, 4), Orientation::Identity);
    let b = rasterize(&[Event::new(0, 0, 1, 5)], canvas(4, 4), Orientation::Identity);
    let c = rasterize(&[Event::new(0, 0, 0, 0)], canvas(4, 4), Orientation::Identity);
    assert_eq!(a.sha256_hex(), b.sha256_hex());
    assert_ne!(a.sha256_hex(), c.sha256_hex());
    assert_eq!(a.sha256_hex().len(), 64);
}
