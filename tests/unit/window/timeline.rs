use super::*;

fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn shuffled_events(n: u64, seed: u64) -> Vec<Event> {
    (0..n)
        .map(|i| {
            let r = mix64(seed ^ i);
            Event::new(
                (r & 0x3f) as u16,
                ((r >> 8) & 0x3f) as u16,
                ((r >> 16) % 3) as i16,
                ((r >> 24) % 1_000) as i64 - 50,
            )
        })
        .collect()
}

fn scenario_events() -> Vec<Event> {
    vec![
        Event::new(0, 0, 1, 50),
        Event::new(1, 1, 0, 150),
        Event::new(10, 10, 1, 200),
    ]
}

#[test]
fn scan_selects_half_open_range() {
    let events = scenario_events();
    let hits = scan_window(&events, TimeWindow::new(0, 100));
    assert_eq!(hits, vec![&events[0]]);

    let hits = scan_window(&events, TimeWindow::new(100, 250));
    assert_eq!(hits, vec![&events[1], &events[2]]);

    assert!(scan_window(&events, TimeWindow::new(150, 150)).is_empty());
    assert!(scan_window(&events, TimeWindow::new(51, 150)).is_empty());
}

#[test]
fn ordered_log_windows_are_borrowed_slices() {
    let timeline = EventTimeline::new(scenario_events());
    assert!(timeline.is_time_ordered());

    let w = timeline.window(TimeWindow::new(100, 250));
    assert!(matches!(w, WindowEvents::Contiguous(_)));
    assert_eq!(w.to_vec(), timeline.events()[1..3].to_vec());
}

#[test]
fn unordered_log_preserves_input_order_within_window() {
    let events = vec![
        Event::new(5, 5, 1, 30),
        Event::new(5, 5, 0, 10),
        Event::new(7, 7, 1, 500),
        Event::new(6, 6, 0, 20),
    ];
    let timeline = EventTimeline::new(events.clone());
    assert!(!timeline.is_time_ordered());

    let w = timeline.window(TimeWindow::new(0, 100));
    assert_eq!(w.to_vec(), vec![events[0], events[1], events[3]]);
}

#[test]
fn indexed_windows_match_full_scan() {
    for seed in [1_u64, 7, 42, 0xDEAD_BEEF] {
        let events = shuffled_events(500, seed);
        let timeline = EventTimeline::new(events.clone());

        let mut triggers: Vec<i64> = (1..=12).map(|i| i * 80).collect();
        triggers.push(900);
        triggers.push(400);
        for i in 0..triggers.len() {
            let window = TimeWindow::for_trigger(&triggers, i).unwrap();
            let expected: Vec<Event> = scan_window(&events, window).into_iter().copied().collect();
            assert_eq!(
                timeline.window(window).to_vec(),
                expected,
                "seed {seed} window {window:?}"
            );
        }
    }
}

#[test]
fn increasing_triggers_partition_the_log() {
    let events = shuffled_events(2_000, 99);
    let timeline = EventTimeline::new(events.clone());
    let triggers = [0_i64, 120, 121, 480, 700, 950];

    let mut covered = 0usize;
    for i in 0..triggers.len() {
        let window = TimeWindow::for_trigger(&triggers, i).unwrap();
        covered += timeline.window(window).len();
    }

    let last = *triggers.last().unwrap();
    let expected = events.iter().filter(|e| e.t >= 0 && e.t < last).count();
    assert_eq!(covered, expected);
}

#[test]
fn reversed_window_selects_nothing() {
    let timeline = EventTimeline::new(shuffled_events(200, 3));
    let w = timeline.window(TimeWindow::new(600, 100));
    assert!(w.is_empty());
    assert_eq!(w.iter().count(), 0);
}

#[test]
fn empty_log_yields_empty_windows() {
    let timeline = EventTimeline::new(Vec::new());
    assert!(timeline.is_empty());
    assert!(timeline.window(TimeWindow::new(0, 1_000)).is_empty());
}
