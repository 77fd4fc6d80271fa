use super::*;

#[test]
fn parses_whitespace_and_comma_separated_records() {
    assert_eq!(
        parse_event_line("50 0 0 1").unwrap(),
        Some(Event::new(0, 0, 1, 50))
    );
    assert_eq!(
        parse_event_line("150, 1, 1, 0").unwrap(),
        Some(Event::new(1, 1, 0, 150))
    );
    assert_eq!(
        parse_event_line("\t200,10 10,\t1 ").unwrap(),
        Some(Event::new(10, 10, 1, 200))
    );
}

#[test]
fn skips_comments_and_blank_lines() {
    assert_eq!(parse_event_line("").unwrap(), None);
    assert_eq!(parse_event_line("   ").unwrap(), None);
    assert_eq!(parse_event_line("# t x y p").unwrap(), None);
}

#[test]
fn accepts_unrecognized_polarity_codes() {
    assert_eq!(
        parse_event_line("7 3 4 2").unwrap(),
        Some(Event::new(3, 4, 2, 7))
    );
    assert_eq!(
        parse_event_line("7 3 4 -1").unwrap(),
        Some(Event::new(3, 4, -1, 7))
    );
}

#[test]
fn rejects_malformed_records() {
    assert!(parse_event_line("1 2 3").unwrap_err().contains("missing field 'p'"));
    assert!(parse_event_line("1 2 3 4 5").unwrap_err().contains("trailing"));
    assert!(parse_event_line("1 70000 3 1").unwrap_err().starts_with("x"));
    assert!(parse_event_line("1 2 -3 1").unwrap_err().starts_with("y"));
    assert!(parse_event_line("t 2 3 1").unwrap_err().starts_with("t"));
}

#[test]
fn load_reports_path_and_line() {
    let dir = std::path::PathBuf::from("target").join("unit_text_events");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("bad.txt");
    std::fs::write(&path, "# t x y p\n50 0 0 1\n60 0 zero 1\n").unwrap();

    let err = TextEventFile::new(&path).load_events().unwrap_err();
    let msg = err.to_string();
    assert!(matches!(err, EvframeError::Parse(_)));
    assert!(msg.contains("line 3"), "{msg}");
    assert!(msg.contains("bad.txt"), "{msg}");
}

#[test]
fn load_keeps_file_order() {
    let dir = std::path::PathBuf::from("target").join("unit_text_events");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("unordered.csv");
    std::fs::write(&path, "300,1,1,0\n100,2,2,1\n\n200,3,3,2\n").unwrap();

    let events = TextEventFile::new(&path).load_events().unwrap();
    assert_eq!(
        events,
        vec![
            Event::new(1, 1, 0, 300),
            Event::new(2, 2, 1, 100),
            Event::new(3, 3, 2, 200),
        ]
    );
}
