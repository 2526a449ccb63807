use rapporteur::domain::{MeetingMetadata, SummaryStyle};

#[test]
fn given_full_metadata_when_building_header_then_lines_in_fixed_order() {
    let metadata = MeetingMetadata {
        title: Some("Budget review".to_string()),
        date: Some("2025-03-14".to_string()),
        location: Some("Room 4".to_string()),
        participants: Some("Alice, Bob".to_string()),
    };

    let lines = metadata.header_lines();

    assert_eq!(
        lines,
        vec![
            "Title: Budget review",
            "Date: 2025-03-14",
            "Location: Room 4",
            "Participants: Alice, Bob",
        ]
    );
}

#[test]
fn given_partial_metadata_when_building_header_then_absent_fields_skipped() {
    let metadata = MeetingMetadata {
        date: Some("2025-03-14".to_string()),
        ..Default::default()
    };

    assert_eq!(metadata.header_lines(), vec!["Date: 2025-03-14"]);
    assert!(!metadata.is_empty());
}

#[test]
fn given_empty_metadata_when_checking_then_is_empty() {
    assert!(MeetingMetadata::default().is_empty());
    assert!(MeetingMetadata::default().header_lines().is_empty());
}

#[test]
fn given_style_names_when_parsing_then_all_three_presets_roundtrip() {
    for style in [
        SummaryStyle::Professional,
        SummaryStyle::BulletPoints,
        SummaryStyle::DetailedMinutes,
    ] {
        let parsed: SummaryStyle = style.as_str().parse().unwrap();
        assert_eq!(parsed, style);
    }

    assert!("executive".parse::<SummaryStyle>().is_err());
}

#[test]
fn given_three_styles_when_reading_instructions_then_distinct() {
    let professional = SummaryStyle::Professional.instruction();
    let bullets = SummaryStyle::BulletPoints.instruction();
    let minutes = SummaryStyle::DetailedMinutes.instruction();

    assert_ne!(professional, bullets);
    assert_ne!(professional, minutes);
    assert_ne!(bullets, minutes);
}
