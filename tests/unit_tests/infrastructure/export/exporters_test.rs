use rapporteur::application::ports::SummaryExporter;
use rapporteur::domain::MeetingMetadata;
use rapporteur::infrastructure::export::{ExporterRegistry, MarkdownExporter, PdfExporter};

fn sample_metadata() -> MeetingMetadata {
    MeetingMetadata {
        title: Some("Budget review".to_string()),
        date: Some("2025-03-14".to_string()),
        location: None,
        participants: Some("Alice, Bob".to_string()),
    }
}

#[test]
fn given_metadata_when_exporting_markdown_then_header_block_before_body() {
    let document = MarkdownExporter
        .export("All good.\n\nNext steps follow.", Some(&sample_metadata()))
        .unwrap();
    let text = String::from_utf8(document).unwrap();

    assert!(text.starts_with("# Meeting report\n\n"));
    let title_pos = text.find("- Title: Budget review").unwrap();
    let body_pos = text.find("All good.").unwrap();
    assert!(title_pos < body_pos);
    assert!(text.contains("- Participants: Alice, Bob"));
    assert!(!text.contains("Location:"));
}

#[test]
fn given_no_metadata_when_exporting_markdown_then_no_header_block() {
    let document = MarkdownExporter.export("Body only.", None).unwrap();
    let text = String::from_utf8(document).unwrap();

    assert!(!text.contains("- "));
    assert!(text.contains("Body only."));
}

#[test]
fn given_summary_when_exporting_pdf_then_valid_pdf_shell() {
    let document = PdfExporter
        .export("Decisions were made.", Some(&sample_metadata()))
        .unwrap();

    assert!(document.starts_with(b"%PDF-1.4"));
    assert!(document.ends_with(b"%%EOF\n"));

    let text = String::from_utf8_lossy(&document);
    assert!(text.contains("(Meeting report) Tj"));
    assert!(text.contains("(Decisions were made.) Tj"));
    assert!(text.contains("(Title: Budget review) Tj"));
}

#[test]
fn given_parentheses_in_summary_when_exporting_pdf_then_escaped() {
    let document = PdfExporter.export("Budget (draft) approved", None).unwrap();
    let text = String::from_utf8_lossy(&document);

    assert!(text.contains(r"(Budget \(draft\) approved) Tj"));
}

#[test]
fn given_exporters_when_reading_media_types_then_match_format() {
    assert_eq!(MarkdownExporter.file_extension(), "md");
    assert_eq!(MarkdownExporter.content_type(), "text/markdown");
    assert_eq!(PdfExporter.file_extension(), "pdf");
    assert_eq!(PdfExporter.content_type(), "application/pdf");
}

#[test]
fn given_registry_when_looking_up_formats_then_known_names_resolve() {
    let registry = ExporterRegistry::new();

    assert!(registry.for_format("markdown").is_some());
    assert!(registry.for_format("md").is_some());
    assert!(registry.for_format("pdf").is_some());
    assert!(registry.for_format("docx").is_none());
}
