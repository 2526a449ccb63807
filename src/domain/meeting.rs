use serde::Deserialize;

/// Meeting facts supplied by the caller, consumed by the export header block
/// and offered to the summarizer as context. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MeetingMetadata {
    pub title: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub participants: Option<String>,
}

impl MeetingMetadata {
    /// Lines for the document header block, in a fixed field order. Absent
    /// fields produce no line.
    pub fn header_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(title) = &self.title {
            lines.push(format!("Title: {}", title));
        }
        if let Some(date) = &self.date {
            lines.push(format!("Date: {}", date));
        }
        if let Some(location) = &self.location {
            lines.push(format!("Location: {}", location));
        }
        if let Some(participants) = &self.participants {
            lines.push(format!("Participants: {}", participants));
        }
        lines
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.date.is_none()
            && self.location.is_none()
            && self.participants.is_none()
    }
}
