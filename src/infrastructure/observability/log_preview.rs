const MAX_VISIBLE_LENGTH: usize = 100;

/// Shortens long text (prompts, transcripts) for log lines: first 100
/// characters plus the total length.
pub fn log_preview(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    if trimmed.len() > MAX_VISIBLE_LENGTH {
        let cut = trimmed
            .char_indices()
            .take_while(|(i, _)| *i < MAX_VISIBLE_LENGTH)
            .last()
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(trimmed.len());
        format!("{}... ({} chars total)", &trimmed[..cut], trimmed.len())
    } else {
        trimmed.to_string()
    }
}
