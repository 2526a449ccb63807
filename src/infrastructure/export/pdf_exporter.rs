use std::io::Write;

use crate::application::ports::{ExportError, SummaryExporter};
use crate::domain::MeetingMetadata;

const DOCUMENT_TITLE: &str = "Meeting report";

/// Minimal PDF 1.4 rendering with the built-in Helvetica fonts; no external
/// font files or PDF dependencies. Title, bold metadata block, body lines.
pub struct PdfExporter;

impl SummaryExporter for PdfExporter {
    fn export(
        &self,
        summary: &str,
        metadata: Option<&MeetingMetadata>,
    ) -> Result<Vec<u8>, ExportError> {
        let mut pdf = PdfWriter::new();

        pdf.add_line(DOCUMENT_TITLE, 16.0, true);
        pdf.add_line("", 10.0, false);

        if let Some(meta) = metadata.filter(|m| !m.is_empty()) {
            for line in meta.header_lines() {
                pdf.add_line(&line, 10.0, true);
            }
            pdf.add_line("", 10.0, false);
        }

        for line in summary.lines() {
            pdf.add_line(line, 10.0, false);
        }

        pdf.render()
    }

    fn file_extension(&self) -> &'static str {
        "pdf"
    }

    fn content_type(&self) -> &'static str {
        "application/pdf"
    }
}

struct PdfLine {
    text: String,
    font_size: f64,
    bold: bool,
}

/// Single-page PDF generator emitting the object tree and xref table by hand.
struct PdfWriter {
    lines: Vec<PdfLine>,
}

impl PdfWriter {
    fn new() -> Self {
        Self { lines: Vec::new() }
    }

    fn add_line(&mut self, text: &str, font_size: f64, bold: bool) {
        self.lines.push(PdfLine {
            text: text.to_string(),
            font_size,
            bold,
        });
    }

    fn escape_pdf_string(s: &str) -> String {
        s.replace('\\', "\\\\")
            .replace('(', "\\(")
            .replace(')', "\\)")
            // Built-in fonts only cover basic encodings; strip the rest.
            .chars()
            .filter(|c| c.is_ascii())
            .collect()
    }

    fn render(&self) -> Result<Vec<u8>, ExportError> {
        let mut buf = Vec::new();
        let io = |e: std::io::Error| ExportError::RenderFailed(e.to_string());

        write!(buf, "%PDF-1.4\n").map_err(io)?;
        // Binary marker comment
        buf.extend_from_slice(&[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n']);

        let mut offsets: Vec<usize> = Vec::new();

        offsets.push(buf.len());
        write!(buf, "1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n").map_err(io)?;

        offsets.push(buf.len());
        write!(
            buf,
            "2 0 obj\n<< /Type /Pages /Kids [3 0 R] /Count 1 >>\nendobj\n"
        )
        .map_err(io)?;

        let stream = self.content_stream();
        let stream_bytes = stream.as_bytes();

        offsets.push(buf.len());
        write!(
            buf,
            "3 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Contents 4 0 R \
             /Resources << /Font << /F1 5 0 R /F2 6 0 R >> >> >>\nendobj\n"
        )
        .map_err(io)?;

        offsets.push(buf.len());
        write!(buf, "4 0 obj\n<< /Length {} >>\nstream\n", stream_bytes.len()).map_err(io)?;
        buf.extend_from_slice(stream_bytes);
        write!(buf, "\nendstream\nendobj\n").map_err(io)?;

        offsets.push(buf.len());
        write!(
            buf,
            "5 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>\nendobj\n"
        )
        .map_err(io)?;

        offsets.push(buf.len());
        write!(
            buf,
            "6 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold >>\nendobj\n"
        )
        .map_err(io)?;

        let xref_start = buf.len();
        write!(buf, "xref\n0 {}\n", offsets.len() + 1).map_err(io)?;
        write!(buf, "0000000000 65535 f \n").map_err(io)?;
        for offset in &offsets {
            write!(buf, "{:010} 00000 n \n", offset).map_err(io)?;
        }

        write!(
            buf,
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            offsets.len() + 1,
            xref_start
        )
        .map_err(io)?;

        Ok(buf)
    }

    fn content_stream(&self) -> String {
        let page_height = 792.0; // Letter
        let margin_top = 50.0;
        let margin_left = 50.0;
        let line_height_factor = 1.4;

        let mut stream = String::from("BT\n");
        let mut y = page_height - margin_top;

        for line in &self.lines {
            if line.text.is_empty() {
                y -= line.font_size * line_height_factor;
                continue;
            }

            let font_ref = if line.bold { "/F2" } else { "/F1" };
            stream.push_str(&format!("{} {} Tf\n", font_ref, line.font_size));
            stream.push_str(&format!("{} {} Td\n", margin_left, y));
            stream.push_str(&format!("({}) Tj\n", Self::escape_pdf_string(&line.text)));

            y -= line.font_size * line_height_factor;

            // Td is relative to the previous text position; reset for the
            // next absolute placement.
            stream.push_str(&format!("{} {} Td\n", -margin_left, -y));
        }

        stream.push_str("ET\n");
        stream
    }
}
