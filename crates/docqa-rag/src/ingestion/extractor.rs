//! Multi-format text extraction
//!
//! Extraction never fails past this boundary: every internal error degrades
//! to an empty string or a placeholder naming the file, so callers can tell
//! "nothing extracted" apart from a crash. Format-specific failures are
//! logged here and isolated per document.

use std::path::Path;

use crate::types::document::MimeType;

/// Multi-format text extractor
pub struct TextExtractor;

impl TextExtractor {
    /// Extract plain text from a stored file, dispatching on its resolved format
    pub fn extract(path: &Path, mime: MimeType) -> String {
        match mime {
            MimeType::PlainText => Self::extract_plain_text(path),
            MimeType::Pdf => Self::extract_pdf(path),
            MimeType::WordDocument => Self::extract_docx(path),
            MimeType::Unsupported => {
                tracing::warn!("Unsupported file type for {}", path.display());
                String::new()
            }
        }
    }

    /// Read a text file as UTF-8, falling back to a permissive single-byte decode
    fn extract_plain_text(path: &Path) -> String {
        match std::fs::read(path) {
            Ok(bytes) => decode_text_bytes(&bytes),
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                String::new()
            }
        }
    }

    /// Extract PDF text page by page with page-boundary markers
    ///
    /// A single unreadable page is skipped; only a fully unreadable document
    /// falls through to whole-document extraction and then to a placeholder.
    fn extract_pdf(path: &Path) -> String {
        let fname = display_name(path);

        let doc = match lopdf::Document::load(path) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!("Failed to load PDF {}: {}", fname, e);
                return Self::extract_pdf_fallback(path, fname);
            }
        };

        let mut out = String::new();
        for (page_number, _) in doc.get_pages() {
            match doc.extract_text(&[page_number]) {
                Ok(text) if !text.trim().is_empty() => {
                    out.push_str(&format!("--- Page {} ---\n", page_number));
                    out.push_str(text.trim());
                    out.push('\n');
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!("Skipping unreadable page {} of {}: {}", page_number, fname, e);
                }
            }
        }

        if out.trim().is_empty() {
            return Self::extract_pdf_fallback(path, fname);
        }
        out
    }

    fn extract_pdf_fallback(path: &Path, fname: &str) -> String {
        match pdf_extract::extract_text(path) {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                tracing::warn!("PDF {} has no readable text, may be image-based", fname);
                format!("[PDF {} - no readable text content]", fname)
            }
            Err(e) => {
                tracing::error!("PDF extraction failed for {}: {}", fname, e);
                format!("[PDF {} - no readable text content]", fname)
            }
        }
    }

    /// Extract Word document text: paragraphs in order, then tables row by row
    fn extract_docx(path: &Path) -> String {
        let fname = display_name(path);

        let data = match std::fs::read(path) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", fname, e);
                return String::new();
            }
        };

        let docx = match docx_rs::read_docx(&data) {
            Ok(docx) => docx,
            Err(e) => {
                tracing::error!("Failed to parse Word document {}: {:?}", fname, e);
                return format!("[Word document {} - could not be parsed]", fname);
            }
        };

        let mut paragraphs = String::new();
        let mut tables = String::new();

        for child in &docx.document.children {
            match child {
                docx_rs::DocumentChild::Paragraph(p) => {
                    let line = paragraph_text(p);
                    if !line.is_empty() {
                        paragraphs.push_str(&line);
                        paragraphs.push('\n');
                    }
                }
                docx_rs::DocumentChild::Table(t) => {
                    for row in &t.rows {
                        let docx_rs::TableChild::TableRow(row) = row;
                        let cells: Vec<String> = row
                            .cells
                            .iter()
                            .map(|cell| {
                                let docx_rs::TableRowChild::TableCell(cell) = cell;
                                cell_text(cell)
                            })
                            .collect();
                        let line = cells.join(" | ");
                        if !line.trim().is_empty() {
                            tables.push_str(&line);
                            tables.push('\n');
                        }
                    }
                }
                _ => {}
            }
        }

        paragraphs.push_str(&tables);
        paragraphs
    }
}

/// Decode raw bytes as UTF-8, falling back to Latin-1 (every byte maps to a
/// character, so the fallback cannot fail)
pub(crate) fn decode_text_bytes(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

fn paragraph_text(paragraph: &docx_rs::Paragraph) -> String {
    let mut out = String::new();
    for child in &paragraph.children {
        if let docx_rs::ParagraphChild::Run(run) = child {
            for child in &run.children {
                if let docx_rs::RunChild::Text(t) = child {
                    out.push_str(&t.text);
                }
            }
        }
    }
    out
}

fn cell_text(cell: &docx_rs::TableCell) -> String {
    let mut parts = Vec::new();
    for content in &cell.children {
        if let docx_rs::TableCellContent::Paragraph(p) = content {
            let text = paragraph_text(p);
            if !text.is_empty() {
                parts.push(text);
            }
        }
    }
    parts.join(" ")
}

fn display_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or("document")
}
