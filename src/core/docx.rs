//! WordprocessingML (`.docx`) sink.
//!
//! Only `word/document.xml` is generated; the content types, relationships
//! and style sheet are static templates from `core::assets`.

use crate::core::assets;
use crate::core::document::{AssembledDocument, Block, ParagraphStyle, Run};
use crate::core::error::VacaturError;
use std::io::{Cursor, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

pub const DOCX_FILE_NAME: &str = "Motion_to_Vacate_Draft.docx";
pub const DOCX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Package part name and the embedded template that fills it.
const STATIC_PARTS: [(&str, &str); 4] = [
    ("[Content_Types].xml", "content_types.xml"),
    ("_rels/.rels", "package.rels"),
    ("word/_rels/document.xml.rels", "document.xml.rels"),
    ("word/styles.xml", "styles.xml"),
];

const WORD_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Serialize the draft into a complete `.docx` package.
pub fn to_docx_bytes(doc: &AssembledDocument) -> Result<Vec<u8>, VacaturError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (part, template) in STATIC_PARTS {
        let body = assets::get_template(template).ok_or_else(|| {
            VacaturError::Render(format!("missing docx template '{}'", template))
        })?;
        zip.start_file(part, options)?;
        zip.write_all(body.as_bytes())?;
    }
    zip.start_file("word/document.xml", options)?;
    zip.write_all(document_xml(doc).as_bytes())?;

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

/// Write the package to `path`, returning the number of bytes written.
pub fn write_docx(doc: &AssembledDocument, path: &Path) -> Result<usize, VacaturError> {
    let bytes = to_docx_bytes(doc)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, &bytes)?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote docx draft");
    Ok(bytes.len())
}

/// Body part of the package.
pub fn document_xml(doc: &AssembledDocument) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    out.push_str(&format!(r#"<w:document xmlns:w="{}"><w:body>"#, WORD_NS));

    for block in &doc.blocks {
        match block {
            Block::Heading { level, text } => {
                paragraph(&mut out, Some(heading_style(*level)), &[Run::plain(text.as_str())]);
            }
            Block::Paragraph { style, runs } => {
                let style_id = match style {
                    ParagraphStyle::Normal => None,
                    ParagraphStyle::IntenseQuote => Some("IntenseQuote"),
                };
                paragraph(&mut out, style_id, runs);
            }
        }
    }

    // US Letter, one-inch margins.
    out.push_str(
        r#"<w:sectPr><w:pgSz w:w="12240" w:h="15840"/><w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="720" w:footer="720" w:gutter="0"/></w:sectPr>"#,
    );
    out.push_str("</w:body></w:document>");
    out
}

fn heading_style(level: u8) -> &'static str {
    match level {
        0 => "Title",
        1 => "Heading1",
        _ => "Heading2",
    }
}

fn paragraph(out: &mut String, style_id: Option<&str>, runs: &[Run]) {
    out.push_str("<w:p>");
    if let Some(id) = style_id {
        out.push_str(&format!(r#"<w:pPr><w:pStyle w:val="{}"/></w:pPr>"#, id));
    }
    for run in runs {
        out.push_str("<w:r>");
        if run.bold {
            out.push_str("<w:rPr><w:b/></w:rPr>");
        }
        out.push_str(r#"<w:t xml:space="preserve">"#);
        out.push_str(&escape_xml(&run.text));
        out.push_str("</w:t></w:r>");
    }
    out.push_str("</w:p>");
}

pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
