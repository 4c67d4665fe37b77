//! Markdown rendering of a draft, for terminals and review diffs.

use crate::core::document::{AssembledDocument, Block, ParagraphStyle};

pub fn to_markdown(doc: &AssembledDocument) -> String {
    let mut out = String::new();
    for block in &doc.blocks {
        match block {
            Block::Heading { level, text } => {
                out.push_str(&"#".repeat(usize::from(*level) + 1));
                out.push(' ');
                out.push_str(text);
            }
            Block::Paragraph { style, runs } => {
                if *style == ParagraphStyle::IntenseQuote {
                    out.push_str("> ");
                }
                for run in runs {
                    if run.bold && !run.text.trim().is_empty() {
                        // Keep surrounding whitespace outside the markers.
                        let lead = &run.text[..run.text.len() - run.text.trim_start().len()];
                        let trail = &run.text[run.text.trim_end().len()..];
                        out.push_str(lead);
                        out.push_str("**");
                        out.push_str(run.text.trim());
                        out.push_str("**");
                        out.push_str(trail);
                    } else {
                        out.push_str(&run.text);
                    }
                }
            }
        }
        out.push_str("\n\n");
    }
    out
}
