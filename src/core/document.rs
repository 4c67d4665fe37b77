//! Structured draft produced by the assembler.
//!
//! A plain value: an ordered list of blocks that any sink (docx, markdown,
//! JSON) can walk without knowing how the draft was composed.

use serde::{Deserialize, Serialize};

/// A span of text with uniform formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub bold: bool,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParagraphStyle {
    #[default]
    Normal,
    /// Set-off block used for the authority citation under each argument.
    IntenseQuote,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Level 0 is the document title; 1 and 2 are section and sub-section.
    Heading { level: u8, text: String },
    Paragraph {
        #[serde(default)]
        style: ParagraphStyle,
        runs: Vec<Run>,
    },
}

impl Block {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph {
            style: ParagraphStyle::Normal,
            runs: vec![Run::plain(text)],
        }
    }

    pub fn styled(style: ParagraphStyle, text: impl Into<String>) -> Self {
        Block::Paragraph {
            style,
            runs: vec![Run::plain(text)],
        }
    }

    pub fn runs(runs: Vec<Run>) -> Self {
        Block::Paragraph {
            style: ParagraphStyle::Normal,
            runs,
        }
    }

    /// Concatenated text of the block, formatting dropped.
    pub fn text(&self) -> String {
        match self {
            Block::Heading { text, .. } => text.clone(),
            Block::Paragraph { runs, .. } => runs.iter().map(|r| r.text.as_str()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssembledDocument {
    pub blocks: Vec<Block>,
}

impl AssembledDocument {
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Texts of all headings at `level`, in document order.
    pub fn headings(&self, level: u8) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Heading { level: l, text } if *l == level => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(Block::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
