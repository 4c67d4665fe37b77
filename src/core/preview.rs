//! Draft preview: the arguments a motion will make and the authority behind each.

use crate::core::catalog::GroundRecord;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewEntry {
    pub code: String,
    pub argument_header: String,
    pub authority: String,
}

/// One entry per selected ground, in selection order.
pub fn draft_preview(grounds: &[&GroundRecord]) -> Vec<PreviewEntry> {
    grounds
        .iter()
        .map(|ground| PreviewEntry {
            code: ground.code.clone(),
            argument_header: ground.argument_header.clone(),
            authority: ground.case_cite.clone(),
        })
        .collect()
}

/// Two lines per entry: the argument header, then its authority indented below.
pub fn preview_lines(entries: &[PreviewEntry]) -> Vec<String> {
    entries
        .iter()
        .flat_map(|entry| {
            [
                format!("Argument: {}", entry.argument_header),
                format!("  Authority: {}", entry.authority),
            ]
        })
        .collect()
}
