//! Motion assembly.
//!
//! Maps an ordered selection of ground codes and the award date onto a
//! complete draft: title block, introduction, one argument block per selected
//! ground (in selection order, duplicates kept), conclusion.
//!
//! Every code is resolved against the catalog before the first block is
//! built, so an unknown code aborts the whole draft instead of yielding a
//! motion with a ground silently missing.

use crate::core::calendar;
use crate::core::catalog::{GroundCatalog, GroundRecord};
use crate::core::document::{AssembledDocument, Block, ParagraphStyle, Run};
use crate::core::error::VacaturError;
use crate::core::time::Clock;
use chrono::NaiveDate;

pub const TITLE: &str = "MOTION TO VACATE ARBITRATION AWARD";
pub const CAPTION_PLACEHOLDER: &str = "[INSERT CASE CAPTION HERE]";
pub const INTRODUCTION_HEADING: &str = "I. INTRODUCTION";
pub const ARGUMENT_HEADING: &str = "II. ARGUMENT";
pub const CONCLUSION_HEADING: &str = "III. CONCLUSION";
pub const NO_GROUNDS_SELECTED: &str = "[No specific grounds selected in analysis tool.]";
pub const FACTS_PLACEHOLDER: &str = "[INSERT FACTS SPECIFIC TO THIS GROUND HERE]";
pub const GOVERNING_STATUTE: &str = "the Federal Arbitration Act, 9 U.S.C. § 10";
pub const CONCLUSION: &str = "For the foregoing reasons, Movant respectfully requests that this Court vacate the arbitration award.";

pub struct DocumentAssembler<'a> {
    catalog: &'a GroundCatalog,
}

impl<'a> DocumentAssembler<'a> {
    pub fn new(catalog: &'a GroundCatalog) -> Self {
        Self { catalog }
    }

    /// Assemble a draft dated by `clock`.
    pub fn assemble<S: AsRef<str>>(
        &self,
        selected_codes: &[S],
        reference_date: NaiveDate,
        clock: &dyn Clock,
    ) -> Result<AssembledDocument, VacaturError> {
        self.assemble_on(selected_codes, reference_date, clock.today())
    }

    /// Assemble a draft with an explicit generation date.
    pub fn assemble_on<S: AsRef<str>>(
        &self,
        selected_codes: &[S],
        reference_date: NaiveDate,
        generated_on: NaiveDate,
    ) -> Result<AssembledDocument, VacaturError> {
        let grounds = selected_codes
            .iter()
            .map(|code| self.catalog.lookup(code.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            grounds = grounds.len(),
            reference_date = %reference_date,
            generated_on = %generated_on,
            "assembling motion"
        );

        let mut doc = AssembledDocument::default();

        doc.push(Block::heading(0, TITLE));
        doc.push(Block::paragraph(CAPTION_PLACEHOLDER));
        doc.push(Block::paragraph(format!(
            "Date: {}",
            calendar::format_long(generated_on)
        )));

        doc.push(Block::heading(1, INTRODUCTION_HEADING));
        doc.push(Block::paragraph(format!(
            "Movant hereby moves this Court to vacate the arbitration award dated {} pursuant to {}.",
            calendar::format_long(reference_date),
            GOVERNING_STATUTE
        )));

        doc.push(Block::heading(1, ARGUMENT_HEADING));
        if grounds.is_empty() {
            doc.push(Block::paragraph(NO_GROUNDS_SELECTED));
        }
        for ground in grounds {
            push_argument(&mut doc, ground);
        }

        doc.push(Block::heading(1, CONCLUSION_HEADING));
        doc.push(Block::paragraph(CONCLUSION));

        Ok(doc)
    }
}

fn push_argument(doc: &mut AssembledDocument, ground: &GroundRecord) {
    doc.push(Block::heading(2, ground.argument_header.as_str()));
    doc.push(Block::runs(vec![
        Run::bold("Under "),
        Run::plain(format!(
            "{}, a district court may vacate an award where {}. ",
            ground.section,
            ground.title.to_lowercase()
        )),
        Run::plain("The governing standard requires a showing that: "),
        Run::plain(ground.standard.as_str()),
    ]));
    doc.push(Block::styled(
        ParagraphStyle::IntenseQuote,
        format!("See generally {}.", ground.case_cite),
    ));
    doc.push(Block::paragraph(FACTS_PLACEHOLDER));
}
