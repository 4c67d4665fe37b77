use chrono::NaiveDate;
use vacatur::core::assembler::{
    ARGUMENT_HEADING, CONCLUSION, CONCLUSION_HEADING, DocumentAssembler, FACTS_PLACEHOLDER,
    INTRODUCTION_HEADING, NO_GROUNDS_SELECTED, TITLE,
};
use vacatur::core::calendar::filing_deadline;
use vacatur::core::catalog::GroundCatalog;
use vacatur::core::document::{AssembledDocument, Block, ParagraphStyle};
use vacatur::core::error::VacaturError;
use vacatur::core::time::FixedClock;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn draft(catalog: &GroundCatalog, codes: &[&str]) -> AssembledDocument {
    DocumentAssembler::new(catalog)
        .assemble(codes, ymd(2024, 6, 15), &FixedClock(ymd(2024, 7, 1)))
        .expect("assembly should succeed")
}

/// Blocks between the ARGUMENT and CONCLUSION headings.
fn argument_section(doc: &AssembledDocument) -> &[Block] {
    let start = doc
        .blocks
        .iter()
        .position(|b| *b == Block::heading(1, ARGUMENT_HEADING))
        .expect("argument heading");
    let end = doc
        .blocks
        .iter()
        .position(|b| *b == Block::heading(1, CONCLUSION_HEADING))
        .expect("conclusion heading");
    &doc.blocks[start + 1..end]
}

#[test]
fn fixed_frame_surrounds_arguments() {
    let catalog = GroundCatalog::embedded().unwrap();
    let doc = draft(&catalog, &["10a1"]);

    assert_eq!(doc.blocks[0], Block::heading(0, TITLE));
    assert_eq!(doc.blocks[1].text(), "[INSERT CASE CAPTION HERE]");
    assert_eq!(doc.blocks[2].text(), "Date: July 01, 2024");
    assert_eq!(doc.blocks[3], Block::heading(1, INTRODUCTION_HEADING));
    assert_eq!(
        doc.blocks[4].text(),
        "Movant hereby moves this Court to vacate the arbitration award dated June 15, 2024 \
pursuant to the Federal Arbitration Act, 9 U.S.C. § 10."
    );
    assert_eq!(doc.headings(1), vec!["I. INTRODUCTION", "II. ARGUMENT", "III. CONCLUSION"]);

    let last = doc.blocks.last().expect("non-empty draft");
    assert_eq!(last.text(), CONCLUSION);
}

#[test]
fn each_selected_ground_yields_one_four_block_argument_in_order() {
    let catalog = GroundCatalog::embedded().unwrap();
    let selection = ["10a4", "10a1", "10a3"];
    let doc = draft(&catalog, &selection);
    let section = argument_section(&doc);

    assert_eq!(section.len(), selection.len() * 4);
    for (chunk, code) in section.chunks(4).zip(selection) {
        let ground = catalog.lookup(code).unwrap();
        assert_eq!(chunk[0], Block::heading(2, ground.argument_header.as_str()));

        let body = chunk[1].text();
        assert!(body.starts_with(&format!("Under {}, ", ground.section)));
        assert!(body.contains(&ground.title.to_lowercase()));
        assert!(body.ends_with(&ground.standard));

        match &chunk[2] {
            Block::Paragraph { style, .. } => assert_eq!(*style, ParagraphStyle::IntenseQuote),
            other => panic!("expected citation paragraph, got {:?}", other),
        }
        assert_eq!(chunk[2].text(), format!("See generally {}.", ground.case_cite));
        assert_eq!(chunk[3].text(), FACTS_PLACEHOLDER);
    }
}

#[test]
fn empty_selection_notes_no_grounds() {
    let catalog = GroundCatalog::embedded().unwrap();
    let doc = draft(&catalog, &[]);
    let section = argument_section(&doc);

    assert_eq!(section, &[Block::paragraph(NO_GROUNDS_SELECTED)]);
    assert!(doc.headings(2).is_empty());
}

#[test]
fn unknown_ground_fails_without_output() {
    let catalog = GroundCatalog::embedded().unwrap();
    let result = DocumentAssembler::new(&catalog).assemble(
        &["10a9"],
        ymd(2024, 6, 15),
        &FixedClock(ymd(2024, 7, 1)),
    );
    match result {
        Err(VacaturError::GroundNotFound(code)) => assert_eq!(code, "10a9"),
        other => panic!("expected GroundNotFound, got {:?}", other),
    }
}

#[test]
fn duplicate_grounds_are_kept() {
    let catalog = GroundCatalog::embedded().unwrap();
    let doc = draft(&catalog, &["10a1", "10a1"]);
    let section = argument_section(&doc);

    assert_eq!(section.len(), 8);
    assert_eq!(section[..4], section[4..]);
}

#[test]
fn selection_order_wins_over_catalog_order() {
    let catalog = GroundCatalog::embedded().unwrap();
    let doc = draft(&catalog, &["10a3", "10a1"]);
    assert_eq!(
        doc.headings(2),
        vec![
            "The Arbitrators Were Guilty of Misconduct.",
            "The Award Was Procured by Corruption, Fraud, or Undue Means.",
        ]
    );
}

#[test]
fn partiality_then_exceeded_powers_scenario() {
    let catalog = GroundCatalog::embedded().unwrap();
    let award = ymd(2024, 6, 15);
    assert_eq!(filing_deadline(award), ymd(2024, 9, 15));

    let doc = DocumentAssembler::new(&catalog)
        .assemble(&["10a2", "10a4"], award, &FixedClock(ymd(2024, 6, 20)))
        .unwrap();

    let outline: Vec<String> = doc
        .blocks
        .iter()
        .filter_map(|b| match b {
            Block::Heading { level, text } if *level >= 1 => Some(text.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(
        outline,
        vec![
            "I. INTRODUCTION",
            "II. ARGUMENT",
            "There Was Evident Partiality in the Arbitrators.",
            "The Arbitrators Exceeded Their Powers.",
            "III. CONCLUSION",
        ]
    );
    assert!(doc.plain_text().contains("June 15, 2024"));
    assert!(doc.plain_text().contains(
        "See generally Commonwealth Coatings Corp. v. Continental Cas. Co., 393 U.S. 145 (1968)."
    ));
    assert!(doc.plain_text().contains(
        "See generally Oxford Health Plans LLC v. Sutter, 569 U.S. 564 (2013)."
    ));
}

#[test]
fn same_inputs_same_draft() {
    let catalog = GroundCatalog::embedded().unwrap();
    assert_eq!(
        draft(&catalog, &["10a2", "10a4"]),
        draft(&catalog, &["10a2", "10a4"])
    );
}
