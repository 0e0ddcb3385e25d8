use anyhow::Result;
use std::io::Cursor;
use std::path::PathBuf;

use uniprot_extract::{ExtractorConfig, RecordOutcome, UniProtExtractor};

fn human_config() -> ExtractorConfig {
    ExtractorConfig::new(vec![PathBuf::from("in-memory.dat")], 9606, "homo_sapiens")
}

fn extractor_with(text: &str, config: ExtractorConfig) -> UniProtExtractor {
    UniProtExtractor::from_reader(Cursor::new(text.to_string()), config).unwrap()
}

fn entry_text(accessions: &str, ox_line: &str) -> String {
    [
        "ID   TEST_HUMAN              Reviewed;         100 AA.",
        &format!("AC   {accessions}"),
        &format!("OX   {ox_line}"),
        "SQ   SEQUENCE   5 AA;  500 MW;  XXXX CRC64;",
        "     MAKER",
        "//",
        "",
    ]
    .join("\n")
}

#[test]
fn unreviewed_first_accession_is_skipped_in_any_case() -> Result<()> {
    for spelling in ["unreviewed", "Unreviewed", "UNREVIEWED"] {
        let text = entry_text(&format!("{spelling}; P12345;"), "NCBI_TaxID=9606;");
        let mut extractor = extractor_with(&text, human_config());
        assert_eq!(extractor.get_next_record()?, RecordOutcome::Skip);
    }
    Ok(())
}

#[test]
fn the_unreviewed_check_can_be_disabled() -> Result<()> {
    let text = entry_text("unreviewed; P12345;", "NCBI_TaxID=9606;");

    let mut config = human_config();
    config.skip_unreviewed = false;
    let mut extractor = extractor_with(&text, config);

    let entry = extractor.get_next_record()?.into_entry().unwrap();
    assert_eq!(entry.accession_numbers, ["unreviewed", "P12345"]);
    Ok(())
}

#[test]
fn ignored_taxonomy_qualifiers_cannot_match_a_species() -> Result<()> {
    let text = entry_text("P12345;", "TaxID=9606;");
    let mut extractor = extractor_with(&text, human_config());
    assert_eq!(extractor.get_next_record()?, RecordOutcome::Skip);
    Ok(())
}

#[test]
fn any_of_several_taxonomy_entries_may_match() -> Result<()> {
    let text = entry_text("P12345;", "NCBI_TaxID=10090; NCBI_TaxID=9606;");
    let mut extractor = extractor_with(&text, human_config());
    assert!(matches!(
        extractor.get_next_record()?,
        RecordOutcome::Entry(_)
    ));
    Ok(())
}

#[test]
fn repeat_runs_over_the_same_bytes_agree() -> Result<()> {
    let text = format!(
        "{}{}{}",
        entry_text("P12345;", "NCBI_TaxID=9606;"),
        entry_text("O11111;", "NCBI_TaxID=10090;"),
        entry_text("Q22222;", "NCBI_TaxID=9606;"),
    );

    let first: Vec<RecordOutcome> =
        extractor_with(&text, human_config()).collect::<uniprot_extract::Result<_>>()?;
    let second: Vec<RecordOutcome> =
        extractor_with(&text, human_config()).collect::<uniprot_extract::Result<_>>()?;

    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
    Ok(())
}

#[test]
fn widening_the_species_filter_only_adds_entries() -> Result<()> {
    let text = format!(
        "{}{}",
        entry_text("P12345;", "NCBI_TaxID=9606;"),
        entry_text("O11111;", "NCBI_TaxID=10090; NCBI_TaxID=9606;"),
    );

    // Mouse sees only the record that also carries its taxonomy entry.
    let mouse_entries: Vec<String> = extractor_with(&text, {
        let mut config = human_config();
        config.species_id = 10090;
        config
    })
    .filter_map(|outcome| outcome.ok().and_then(RecordOutcome::into_entry))
    .map(|entry| entry.accession_numbers[0].clone())
    .collect();
    assert_eq!(mouse_entries, ["O11111"]);

    // Human sees both, in input order, including everything mouse saw
    // from the shared record.
    let human_entries: Vec<String> = extractor_with(&text, human_config())
        .filter_map(|outcome| outcome.ok().and_then(RecordOutcome::into_entry))
        .map(|entry| entry.accession_numbers[0].clone())
        .collect();
    assert_eq!(human_entries, ["P12345", "O11111"]);
    Ok(())
}
