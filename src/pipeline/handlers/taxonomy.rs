use super::{malformed, strip_evidence};
use crate::error::{ExtractError, Result};

/// How a taxonomy-database qualifier translates into an Ensembl taxonomy id.
#[derive(Debug, Clone, Copy)]
enum QualifierRule {
    /// The code already is the Ensembl taxonomy id.
    Identity,
    /// Recognised, but contributes no taxonomy id.
    Ignored,
}

/// Taxonomy databases accepted on OX lines. `NCBI_TaxID` codes map
/// one-to-one onto Ensembl taxonomy ids; the bare `TaxID` alias seen in
/// third-party dumps is recognised and dropped. Read-only process-wide
/// state.
static TAXONOMY_DBS: &[(&str, QualifierRule)] = &[
    ("NCBI_TaxID", QualifierRule::Identity),
    ("TaxID", QualifierRule::Ignored),
];

/// Decodes OX lines into the taxonomy ids they reference, in input order.
/// Records may carry several entries; all of them are collected, so a
/// record matches a species as soon as any entry does.
pub fn decode_taxonomy_ids(lines: &[String]) -> Result<Vec<u32>> {
    let mut ids = Vec::new();
    for line in lines {
        let cleaned = strip_evidence(line);
        for entry in cleaned.split(';') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            let (qualifier, code) = match entry.split_once('=') {
                Some((qualifier, code)) => (qualifier.trim(), code.trim()),
                None => (entry, ""),
            };

            let rule = TAXONOMY_DBS
                .iter()
                .find(|(name, _)| *name == qualifier)
                .map(|(_, rule)| *rule)
                .ok_or_else(|| ExtractError::UnknownTaxonDb {
                    qualifier: qualifier.to_string(),
                })?;

            match rule {
                QualifierRule::Ignored => {}
                QualifierRule::Identity => {
                    if code.is_empty() {
                        return Err(malformed("OX", entry));
                    }
                    ids.push(code.parse().map_err(|_| malformed("OX", entry))?);
                }
            }
        }
    }
    Ok(ids)
}
