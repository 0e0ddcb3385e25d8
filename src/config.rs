use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::error::{ExtractError, Result};

/// Sequence payload lines carry two blanks where other lines carry a
/// two-letter field code.
pub const SEQUENCE_PAYLOAD_PREFIX: &str = "  ";

/// Caller-provided settings for one extractor instance.
///
/// Only the first entry of `file_names` is consumed; the rest are carried
/// for the surrounding pipeline. A prefix listed in both prefix sets is
/// treated as mandatory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Input paths; compressed variants are resolved by the line reader.
    pub file_names: Vec<PathBuf>,
    /// Prefixes every record must carry.
    #[serde(default = "default_mandatory_prefixes")]
    pub mandatory_prefixes: BTreeSet<String>,
    /// Prefixes kept when present, tolerated when absent.
    #[serde(default = "default_optional_prefixes")]
    pub optional_prefixes: BTreeSet<String>,
    /// Ensembl taxonomy id records must match.
    pub species_id: u32,
    /// Species name, carried through for the caller; not used to filter.
    pub species_name: String,
    /// Drop records whose first accession reads `unreviewed`. The check
    /// predates reliable ID-line status flags and may be retired, hence
    /// the switch.
    #[serde(default = "default_skip_unreviewed")]
    pub skip_unreviewed: bool,
}

/// The production mandatory set: identification, accessions, taxonomy,
/// sequence header and sequence payload.
pub fn default_mandatory_prefixes() -> BTreeSet<String> {
    ["ID", "AC", "OX", "SQ", SEQUENCE_PAYLOAD_PREFIX]
        .iter()
        .map(|p| p.to_string())
        .collect()
}

/// The production optional set: description, cross-references, gene names,
/// protein existence and citation groups.
pub fn default_optional_prefixes() -> BTreeSet<String> {
    ["DE", "DR", "GN", "PE", "RG"]
        .iter()
        .map(|p| p.to_string())
        .collect()
}

fn default_skip_unreviewed() -> bool {
    true
}

impl ExtractorConfig {
    /// Settings with the production prefix sets.
    pub fn new(file_names: Vec<PathBuf>, species_id: u32, species_name: impl Into<String>) -> Self {
        Self {
            file_names,
            mandatory_prefixes: default_mandatory_prefixes(),
            optional_prefixes: default_optional_prefixes(),
            species_id,
            species_name: species_name.into(),
            skip_unreviewed: default_skip_unreviewed(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.file_names.is_empty() {
            return Err(ExtractError::InvalidConfig(
                "file_names must not be empty".to_string(),
            ));
        }
        for prefix in self.mandatory_prefixes.iter().chain(&self.optional_prefixes) {
            if prefix.chars().count() != 2 {
                return Err(ExtractError::InvalidConfig(format!(
                    "field prefix {prefix:?} must be exactly two characters"
                )));
            }
        }
        Ok(())
    }

    /// All prefixes the record assembler should keep.
    pub fn prefixes_of_interest(&self) -> BTreeSet<String> {
        self.mandatory_prefixes
            .union(&self.optional_prefixes)
            .cloned()
            .collect()
    }
}
