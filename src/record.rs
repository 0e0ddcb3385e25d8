use serde::Serialize;
use std::collections::BTreeMap;

/// A database cross-reference from one DR line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossRef {
    /// Identifier within the target resource, e.g. an Ensembl transcript id.
    pub id: String,
    /// Any further fields carried on the line, terminator dot removed.
    pub optional_info: Vec<String>,
    /// Isoform the reference is restricted to, from a trailing `[Accession-N]`.
    pub target_isoform: Option<String>,
}

/// One gene-name group from a GN block.
///
/// UniProt separates groups describing distinct genes with an `and` line;
/// each group carries `Name`, `Synonyms`, `OrderedLocusNames` and `ORFNames`
/// tokens. Tokens outside that set land in `other` untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeneNameGroup {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Synonyms", skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,
    #[serde(rename = "OrderedLocusNames", skip_serializing_if = "Vec::is_empty")]
    pub ordered_locus_names: Vec<String>,
    #[serde(rename = "ORFNames", skip_serializing_if = "Vec::is_empty")]
    pub orf_names: Vec<String>,
    #[serde(flatten)]
    pub other: BTreeMap<String, Vec<String>>,
}

impl GeneNameGroup {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.synonyms.is_empty()
            && self.ordered_locus_names.is_empty()
            && self.orf_names.is_empty()
            && self.other.is_empty()
    }
}

/// Curation status from the ID line: SwissProt entries are `Reviewed`,
/// TrEMBL entries `Unreviewed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReviewStatus {
    Reviewed,
    Unreviewed,
}

/// Entry quality: curation status plus the 1-5 protein-existence level
/// from the PE line. Either half may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EntryQuality {
    pub status: Option<ReviewStatus>,
    pub evidence_level: Option<u8>,
}

/// What the SQ header declared the sequence to be.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceKind {
    Peptide,
    Dna,
    #[default]
    Undefined,
}

/// The decorated sequence payload, reduced to bare residues.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SequenceData {
    #[serde(rename = "type")]
    pub kind: SequenceKind,
    pub seq: String,
}

/// Input-format-independent view of one UniProt-KB entry.
///
/// Every ordered collection preserves the order fields appeared in the
/// source record. The first accession number is the primary one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StructuredEntry {
    pub accession_numbers: Vec<String>,
    pub citation_groups: Vec<String>,
    pub crossreferences: BTreeMap<String, Vec<CrossRef>>,
    pub description: Option<String>,
    pub gene_names: Vec<GeneNameGroup>,
    pub quality: EntryQuality,
    pub sequence: SequenceData,
}

/// Result of one pull on the extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// A fully decoded record matching the configured species.
    Entry(StructuredEntry),
    /// A record that assembled cleanly but was filtered out.
    Skip,
    /// The input stream is exhausted.
    EndOfInput,
}

impl RecordOutcome {
    pub fn into_entry(self) -> Option<StructuredEntry> {
        match self {
            RecordOutcome::Entry(entry) => Some(entry),
            _ => None,
        }
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, RecordOutcome::Skip)
    }
}
