use log::trace;
use std::collections::BTreeSet;
use std::io::BufRead;

use crate::config::{ExtractorConfig, SEQUENCE_PAYLOAD_PREFIX};
use crate::error::{ExtractError, Result};
use crate::metrics::Metrics;
use crate::pipeline::assembler::{RawRecord, RecordAssembler};
use crate::pipeline::handlers::{
    accessions, crossrefs, description, genes, identification, sequence, taxonomy,
};
use crate::pipeline::reader::LineReader;
use crate::record::{EntryQuality, RecordOutcome, SequenceData, SequenceKind, StructuredEntry};

/// Pull-based extractor over one UniProt-KB flat file.
///
/// Drives the line reader and record assembler, validates mandatory
/// prefixes, filters by species before running the expensive decoders,
/// and hands each surviving record to the caller as a [`StructuredEntry`].
/// The underlying stream is released when the extractor is dropped, so
/// release happens on any scope exit; [`UniProtExtractor::close`] makes
/// that explicit.
pub struct UniProtExtractor {
    assembler: RecordAssembler,
    mandatory_prefixes: BTreeSet<String>,
    species_id: u32,
    species_name: String,
    skip_unreviewed: bool,
    metrics: Metrics,
}

impl UniProtExtractor {
    /// Opens the first configured file, resolving compressed variants.
    pub fn open(config: ExtractorConfig) -> Result<Self> {
        config.validate()?;
        let metrics = Metrics::new();
        let reader = LineReader::open(&config.file_names[0], metrics.clone())?;
        Ok(Self::from_parts(reader, config, metrics))
    }

    /// Drives the extractor over an already-open stream, e.g. an
    /// in-memory buffer. `file_names` is carried but not consumed.
    pub fn from_reader<R: BufRead + 'static>(input: R, config: ExtractorConfig) -> Result<Self> {
        config.validate()?;
        let metrics = Metrics::new();
        let reader = LineReader::from_reader(Box::new(input), metrics.clone());
        Ok(Self::from_parts(reader, config, metrics))
    }

    fn from_parts(reader: LineReader, config: ExtractorConfig, metrics: Metrics) -> Self {
        let assembler = RecordAssembler::new(reader, config.prefixes_of_interest());
        Self {
            assembler,
            mandatory_prefixes: config.mandatory_prefixes,
            species_id: config.species_id,
            species_name: config.species_name,
            skip_unreviewed: config.skip_unreviewed,
            metrics,
        }
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn species_name(&self) -> &str {
        &self.species_name
    }

    /// Returns the next structured entry, a skip marker for filtered
    /// records, or the end of the input.
    ///
    /// Errors are fatal to the batch: the grammar offers no unambiguous
    /// resynchronisation point inside a corrupt record, so no attempt is
    /// made to recover past one.
    pub fn get_next_record(&mut self) -> Result<RecordOutcome> {
        let Some(record) = self.assembler.next_record()? else {
            return Ok(RecordOutcome::EndOfInput);
        };
        self.metrics.inc_records();

        // A bare terminator assembles into a record with no fields; it
        // cannot match any species.
        if record.is_empty() {
            self.metrics.inc_skipped();
            return Ok(RecordOutcome::Skip);
        }

        for prefix in &self.mandatory_prefixes {
            if !record.contains(prefix) {
                return Err(ExtractError::MissingField {
                    prefix: prefix.clone(),
                });
            }
        }

        let accession_numbers = accessions::decode_list(record.lines("AC"));
        if self.skip_unreviewed {
            if let Some(first) = accession_numbers.first() {
                if first.eq_ignore_ascii_case("unreviewed") {
                    trace!("skipping record: unreviewed first accession");
                    self.metrics.inc_skipped();
                    return Ok(RecordOutcome::Skip);
                }
            }
        }

        let taxonomy_ids = taxonomy::decode_taxonomy_ids(record.lines("OX"))?;
        if !taxonomy_ids.contains(&self.species_id) {
            trace!(
                "skipping record {:?}: taxonomy {:?} does not match species {}",
                accession_numbers.first(),
                taxonomy_ids,
                self.species_id
            );
            self.metrics.inc_skipped();
            return Ok(RecordOutcome::Skip);
        }

        let entry = decode_entry(&record, accession_numbers)?;
        self.metrics.inc_entries();
        Ok(RecordOutcome::Entry(entry))
    }

    /// Releases the underlying stream. Dropping the extractor has the
    /// same effect.
    pub fn close(self) {}
}

impl Iterator for UniProtExtractor {
    type Item = Result<RecordOutcome>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.get_next_record() {
            Ok(RecordOutcome::EndOfInput) => None,
            other => Some(other),
        }
    }
}

/// Runs the remaining decoders over a record that passed the species
/// filter and builds the public entry.
fn decode_entry(record: &RawRecord, accession_numbers: Vec<String>) -> Result<StructuredEntry> {
    let citation_groups = accessions::decode_list(record.lines("RG"));
    let crossreferences = crossrefs::decode_crossreferences(record.lines("DR"))?;
    let description = description::decode_description(record.lines("DE"));
    let gene_names = genes::decode_gene_names(record.lines("GN"))?;

    let status = record
        .first_line("ID")
        .map(identification::decode_status)
        .transpose()?;
    let evidence_level = record
        .first_line("PE")
        .map(identification::decode_evidence_level)
        .transpose()?;

    let kind = record
        .first_line("SQ")
        .map(sequence::decode_sequence_kind)
        .transpose()?
        .unwrap_or(SequenceKind::Undefined);
    let seq = sequence::decode_sequence_payload(record.lines(SEQUENCE_PAYLOAD_PREFIX));

    Ok(StructuredEntry {
        accession_numbers,
        citation_groups,
        crossreferences,
        description,
        gene_names,
        quality: EntryQuality {
            status,
            evidence_level,
        },
        sequence: SequenceData { kind, seq },
    })
}
