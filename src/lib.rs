//! Streaming extractor for UniProt-KB flat-file records.
//!
//! The flat file is a sequence of records terminated by `//` lines, each
//! record a bundle of fields keyed by two-character line prefixes with
//! grammars that differ field by field. [`UniProtExtractor`] reads one
//! record at a time, filters by species before decoding the expensive
//! fields, and emits an input-format-independent [`StructuredEntry`] for
//! a downstream cross-reference loader to consume.

pub mod config;
pub mod error;
pub mod metrics;
pub mod pipeline;
pub mod record;

pub use config::ExtractorConfig;
pub use error::{ExtractError, Result};
pub use pipeline::extractor::UniProtExtractor;
pub use record::{
    CrossRef, EntryQuality, GeneNameGroup, RecordOutcome, ReviewStatus, SequenceData,
    SequenceKind, StructuredEntry,
};
