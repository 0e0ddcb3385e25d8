//! Per-prefix field decoders. Each decoder is a pure function from
//! assembled content lines to a structured sub-value; none performs I/O.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ExtractError;

pub mod accessions;
pub mod crossrefs;
pub mod description;
pub mod genes;
pub mod identification;
pub mod sequence;
pub mod taxonomy;

/// `;` with optional surrounding whitespace.
pub(crate) static SEMICOLON: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*;\s*").unwrap());

/// `,` with optional surrounding whitespace.
pub(crate) static COMMA: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*,\s*").unwrap());

/// A `{...}` evidence-code block together with the whitespace in front of it.
static EVIDENCE_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\{[^{}]*\}").unwrap());

/// Removes evidence-code blocks; UniProt decorates several fields with
/// them and none survive into the structured output.
pub(crate) fn strip_evidence(text: &str) -> String {
    EVIDENCE_BLOCK.replace_all(text, "").into_owned()
}

pub(crate) fn malformed(prefix: &'static str, detail: &str) -> ExtractError {
    ExtractError::MalformedField {
        prefix,
        detail: detail.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_evidence_removes_block_and_leading_whitespace() {
        assert_eq!(strip_evidence("Test protein {ECO:0000255}"), "Test protein");
        assert_eq!(
            strip_evidence("a {ECO:1} between {ECO:2} blocks"),
            "a between blocks"
        );
        assert_eq!(strip_evidence("untouched"), "untouched");
    }
}
