use once_cell::sync::Lazy;
use regex::Regex;

use super::malformed;
use crate::error::Result;
use crate::record::SequenceKind;

/// SQ header, e.g. `SEQUENCE   256 AA;  29735 MW;  B4840739BF7D4121 CRC64;`
/// The unit after the length tells peptides (AA) from nucleotides (BP).
static SQ_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^sequence\s+\d+\s+(\w+);").unwrap());

/// Residue count some distributions append to payload lines.
static TRAILING_COUNT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+\d+\s*$").unwrap());

pub fn decode_sequence_kind(line: &str) -> Result<SequenceKind> {
    let caps = SQ_HEADER.captures(line).ok_or_else(|| malformed("SQ", line))?;
    Ok(match caps[1].to_ascii_uppercase().as_str() {
        "AA" => SequenceKind::Peptide,
        "BP" => SequenceKind::Dna,
        _ => SequenceKind::Undefined,
    })
}

/// Concatenates payload lines into the bare residue string: trailing
/// counts go first, then every remaining whitespace character.
pub fn decode_sequence_payload(lines: &[String]) -> String {
    let mut seq = String::new();
    for line in lines {
        let line = TRAILING_COUNT.replace(line, "");
        seq.extend(line.chars().filter(|c| !c.is_whitespace()));
    }
    seq
}
