use once_cell::sync::Lazy;
use regex::Regex;

use super::malformed;
use crate::error::Result;
use crate::record::ReviewStatus;

/// Entry name followed by the curation status, e.g.
/// `TEST_HUMAN              Reviewed;         100 AA.`
static ID_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9A-Z_]+\s+(Reviewed|Unreviewed)\s*;").unwrap());

/// Protein-existence level, e.g. `1: Evidence at protein level;`
static PE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([1-5])\s*:").unwrap());

pub fn decode_status(line: &str) -> Result<ReviewStatus> {
    let caps = ID_LINE.captures(line).ok_or_else(|| malformed("ID", line))?;
    Ok(match &caps[1] {
        "Reviewed" => ReviewStatus::Reviewed,
        _ => ReviewStatus::Unreviewed,
    })
}

pub fn decode_evidence_level(line: &str) -> Result<u8> {
    let caps = PE_LINE.captures(line).ok_or_else(|| malformed("PE", line))?;
    caps[1].parse().map_err(|_| malformed("PE", line))
}
