use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

use super::{malformed, SEMICOLON};
use crate::error::Result;
use crate::record::CrossRef;

/// Terminator of a DR line: a final dot, optionally preceded by an
/// `[Isoform]` annotation that restricts the reference to one isoform.
static TRAILER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*?)\s*(?:\.\s*\[([^\[\]]+)\])?\.$").unwrap());

/// Decodes DR lines into per-resource cross-reference lists. Input order
/// is preserved within each resource abbreviation.
pub fn decode_crossreferences(lines: &[String]) -> Result<BTreeMap<String, Vec<CrossRef>>> {
    let mut crossreferences: BTreeMap<String, Vec<CrossRef>> = BTreeMap::new();
    for line in lines {
        let mut parts: Vec<String> = SEMICOLON.split(line).map(str::to_string).collect();
        if parts.last().is_some_and(|part| part.is_empty()) {
            parts.pop();
        }
        if parts.len() < 2 {
            return Err(malformed("DR", line));
        }

        // The final element always closes with a dot; peel it off together
        // with any isoform annotation.
        let last = parts.pop().unwrap_or_default();
        let caps = TRAILER.captures(&last).ok_or_else(|| malformed("DR", line))?;
        let target_isoform = caps.get(2).map(|m| m.as_str().to_string());
        parts.push(caps[1].to_string());

        let mut fields = parts.into_iter();
        let abbreviation = fields.next().unwrap_or_default();
        let id = fields.next().unwrap_or_default();
        let optional_info: Vec<String> = fields.collect();

        crossreferences.entry(abbreviation).or_default().push(CrossRef {
            id,
            optional_info,
            target_isoform,
        });
    }
    Ok(crossreferences)
}
