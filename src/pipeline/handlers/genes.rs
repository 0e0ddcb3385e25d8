use super::{malformed, COMMA};
use crate::error::Result;
use crate::record::GeneNameGroup;

/// A GN line holding exactly this content separates gene-name groups.
const GROUP_SEPARATOR: &str = "and";

/// Decodes GN lines into gene-name groups. Lines between separators
/// concatenate without added whitespace and parse as `Key=Value;` tokens;
/// `Name` holds a scalar, every other key a comma-separated list.
pub fn decode_gene_names(lines: &[String]) -> Result<Vec<GeneNameGroup>> {
    let mut groups = Vec::new();
    let mut buffer = String::new();

    for line in lines {
        if line.trim() == GROUP_SEPARATOR {
            flush_group(&mut buffer, &mut groups)?;
        } else {
            buffer.push_str(line);
        }
    }
    flush_group(&mut buffer, &mut groups)?;

    Ok(groups)
}

fn flush_group(buffer: &mut String, groups: &mut Vec<GeneNameGroup>) -> Result<()> {
    let text = std::mem::take(buffer);
    let group = parse_group(&text)?;
    if !group.is_empty() {
        groups.push(group);
    }
    Ok(())
}

fn parse_group(text: &str) -> Result<GeneNameGroup> {
    let mut group = GeneNameGroup::default();

    for token in text.split(';') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let (key, value) = token.split_once('=').ok_or_else(|| malformed("GN", token))?;
        let key = key.trim();
        let value = value.trim();

        if key == "Name" {
            group.name = Some(value.to_string());
            continue;
        }

        let values: Vec<String> = COMMA.split(value).map(str::to_string).collect();
        match key {
            "Synonyms" => group.synonyms = values,
            "OrderedLocusNames" => group.ordered_locus_names = values,
            "ORFNames" => group.orf_names = values,
            other => {
                group.other.insert(other.to_string(), values);
            }
        }
    }

    if !group.synonyms.is_empty() && group.name.is_none() {
        return Err(malformed("GN", text));
    }
    Ok(group)
}
