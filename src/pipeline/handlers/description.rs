use once_cell::sync::Lazy;
use regex::Regex;

use super::strip_evidence;

/// A name-bearing DE line. Indentation marks names that belong to a
/// Contains/Includes sub-section rather than to the entry itself.
static NAME_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*)(?:RecName|SubName):\s*Full=([^;]+)").unwrap());

/// Reduces a DE block to the single descriptive string downstream loaders
/// consume: top-level names joined with `;`, one space, then sub-section
/// names joined with spaces. Absent when no DE line carries a name.
pub fn decode_description(lines: &[String]) -> Option<String> {
    let mut top_level: Vec<String> = Vec::new();
    let mut sub_names: Vec<String> = Vec::new();

    for line in lines {
        let Some(caps) = NAME_LINE.captures(line) else {
            continue;
        };
        let name = strip_evidence(&caps[2]);
        if caps[1].is_empty() {
            top_level.push(name);
        } else {
            sub_names.push(name);
        }
    }

    if top_level.is_empty() && sub_names.is_empty() {
        return None;
    }
    Some(format!("{} {}", top_level.join(";"), sub_names.join(" ")))
}
