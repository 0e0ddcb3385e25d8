use super::SEMICOLON;

/// Decodes a semicolon-separated list field (AC accession numbers, RG
/// citation groups): lines concatenate without added separators, one
/// trailing empty element from a terminating `;` is dropped, order is
/// preserved.
pub fn decode_list(lines: &[String]) -> Vec<String> {
    let joined = lines.concat();
    if joined.is_empty() {
        return Vec::new();
    }
    let mut items: Vec<String> = SEMICOLON.split(&joined).map(str::to_string).collect();
    if items.last().is_some_and(|item| item.is_empty()) {
        items.pop();
    }
    items
}
