use std::collections::{BTreeSet, HashMap};

use crate::error::{ExtractError, Result};
use crate::pipeline::reader::LineReader;

const TERMINATOR: &str = "//";
/// Columns 0-1 carry the field prefix, 2-4 the blank (or, on sequence
/// payload lines, digit) filler; content starts at column 5.
const CONTENT_COLUMN: usize = 5;

/// One flat-file record before field decoding: field prefix mapped to the
/// content of its lines, in input order. Present keys always map to at
/// least one line.
#[derive(Debug, Default)]
pub struct RawRecord {
    fields: HashMap<String, Vec<String>>,
}

impl RawRecord {
    fn push(&mut self, prefix: &str, content: String) {
        self.fields.entry(prefix.to_string()).or_default().push(content);
    }

    /// Content lines for `prefix`, empty when the field is absent.
    pub fn lines(&self, prefix: &str) -> &[String] {
        self.fields.get(prefix).map_or(&[], |lines| lines.as_slice())
    }

    pub fn first_line(&self, prefix: &str) -> Option<&str> {
        self.fields
            .get(prefix)
            .and_then(|lines| lines.first())
            .map(|line| line.as_str())
    }

    pub fn contains(&self, prefix: &str) -> bool {
        self.fields.contains_key(prefix)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Groups input lines into records, keyed by their two-character prefix.
/// Splits and groups only; field content is never interpreted here.
pub struct RecordAssembler {
    reader: LineReader,
    prefixes_of_interest: BTreeSet<String>,
}

impl RecordAssembler {
    pub fn new(reader: LineReader, prefixes_of_interest: BTreeSet<String>) -> Self {
        Self {
            reader,
            prefixes_of_interest,
        }
    }

    /// Returns the next complete record, or `None` at end of stream.
    ///
    /// A `//` line finalises the record under construction; consecutive
    /// terminators therefore yield records with no fields, which the
    /// caller detects. Ending the stream with buffered fields but no
    /// terminator is an error.
    pub fn next_record(&mut self) -> Result<Option<RawRecord>> {
        let mut record = RawRecord::default();
        while let Some(line) = self.reader.next_line()? {
            if line.starts_with(TERMINATOR) {
                return Ok(Some(record));
            }
            let Some(prefix) = line.get(..2) else {
                continue;
            };
            if !self.prefixes_of_interest.contains(prefix) {
                continue;
            }
            let content = line.get(CONTENT_COLUMN..).unwrap_or("").to_string();
            record.push(prefix, content);
        }
        if record.is_empty() {
            Ok(None)
        } else {
            Err(ExtractError::IncompleteRecord)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::Metrics;
    use std::io::Cursor;

    fn assembler_over(text: &str, prefixes: &[&str]) -> RecordAssembler {
        let reader =
            LineReader::from_reader(Box::new(Cursor::new(text.to_string())), Metrics::new());
        RecordAssembler::new(reader, prefixes.iter().map(|p| p.to_string()).collect())
    }

    #[test]
    fn groups_continuation_lines_under_one_prefix() {
        let text = "AC   P12345;\nAC   Q67890;\nXX   noise\n//\n";
        let mut assembler = assembler_over(text, &["AC"]);

        let record = assembler.next_record().unwrap().unwrap();
        assert_eq!(record.lines("AC"), ["P12345;", "Q67890;"]);
        assert!(!record.contains("XX"));
        assert_eq!(assembler.next_record().unwrap().map(|r| r.is_empty()), None);
    }

    #[test]
    fn consecutive_terminators_yield_an_empty_record() {
        let mut assembler = assembler_over("AC   P1;\n//\n//\n", &["AC"]);
        assert!(!assembler.next_record().unwrap().unwrap().is_empty());
        assert!(assembler.next_record().unwrap().unwrap().is_empty());
        assert!(assembler.next_record().unwrap().is_none());
    }

    #[test]
    fn missing_terminator_is_an_incomplete_record() {
        let mut assembler = assembler_over("AC   P12345;\n", &["AC"]);
        assert!(matches!(
            assembler.next_record(),
            Err(ExtractError::IncompleteRecord)
        ));
    }

    #[test]
    fn short_and_uninteresting_lines_are_discarded() {
        let mut assembler = assembler_over("X\nZZ   dropped\nAC   P1;\nAC\n//\n", &["AC"]);
        let record = assembler.next_record().unwrap().unwrap();
        // A prefix line with no content columns still counts as content.
        assert_eq!(record.lines("AC"), ["P1;", ""]);
    }

    #[test]
    fn sequence_payload_prefix_collects_payload_lines() {
        let text = "SQ   SEQUENCE   10 AA;\n     MAKER TEST        10\n//\n";
        let mut assembler = assembler_over(text, &["SQ", "  "]);
        let record = assembler.next_record().unwrap().unwrap();
        assert_eq!(record.lines("  "), ["MAKER TEST        10"]);
    }
}
