use bzip2::read::BzDecoder;
use flate2::read::MultiGzDecoder;
use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use xz2::read::XzDecoder;

use crate::error::{ExtractError, Result};
use crate::metrics::Metrics;

const BUFFER_SIZE: usize = 256 * 1024;

/// Reads an input stream line by line, transparent to common compression
/// formats. UniProt-KB distributions are ASCII, so bytes are decoded as
/// Latin-1 and no input byte can fail decoding.
pub struct LineReader {
    inner: Box<dyn BufRead>,
    metrics: Metrics,
    buf: Vec<u8>,
}

impl LineReader {
    /// Opens `path`, falling back to the name with `.gz` appended and then
    /// to the name with a trailing `.gz`/`.Z` stripped, in that order.
    /// Decompression is chosen by the extension of whichever candidate
    /// opens first.
    pub fn open(path: &Path, metrics: Metrics) -> Result<Self> {
        for candidate in candidate_paths(path) {
            match File::open(&candidate) {
                Ok(file) => {
                    info!("reading {}", candidate.display());
                    return Ok(Self::from_reader(decoder_for(&candidate, file), metrics));
                }
                Err(e) => {
                    debug!("candidate {} not readable: {}", candidate.display(), e);
                }
            }
        }
        Err(ExtractError::NoInput {
            path: path.to_path_buf(),
        })
    }

    /// Wraps an already-open stream, e.g. an in-memory buffer.
    pub fn from_reader(inner: Box<dyn BufRead>, metrics: Metrics) -> Self {
        Self {
            inner,
            metrics,
            buf: Vec::with_capacity(256),
        }
    }

    /// Yields the next line with its terminating `\n` (and any `\r` before
    /// it) stripped, or `None` at end of stream. Other trailing whitespace
    /// is preserved for the field decoders.
    pub fn next_line(&mut self) -> Result<Option<String>> {
        self.buf.clear();
        let n = self.inner.read_until(b'\n', &mut self.buf)?;
        if n == 0 {
            return Ok(None);
        }
        self.metrics.add_bytes_read(n as u64);

        let mut end = self.buf.len();
        if end > 0 && self.buf[end - 1] == b'\n' {
            end -= 1;
        }
        if end > 0 && self.buf[end - 1] == b'\r' {
            end -= 1;
        }
        Ok(Some(self.buf[..end].iter().map(|&b| b as char).collect()))
    }
}

fn candidate_paths(path: &Path) -> Vec<PathBuf> {
    let name = path.as_os_str().to_string_lossy();
    let mut candidates = vec![path.to_path_buf()];
    candidates.push(PathBuf::from(format!("{name}.gz")));
    for suffix in [".gz", ".Z"] {
        if let Some(stripped) = name.strip_suffix(suffix) {
            candidates.push(PathBuf::from(stripped));
        }
    }
    candidates
}

fn decoder_for(path: &Path, file: File) -> Box<dyn BufRead> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    debug!("opening {} (extension {:?})", path.display(), extension);
    match extension {
        "gz" | "Z" => Box::new(BufReader::with_capacity(
            BUFFER_SIZE,
            MultiGzDecoder::new(file),
        )),
        "bz2" => Box::new(BufReader::with_capacity(BUFFER_SIZE, BzDecoder::new(file))),
        "xz" => Box::new(BufReader::with_capacity(BUFFER_SIZE, XzDecoder::new(file))),
        _ => Box::new(BufReader::with_capacity(BUFFER_SIZE, file)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader_over(text: &str) -> LineReader {
        LineReader::from_reader(Box::new(Cursor::new(text.to_string())), Metrics::new())
    }

    #[test]
    fn strips_line_endings_but_keeps_inner_whitespace() {
        let mut reader = reader_over("AC   P12345;  \r\nSQ   line\nlast");
        assert_eq!(reader.next_line().unwrap().as_deref(), Some("AC   P12345;  "));
        assert_eq!(reader.next_line().unwrap().as_deref(), Some("SQ   line"));
        assert_eq!(reader.next_line().unwrap().as_deref(), Some("last"));
        assert_eq!(reader.next_line().unwrap(), None);
    }

    #[test]
    fn counts_bytes_including_terminators() {
        let metrics = Metrics::new();
        let mut reader =
            LineReader::from_reader(Box::new(Cursor::new("ab\ncd\n".to_string())), metrics.clone());
        while reader.next_line().unwrap().is_some() {}
        assert_eq!(metrics.bytes_read(), 6);
    }

    #[test]
    fn candidate_order_is_given_then_gz_then_stripped() {
        let candidates = candidate_paths(Path::new("uniprot.dat.gz"));
        assert_eq!(
            candidates,
            vec![
                PathBuf::from("uniprot.dat.gz"),
                PathBuf::from("uniprot.dat.gz.gz"),
                PathBuf::from("uniprot.dat"),
            ]
        );

        let candidates = candidate_paths(Path::new("uniprot.dat"));
        assert_eq!(
            candidates,
            vec![
                PathBuf::from("uniprot.dat"),
                PathBuf::from("uniprot.dat.gz"),
            ]
        );
    }
}
