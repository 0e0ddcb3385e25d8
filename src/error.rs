use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no readable input for {}: tried the name as given, with .gz appended, and with a trailing .gz/.Z stripped", path.display())]
    NoInput { path: PathBuf },

    #[error("input ended inside an unterminated record")]
    IncompleteRecord,

    #[error("mandatory field {prefix:?} missing from record")]
    MissingField { prefix: String },

    #[error("malformed {prefix} field: {detail:?}")]
    MalformedField {
        prefix: &'static str,
        detail: String,
    },

    #[error("unknown taxonomy database qualifier: {qualifier:?}")]
    UnknownTaxonDb { qualifier: String },

    #[error("invalid extractor configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
