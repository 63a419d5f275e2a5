use thiserror::Error;

/// Why a page (or part of one) could not be turned into data.
///
/// Only `MissingIdentity` drops a whole character; the other variants are
/// logged and the affected section or entry is left out of the record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("missing character identity: {0}")]
    MissingIdentity(&'static str),
    #[error("could not find {0} section")]
    SectionNotFound(&'static str),
    #[error("could not find {0}")]
    ElementNotFound(String),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
