use thiserror::Error;

/// Errors raised while reading host-supplied source data.
///
/// Tokenization never fails. The trend aggregator consumes these errors
/// itself (skipping the affected group or entry), so they only surface to
/// callers that read source groups directly.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Parser Error: {0}")]
    ParserError(String),

    #[error("Source Unavailable: {0}")]
    SourceUnavailable(String),

    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Other Error: {0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::ParserError(err.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::ParserError(err.to_string())
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Error {
        Error::Other(msg.to_string())
    }
}
