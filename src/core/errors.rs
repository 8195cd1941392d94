use std::path::PathBuf;
use thiserror::Error;

/*-------------------------------------------------------------------------------------------------
  Errors and Results
-------------------------------------------------------------------------------------------------*/

/// One variant per pipeline stage failure. Every variant maps to a distinct process exit
/// status so automation can tell the failure stages apart.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure (connect, TLS, timeout) on either HTTP request.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Non-success HTTP response status.
    #[error("HTTP status {status} from {url}")]
    HttpStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    /// No anchor on the confirmation page links to a JSON document.
    #[error("no JSON download link found on the confirmation page")]
    LinkNotFound,

    /// The dataset response body is not valid JSON.
    #[error("dataset is not valid JSON: {0}")]
    JsonDecode(#[source] serde_json::Error),

    /// The dataset is valid JSON but does not have the expected service-tag shape.
    #[error("unexpected dataset shape: {0}")]
    InvalidDataset(String),

    /// No service tag in the dataset has the requested name.
    #[error("no service tag named {0:?} in the dataset")]
    NoMatch(String),

    /// Multiple service tags share the requested name and the match policy forbids
    /// silently taking the first.
    #[error(
        "{count} service tags named {name:?}; drop --error-on-multiple-matches to take the first"
    )]
    AmbiguousMatch { name: String, count: usize },

    /// Failed to read a local dataset file.
    #[error("failed to read dataset file {path:?}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the rendered policy document.
    #[error("failed to write {path:?}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/*--------------------------------------------------------------------------------------
  Exit Codes
--------------------------------------------------------------------------------------*/

impl Error {
    /// Process exit status for this error kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Network(_) => 2,
            Error::HttpStatus { .. } => 3,
            Error::LinkNotFound => 4,
            Error::JsonDecode(_) => 5,
            Error::InvalidDataset(_) => 6,
            Error::NoMatch(_) => 7,
            Error::AmbiguousMatch { .. } => 8,
            Error::FileRead { .. } => 9,
            Error::FileWrite { .. } => 10,
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
