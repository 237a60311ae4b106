//! Error types shared by every stage of a save or load.

use std::path::PathBuf;

/// Result alias used throughout the library
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can abort a save, load or transfer.
///
/// Nothing in the library catches these: the first error ends the action
/// and is handed back to the caller.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The HTTP request never produced a response (connect, timeout, body read)
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status
    #[error("{url} returned {status}: {body}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    /// A payload was not valid JSON
    #[error("failed to parse {what}: {source}")]
    Parse {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    /// A payload parsed but lacks a field the operation depends on
    #[error("{what} is missing required field '{field}'")]
    MissingField { what: String, field: &'static str },

    /// The directory to load from does not exist
    #[error("input directory does not exist: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// Local file or directory I/O failed
    #[error("{action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The archive or the object store is not in the expected state
    #[error("transfer failed: {0}")]
    Transfer(String),

    /// A document id that cannot be carried as a URL path segment
    #[error("'{0}' cannot be used as a document id")]
    DocumentId(String),

    /// The HTTP client could not be configured
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    /// A URL could not be built from the configured endpoint
    #[error("invalid URL {url}: {source}")]
    Url {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl Error {
    pub(crate) fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }

    pub(crate) fn parse(what: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Parse {
            what: what.into(),
            source,
        }
    }

    pub(crate) fn missing_field(what: impl Into<String>, field: &'static str) -> Self {
        Self::MissingField {
            what: what.into(),
            field,
        }
    }

    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// True for connection failures and non-2xx answers
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Status { .. })
    }

    /// True for malformed payloads, including payloads missing a required field
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::MissingField { .. })
    }

    /// True for missing input directories and local I/O failures
    pub fn is_filesystem(&self) -> bool {
        matches!(self, Self::DirectoryNotFound(_) | Self::Io { .. })
    }
}
