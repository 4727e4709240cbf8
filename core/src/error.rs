//! Error types for the PDF question-answering API client.
//!
//! # Design
//! The legacy contract signalled failure by smuggling an `error` key into an
//! otherwise-arbitrary response mapping, with two fixed messages: `PDF file
//! not found` for a missing local file and `Failed to connect to API` for
//! any transport problem. Here those become enum variants; `Display` keeps
//! the exact legacy strings so callers that match on messages keep working,
//! while the variant fields retain the underlying detail for logging.
//!
//! A non-2xx HTTP status is NOT an error at this layer — the response is
//! decoded and returned with its status code, and interpretation is left to
//! the caller.

use std::fmt;
use std::path::PathBuf;

/// Coarse classification of a `ClientError`.
///
/// `Local` errors are detected before or after the round-trip (missing file,
/// undecodable body); `Transport` errors mean the round-trip itself never
/// completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Local,
    Transport,
}

/// Errors returned by `PdfQaClient` operations.
#[derive(Debug)]
pub enum ClientError {
    /// The PDF at the given local path does not exist.
    PdfNotFound { path: PathBuf },

    /// The PDF exists but could not be read (permissions, is a directory).
    FileRead { path: PathBuf, detail: String },

    /// The request never completed: connection refused, DNS failure, or the
    /// per-call timeout elapsed. A single attempt is made; there is no retry.
    Transport { detail: String },

    /// The server answered but the body was not valid JSON.
    Decode { detail: String },
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::Transport { .. } => ErrorKind::Transport,
            _ => ErrorKind::Local,
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Legacy messages, verbatim.
            ClientError::PdfNotFound { .. } => write!(f, "PDF file not found"),
            ClientError::Transport { .. } => write!(f, "Failed to connect to API"),
            ClientError::FileRead { path, detail } => {
                write!(f, "failed to read PDF file {}: {detail}", path.display())
            }
            ClientError::Decode { detail } => {
                write!(f, "response body is not valid JSON: {detail}")
            }
        }
    }
}

impl std::error::Error for ClientError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_not_found_displays_legacy_message() {
        let err = ClientError::PdfNotFound {
            path: PathBuf::from("/tmp/missing.pdf"),
        };
        assert_eq!(err.to_string(), "PDF file not found");
        assert_eq!(err.kind(), ErrorKind::Local);
    }

    #[test]
    fn transport_displays_legacy_message() {
        let err = ClientError::Transport {
            detail: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to connect to API");
        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[test]
    fn decode_is_local() {
        let err = ClientError::Decode {
            detail: "expected value at line 1".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Local);
    }
}
