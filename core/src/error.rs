//! Error type for building, sending, and reading a request.
//!
//! # Design
//! Each stage of a send has its own variant so callers can tell them apart,
//! but every variant carries a ready-to-display message. The front-end shows
//! all of them the same way, as `Error: <message>`.

use std::fmt;

/// Errors returned by `RestClient` and header parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The header text was not a JSON object of string values.
    InvalidHeaders(String),

    /// The method, URL, or a header could not be turned into a request.
    InvalidRequest(String),

    /// The request did not complete within the configured timeout.
    Timeout(String),

    /// Connection, DNS, or TLS failure before a response arrived.
    Transport(String),

    /// The connection failed while the response body was being read.
    BodyRead(String),

    /// The underlying HTTP client could not be created.
    ClientInit(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::InvalidHeaders(msg) => write!(f, "invalid headers: {msg}"),
            ClientError::InvalidRequest(msg) => write!(f, "invalid request: {msg}"),
            ClientError::Timeout(msg) => write!(f, "request timed out: {msg}"),
            ClientError::Transport(msg) => write!(f, "request failed: {msg}"),
            ClientError::BodyRead(msg) => {
                write!(f, "failed to read response body: {msg}")
            }
            ClientError::ClientInit(msg) => {
                write!(f, "failed to create HTTP client: {msg}")
            }
        }
    }
}

impl std::error::Error for ClientError {}
