// src/mirror/error.rs
// =============================================================================
// Errors that can stop a mirror run.
//
// Every variant is fatal: the walker never catches any of them, so the first
// failure anywhere in the tree unwinds all the way back to main. The variants
// exist so the message tells you WHICH url or path failed.
// =============================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MirrorError {
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("failed to create directory {path}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("anchor #{index} on {location} has no href attribute")]
    MissingHref { location: String, index: usize },

    #[error("failed to write {path}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
