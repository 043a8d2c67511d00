//! Error types for FieldLine.
//!
//! Errors are split by when they can happen:
//!
//! - [`MenuError`]: request-time resolution failures. These are a normal
//!   outcome of the session channel and are rendered into `END` responses.
//! - [`ConfigError`]: startup consistency failures in the menu or catalog.
//!   These stop the process before it serves any traffic.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::Topic;

/// A selection path that does not resolve against the menu tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    #[error("invalid selector {selector:?} at menu node `{node}`")]
    InvalidSelector { node: String, selector: String },
}

/// The menu definition or content catalog is inconsistent.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no catalog entry for topic `{0}`")]
    UnknownTopic(Topic),

    #[error("catalog defines topic `{0}` more than once")]
    DuplicateTopic(Topic),

    #[error("catalog entry for topic `{0}` must contain the {{message}} placeholder")]
    MissingPlaceholder(Topic),

    #[error("selector {selector:?} under menu node `{node}` is not a single digit")]
    BadSelector { node: String, selector: char },

    #[error("selector '{selector}' is used twice under menu node `{node}`")]
    DuplicateSelector { node: String, selector: char },

    #[error("menu node `{node}` is {depth} levels deep (limit {limit})")]
    TooDeep {
        node: String,
        depth: usize,
        limit: usize,
    },

    #[error("menu branch `{0}` has no options")]
    EmptyBranch(String),

    #[error("menu root must be a branch")]
    RootNotBranch,

    #[error("failed to read catalog file {path}: {source}")]
    CatalogIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file {path}: {source}")]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A request the HTTP gateway could not accept.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("malformed request: {0}")]
    MalformedRequest(String),
}
