//! Error types for constant generation.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::Domain;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{domain} source unavailable: {reason}")]
    SourceUnavailable { domain: Domain, reason: String },

    #[error("Name {raw:?} contains no characters usable in an identifier")]
    EmptyIdentifier { raw: String },

    #[error("Identifier {identifier} is declared more than once in scope {scope}")]
    DuplicateIdentifier { identifier: String, scope: String },

    #[error("Scope mismatch: expected to close {expected:?}, got {found:?}")]
    ScopeMismatch { expected: Option<String>, found: String },

    #[error("Scope {name} was never closed")]
    UnclosedScope { name: String },

    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn unavailable(domain: Domain, reason: impl Into<String>) -> Self {
        Error::SourceUnavailable {
            domain,
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
