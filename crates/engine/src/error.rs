//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`Query`] thrown when a read against the store fails. It carries the
//!   name of the failing operation.
//! - [`ImageNotFound`] thrown when no banner matches the requested url.
//! - [`UnsupportedBackend`] thrown when the connection is neither PostgreSQL
//!   nor SQLite.
//!
//!  [`Query`]: EngineError::Query
//!  [`ImageNotFound`]: EngineError::ImageNotFound
//!  [`UnsupportedBackend`]: EngineError::UnsupportedBackend
use sea_orm::{DbBackend, DbErr};
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("{operation}: {source}")]
    Query {
        operation: &'static str,
        #[source]
        source: DbErr,
    },
    #[error("banner image \"{0}\" not found")]
    ImageNotFound(String),
    #[error("unsupported database backend: {0:?}")]
    UnsupportedBackend(DbBackend),
}

impl EngineError {
    /// Returns a closure wrapping a [`DbErr`] into [`EngineError::Query`].
    pub(crate) fn query(operation: &'static str) -> impl FnOnce(DbErr) -> Self {
        move |source| Self::Query { operation, source }
    }
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::Query {
                    operation: a,
                    source: a_err,
                },
                Self::Query {
                    operation: b,
                    source: b_err,
                },
            ) => a == b && a_err.to_string() == b_err.to_string(),
            (Self::ImageNotFound(a), Self::ImageNotFound(b)) => a == b,
            (Self::UnsupportedBackend(a), Self::UnsupportedBackend(b)) => a == b,
            _ => false,
        }
    }
}
