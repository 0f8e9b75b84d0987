//! Event Store Errors
//!
//! Error types for event store operations.

use mongodb::bson::oid::ObjectId;
use mongodb::error::{ErrorKind, WriteFailure};

use crate::domain::ValidationError;

/// Server code for a unique index violation
const DUPLICATE_KEY_CODE: i32 = 11000;

/// Errors that can occur in the event store
#[derive(Debug, thiserror::Error)]
pub enum EventStoreError {
    /// No envelope stored under the given id
    #[error("Event not found: {0}")]
    NotFound(ObjectId),

    /// Event failed id validation, nothing was written
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Event could not be encoded as a document
    #[error("Serialization error: {0}")]
    Serialization(#[from] mongodb::bson::ser::Error),

    /// Stored payload could not be decoded into the requested type
    #[error("Deserialization error: {0}")]
    Deserialization(#[from] mongodb::bson::de::Error),
}

impl EventStoreError {
    /// Check if this error means the event does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, EventStoreError::NotFound(_))
    }

    /// Check if this error is a validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, EventStoreError::Validation(_))
    }

    /// Check if this error is a unique index violation (e.g. duplicate id on create)
    pub fn is_duplicate_key(&self) -> bool {
        match self {
            EventStoreError::Database(e) => matches!(
                *e.kind,
                ErrorKind::Write(WriteFailure::WriteError(ref write_err))
                    if write_err.code == DUPLICATE_KEY_CODE
            ),
            _ => false,
        }
    }
}
