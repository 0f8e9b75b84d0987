//! Event Store module
//!
//! Persistence layer for events.
//! Handles storing and retrieving events from MongoDB.

mod envelope;
mod error;
mod repository;

pub use envelope::{StoredEnvelope, ID_FIELD, INSTANCE_ID_FIELD, RAW_FIELD, TYPE_FIELD};
pub use error::EventStoreError;
pub use repository::EventStore;
