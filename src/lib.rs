//! mongo_event_store Library
//!
//! Stores heterogeneous events in one MongoDB collection and reads them
//! back into caller-chosen types.

pub mod config;
pub mod db;
pub mod domain;
pub mod event_store;

pub use config::{ConfigError, StoreOptions};
pub use domain::{Event, EventType, ValidationError};
pub use event_store::{EventStore, EventStoreError, StoredEnvelope};
