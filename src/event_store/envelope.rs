//! Stored Envelope
//!
//! The persisted shape of an event: identifiers and type tag lifted out for
//! indexing, plus the untouched payload as an embedded document.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::{self, Document};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::domain::{Event, EventType};

use super::EventStoreError;

/// Field names of the persisted document
pub const ID_FIELD: &str = "_id";
pub const INSTANCE_ID_FIELD: &str = "instanceid";
pub const TYPE_FIELD: &str = "type";
pub const RAW_FIELD: &str = "raw";

/// One event as stored in the collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredEnvelope {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    #[serde(rename = "instanceid")]
    pub instance_id: ObjectId,

    #[serde(rename = "type")]
    pub event_type: EventType,

    /// Full serialized event, id fields included
    pub raw: Document,
}

impl StoredEnvelope {
    /// Wrap an event for storage
    pub fn seal<E: Event + ?Sized>(event: &E) -> Result<Self, EventStoreError> {
        let raw = bson::to_document(event)?;
        Ok(Self {
            id: event.id(),
            instance_id: event.instance_id(),
            event_type: event.event_type(),
            raw,
        })
    }

    /// Decode the payload into any type whose field names match
    pub fn open<T: DeserializeOwned>(self) -> Result<T, EventStoreError> {
        Ok(bson::from_document(self.raw)?)
    }

    /// Decode without consuming the envelope
    pub fn open_ref<T: DeserializeOwned>(&self) -> Result<T, EventStoreError> {
        self.clone().open()
    }
}
