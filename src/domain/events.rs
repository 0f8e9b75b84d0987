//! Domain Events
//!
//! The contract every storable event fulfils, plus the id checks applied
//! before anything is written.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Integer tag identifying the concrete kind of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventType(pub i8);

impl EventType {
    pub const fn new(tag: i8) -> Self {
        Self(tag)
    }

    pub const fn value(self) -> i8 {
        self.0
    }
}

impl From<i8> for EventType {
    fn from(tag: i8) -> Self {
        Self(tag)
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An event that can be persisted by the event store.
///
/// The whole value is serialized as the stored payload, so the id fields
/// exposed here should also be fields of the type itself if the payload is
/// to be read back into the same type.
pub trait Event: Serialize {
    /// Unique identifier of this event
    fn id(&self) -> ObjectId;

    /// Identifier of the instance (aggregate) the event belongs to
    fn instance_id(&self) -> ObjectId;

    /// Type tag of the event
    fn event_type(&self) -> EventType;
}

/// The all-zero object id, standing for an unset identifier
pub fn nil_object_id() -> ObjectId {
    ObjectId::from_bytes([0u8; 12])
}

/// Check whether an identifier is usable for persistence
pub fn is_valid_id(id: &ObjectId) -> bool {
    id.bytes() != [0u8; 12]
}

/// Validate the identifiers of an event before it is written
pub fn validate_event<E: Event + ?Sized>(event: &E) -> Result<(), ValidationError> {
    let id = event.id();
    if !is_valid_id(&id) {
        return Err(ValidationError::InvalidId(id));
    }

    let instance_id = event.instance_id();
    if !is_valid_id(&instance_id) {
        return Err(ValidationError::InvalidInstanceId(instance_id));
    }

    Ok(())
}
