//! Domain Error Types
//!
//! Errors raised before an event reaches the database.

use mongodb::bson::oid::ObjectId;
use thiserror::Error;

/// Identifier validation failures
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Event id is unset or malformed
    #[error("Event not valid Id = {0}")]
    InvalidId(ObjectId),

    /// Instance id is unset or malformed
    #[error("Event not valid InstanceId = {0}")]
    InvalidInstanceId(ObjectId),
}

impl ValidationError {
    /// Name of the field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidId(_) => "id",
            Self::InvalidInstanceId(_) => "instance_id",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names() {
        let id = ObjectId::new();
        assert_eq!(ValidationError::InvalidId(id).field(), "id");
        assert_eq!(ValidationError::InvalidInstanceId(id).field(), "instance_id");
    }

    #[test]
    fn test_message_carries_value() {
        let id = ObjectId::new();
        let err = ValidationError::InvalidInstanceId(id);
        assert!(err.to_string().contains(&id.to_hex()));
    }
}
