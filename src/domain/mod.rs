//! Domain module
//!
//! Event contract and validation rules.

pub mod error;
pub mod events;

pub use error::ValidationError;
pub use events::{is_valid_id, nil_object_id, validate_event, Event, EventType};
