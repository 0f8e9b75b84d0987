//! Common test utilities

use mongo_event_store::domain::{Event, EventType};
use mongo_event_store::{EventStore, StoreOptions};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

pub const TEST_DATABASE: &str = "event-sourcing-test";
pub const TEST_COLLECTION: &str = "tests";

/// Event used across the integration tests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestEvent {
    pub id: ObjectId,
    pub instance_id: ObjectId,
    pub string: String,
}

impl TestEvent {
    pub fn new(string: impl Into<String>) -> Self {
        Self {
            id: ObjectId::new(),
            instance_id: ObjectId::new(),
            string: string.into(),
        }
    }
}

impl Event for TestEvent {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn instance_id(&self) -> ObjectId {
        self.instance_id
    }

    fn event_type(&self) -> EventType {
        EventType(101)
    }
}

pub fn test_options() -> StoreOptions {
    dotenvy::dotenv().ok();
    let address = std::env::var("MONGODB_ADDRESS").unwrap_or_else(|_| "localhost:27017".to_string());

    StoreOptions::new()
        .with_address(address)
        .with_database_name(TEST_DATABASE)
        .with_collection_name(TEST_COLLECTION)
}

/// Setup a store on a freshly dropped test collection
pub async fn setup_test_store() -> EventStore {
    let options = test_options();

    let client = mongo_event_store::db::connect(&options)
        .await
        .expect("Failed to build client");

    client
        .database(TEST_DATABASE)
        .collection::<mongodb::bson::Document>(TEST_COLLECTION)
        .drop()
        .await
        .expect("Failed to drop test collection");

    EventStore::with_client(&client, options)
        .await
        .expect("Failed to initialise event store")
}
