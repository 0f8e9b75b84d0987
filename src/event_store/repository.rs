//! Event Store Repository
//!
//! Generic CRUD over one collection of mixed event types.
//! Payloads are reconstructed into whatever type the caller asks for.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Document};
use mongodb::{Client, Collection, IndexModel};
use serde::de::DeserializeOwned;

use crate::config::StoreOptions;
use crate::db;
use crate::domain::{validate_event, Event};

use super::envelope::{ID_FIELD, INSTANCE_ID_FIELD};
use super::{EventStoreError, StoredEnvelope};

/// Event Store for persisting and retrieving events
#[derive(Debug, Clone)]
pub struct EventStore {
    client: Client,
    events: Collection<StoredEnvelope>,
    options: StoreOptions,
}

impl EventStore {
    /// Connect using the given options and ensure indexes exist
    pub async fn connect(options: StoreOptions) -> Result<Self, EventStoreError> {
        tracing::info!(
            address = %options.address,
            database = %options.database_name,
            collection = %options.collection_name,
            "Connecting event store"
        );

        let client = db::connect(&options).await?;
        Self::with_client(&client, options).await
    }

    /// Build a store on top of an existing client
    pub async fn with_client(client: &Client, options: StoreOptions) -> Result<Self, EventStoreError> {
        let events = client
            .database(&options.database_name)
            .collection::<StoredEnvelope>(&options.collection_name);

        let store = Self {
            client: client.clone(),
            events,
            options,
        };
        store.init().await?;

        Ok(store)
    }

    /// Non-unique index on the instance id; idempotent
    async fn init(&self) -> Result<(), EventStoreError> {
        let index = IndexModel::builder()
            .keys(doc! { INSTANCE_ID_FIELD: 1 })
            .build();

        self.events.create_index(index).await?;

        tracing::info!(collection = %self.events.name(), "Instance index ensured");
        Ok(())
    }

    /// Options this store was created with
    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Underlying client, shared with the store's pool
    pub fn client(&self) -> &Client {
        &self.client
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Insert a new event
    pub async fn create<E: Event + ?Sized>(&self, event: &E) -> Result<(), EventStoreError> {
        validate_event(event)?;
        let envelope = StoredEnvelope::seal(event)?;

        self.events.insert_one(&envelope).await?;

        tracing::debug!(
            event_id = %envelope.id,
            instance_id = %envelope.instance_id,
            event_type = %envelope.event_type,
            "Event created"
        );
        Ok(())
    }

    /// Replace the stored event that has the same id.
    ///
    /// Returns `NotFound` when no event with that id exists.
    pub async fn update<E: Event + ?Sized>(&self, event: &E) -> Result<(), EventStoreError> {
        validate_event(event)?;
        let envelope = StoredEnvelope::seal(event)?;

        let result = self
            .events
            .replace_one(doc! { ID_FIELD: envelope.id }, &envelope)
            .await?;

        if result.matched_count == 0 {
            return Err(EventStoreError::NotFound(envelope.id));
        }

        tracing::debug!(event_id = %envelope.id, "Event replaced");
        Ok(())
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Load one event and decode it into `T`
    pub async fn get<T: DeserializeOwned>(&self, id: ObjectId) -> Result<T, EventStoreError> {
        let envelope = self
            .events
            .find_one(doc! { ID_FIELD: id })
            .await?
            .ok_or(EventStoreError::NotFound(id))?;

        envelope.open()
    }

    /// Load every stored event, decoding each into `T`
    pub async fn list<T: DeserializeOwned>(&self) -> Result<Vec<T>, EventStoreError> {
        self.fetch(Document::new()).await
    }

    /// Load the events matching a query document, decoding each into `T`.
    ///
    /// The filter is handed to the server untouched. Payload fields live
    /// under `raw`, e.g. `doc! { "raw.text": "hello" }`.
    pub async fn list_filtered<T: DeserializeOwned>(
        &self,
        filter: Document,
    ) -> Result<Vec<T>, EventStoreError> {
        self.fetch(filter).await
    }

    /// Load all events of one instance
    pub async fn list_by_instance<T: DeserializeOwned>(
        &self,
        instance_id: ObjectId,
    ) -> Result<Vec<T>, EventStoreError> {
        self.fetch(doc! { INSTANCE_ID_FIELD: instance_id }).await
    }

    /// Run a find and reconstruct each envelope, in cursor order
    async fn fetch<T: DeserializeOwned>(&self, filter: Document) -> Result<Vec<T>, EventStoreError> {
        let mut cursor = self.events.find(filter).await?;

        let mut events = Vec::new();
        while cursor.advance().await? {
            let envelope: StoredEnvelope = cursor.deserialize_current()?;
            events.push(envelope.open()?);
        }

        tracing::debug!(
            collection = %self.events.name(),
            count = events.len(),
            "Events listed"
        );
        Ok(events)
    }
}
