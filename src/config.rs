//! Configuration module
//!
//! Connection options for the event store, with defaults and env loading.

use std::env;

/// Default MongoDB address (host:port)
pub const DEFAULT_ADDRESS: &str = "localhost:27017";

/// Default database name
pub const DEFAULT_DATABASE_NAME: &str = "event-sourcing";

/// Default collection name
pub const DEFAULT_COLLECTION_NAME: &str = "event";

/// Event store options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    /// Address of the backing store, `host:port` or a full `mongodb://` URI
    pub address: String,

    /// Database holding the event collection
    pub database_name: String,

    /// Collection holding the envelopes
    pub collection_name: String,

    /// Maximum connections in the driver pool (driver default when unset)
    pub max_pool_size: Option<u32>,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            database_name: DEFAULT_DATABASE_NAME.to_string(),
            collection_name: DEFAULT_COLLECTION_NAME.to_string(),
            max_pool_size: None,
        }
    }
}

impl StoreOptions {
    /// Create options with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the store address
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Set the database name
    pub fn with_database_name(mut self, name: impl Into<String>) -> Self {
        self.database_name = name.into();
        self
    }

    /// Set the collection name
    pub fn with_collection_name(mut self, name: impl Into<String>) -> Self {
        self.collection_name = name.into();
        self
    }

    /// Set the maximum pool size
    pub fn with_max_pool_size(mut self, size: u32) -> Self {
        self.max_pool_size = Some(size);
        self
    }

    /// Load options from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let address = env::var("EVENT_STORE_ADDRESS").unwrap_or(defaults.address);
        let database_name = env::var("EVENT_STORE_DATABASE").unwrap_or(defaults.database_name);
        let collection_name =
            env::var("EVENT_STORE_COLLECTION").unwrap_or(defaults.collection_name);

        let max_pool_size = match env::var("EVENT_STORE_MAX_POOL_SIZE") {
            Ok(raw) => Some(
                raw.parse()
                    .map_err(|_| ConfigError::InvalidValue("EVENT_STORE_MAX_POOL_SIZE"))?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            address,
            database_name,
            collection_name,
            max_pool_size,
        })
    }

    /// Connection string for the driver.
    ///
    /// A bare `host:port` gets the `mongodb://` scheme; anything already
    /// carrying a scheme is used as is.
    pub fn connection_uri(&self) -> String {
        if self.address.contains("://") {
            self.address.clone()
        } else {
            format!("mongodb://{}", self.address)
        }
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = StoreOptions::new();
        assert_eq!(opts.address, "localhost:27017");
        assert_eq!(opts.database_name, "event-sourcing");
        assert_eq!(opts.collection_name, "event");
        assert!(opts.max_pool_size.is_none());
    }

    #[test]
    fn test_builder_overrides_only_given_fields() {
        let opts = StoreOptions::new()
            .with_database_name("event-sourcing-test")
            .with_collection_name("tests");

        assert_eq!(opts.address, DEFAULT_ADDRESS);
        assert_eq!(opts.database_name, "event-sourcing-test");
        assert_eq!(opts.collection_name, "tests");
    }

    #[test]
    fn test_connection_uri() {
        let bare = StoreOptions::new().with_address("10.0.0.5:27018");
        assert_eq!(bare.connection_uri(), "mongodb://10.0.0.5:27018");

        let full = StoreOptions::new().with_address("mongodb+srv://cluster.example.net");
        assert_eq!(full.connection_uri(), "mongodb+srv://cluster.example.net");
    }

    #[test]
    fn test_from_env() {
        env::set_var("EVENT_STORE_COLLECTION", "from_env");
        env::set_var("EVENT_STORE_MAX_POOL_SIZE", "7");
        let opts = StoreOptions::from_env().unwrap();
        assert_eq!(opts.collection_name, "from_env");
        assert_eq!(opts.max_pool_size, Some(7));

        env::set_var("EVENT_STORE_MAX_POOL_SIZE", "many");
        let err = StoreOptions::from_env().unwrap_err();
        assert!(err.to_string().contains("EVENT_STORE_MAX_POOL_SIZE"));

        env::remove_var("EVENT_STORE_COLLECTION");
        env::remove_var("EVENT_STORE_MAX_POOL_SIZE");
    }
}
