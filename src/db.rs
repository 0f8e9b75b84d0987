//! Database module
//!
//! Client construction and connectivity checks.

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::Client;

use crate::config::StoreOptions;

/// Build a pooled client from store options.
///
/// The driver connects lazily, so an unreachable server surfaces on the
/// first operation rather than here.
pub async fn connect(options: &StoreOptions) -> Result<Client, mongodb::error::Error> {
    let uri = options.connection_uri();
    let mut client_options = ClientOptions::parse(uri.as_str()).await?;

    if let Some(size) = options.max_pool_size {
        client_options.max_pool_size = Some(size);
    }
    client_options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

    Client::with_options(client_options)
}

/// Round-trip a ping to check the server is reachable
pub async fn verify_connection(client: &Client) -> Result<(), mongodb::error::Error> {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await?;

    Ok(())
}
