//! End-to-end tests for the DynaStack DynamoDB client.
//!
//! The client is driven against [`InMemoryDynamoDB`], a fake endpoint that
//! decodes requests and encodes responses with the same model types, so
//! every test exercises the full marshal, route, unmarshal path.
//!
//! Run them with:
//! ```text
//! cargo test -p dynastack-integration
//! ```

use std::sync::{Arc, Once};

use dynastack_http::client::DynamoDBClient;
use dynastack_http::config::ClientConfig;

mod fake;

pub use fake::InMemoryDynamoDB;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Create a client wired to a fresh in-memory endpoint.
///
/// The endpoint is returned too so tests can inspect what it received.
#[must_use]
pub fn local_client() -> (DynamoDBClient<Arc<InMemoryDynamoDB>>, Arc<InMemoryDynamoDB>) {
    init_tracing();

    let config = ClientConfig::builder()
        .endpoint(Some("http://localhost:4566".to_owned()))
        .build();
    let endpoint = Arc::new(InMemoryDynamoDB::new(config.region.clone()));
    (
        DynamoDBClient::new(config, Arc::clone(&endpoint)),
        endpoint,
    )
}

/// Generate a unique table name for a test.
#[must_use]
pub fn test_table_name(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().to_string()[..8].to_owned();
    format!("test-{prefix}-{id}")
}

mod test_errors;
mod test_items;
mod test_pagination;
mod test_tables;
