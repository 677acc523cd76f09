pub mod error;
pub use self::error::{StoreError, StoreResult};

pub mod stores;
pub use self::stores::Store;

pub mod workflows;

use async_trait::async_trait;
use serde::Deserialize;
use subsweep_common::Subscription;

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StoreConfig {
    Dummy(stores::dummy::DummyConfig),
    Http(stores::http::HttpConfig),
}

impl StoreConfig {
    pub fn create_store(self) -> Store {
        match self {
            Self::Dummy(config) => Store::Dummy(stores::dummy::DummyStore::new(config)),
            Self::Http(config) => Store::Http(stores::http::HttpStore::new(config)),
        }
    }
}

/// Operations this tool needs from the external commerce platform.
///
/// Everything here reads or permanently deletes records the platform owns,
/// nothing is ever created or updated through this interface.
#[async_trait]
pub trait SubscriptionStore {
    /// Fetches one page of subscriptions matching `status`. An empty page
    /// means there are no further matches at or beyond `offset`.
    async fn list_subscriptions(
        &self,
        status: &str,
        page_size: usize,
        offset: usize,
    ) -> StoreResult<Vec<Subscription>>;

    async fn delete_subscription(&self, id: u64) -> StoreResult<()>;
    async fn delete_order(&self, id: u64) -> StoreResult<()>;
    async fn delete_customer(&self, id: u64) -> StoreResult<()>;
}
