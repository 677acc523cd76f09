pub mod dummy;
pub mod http;

use super::{StoreResult, SubscriptionStore};
use async_trait::async_trait;
use subsweep_common::Subscription;

#[derive(Clone)]
pub enum Store {
    Dummy(dummy::DummyStore),
    Http(http::HttpStore),
}

#[async_trait]
impl SubscriptionStore for Store {
    async fn list_subscriptions(
        &self,
        status: &str,
        page_size: usize,
        offset: usize,
    ) -> StoreResult<Vec<Subscription>> {
        match self {
            Self::Dummy(s) => s.list_subscriptions(status, page_size, offset).await,
            Self::Http(s) => s.list_subscriptions(status, page_size, offset).await,
        }
    }

    async fn delete_subscription(&self, id: u64) -> StoreResult<()> {
        match self {
            Self::Dummy(s) => s.delete_subscription(id).await,
            Self::Http(s) => s.delete_subscription(id).await,
        }
    }

    async fn delete_order(&self, id: u64) -> StoreResult<()> {
        match self {
            Self::Dummy(s) => s.delete_order(id).await,
            Self::Http(s) => s.delete_order(id).await,
        }
    }

    async fn delete_customer(&self, id: u64) -> StoreResult<()> {
        match self {
            Self::Dummy(s) => s.delete_customer(id).await,
            Self::Http(s) => s.delete_customer(id).await,
        }
    }
}
