use crate::{StoreResult, SubscriptionStore};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::{Arc, Mutex};
use subsweep_common::Subscription;

/// Records held by the in memory store.
///
/// The store trait has no write operations, so tests and trial configs seed
/// records by building this directly (or via `initial_state` in a TOML store
/// config).
#[derive(Debug, Default, Deserialize)]
pub struct State {
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,

    #[serde(default)]
    pub orders: Vec<u64>,

    #[serde(default)]
    pub customers: Vec<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DummyConfig {
    #[serde(default)]
    pub initial_state: State,
}

#[derive(Clone)]
pub struct DummyStore {
    state: Arc<Mutex<State>>,
}

impl DummyStore {
    pub fn new(config: DummyConfig) -> Self {
        Self {
            state: Arc::new(Mutex::new(config.initial_state)),
        }
    }

    /// Ids of the subscriptions still held, sorted.
    pub fn subscription_ids(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self
            .state
            .lock()
            .unwrap()
            .subscriptions
            .iter()
            .map(|s| s.id)
            .collect();
        ids.sort();
        ids
    }

    /// Ids of the orders still held, sorted.
    pub fn orders(&self) -> Vec<u64> {
        let mut orders = self.state.lock().unwrap().orders.clone();
        orders.sort();
        orders
    }

    /// Ids of the customer accounts still held, sorted.
    pub fn customers(&self) -> Vec<u64> {
        let mut customers = self.state.lock().unwrap().customers.clone();
        customers.sort();
        customers
    }
}

#[async_trait]
impl SubscriptionStore for DummyStore {
    #[tracing::instrument(skip(self))]
    async fn list_subscriptions(
        &self,
        status: &str,
        page_size: usize,
        offset: usize,
    ) -> StoreResult<Vec<Subscription>> {
        let mut matching: Vec<Subscription> = self
            .state
            .lock()
            .unwrap()
            .subscriptions
            .iter()
            .filter(|s| s.status == status)
            .cloned()
            .collect();
        matching.sort_by_key(|s| s.id);

        Ok(matching.into_iter().skip(offset).take(page_size).collect())
    }

    #[tracing::instrument(skip(self))]
    async fn delete_subscription(&self, id: u64) -> StoreResult<()> {
        self.state
            .lock()
            .unwrap()
            .subscriptions
            .retain(|s| s.id != id);
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn delete_order(&self, id: u64) -> StoreResult<()> {
        self.state.lock().unwrap().orders.retain(|o| *o != id);
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn delete_customer(&self, id: u64) -> StoreResult<()> {
        self.state.lock().unwrap().customers.retain(|c| *c != id);
        Ok(())
    }
}
