use crate::{StoreError, StoreResult, SubscriptionStore};
use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use subsweep_common::Subscription;
use url::Url;

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    /// Base URL of the commerce REST API,
    /// e.g. `https://shop.example.com/wp-json/wc/v3/`.
    pub url: Url,

    /// API consumer key, sent as the basic auth username.
    pub consumer_key: String,

    /// API consumer secret, sent as the basic auth password.
    pub consumer_secret: String,
}

/// Client for a WooCommerce style REST API.
///
/// Deletes are sent with `force=true`, the platform's switch for removing a
/// record permanently instead of moving it to trash.
#[derive(Clone)]
pub struct HttpStore {
    client: reqwest::Client,
    url: Url,
    consumer_key: String,
    consumer_secret: String,
}

impl HttpStore {
    pub fn new(config: HttpConfig) -> Self {
        let mut url = config.url;

        // `Url::join` treats a base without a trailing slash as a file and
        // would replace the final path segment instead of appending to it.
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Self {
            client: reqwest::Client::new(),
            url,
            consumer_key: config.consumer_key,
            consumer_secret: config.consumer_secret,
        }
    }

    fn endpoint(&self, path: &str) -> StoreResult<Url> {
        Ok(self.url.join(path)?)
    }

    async fn delete(&self, path: &str) -> StoreResult<()> {
        let response = self
            .client
            .delete(self.endpoint(path)?)
            .query(&[("force", "true")])
            .basic_auth(&self.consumer_key, Some(&self.consumer_secret))
            .send()
            .await?;
        check_status(&response)?;
        Ok(())
    }
}

fn check_status(response: &Response) -> StoreResult<()> {
    match response.status() {
        status if status.is_success() => Ok(()),
        StatusCode::NOT_FOUND => Err(StoreError::NotFound),
        status => Err(StoreError::UnexpectedStatus(status)),
    }
}

#[async_trait]
impl SubscriptionStore for HttpStore {
    #[tracing::instrument(skip(self))]
    async fn list_subscriptions(
        &self,
        status: &str,
        page_size: usize,
        offset: usize,
    ) -> StoreResult<Vec<Subscription>> {
        let response = self
            .client
            .get(self.endpoint("subscriptions")?)
            .query(&[
                ("status", status.to_string()),
                ("per_page", page_size.to_string()),
                ("offset", offset.to_string()),
            ])
            .basic_auth(&self.consumer_key, Some(&self.consumer_secret))
            .send()
            .await?;
        check_status(&response)?;

        Ok(response.json().await?)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_subscription(&self, id: u64) -> StoreResult<()> {
        self.delete(&format!("subscriptions/{id}")).await
    }

    #[tracing::instrument(skip(self))]
    async fn delete_order(&self, id: u64) -> StoreResult<()> {
        self.delete(&format!("orders/{id}")).await
    }

    #[tracing::instrument(skip(self))]
    async fn delete_customer(&self, id: u64) -> StoreResult<()> {
        self.delete(&format!("customers/{id}")).await
    }
}
