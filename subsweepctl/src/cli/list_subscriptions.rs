use super::CliExecute;
use async_trait::async_trait;
use clap::Parser;
use miette::IntoDiagnostic;
use std::path::PathBuf;
use subsweep_store::{StoreConfig, SubscriptionStore, workflows::BATCH_SIZE};

/// List subscriptions of a given status.
#[derive(Debug, Clone, Parser)]
pub(crate) struct ListSubscriptionsCommand {
    /// Path to store configuration.
    #[arg(long)]
    store: PathBuf,

    /// Subscription status to filter by.
    #[arg(long, default_value = "cancelled")]
    status: String,
}

#[async_trait]
impl CliExecute for ListSubscriptionsCommand {
    async fn execute(&self) -> miette::Result<()> {
        let store_config: StoreConfig = subsweep_common::load_config_file(&self.store)?;
        let store = store_config.create_store();

        let mut offset = 0;
        loop {
            let subscriptions = store
                .list_subscriptions(&self.status, BATCH_SIZE, offset)
                .await
                .into_diagnostic()?;
            if subscriptions.is_empty() {
                break;
            }

            for subscription in &subscriptions {
                println!(
                    "{}\t{}\tcustomer={}\torders={}\tcreated={}",
                    subscription.id,
                    subscription.status,
                    subscription.customer_id,
                    subscription.order_ids.len(),
                    subscription.date_created
                );
            }

            offset += BATCH_SIZE;
        }

        Ok(())
    }
}
