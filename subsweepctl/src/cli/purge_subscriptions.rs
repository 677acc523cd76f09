use super::{
    CliExecute,
    confirm::{Confirmation, StdinConfirmation},
};
use async_trait::async_trait;
use clap::Parser;
use miette::IntoDiagnostic;
use std::path::PathBuf;
use subsweep_store::{Store, StoreConfig, workflows};
use tracing::info;

/// Delete all subscriptions of a given status, along with their related
/// orders and owning customers.
#[derive(Debug, Clone, Parser)]
pub(crate) struct PurgeSubscriptionsCommand {
    /// Path to store configuration.
    #[arg(long)]
    store: PathBuf,

    /// Subscription status to filter by.
    #[arg(long, default_value = "cancelled")]
    status: String,

    /// Report what would be deleted without deleting anything.
    #[arg(long)]
    dry_run: bool,

    /// Skip the confirmation prompt.
    #[arg(short, long)]
    yes: bool,
}

#[async_trait]
impl CliExecute for PurgeSubscriptionsCommand {
    async fn execute(&self) -> miette::Result<()> {
        let store_config: StoreConfig = subsweep_common::load_config_file(&self.store)?;
        self.run(store_config.create_store(), &StdinConfirmation)
            .await
    }
}

impl PurgeSubscriptionsCommand {
    async fn run(&self, store: Store, confirmation: &impl Confirmation) -> miette::Result<()> {
        if !self.dry_run && !self.yes {
            let question = format!(
                "Are you sure you want to delete subscriptions with status \"{}\"?",
                self.status
            );
            if !confirmation.confirm(&question) {
                info!("Aborted, nothing was deleted");
                return Ok(());
            }
        }

        workflows::purge_subscriptions(store, &self.status, self.dry_run)
            .await
            .into_diagnostic()?;

        if self.dry_run {
            println!("Dry run completed. No data was deleted.");
        } else {
            println!(
                "Completed deleting subscriptions with status \"{}\".",
                self.status
            );
        }

        Ok(())
    }
}
