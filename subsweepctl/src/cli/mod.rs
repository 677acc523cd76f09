mod confirm;
mod list_subscriptions;
mod purge_subscriptions;

use async_trait::async_trait;
use clap::{Parser, Subcommand};

#[async_trait]
pub(crate) trait CliExecute {
    async fn execute(&self) -> miette::Result<()>;
}

/// Bulk maintenance for subscription commerce data.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version = subsweep_common::version!(),
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[async_trait]
impl CliExecute for Cli {
    async fn execute(&self) -> miette::Result<()> {
        self.command.execute().await
    }
}

#[derive(Debug, Clone, Subcommand)]
pub(crate) enum Command {
    PurgeSubscriptions(purge_subscriptions::PurgeSubscriptionsCommand),
    ListSubscriptions(list_subscriptions::ListSubscriptionsCommand),
}

#[async_trait]
impl CliExecute for Command {
    async fn execute(&self) -> miette::Result<()> {
        match self {
            Command::PurgeSubscriptions(cmd) => cmd.execute().await,
            Command::ListSubscriptions(cmd) => cmd.execute().await,
        }
    }
}
