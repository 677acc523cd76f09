mod purge_subscriptions;
pub use purge_subscriptions::{BATCH_SIZE, purge_subscriptions};
