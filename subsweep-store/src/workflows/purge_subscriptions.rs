use crate::{Store, StoreResult, SubscriptionStore};
use subsweep_common::Subscription;
use tracing::info;

/// Number of subscriptions fetched per page while purging.
pub const BATCH_SIZE: usize = 1000;

/// Deletes every subscription matching `status`, along with its related
/// orders and the customer account that owns it.
///
/// Each record is removed in three fixed steps: related orders first, then
/// the owning customer, then the subscription itself. The steps are not
/// transactional, the first error is returned immediately and earlier
/// deletions stay in place.
///
/// Subscriptions are fetched in pages of [`BATCH_SIZE`] and the loop ends the
/// first time a page comes back empty. The offset advances by the full page
/// size each round even as matching records are deleted out from under it, so
/// records that shift into already visited offsets are skipped. Running the
/// purge again picks up anything left behind.
///
/// In a dry run nothing is deleted and each record that would have been
/// deleted is logged instead.
///
/// Returns the number of subscriptions processed.
#[tracing::instrument(skip(store))]
pub async fn purge_subscriptions(store: Store, status: &str, dry_run: bool) -> StoreResult<usize> {
    let mut offset = 0;
    let mut processed = 0;

    loop {
        let subscriptions = store.list_subscriptions(status, BATCH_SIZE, offset).await?;
        if subscriptions.is_empty() {
            break;
        }

        for subscription in subscriptions {
            if dry_run {
                info!(
                    "Would delete subscription {} and its customer and related orders",
                    subscription.id
                );
            } else {
                delete_subscription_and_related_records(&store, &subscription).await?;
            }
            processed += 1;
        }

        offset += BATCH_SIZE;
        info!("Processed {processed} subscriptions");
    }

    Ok(processed)
}

async fn delete_subscription_and_related_records(
    store: &Store,
    subscription: &Subscription,
) -> StoreResult<()> {
    for order in &subscription.order_ids {
        store.delete_order(*order).await?;
        info!("Deleted order {order}");
    }

    store.delete_customer(subscription.customer_id).await?;
    info!(
        "Deleted customer {} and all associated data",
        subscription.customer_id
    );

    store.delete_subscription(subscription.id).await?;
    info!("Deleted subscription {}", subscription.id);

    Ok(())
}
