use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A recurring billing record owned by the external commerce platform.
///
/// This tool only ever reads and deletes these records, it never creates or
/// updates them. The fields mirror what the platform reports for each
/// subscription.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subscription {
    /// Platform identifier of the subscription.
    pub id: u64,

    /// Current status.
    ///
    /// Free form rather than a closed enum, platforms allow custom statuses.
    pub status: String,

    /// Identifier of the customer account that owns the subscription.
    pub customer_id: u64,

    /// Identifiers of the orders related to this subscription (the parent
    /// order and any renewal orders).
    pub order_ids: Vec<u64>,

    /// Time the subscription was created on the platform.
    pub date_created: DateTime<FixedOffset>,
}
