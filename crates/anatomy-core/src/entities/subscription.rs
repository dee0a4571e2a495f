use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Plan, SubscriptionStatus};

/// A billing/access grant attached to at most one identity.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Subscription {
    pub id: String,
    pub status: SubscriptionStatus,
    pub plan: Plan,
    pub start_date: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub auto_renew: bool,
}

impl Subscription {
    /// True once `now` is strictly past the expiry instant.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }

    /// Whether an expired subscription still carries a live status and must be
    /// marked inactive.
    #[must_use]
    pub fn needs_expiry_correction(&self, now: DateTime<Utc>) -> bool {
        self.is_expired_at(now) && self.status != SubscriptionStatus::Inactive
    }
}
