use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Subscription;
use crate::enums::Role;

/// The authenticated principal held by the session store.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Free-text profile bio. Older snapshots may omit it.
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub subscription: Option<Subscription>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identity {
    /// Admin flag derived from the role.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Everything before the first `@`, or the whole string when there is none.
#[must_use]
pub fn display_name_from_email(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}
