//! Demo sign-in rules.
//!
//! There is no credential check: the email alone decides which kind of
//! account comes back. Rules are tried in order and the first match wins.

use anatomy_core::entities::{Identity, Subscription, display_name_from_email};
use anatomy_core::enums::{Plan, Role, SubscriptionStatus};
use anatomy_core::errors::CoreError;
use anatomy_core::ids::{PREFIX_ADMIN, PREFIX_SUBSCRIPTION, PREFIX_USER, prefixed_id};
use chrono::{DateTime, TimeDelta, Utc};

use crate::settings::SessionSettings;

const PREMIUM_MARKER: &str = "premium";
const ADMIN_MARKER: &str = "admin";

/// Which branch of the demo rules an email falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountTier {
    Premium,
    Admin,
    Trial,
}

impl AccountTier {
    #[must_use]
    pub fn classify(email: &str, demo_premium_email: &str) -> Self {
        if email.contains(PREMIUM_MARKER) || email == demo_premium_email {
            Self::Premium
        } else if email.contains(ADMIN_MARKER) {
            Self::Admin
        } else {
            Self::Trial
        }
    }

    #[must_use]
    pub const fn role(self) -> Role {
        match self {
            Self::Admin => Role::Admin,
            Self::Premium | Self::Trial => Role::User,
        }
    }

    #[must_use]
    pub const fn status(self) -> SubscriptionStatus {
        match self {
            Self::Premium | Self::Admin => SubscriptionStatus::Active,
            Self::Trial => SubscriptionStatus::Trial,
        }
    }

    #[must_use]
    pub const fn plan(self) -> Plan {
        match self {
            Self::Premium => Plan::Premium,
            Self::Admin => Plan::Professional,
            Self::Trial => Plan::Basic,
        }
    }

    #[must_use]
    pub const fn auto_renew(self) -> bool {
        !matches!(self, Self::Trial)
    }

    fn grant_days(self, settings: &SessionSettings) -> u32 {
        match self {
            Self::Premium | Self::Admin => settings.paid_days,
            Self::Trial => settings.trial_days,
        }
    }
}

/// Build a fresh identity for `email` as of `now`.
///
/// # Errors
///
/// Returns `CoreError::IdGeneration` if an identifier cannot be minted.
pub fn synthesize_identity(
    email: &str,
    now: DateTime<Utc>,
    settings: &SessionSettings,
) -> Result<Identity, CoreError> {
    let tier = AccountTier::classify(email, &settings.demo_premium_email);
    let role = tier.role();
    let id_prefix = if role.is_admin() {
        PREFIX_ADMIN
    } else {
        PREFIX_USER
    };

    let subscription = Subscription {
        id: prefixed_id(PREFIX_SUBSCRIPTION, now)?,
        status: tier.status(),
        plan: tier.plan(),
        start_date: now,
        expires_at: now + TimeDelta::days(i64::from(tier.grant_days(settings))),
        auto_renew: tier.auto_renew(),
    };

    Ok(Identity {
        id: prefixed_id(id_prefix, now)?,
        name: display_name_from_email(email).to_string(),
        email: email.to_string(),
        role,
        bio: String::new(),
        subscription: Some(subscription),
        created_at: now,
        updated_at: now,
    })
}

/// One-click demo logins offered on the login page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoAccount {
    Admin,
    PremiumUser,
}

impl DemoAccount {
    #[must_use]
    pub fn email(self, settings: &SessionSettings) -> &str {
        match self {
            Self::Admin => &settings.demo_admin_email,
            Self::PremiumUser => &settings.demo_premium_email,
        }
    }

    #[must_use]
    pub const fn password(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::PremiumUser => "user",
        }
    }

    /// Where the presentation layer goes after the demo login succeeds.
    #[must_use]
    pub fn landing_route(self, settings: &SessionSettings) -> &str {
        match self {
            Self::Admin => &settings.admin_route,
            Self::PremiumUser => &settings.home_route,
        }
    }
}

impl std::str::FromStr for DemoAccount {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "premium" | "user" => Ok(Self::PremiumUser),
            other => Err(CoreError::UnknownVariant {
                kind: "demo account",
                value: other.to_string(),
            }),
        }
    }
}
