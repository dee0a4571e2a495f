//! Derived subscription flags and display normalisation.
//!
//! Every function here is pure: it reads a subscription snapshot and an
//! explicit `now`, and never mutates anything. Nothing is cached; callers
//! re-evaluate on every read.
//!
//! The derived flags check `expires_at` themselves, so a trial whose stored
//! status still says `trial` stops being active the moment it expires, even
//! though the stored status is only corrected on the next store initialize.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Identity, Subscription};
use crate::enums::SubscriptionStatus;

const MILLIS_PER_DAY: u64 = 86_400_000;

/// Plan label shown when the identity has no subscription at all.
pub const FALLBACK_PLAN_LABEL: &str = "Trial";

/// Active, paid (non-basic), and not yet expired.
#[must_use]
pub fn is_subscribed(subscription: Option<&Subscription>, now: DateTime<Utc>) -> bool {
    subscription.is_some_and(|s| {
        s.status == SubscriptionStatus::Active && s.plan.is_paid() && s.expires_at > now
    })
}

/// In trial and not yet expired.
#[must_use]
pub fn is_trial_active(subscription: Option<&Subscription>, now: DateTime<Utc>) -> bool {
    subscription.is_some_and(|s| s.status == SubscriptionStatus::Trial && s.expires_at > now)
}

/// Whole days left in an active trial, rounded up. Zero when no trial is active.
#[must_use]
pub fn trial_days_remaining(subscription: Option<&Subscription>, now: DateTime<Utc>) -> u32 {
    let Some(s) = subscription else {
        return 0;
    };
    if !is_trial_active(subscription, now) {
        return 0;
    }

    // Negative remainders fail the conversion and clamp to zero.
    let Ok(remaining_ms) = u64::try_from((s.expires_at - now).num_milliseconds()) else {
        return 0;
    };
    u32::try_from(remaining_ms.div_ceil(MILLIS_PER_DAY)).unwrap_or(u32::MAX)
}

/// Subscription data normalised for display.
///
/// When the identity has no subscription this is fabricated (`plan = "Trial"`,
/// empty `expires_at`) and does not reflect billing reality.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SubscriptionDisplay {
    pub plan: String,
    pub status: SubscriptionStatus,
    pub auto_renew: bool,
    /// RFC 3339 timestamp.
    pub start_date: String,
    /// RFC 3339 timestamp, or empty when unknown.
    pub expires_at: String,
}

/// Normalise an identity's subscription for display.
#[must_use]
pub fn safe_subscription(identity: &Identity) -> SubscriptionDisplay {
    match &identity.subscription {
        None => SubscriptionDisplay {
            plan: FALLBACK_PLAN_LABEL.to_string(),
            status: SubscriptionStatus::Active,
            auto_renew: false,
            start_date: identity.created_at.to_rfc3339(),
            expires_at: String::new(),
        },
        Some(s) => SubscriptionDisplay {
            plan: capitalize_first(s.plan.as_str()),
            status: s.status,
            auto_renew: s.auto_renew,
            start_date: s.start_date.to_rfc3339(),
            expires_at: s.expires_at.to_rfc3339(),
        },
    }
}

fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{Plan, Role};
    use chrono::TimeDelta;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-03-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn make_subscription(
        status: SubscriptionStatus,
        plan: Plan,
        expires_at: DateTime<Utc>,
    ) -> Subscription {
        Subscription {
            id: "sub-1".into(),
            status,
            plan,
            start_date: now() - TimeDelta::days(10),
            expires_at,
            auto_renew: true,
        }
    }

    fn make_identity(subscription: Option<Subscription>) -> Identity {
        Identity {
            id: "user-1".into(),
            name: "jane".into(),
            email: "jane@example.com".into(),
            role: Role::User,
            bio: String::new(),
            subscription,
            created_at: now() - TimeDelta::days(40),
            updated_at: now() - TimeDelta::days(40),
        }
    }

    #[rstest]
    #[case(SubscriptionStatus::Active, Plan::Premium, 1, true)]
    #[case(SubscriptionStatus::Active, Plan::Professional, 1, true)]
    #[case(SubscriptionStatus::Active, Plan::Basic, 1, false)]
    #[case(SubscriptionStatus::Active, Plan::Premium, 0, false)]
    #[case(SubscriptionStatus::Active, Plan::Premium, -1, false)]
    #[case(SubscriptionStatus::Trial, Plan::Premium, 1, false)]
    #[case(SubscriptionStatus::Inactive, Plan::Premium, 1, false)]
    fn is_subscribed_cases(
        #[case] status: SubscriptionStatus,
        #[case] plan: Plan,
        #[case] offset_secs: i64,
        #[case] expected: bool,
    ) {
        let sub = make_subscription(status, plan, now() + TimeDelta::seconds(offset_secs));
        assert_eq!(is_subscribed(Some(&sub), now()), expected);
    }

    #[test]
    fn basic_plan_never_counts_as_subscribed() {
        let sub = make_subscription(
            SubscriptionStatus::Active,
            Plan::Basic,
            now() + TimeDelta::days(3650),
        );
        assert!(!is_subscribed(Some(&sub), now()));
    }

    #[test]
    fn no_subscription_means_no_flags() {
        assert!(!is_subscribed(None, now()));
        assert!(!is_trial_active(None, now()));
        assert_eq!(trial_days_remaining(None, now()), 0);
    }

    #[test]
    fn trial_inactive_once_expired_even_if_status_still_trial() {
        let sub = make_subscription(
            SubscriptionStatus::Trial,
            Plan::Basic,
            now() - TimeDelta::milliseconds(1),
        );
        assert_eq!(sub.status, SubscriptionStatus::Trial);
        assert!(!is_trial_active(Some(&sub), now()));
        assert_eq!(trial_days_remaining(Some(&sub), now()), 0);
    }

    #[test]
    fn trial_days_zero_at_exact_expiry() {
        let sub = make_subscription(SubscriptionStatus::Trial, Plan::Basic, now());
        assert!(!is_trial_active(Some(&sub), now()));
        assert_eq!(trial_days_remaining(Some(&sub), now()), 0);
    }

    #[rstest]
    #[case(TimeDelta::days(14), 14)]
    #[case(TimeDelta::days(13) + TimeDelta::seconds(1), 14)]
    #[case(TimeDelta::hours(1), 1)]
    #[case(TimeDelta::milliseconds(1), 1)]
    #[case(TimeDelta::days(1) + TimeDelta::milliseconds(1), 2)]
    #[case(TimeDelta::days(1), 1)]
    fn trial_days_round_up(#[case] remaining: TimeDelta, #[case] expected: u32) {
        let sub = make_subscription(SubscriptionStatus::Trial, Plan::Basic, now() + remaining);
        assert_eq!(trial_days_remaining(Some(&sub), now()), expected);
    }

    #[test]
    fn trial_days_ignore_sub_millisecond_remainder() {
        let sub = make_subscription(
            SubscriptionStatus::Trial,
            Plan::Basic,
            now() + TimeDelta::days(2) + TimeDelta::microseconds(999),
        );
        assert_eq!(trial_days_remaining(Some(&sub), now()), 2);

        let sub = make_subscription(
            SubscriptionStatus::Trial,
            Plan::Basic,
            now() + TimeDelta::nanoseconds(1),
        );
        assert!(is_trial_active(Some(&sub), now()));
        assert_eq!(trial_days_remaining(Some(&sub), now()), 0);
    }

    #[test]
    fn trial_days_zero_for_active_paid_plan() {
        let sub = make_subscription(
            SubscriptionStatus::Active,
            Plan::Premium,
            now() + TimeDelta::days(300),
        );
        assert_eq!(trial_days_remaining(Some(&sub), now()), 0);
    }

    #[test]
    fn safe_subscription_without_subscription_is_fabricated_trial() {
        let identity = make_identity(None);
        let display = safe_subscription(&identity);
        assert_eq!(
            display,
            SubscriptionDisplay {
                plan: "Trial".into(),
                status: SubscriptionStatus::Active,
                auto_renew: false,
                start_date: identity.created_at.to_rfc3339(),
                expires_at: String::new(),
            }
        );
    }

    #[test]
    fn safe_subscription_capitalizes_plan_and_passes_rest_through() {
        let sub = make_subscription(
            SubscriptionStatus::Inactive,
            Plan::Professional,
            now() - TimeDelta::days(1),
        );
        let identity = make_identity(Some(sub.clone()));
        let display = safe_subscription(&identity);
        assert_eq!(display.plan, "Professional");
        assert_eq!(display.status, SubscriptionStatus::Inactive);
        assert!(display.auto_renew);
        assert_eq!(display.start_date, sub.start_date.to_rfc3339());
        assert_eq!(display.expires_at, sub.expires_at.to_rfc3339());
    }

    #[test]
    fn capitalize_first_handles_edge_inputs() {
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("basic"), "Basic");
        assert_eq!(capitalize_first("B"), "B");
    }
}
