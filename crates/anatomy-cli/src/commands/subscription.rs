use anatomy_core::entities::Subscription;
use anatomy_core::enums::{Plan, SubscriptionStatus};
use anatomy_core::ids::{PREFIX_SUBSCRIPTION, prefixed_id};
use anatomy_core::subscription::SubscriptionDisplay;
use chrono::{TimeDelta, Utc};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SubscriptionCommands;
use crate::commands::shared::parse::parse_enum;
use crate::commands::shared::session::require_identity;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct SubscriptionResponse {
    #[serde(flatten)]
    display: SubscriptionDisplay,
    is_subscribed: bool,
    is_trial_active: bool,
    trial_days_remaining: u32,
}

/// Handle `anatomy subscription <subcommand>`.
pub fn handle(
    action: &SubscriptionCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SubscriptionCommands::Show => {}
        SubscriptionCommands::Set {
            status,
            plan,
            expires_in_days,
            auto_renew,
        } => {
            require_identity(ctx)?;
            let status: SubscriptionStatus = parse_enum(status, "status")?;
            let plan: Plan = parse_enum(plan, "plan")?;
            let now = Utc::now();
            let expires_at = TimeDelta::try_days(*expires_in_days)
                .and_then(|delta| now.checked_add_signed(delta))
                .ok_or_else(|| {
                    anyhow::anyhow!("invalid expires-in-days '{expires_in_days}': out of range")
                })?;

            ctx.store.update_subscription(Subscription {
                id: prefixed_id(PREFIX_SUBSCRIPTION, now)?,
                status,
                plan,
                start_date: now,
                expires_at,
                auto_renew: *auto_renew,
            });
        }
    }

    let display = ctx
        .store
        .safe_subscription()
        .ok_or(anatomy_session::SessionError::NotAuthenticated)?;
    output(
        &SubscriptionResponse {
            display,
            is_subscribed: ctx.store.is_subscribed(),
            is_trial_active: ctx.store.is_trial_active(),
            trial_days_remaining: ctx.store.trial_days_remaining(),
        },
        flags.format,
    )
}
