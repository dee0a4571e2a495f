use clap::{Args, Subcommand};

use crate::cli::subcommands::{AuthCommands, ProfileCommands, SubscriptionCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Sign in, sign up, sign out, and inspect the session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Show or edit the signed-in profile.
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },
    /// Show or replace the signed-in subscription.
    Subscription {
        #[command(subcommand)]
        action: SubscriptionCommands,
    },
    /// Run a request path through the maintenance gate.
    Route(RouteArgs),
}

/// Arguments for `anatomy route`.
#[derive(Clone, Debug, Args)]
pub struct RouteArgs {
    pub path: String,
}
