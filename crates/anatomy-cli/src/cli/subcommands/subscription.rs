use clap::Subcommand;

/// Subscription commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SubscriptionCommands {
    /// Show the subscription as displayed to the user.
    Show,
    /// Replace the subscription of the signed-in identity.
    Set {
        /// active, inactive, or trial
        #[arg(long)]
        status: String,
        /// basic, premium, or professional
        #[arg(long)]
        plan: String,
        #[arg(long, default_value_t = 30)]
        expires_in_days: i64,
        #[arg(long)]
        auto_renew: bool,
    },
}
