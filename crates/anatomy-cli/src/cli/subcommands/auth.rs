use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Sign in with an email and password, or as a demo account.
    Login(AuthLoginArgs),
    /// Create an account and sign in.
    Signup(AuthSignupArgs),
    /// Clear the stored session.
    Logout,
    /// Show current session and subscription flags.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    #[arg(long, required_unless_present = "demo", conflicts_with = "demo")]
    pub email: Option<String>,
    #[arg(long, required_unless_present = "demo", conflicts_with = "demo")]
    pub password: Option<String>,
    /// One-click demo account: admin or premium.
    #[arg(long)]
    pub demo: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct AuthSignupArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub confirm_password: String,
}
