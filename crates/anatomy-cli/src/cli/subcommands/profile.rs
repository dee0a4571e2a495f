use clap::Subcommand;

/// Profile commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProfileCommands {
    /// Show the signed-in identity.
    Show,
    /// Edit name, email, or bio. Omitted fields keep their current value.
    Update {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        bio: Option<String>,
    },
}
