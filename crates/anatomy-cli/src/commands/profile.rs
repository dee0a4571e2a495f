use anatomy_core::validation::ProfileForm;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProfileCommands;
use crate::commands::shared::session::require_identity;
use crate::context::AppContext;
use crate::output::output;

/// Handle `anatomy profile <subcommand>`.
pub fn handle(
    action: &ProfileCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProfileCommands::Show => output(require_identity(ctx)?, flags.format),
        ProfileCommands::Update { name, email, bio } => {
            let current = require_identity(ctx)?;
            let form = ProfileForm {
                name: name.clone().unwrap_or_else(|| current.name.clone()),
                email: email.clone().unwrap_or_else(|| current.email.clone()),
                bio: bio.clone(),
            };
            ctx.store.update_profile(&form)?;
            output(require_identity(ctx)?, flags.format)
        }
    }
}
