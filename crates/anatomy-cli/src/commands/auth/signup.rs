use anatomy_core::validation::SignupForm;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthSignupArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    args: &AuthSignupArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let form = SignupForm {
        name: args.name.clone(),
        email: args.email.clone(),
        password: args.password.clone(),
        confirm_password: args.confirm_password.clone(),
    };
    ctx.store.signup(&form).await?;

    output(&super::login::signed_in_response(ctx)?, flags.format)
}
