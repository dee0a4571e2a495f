use anatomy_core::validation::LoginForm;
use anatomy_session::DemoAccount;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
pub(super) struct AuthLoginResponse {
    pub authenticated: bool,
    pub user_id: String,
    pub email: String,
    pub role: String,
    pub is_admin: bool,
    pub plan: String,
    pub redirect: Option<String>,
}

pub async fn handle(
    args: &AuthLoginArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if let Some(demo) = &args.demo {
        let account: DemoAccount = demo.parse()?;
        if !ctx.store.login_as(account).await {
            anyhow::bail!("auth login: demo sign-in failed; see logs for details");
        }
    } else {
        let form = LoginForm {
            email: args.email.clone().unwrap_or_default(),
            password: args.password.clone().unwrap_or_default(),
        };
        ctx.store.login_with_form(&form).await?;
    }

    output(&signed_in_response(ctx)?, flags.format)
}

/// Summary of the identity that just signed in.
pub(super) fn signed_in_response(ctx: &AppContext) -> anyhow::Result<AuthLoginResponse> {
    let identity = crate::commands::shared::session::require_identity(ctx)?;
    Ok(AuthLoginResponse {
        authenticated: true,
        user_id: identity.id.clone(),
        email: identity.email.clone(),
        role: identity.role.to_string(),
        is_admin: ctx.store.is_admin(),
        plan: ctx
            .store
            .safe_subscription()
            .map(|display| display.plan)
            .unwrap_or_default(),
        redirect: ctx.navigation.last(),
    })
}
