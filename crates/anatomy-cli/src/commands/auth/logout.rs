use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
    redirect: Option<String>,
}

pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.store.logout();
    output(
        &AuthLogoutResponse {
            cleared: ctx.store.identity().is_none(),
            redirect: ctx.navigation.last(),
        },
        flags.format,
    )
}
