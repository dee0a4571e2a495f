use anatomy_core::entities::Identity;
use anatomy_session::SessionError;

use crate::context::AppContext;

/// The signed-in identity, or a "run auth login" error.
pub fn require_identity(ctx: &AppContext) -> anyhow::Result<&Identity> {
    ctx.store
        .identity()
        .ok_or_else(|| SessionError::NotAuthenticated.into())
}
