use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.store.snapshot(), flags.format)
}
