use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `artrec stats`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.recommender.stats(), flags.format)
}
