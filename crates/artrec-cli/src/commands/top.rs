use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `artrec top`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let n = effective_limit(None, flags.limit, ctx.config.recommend.default_limit);
    let response = ctx.recommender.top_articles(n);
    output(&response, flags.format)
}
