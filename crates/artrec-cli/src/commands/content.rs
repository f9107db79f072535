use crate::cli::GlobalFlags;
use crate::cli::root_commands::UserArgs;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `artrec content`.
pub fn handle(args: &UserArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let n = effective_limit(args.count, flags.limit, ctx.config.recommend.default_limit);
    let response = ctx.recommender.content_recs(args.user_id, n);
    output(&response, flags.format)
}
