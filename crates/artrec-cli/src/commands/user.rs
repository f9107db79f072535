use crate::cli::GlobalFlags;
use crate::cli::root_commands::UserArgs;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `artrec user`.
pub fn handle(args: &UserArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let n = effective_limit(args.count, flags.limit, ctx.config.recommend.default_limit);
    let response = ctx.recommender.user_user_recs(args.user_id, n);
    if response.fallback {
        tracing::info!(user_id = %args.user_id, "user has no history; showing most popular");
    }
    output(&response, flags.format)
}
