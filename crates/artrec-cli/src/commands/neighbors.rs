use crate::cli::GlobalFlags;
use crate::cli::root_commands::UserArgs;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `artrec neighbors`.
pub fn handle(args: &UserArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let k = effective_limit(args.count, flags.limit, ctx.config.recommend.default_limit);
    let response = ctx.recommender.neighbors(args.user_id, k);
    output(&response, flags.format)
}
