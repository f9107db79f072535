use crate::cli::GlobalFlags;
use crate::cli::root_commands::UserArgs;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `artrec seen`. Without a limit the whole history is listed.
pub fn handle(args: &UserArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let n = effective_limit(args.count, flags.limit, u32::MAX);
    let mut response = ctx.recommender.user_articles(args.user_id);
    response.articles.truncate(n);
    output(&response, flags.format)
}
