use crate::cli::GlobalFlags;
use crate::cli::root_commands::SimilarArgs;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `artrec similar`.
pub fn handle(args: &SimilarArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let n = effective_limit(args.count, flags.limit, ctx.config.recommend.default_limit);
    let response = ctx.recommender.similar_articles(&args.query(), n);
    output(&response, flags.format)
}
