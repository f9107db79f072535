use artrec_config::ArtrecConfig;
use artrec_core::ids::{ArticleQuery, UserId};
use artrec_core::responses::DemoReport;
use artrec_engine::Recommender;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `artrec demo` (also the default when no subcommand is given).
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = build_report(&ctx.recommender, &ctx.config, flags.limit);
    output(&report, flags.format)
}

/// Top articles, both personalized lists for the demo user, and the
/// articles most similar to the demo title.
fn build_report(recommender: &Recommender, config: &ArtrecConfig, limit: Option<u32>) -> DemoReport {
    let n = effective_limit(None, limit, config.recommend.default_limit);
    let user_id = UserId(config.demo.user_id);
    let query = ArticleQuery::Title(config.demo.similar_title.clone());
    let similar_n = effective_limit(None, None, config.demo.similar_limit);

    DemoReport {
        top: recommender.top_articles(n),
        collaborative: recommender.user_user_recs(user_id, n),
        content: recommender.content_recs(user_id, n),
        similar: recommender.similar_articles(&query, similar_n),
    }
}
