use artrec_core::ids::{ArticleQuery, UserId};
use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the fixed demo (default when no subcommand is given).
    Demo,
    /// Most-interacted articles.
    Top,
    /// User-user collaborative recommendations.
    User(UserArgs),
    /// Users most similar to a user.
    Neighbors(UserArgs),
    /// Articles a user has interacted with.
    Seen(UserArgs),
    /// Content-based recommendations from a user's history.
    Content(UserArgs),
    /// Articles with the most similar descriptions.
    Similar(SimilarArgs),
    /// Dataset summary counts.
    Stats,
}

/// Arguments for commands keyed by a user.
#[derive(Clone, Debug, Args)]
pub struct UserArgs {
    /// User id (dense, starting at 1).
    pub user_id: UserId,

    /// Max results for this command (overrides --limit).
    #[arg(short = 'n', long)]
    pub count: Option<u32>,
}

/// Arguments for `artrec similar`.
#[derive(Clone, Debug, Args)]
pub struct SimilarArgs {
    /// Article id or exact catalog title.
    pub article: String,

    /// Treat the argument as a title even if it looks like an id.
    #[arg(long)]
    pub title: bool,

    /// Max results for this command (overrides --limit).
    #[arg(short = 'n', long)]
    pub count: Option<u32>,
}

impl SimilarArgs {
    /// The article to look up. Numeric arguments are ids unless `--title` is set.
    #[must_use]
    pub fn query(&self) -> ArticleQuery {
        if self.title {
            return ArticleQuery::Title(self.article.trim().to_string());
        }
        match self.article.parse::<ArticleQuery>() {
            Ok(query) => query,
            Err(never) => match never {},
        }
    }
}
