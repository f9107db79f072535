use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Demo => commands::demo::handle(ctx, flags),
        Commands::Top => commands::top::handle(ctx, flags),
        Commands::User(args) => commands::user::handle(&args, ctx, flags),
        Commands::Neighbors(args) => commands::neighbors::handle(&args, ctx, flags),
        Commands::Seen(args) => commands::seen::handle(&args, ctx, flags),
        Commands::Content(args) => commands::content::handle(&args, ctx, flags),
        Commands::Similar(args) => commands::similar::handle(&args, ctx, flags),
        Commands::Stats => commands::stats::handle(ctx, flags),
    }
}
