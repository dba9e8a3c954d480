use hero_client::HeroStore;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch<S: HeroStore>(
    command: Commands,
    mut ctx: AppContext<S>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::List => commands::hero::list::run(&mut ctx, flags).await,
        Commands::Get(args) => commands::hero::get::run(&args, &ctx, flags).await,
        Commands::Add(args) => commands::hero::add::run(&args, &mut ctx, flags).await,
        Commands::Rename(args) => commands::hero::rename::run(&args, &ctx, flags).await,
        Commands::Delete(args) => commands::hero::delete::run(&args, &mut ctx, flags).await,
        Commands::Dashboard(args) => commands::hero::dashboard::run(&args, &mut ctx, flags).await,
        Commands::Search(args) => commands::search::handle(&args, &ctx, flags).await,
        Commands::Serve(_) => unreachable!("serve is pre-dispatched in main"),
    }
}
