use hero_client::HeroStore;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DashboardArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn run<S: HeroStore>(
    args: &DashboardArgs,
    ctx: &mut AppContext<S>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let count = args.count.unwrap_or(ctx.config.general.dashboard_size);
    ctx.roster.load().await;
    output(&ctx.roster.dashboard(count), flags.format)
}
