use anyhow::bail;
use hero_client::HeroStore;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GetArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn run<S: HeroStore>(
    args: &GetArgs,
    ctx: &AppContext<S>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let hero = if args.no_404 {
        ctx.service.get_no_404(args.id).await
    } else {
        ctx.service.get(args.id).await
    };

    let Some(hero) = hero else {
        bail!("no hero with id={}", args.id);
    };
    output(&hero, flags.format)
}
