use anyhow::bail;
use hero_client::HeroStore;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AddArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn run<S: HeroStore>(
    args: &AddArgs,
    ctx: &mut AppContext<S>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if args.name.trim().is_empty() {
        bail!("hero name must not be blank");
    }

    let Some(hero) = ctx.roster.add(&args.name).await else {
        bail!("hero '{}' was not created", args.name.trim());
    };
    output(hero, flags.format)
}
