use anyhow::bail;
use hero_client::HeroStore;
use hero_core::entities::NewHero;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RenameArgs;
use crate::context::AppContext;
use crate::output::output;

/// Detail view: fetch the hero, change its name, save it.
pub async fn run<S: HeroStore>(
    args: &RenameArgs,
    ctx: &AppContext<S>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let Some(NewHero { name }) = NewHero::from_input(&args.name) else {
        bail!("hero name must not be blank");
    };
    let Some(mut hero) = ctx.service.get(args.id).await else {
        bail!("no hero with id={}", args.id);
    };

    hero.name = name;
    if !ctx.service.update(&hero).await {
        bail!("hero id={} was not saved", hero.id);
    }
    output(&hero, flags.format)
}
