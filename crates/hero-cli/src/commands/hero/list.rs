use hero_client::HeroStore;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run<S: HeroStore>(ctx: &mut AppContext<S>, flags: &GlobalFlags) -> anyhow::Result<()> {
    let heroes = ctx.roster.load().await;
    output(&heroes, flags.format)
}
