use anyhow::Context;
use hero_client::HeroStore;
use hero_core::entities::{Hero, HeroId};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DeleteArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct DeleteResponse<'a> {
    id: HeroId,
    deleted: bool,
    remaining: &'a [Hero],
}

/// Delete from the local list right away, then report the store's ack.
pub async fn run<S: HeroStore>(
    args: &DeleteArgs,
    ctx: &mut AppContext<S>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.roster.load().await;
    let ack = ctx.roster.delete(args.id);
    let deleted = ack.await.context("delete request task failed")?;

    output(
        &DeleteResponse {
            id: args.id,
            deleted,
            remaining: ctx.roster.heroes(),
        },
        flags.format,
    )
}
