use std::time::Duration;

use anyhow::Context;
use hero_config::HeroConfig;
use hero_core::table::HeroTable;
use hero_server::{MockServer, ServerOptions};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ServeArgs;

/// Handle `toh serve`: run the seeded mock store until the process is killed.
pub async fn handle(
    args: &ServeArgs,
    config: &HeroConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let addr = args.addr.as_deref().unwrap_or(&config.server.addr);
    let latency = Duration::from_millis(args.latency_ms.unwrap_or(config.server.latency_ms));

    let server = MockServer::start(addr, HeroTable::seeded().into_shared(), ServerOptions { latency })
        .with_context(|| format!("failed to start mock hero store on {addr}"))?;

    if !flags.quiet {
        eprintln!("serving heroes at {}/heroes", server.base_url());
    }

    tokio::task::spawn_blocking(move || server.wait())
        .await
        .context("mock hero store thread failed")?
        .context("mock hero store stopped unexpectedly")
}
