use anyhow::Context;
use clap::Parser;
use hero_client::{HttpHeroStore, MemoryHeroStore};

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("toh error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    let config = bootstrap::load_config(&flags)?;

    if let cli::Commands::Serve(args) = &cli.command {
        return commands::serve::handle(args, &config, &flags).await;
    }

    let command = cli.command;
    if flags.memory {
        let ctx = context::AppContext::init(MemoryHeroStore::seeded(), config, &flags);
        commands::dispatch::dispatch(command, ctx, &flags).await
    } else {
        let store = HttpHeroStore::new(&config.api).context("failed to build hero store client")?;
        tracing::debug!(url = store.heroes_url(), "using remote hero store");
        let ctx = context::AppContext::init(store, config, &flags);
        commands::dispatch::dispatch(command, ctx, &flags).await
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("HEROES_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
