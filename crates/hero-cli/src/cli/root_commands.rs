use clap::{Args, Subcommand};
use hero_core::entities::HeroId;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List all heroes.
    List,
    /// Show one hero.
    Get(GetArgs),
    /// Create a hero.
    Add(AddArgs),
    /// Change a hero's name.
    Rename(RenameArgs),
    /// Delete a hero.
    Delete(DeleteArgs),
    /// Top heroes.
    Dashboard(DashboardArgs),
    /// Search heroes by name as you type.
    Search(SearchArgs),
    /// Run the mock hero data store in the foreground.
    Serve(ServeArgs),
}

/// Arguments for `toh get`.
#[derive(Clone, Debug, Args)]
pub struct GetArgs {
    pub id: HeroId,
    /// Look the hero up through the list endpoint (no 404 on a miss).
    #[arg(long)]
    pub no_404: bool,
}

/// Arguments for `toh add`.
#[derive(Clone, Debug, Args)]
pub struct AddArgs {
    pub name: String,
}

/// Arguments for `toh rename`.
#[derive(Clone, Debug, Args)]
pub struct RenameArgs {
    pub id: HeroId,
    pub name: String,
}

/// Arguments for `toh delete`.
#[derive(Clone, Debug, Args)]
pub struct DeleteArgs {
    pub id: HeroId,
}

/// Arguments for `toh dashboard`.
#[derive(Clone, Debug, Args)]
pub struct DashboardArgs {
    /// Number of heroes to show (defaults to `general.dashboard_size`).
    #[arg(long)]
    pub count: Option<usize>,
}

/// Arguments for `toh search`.
#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    /// Successive contents of the search box. Read from stdin, one per line,
    /// when omitted.
    pub terms: Vec<String>,
    /// Delay between successive terms.
    #[arg(long, default_value_t = 0)]
    pub interval_ms: u64,
}

/// Arguments for `toh serve`.
#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Listen address (defaults to `server.addr`).
    #[arg(long)]
    pub addr: Option<String>,
    /// Delay applied to every response (defaults to `server.latency_ms`).
    #[arg(long)]
    pub latency_ms: Option<u64>,
}
