use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `toh` binary.
#[derive(Debug, Parser)]
#[command(name = "toh", version, about = "Tour of Heroes - hero roster and search")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (suppress the message log)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use an in-process seeded store instead of the REST data store
    #[arg(short, long, global = true)]
    pub memory: bool,

    /// REST data store base URL (overrides `api.base_url`)
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            memory: self.memory,
            base_url: self.base_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["toh", "--format", "table", "--verbose", "list"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["toh", "list", "--format", "raw", "--quiet", "--memory"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(cli.memory);
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["toh", "--format", "xml", "list"]);
        assert!(parsed.is_err());
    }

    #[rstest]
    #[case("json", OutputFormat::Json)]
    #[case("table", OutputFormat::Table)]
    #[case("raw", OutputFormat::Raw)]
    fn output_format_accepts_all_supported_values(
        #[case] value: &str,
        #[case] expected: OutputFormat,
    ) {
        let cli = Cli::try_parse_from(["toh", "--format", value, "list"]).expect("cli should parse");
        assert_eq!(cli.format, expected);
    }

    #[test]
    fn get_accepts_no_404_switch() {
        let cli = Cli::try_parse_from(["toh", "get", "13", "--no-404"]).expect("cli should parse");
        let Commands::Get(args) = cli.command else {
            panic!("expected get command");
        };
        assert_eq!(args.id, 13);
        assert!(args.no_404);
    }

    #[test]
    fn get_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["toh", "get", "thirteen"]).is_err());
    }

    #[test]
    fn rename_takes_id_and_name() {
        let cli =
            Cli::try_parse_from(["toh", "rename", "16", "Rubber Woman"]).expect("cli should parse");
        let Commands::Rename(args) = cli.command else {
            panic!("expected rename command");
        };
        assert_eq!(args.id, 16);
        assert_eq!(args.name, "Rubber Woman");
    }

    #[test]
    fn search_collects_terms_in_order() {
        let cli = Cli::try_parse_from(["toh", "search", "m", "ma", "mag", "--interval-ms", "120"])
            .expect("cli should parse");
        let Commands::Search(args) = cli.command else {
            panic!("expected search command");
        };
        assert_eq!(args.terms, vec!["m", "ma", "mag"]);
        assert_eq!(args.interval_ms, 120);
    }

    #[test]
    fn search_without_terms_reads_stdin() {
        let cli = Cli::try_parse_from(["toh", "search"]).expect("cli should parse");
        let Commands::Search(args) = cli.command else {
            panic!("expected search command");
        };
        assert!(args.terms.is_empty());
        assert_eq!(args.interval_ms, 0);
    }

    #[test]
    fn serve_overrides_are_optional() {
        let cli = Cli::try_parse_from(["toh", "serve", "--latency-ms", "250"])
            .expect("cli should parse");
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve command");
        };
        assert_eq!(args.addr, None);
        assert_eq!(args.latency_ms, Some(250));
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["toh", "--base-url", "http://localhost:9000/api", "list"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.base_url.as_deref(), Some("http://localhost:9000/api"));
        assert!(!flags.memory);
    }
}
