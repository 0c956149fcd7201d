//! Command-line definitions.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Search a document index from the command line.
#[derive(Parser, Debug)]
#[command(name = "trawl", author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Service URL, overriding the configuration
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a search and print the hits
    Search(SearchArgs),
    /// Count matching documents
    Count(CountArgs),
    /// Print the request path for a scope
    Path(ScopeArgs),
    /// Inspect or create the configuration file
    Config {
        /// What to do with the configuration
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Indices and types to search.
#[derive(Args, Debug, Clone, Default)]
pub struct ScopeArgs {
    /// Index to search (repeatable)
    #[arg(short = 'i', long = "index", value_name = "INDEX")]
    pub indices: Vec<String>,

    /// Document type to search (repeatable)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub types: Vec<String>,
}

/// Arguments of `trawl search`.
#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Query text; omitted matches every document
    pub query: Option<String>,

    #[command(flatten)]
    pub scope: ScopeArgs,

    /// Maximum number of hits
    #[arg(short, long)]
    pub limit: Option<u64>,

    /// Ask the service to explain each score
    #[arg(long)]
    pub explain: bool,

    /// Request option such as `routing=r1` (repeatable)
    #[arg(short = 'o', long = "option", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub options: Vec<(String, String)>,

    /// Print the raw JSON response
    #[arg(long)]
    pub json: bool,
}

/// Arguments of `trawl count`.
#[derive(Args, Debug, Clone, Default)]
pub struct CountArgs {
    /// Query text; omitted counts every document
    pub query: Option<String>,

    #[command(flatten)]
    pub scope: ScopeArgs,
}

/// `trawl config` subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Print the config file location
    Path,
    /// Print the effective configuration
    Show,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Splits `key=value`; the value may itself contain `=`.
pub fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{s}'")),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("routing=r1,r2").unwrap(),
            ("routing".to_string(), "r1,r2".to_string())
        );
        assert_eq!(
            parse_key_value("preference=_only_node:a=b").unwrap().1,
            "_only_node:a=b"
        );
        assert!(parse_key_value("routing").is_err());
        assert!(parse_key_value("=x").is_err());
    }

    #[test]
    fn test_parse_search_command() {
        let cli = Cli::parse_from([
            "trawl", "search", "kimchy", "-i", "tweets", "-i", "users", "-t", "tweet", "-l",
            "5", "--explain", "-o", "routing=r1", "--json",
        ]);
        let Command::Search(args) = cli.command else {
            unreachable!("expected search command");
        };
        assert_eq!(args.query.as_deref(), Some("kimchy"));
        assert_eq!(args.scope.indices, ["tweets", "users"]);
        assert_eq!(args.scope.types, ["tweet"]);
        assert_eq!(args.limit, Some(5));
        assert!(args.explain);
        assert!(args.json);
        assert_eq!(args.options, [("routing".to_string(), "r1".to_string())]);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["trawl", "path", "-i", "a", "--url", "http://es:9200", "-vv"]);
        assert_eq!(cli.url.as_deref(), Some("http://es:9200"));
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Path(_)));
    }

    #[test]
    fn test_config_init_force() {
        let cli = Cli::parse_from(["trawl", "config", "init", "--force"]);
        assert!(matches!(
            cli.command,
            Command::Config {
                action: ConfigAction::Init { force: true }
            }
        ));
    }
}
