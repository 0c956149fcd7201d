//! Command handlers.
//!
//! Handlers return the text to print so they can be tested without a
//! terminal; [`run`] does the printing.

use std::path::Path;

use serde_json::{Map, Value};
use trawl_client::{Client, ClientConfig};
use trawl_search::{CallOptions, ResultSet, Search, path};

use crate::cli::{Cli, Command, ConfigAction, CountArgs, ScopeArgs, SearchArgs};
use crate::error::{Error, Result};

/// Runs a parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    let output = match cli.command {
        Command::Path(scope) => cmd_path(&scope),
        Command::Config { action } => match action {
            ConfigAction::Path => cmd_config_path(cli.config.as_deref())?,
            ConfigAction::Show => {
                cmd_config_show(&load_config(cli.config.as_deref(), cli.url.as_deref())?)?
            }
            ConfigAction::Init { force } => cmd_config_init(cli.config.as_deref(), force)?,
        },
        Command::Search(args) => {
            let client = Client::new(load_config(cli.config.as_deref(), cli.url.as_deref())?)?;
            cmd_search(&client, &args).await?
        }
        Command::Count(args) => {
            let client = Client::new(load_config(cli.config.as_deref(), cli.url.as_deref())?)?;
            cmd_count(&client, &args).await?
        }
    };
    print!("{output}");
    Ok(())
}

/// Loads the configuration, letting `--url` win over file and environment.
pub fn load_config(path: Option<&Path>, url: Option<&str>) -> Result<ClientConfig> {
    let mut config = ClientConfig::load(path)?;
    if let Some(url) = url {
        config.url = url.to_string();
        config.validate()?;
    }
    Ok(config)
}

// ============================================================================
// search / count / path
// ============================================================================

/// Builds a search scoped to the given indices and types.
pub fn scoped_search(client: &Client, scope: &ScopeArgs) -> Result<Search> {
    let mut search = client.search();
    search.add_indices(&scope.indices)?.add_types(&scope.types)?;
    Ok(search)
}

/// Turns `--limit`, `--explain` and `-o` flags into a search option map.
///
/// Values are read as booleans or integers where they parse as such. A key
/// given more than once has its values joined with `,`.
pub fn option_map(args: &SearchArgs) -> Result<Map<String, Value>> {
    let mut map = Map::new();
    for (key, value) in &args.options {
        if key == "limit" || key == "explain" {
            return Err(Error::invalid_argument(format!(
                "use --{key} instead of -o {key}=..."
            )));
        }
        let merged = match map.remove(key) {
            Some(previous) => Value::String(format!("{},{value}", display_value(&previous))),
            None => parse_value(value),
        };
        map.insert(key.clone(), merged);
    }
    if let Some(limit) = args.limit {
        map.insert("limit".to_string(), Value::from(limit));
    }
    if args.explain {
        map.insert("explain".to_string(), Value::Bool(true));
    }
    Ok(map)
}

/// `trawl search`
pub async fn cmd_search(client: &Client, args: &SearchArgs) -> Result<String> {
    let mut search = scoped_search(client, &args.scope)?;
    let options = option_map(args)?;
    let query = args.query.clone().unwrap_or_default();

    let results = search.search(query, CallOptions::Map(options)).await?;
    if args.json {
        let mut out = serde_json::to_string_pretty(results.response().body())?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(render_results(&results))
    }
}

/// `trawl count`
pub async fn cmd_count(client: &Client, args: &CountArgs) -> Result<String> {
    let mut search = scoped_search(client, &args.scope)?;
    let count = search.count(args.query.clone().unwrap_or_default()).await?;
    Ok(format!("{count}\n"))
}

/// `trawl path`
pub fn cmd_path(scope: &ScopeArgs) -> String {
    format!("{}\n", path::build(&scope.indices, &scope.types))
}

/// One line per hit, preceded by a summary line.
pub fn render_results(results: &ResultSet) -> String {
    let mut out = format!(
        "{} of {} hits in {} ms{}\n",
        results.count(),
        results.total_hits(),
        results.total_time(),
        if results.has_timed_out() { " (timed out)" } else { "" }
    );
    for hit in results {
        let score = hit
            .score()
            .map(|s| format!("{s:.3}"))
            .unwrap_or_else(|| "-".to_string());
        let location = [hit.index(), hit.doc_type(), hit.id()]
            .iter()
            .map(|part| part.unwrap_or("?"))
            .collect::<Vec<_>>()
            .join("/");
        out.push_str(&format!("{score}\t{location}"));
        if let Some(source) = hit.source() {
            out.push_str(&format!("\t{}", Value::Object(source.clone())));
        }
        out.push('\n');
    }
    out
}

// ============================================================================
// config
// ============================================================================

/// `trawl config path`
pub fn cmd_config_path(explicit: Option<&Path>) -> Result<String> {
    let path = ClientConfig::resolve_config_path(explicit).ok_or_else(|| {
        Error::invalid_argument("could not determine config directory for this platform")
    })?;
    let mut out = format!("{}\n", path.display());
    if !path.exists() {
        out.push_str("(file does not exist; run `trawl config init` to create it)\n");
    }
    Ok(out)
}

/// `trawl config show`
pub fn cmd_config_show(config: &ClientConfig) -> Result<String> {
    Ok(config.to_toml_string()?)
}

/// `trawl config init`
pub fn cmd_config_init(explicit: Option<&Path>, force: bool) -> Result<String> {
    let path = ClientConfig::resolve_config_path(explicit)
        .ok_or_else(|| Error::invalid_argument("could not determine config directory"))?;
    if path.exists() && !force {
        return Err(Error::invalid_argument(format!(
            "config file already exists at {}; use --force to overwrite",
            path.display()
        )));
    }
    ClientConfig::default().save(&path)?;
    log::info!("wrote default config to {}", path.display());
    Ok(format!("Config file created at {}\n", path.display()))
}

/// Reads a flag value as a boolean, then an integer, then a string.
fn parse_value(s: &str) -> Value {
    match s {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => s
            .parse::<i64>()
            .map(Value::from)
            .unwrap_or_else(|_| Value::String(s.to_string())),
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
