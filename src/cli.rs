use std::path::{Path, PathBuf};

use crate::composition::{CompositionStore, Snapshot};
use crate::config::AppConfig;
use crate::data::{load_catalog, spawn_catalog_load, terminal_command};
use crate::script::{load_script, ScriptError};
use crate::server;
use crate::simulation::{export_damage_csv, SimulationClient, SimulationRequest};

const USAGE: &str = "usage: teamcomp <serve|catalog|compose|request|simulate>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Serve,
    Catalog,
    Compose,
    Request,
    Simulate,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Script(#[from] ScriptError),
    #[error("catalog load failed: {0}")]
    Catalog(String),
    #[error(transparent)]
    Simulation(#[from] crate::simulation::SimulationError),
    #[error("failed to export csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to start runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("serve") => Some(Command::Serve),
        Some("catalog") => Some(Command::Catalog),
        Some("compose") => Some(Command::Compose),
        Some("request") => Some(Command::Request),
        Some("simulate") => Some(Command::Simulate),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    let config = AppConfig::from_env();
    match parse_command(args) {
        Some(Command::Serve) => handle_serve(&config),
        Some(Command::Catalog) => handle_catalog(args, &config),
        Some(Command::Compose) => with_script(args, "compose", |path| {
            let snapshot = compose(path, args, &config)?;
            Ok(serde_json::to_string_pretty(&snapshot.view())?)
        }),
        Some(Command::Request) => with_script(args, "request", |path| {
            let snapshot = compose(path, args, &config)?;
            Ok(serde_json::to_string_pretty(&SimulationRequest::from_state(
                &snapshot,
            ))?)
        }),
        Some(Command::Simulate) => with_script(args, "simulate", |path| {
            simulate(path, args, &config)
        }),
        None => {
            eprintln!("{USAGE}");
            2
        }
    }
}

fn handle_serve(config: &AppConfig) -> i32 {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("failed to start runtime: {err}");
            return 1;
        }
    };
    let store = CompositionStore::new();
    {
        let _guard = runtime.enter();
        spawn_catalog_load(
            store.clone(),
            config.catalog_path.clone(),
            config.mutator.clone(),
        );
    }
    match server::run_server(&config.bind_addr, store) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("server error: {err}");
            1
        }
    }
}

fn handle_catalog(args: &[String], config: &AppConfig) -> i32 {
    let path = args
        .get(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| config.catalog_path.clone());
    let mutator = args.get(3).cloned().unwrap_or_else(|| config.mutator.clone());

    match load_catalog(&path, &mutator) {
        Ok(catalog) => {
            let summary = serde_json::json!({
                "path": path.display().to_string(),
                "mutator": mutator,
                "champions": catalog.champions.len(),
                "traits": catalog.traits.len(),
                "items": catalog.items.len(),
                "augments": catalog.augments.len(),
            });
            match serde_json::to_string_pretty(&summary) {
                Ok(payload) => {
                    println!("{payload}");
                    0
                }
                Err(err) => {
                    eprintln!("failed to serialize catalog summary: {err}");
                    1
                }
            }
        }
        Err(err) => {
            eprintln!("catalog load failed: {err}");
            1
        }
    }
}

fn with_script(
    args: &[String],
    name: &str,
    run: impl FnOnce(&Path) -> Result<String, CliError>,
) -> i32 {
    let Some(path) = args.get(2) else {
        eprintln!("usage: teamcomp {name} <script.yaml> [--catalog <path>] [--mutator <name>]");
        return 2;
    };
    match run(Path::new(path)) {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("{name} failed: {err}");
            1
        }
    }
}

/// Load the script, its catalog, and replay the steps through a fresh store.
/// `--catalog`/`--mutator` win over the script, which wins over the environment.
fn compose(script_path: &Path, args: &[String], config: &AppConfig) -> Result<Snapshot, CliError> {
    let script = load_script(script_path)?;
    let catalog_path = flag_value(args, "--catalog")
        .map(PathBuf::from)
        .or_else(|| script.catalog.clone())
        .unwrap_or_else(|| config.catalog_path.clone());
    let mutator = flag_value(args, "--mutator")
        .map(str::to_string)
        .or_else(|| script.mutator.clone())
        .unwrap_or_else(|| config.mutator.clone());

    let store = CompositionStore::new();
    let loaded = store.dispatch(terminal_command(load_catalog(&catalog_path, &mutator)));
    if let Some(message) = loaded.error() {
        return Err(CliError::Catalog(message.to_string()));
    }

    let commands = script.commands(loaded.catalog())?;
    tracing::debug!(steps = commands.len(), "replaying script");
    Ok(store.dispatch_all(commands))
}

fn simulate(script_path: &Path, args: &[String], config: &AppConfig) -> Result<String, CliError> {
    let snapshot = compose(script_path, args, config)?;
    let request = SimulationRequest::from_state(&snapshot);
    let url = flag_value(args, "--url").unwrap_or(config.simulator_url.as_str());
    let client = SimulationClient::new(url).with_timeout(config.simulator_timeout);

    let runtime = tokio::runtime::Runtime::new()?;
    let run = runtime.block_on(client.run(request))?;

    if let Some(csv_path) = flag_value(args, "--csv") {
        export_damage_csv(&run.response, csv_path)?;
        tracing::info!(path = csv_path, "damage csv written");
    }
    Ok(serde_json::to_string_pretty(&run)?)
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|index| args.get(index + 1))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn parse_command_recognises_subcommands() {
        assert_eq!(parse_command(&args(&["teamcomp", "serve"])), Some(Command::Serve));
        assert_eq!(parse_command(&args(&["teamcomp", "request", "x"])), Some(Command::Request));
        assert_eq!(parse_command(&args(&["teamcomp", "bogus"])), None);
        assert_eq!(parse_command(&args(&["teamcomp"])), None);
    }

    #[test]
    fn flag_value_reads_following_argument() {
        let argv = args(&["teamcomp", "simulate", "s.yaml", "--csv", "out.csv", "--url"]);
        assert_eq!(flag_value(&argv, "--csv"), Some("out.csv"));
        assert_eq!(flag_value(&argv, "--url"), None);
        assert_eq!(flag_value(&argv, "--catalog"), None);
    }
}
