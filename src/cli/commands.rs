//! Command dispatch: maps parsed arguments to service calls

use std::io::Write;
use std::path::PathBuf;

use clap::CommandFactory;
use serde_json::Value;
use termtree::Tree;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands, LocationCommands, MenuCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{self, Settings};
use crate::domain::entities::{locations_to_json, Entry, Menu};
use crate::infrastructure::{InfraError, ServiceContainer};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Menus { command }) => match command {
            MenuCommands::List { compact } => menus_list(cli, *compact),
            MenuCommands::Get { query, compact } => menus_get(cli, query, *compact),
            MenuCommands::Tree { query } => menus_tree(cli, query),
        },
        Some(Commands::Locations { command }) => match command {
            LocationCommands::List { compact } => locations_list(cli, *compact),
            LocationCommands::Get { query, compact } => locations_get(cli, query, *compact),
        },
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => config_show(),
            ConfigCommands::Init => config_init(),
            ConfigCommands::Path => config_path(),
        },
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(*shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

/// Build the service container, applying the --store-dir override.
fn container(cli: &Cli) -> CliResult<ServiceContainer> {
    let mut settings = Settings::load().map_err(InfraError::from)?;
    if let Some(dir) = &cli.store_dir {
        settings.store_dir = PathBuf::from(config::expand_env_vars(&dir.to_string_lossy()));
    }
    if !settings.store_dir.is_dir() {
        return Err(CliError::InvalidArgs(format!(
            "store directory does not exist: {}",
            settings.store_dir.display()
        )));
    }
    debug!("store_dir: {:?}", settings.store_dir);
    Ok(ServiceContainer::new(settings))
}

fn print_json(value: &Value, compact: bool) {
    let rendered = if compact {
        value.to_string()
    } else {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
    };
    output::info(&rendered);
}

#[instrument(skip(cli))]
fn menus_list(cli: &Cli, compact: bool) -> CliResult<()> {
    let container = container(cli)?;
    let menus = container.queries.list_menus()?;
    debug!("menus: {}", menus.len());
    let rendered = Value::Array(menus.iter().map(Menu::to_json).collect());
    print_json(&rendered, compact);
    Ok(())
}

#[instrument(skip(cli))]
fn menus_get(cli: &Cli, query: &str, compact: bool) -> CliResult<()> {
    let container = container(cli)?;
    let menu = container.queries.get_menu(query)?;
    print_json(&menu.to_json(), compact);
    Ok(())
}

#[instrument(skip(cli))]
fn menus_tree(cli: &Cli, query: &str) -> CliResult<()> {
    let container = container(cli)?;
    let menu = container.queries.get_menu(query)?;

    let mut tree = Tree::new(format!("{} ({})", menu.name, menu.slug));
    for item in &menu.items {
        tree.push(entry_tree(item));
    }
    output::info(&tree);
    Ok(())
}

fn entry_tree(entry: &Entry) -> Tree<String> {
    let label = if entry.url.is_empty() {
        entry.title.clone()
    } else {
        format!("{}  {}", entry.title, entry.url)
    };
    let mut tree = Tree::new(label);
    for child in &entry.children {
        tree.push(entry_tree(child));
    }
    tree
}

#[instrument(skip(cli))]
fn locations_list(cli: &Cli, compact: bool) -> CliResult<()> {
    let container = container(cli)?;
    let locations = container.queries.list_locations()?;
    debug!("locations: {}", locations.len());
    print_json(&locations_to_json(&locations), compact);
    Ok(())
}

#[instrument(skip(cli))]
fn locations_get(cli: &Cli, query: &str, compact: bool) -> CliResult<()> {
    let container = container(cli)?;
    let location = container.queries.get_location(query)?;
    print_json(&location.to_json(), compact);
    Ok(())
}

fn config_show() -> CliResult<()> {
    let settings = Settings::load().map_err(InfraError::from)?;
    output::info(&settings.to_toml().map_err(InfraError::from)?);
    Ok(())
}

fn config_init() -> CliResult<()> {
    let path = config::global_config_path().ok_or_else(|| {
        CliError::InvalidArgs("cannot determine config directory".to_string())
    })?;
    if path.exists() {
        return Err(CliError::InvalidArgs(format!(
            "config file already exists: {}",
            path.display()
        )));
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| InfraError::io(format!("create {}", parent.display()), e))?;
    }
    let mut file = std::fs::File::create(&path)
        .map_err(|e| InfraError::io(format!("create {}", path.display()), e))?;
    file.write_all(Settings::template().as_bytes())
        .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
    output::action("Created", &path.display());
    Ok(())
}

fn config_path() -> CliResult<()> {
    output::header("Config paths");
    match config::global_config_path() {
        Some(path) => {
            let marker = if path.exists() { "" } else { " (not found)" };
            output::detail(&format!("global: {}{}", path.display(), marker));
        }
        None => output::detail("global: <unavailable>"),
    }
    output::detail("env:    RSMENU_* variables");
    Ok(())
}
