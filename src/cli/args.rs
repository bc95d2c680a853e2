//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Read-only query tool for hierarchical navigation menus
#[derive(Parser, Debug)]
#[command(name = "rsmenu")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase debug output (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Menu store directory (overrides config)
    #[arg(long, global = true, value_hint = ValueHint::DirPath, env = "RSMENU_STORE_DIR")]
    pub store_dir: Option<PathBuf>,

    /// Print author and version info
    #[arg(long)]
    pub info: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Query menus
    Menus {
        #[command(subcommand)]
        command: MenuCommands,
    },

    /// Query locations
    Locations {
        #[command(subcommand)]
        command: LocationCommands,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum MenuCommands {
    /// List all non-empty menus as JSON
    List {
        /// Single-line JSON output
        #[arg(short, long)]
        compact: bool,
    },

    /// Resolve one menu by id, slug, or location and print it as JSON
    Get {
        /// Menu id, menu slug, or location slug
        query: String,
        /// Single-line JSON output
        #[arg(short, long)]
        compact: bool,
    },

    /// Resolve one menu and render its hierarchy as a tree
    Tree {
        /// Menu id, menu slug, or location slug
        query: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum LocationCommands {
    /// List all locations with their assigned menus as JSON
    List {
        /// Single-line JSON output
        #[arg(short, long)]
        compact: bool,
    },

    /// Resolve one location by slug and print it as JSON
    Get {
        /// Location slug
        query: String,
        /// Single-line JSON output
        #[arg(short, long)]
        compact: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init,

    /// Show config paths
    Path,
}
