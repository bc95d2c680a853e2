//! rsmenu: read-only queries over hierarchical navigation menus
//!
//! Menus are stored flat (entry id + parent id) and rebuilt into nested
//! trees at query time. Layering:
//!
//! - `domain`: entities and the hierarchy builder, no I/O
//! - `application`: query services behind storage/enrichment traits
//! - `infrastructure`: TOML file store, field enricher, DI container
//! - `cli`: argument parsing and command dispatch

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
