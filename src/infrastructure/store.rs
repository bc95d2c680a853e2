//! TOML-directory menu store
//!
//! One menu per `.toml` file plus a `locations.toml` holding the slug →
//! menu id assignment map. Files are re-read on every call; nothing is
//! cached across queries.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;
use walkdir::WalkDir;

use crate::domain::validate_slug;
use crate::infrastructure::traits::{EntryRecord, MenuRecord, MenuStore};

/// File name of the location assignment map.
pub const LOCATIONS_FILE: &str = "locations.toml";
/// File name of the extra-fields sidecar (read by the enricher, not the store).
pub const FIELDS_FILE: &str = "fields.toml";

#[derive(Debug, Deserialize)]
struct MenuFile {
    id: u64,
    slug: String,
    name: String,
    #[serde(default)]
    entries: Vec<EntryRow>,
}

#[derive(Debug, Deserialize)]
struct EntryRow {
    id: u64,
    #[serde(default)]
    parent: u64,
    #[serde(default)]
    title: String,
    url: String,
    #[serde(default)]
    position: u32,
}

/// Store backed by a directory of TOML files.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the extra-fields sidecar inside this store.
    pub fn fields_path(&self) -> PathBuf {
        self.dir.join(FIELDS_FILE)
    }

    fn load_menu_files(&self) -> io::Result<Vec<MenuFile>> {
        if !self.dir.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("menu store directory not found: {}", self.dir.display()),
            ));
        }

        let mut menus = Vec::new();
        for entry in WalkDir::new(&self.dir)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let is_toml = path.extension().map(|ext| ext == "toml").unwrap_or(false);
            let reserved = path
                .file_name()
                .map(|n| n == LOCATIONS_FILE || n == FIELDS_FILE)
                .unwrap_or(false);
            if !is_toml || reserved {
                continue;
            }
            menus.push(Self::parse_menu_file(path)?);
        }

        // Stable enumeration order, independent of file naming
        menus.sort_by_key(|m| m.id);
        debug!("load_menu_files: {} menus from {}", menus.len(), self.dir.display());
        Ok(menus)
    }

    fn parse_menu_file(path: &Path) -> io::Result<MenuFile> {
        let content = std::fs::read_to_string(path)?;
        let menu: MenuFile = toml::from_str(&content).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("parse {}: {e}", path.display()),
            )
        })?;
        validate_slug(&menu.slug).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("{}: {e}", path.display()),
            )
        })?;
        Ok(menu)
    }
}

impl MenuStore for FileStore {
    fn menus(&self) -> io::Result<Vec<MenuRecord>> {
        Ok(self
            .load_menu_files()?
            .into_iter()
            .map(|m| MenuRecord {
                id: m.id,
                slug: m.slug,
                name: m.name,
            })
            .collect())
    }

    fn menu_by_id(&self, id: u64) -> io::Result<Option<MenuRecord>> {
        Ok(self.menus()?.into_iter().find(|m| m.id == id))
    }

    fn menu_by_slug(&self, slug: &str) -> io::Result<Option<MenuRecord>> {
        Ok(self.menus()?.into_iter().find(|m| m.slug == slug))
    }

    fn entries(&self, menu_id: u64) -> io::Result<Vec<EntryRecord>> {
        let menu = self
            .load_menu_files()?
            .into_iter()
            .find(|m| m.id == menu_id);

        Ok(menu
            .map(|m| m.entries)
            .unwrap_or_default()
            .into_iter()
            .map(|row| EntryRecord {
                id: row.id,
                parent: row.parent,
                title: row.title,
                url: row.url,
                position: row.position,
            })
            .collect())
    }

    fn locations(&self) -> io::Result<BTreeMap<String, u64>> {
        let path = self.dir.join(LOCATIONS_FILE);
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&path)?;
        let assignments: BTreeMap<String, u64> = toml::from_str(&content).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("parse {}: {e}", path.display()),
            )
        })?;
        for slug in assignments.keys() {
            validate_slug(slug).map_err(|e| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("{}: {e}", path.display()),
                )
            })?;
        }
        Ok(assignments)
    }
}
