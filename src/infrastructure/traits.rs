//! I/O boundary traits for testability
//!
//! These traits abstract the external collaborators (entry/location storage
//! and the optional field enricher), allowing services to be tested with
//! in-memory implementations.

use std::collections::BTreeMap;
use std::io;

use crate::domain::ExtraFields;

/// Raw menu metadata as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRecord {
    pub id: u64,
    pub slug: String,
    pub name: String,
}

/// Flat entry row as stored. `parent` 0 denotes a root entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRecord {
    pub id: u64,
    pub parent: u64,
    pub title: String,
    pub url: String,
    pub position: u32,
}

/// Storage abstraction: flat entry lists and raw menu/location metadata.
///
/// Implementations are read-only; every query materializes fresh data.
pub trait MenuStore: Send + Sync {
    /// All menu records, in stable enumeration order.
    fn menus(&self) -> io::Result<Vec<MenuRecord>>;

    /// Menu record by numeric id.
    fn menu_by_id(&self, id: u64) -> io::Result<Option<MenuRecord>>;

    /// Menu record by slug.
    fn menu_by_slug(&self, slug: &str) -> io::Result<Option<MenuRecord>>;

    /// Flat entry rows for a menu, in stored order.
    fn entries(&self, menu_id: u64) -> io::Result<Vec<EntryRecord>>;

    /// Location slug → assigned menu id.
    fn locations(&self) -> io::Result<BTreeMap<String, u64>>;
}

/// Entity reference handed to the enricher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityRef<'a> {
    Menu(u64),
    Location(&'a str),
    Entry(u64),
}

/// Optional capability attaching extra named fields to an entity.
///
/// Best-effort by contract: an empty map means no-op, and implementations
/// swallow their own failures rather than failing the query.
pub trait FieldEnricher: Send + Sync {
    fn fields(&self, entity: EntityRef<'_>) -> ExtraFields;
}

/// Default enricher: attaches nothing.
#[derive(Debug, Default)]
pub struct NoopEnricher;

impl FieldEnricher for NoopEnricher {
    fn fields(&self, _entity: EntityRef<'_>) -> ExtraFields {
        ExtraFields::new()
    }
}
