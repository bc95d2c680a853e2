//! Menu query service
//!
//! Runs the retrieval pipeline: flat entry rows from the store, nested
//! forest from the hierarchy builder, extra fields from the enricher.

use std::collections::BTreeMap;
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{build_forest, path_only, Entry, Forest, Menu};
use crate::infrastructure::traits::{EntityRef, FieldEnricher, MenuRecord, MenuStore};

/// Service for building fully nested, enriched menus.
pub struct MenuService {
    store: Arc<dyn MenuStore>,
    enricher: Arc<dyn FieldEnricher>,
}

impl MenuService {
    /// Create a new menu service.
    pub fn new(store: Arc<dyn MenuStore>, enricher: Arc<dyn FieldEnricher>) -> Self {
        Self { store, enricher }
    }

    /// Fetch and nest the entries of one menu.
    ///
    /// Entry URLs are reduced to their path component and per-entry extra
    /// fields are attached before building. Orphaned entries are part of the
    /// returned [`Forest`]; callers decide whether to log or surface them.
    pub fn items(&self, menu_id: u64) -> ApplicationResult<Forest> {
        let mut rows =
            self.store
                .entries(menu_id)
                .map_err(|e| ApplicationError::OperationFailed {
                    context: format!("fetch entries for menu {menu_id}"),
                    source: Box::new(e),
                })?;

        // Stable sort keeps file order for equal positions
        rows.sort_by_key(|r| r.position);

        let entries: Vec<Entry> = rows
            .into_iter()
            .map(|row| Entry {
                id: row.id,
                parent: row.parent,
                title: row.title,
                url: path_only(&row.url),
                position: row.position,
                children: Vec::new(),
                extra: self.enricher.fields(EntityRef::Entry(row.id)),
            })
            .collect();

        let forest = build_forest(entries)?;
        if !forest.orphans.is_empty() {
            let ids: Vec<u64> = forest.orphans.iter().map(|e| e.id).collect();
            warn!("menu {menu_id}: {} unattached entries {ids:?}", ids.len());
        }
        Ok(forest)
    }

    /// Assemble a complete menu: nested items, reverse-looked-up location
    /// slug, and menu-level extra fields.
    pub fn build_menu(
        &self,
        record: &MenuRecord,
        locations: &BTreeMap<String, u64>,
    ) -> ApplicationResult<Menu> {
        debug!("build_menu: id={} slug={}", record.id, record.slug);
        let forest = self.items(record.id)?;
        let location = locations
            .iter()
            .find(|(_, menu_id)| **menu_id == record.id)
            .map(|(slug, _)| slug.clone());

        Ok(Menu {
            id: record.id,
            slug: record.slug.clone(),
            name: record.name.clone(),
            location,
            items: forest.roots,
            extra: self.enricher.fields(EntityRef::Menu(record.id)),
        })
    }

    /// Look up a menu by numeric id or slug. `None` means the input does not
    /// identify a menu directly (it may still name a location).
    pub fn menu_by_ref(&self, input: &str) -> ApplicationResult<Option<Menu>> {
        let record = match input.parse::<u64>() {
            Ok(id) => self.store_call("menu lookup by id", |s| s.menu_by_id(id))?,
            Err(_) => self.store_call("menu lookup by slug", |s| s.menu_by_slug(input))?,
        };

        match record {
            Some(record) => {
                let locations = self.location_map()?;
                Ok(Some(self.build_menu(&record, &locations)?))
            }
            None => Ok(None),
        }
    }

    /// Build every menu that has at least one entry, in enumeration order.
    ///
    /// Menus are independent, so they are built in parallel; the collect
    /// preserves the store's enumeration order.
    pub fn list_menus(&self) -> ApplicationResult<Vec<Menu>> {
        let records = self.store_call("enumerate menus", |s| s.menus())?;
        let locations = self.location_map()?;

        let built: Vec<ApplicationResult<Option<Menu>>> = records
            .par_iter()
            .map(|record| {
                let forest = self.items(record.id)?;
                if forest.is_empty() {
                    return Ok(None);
                }
                let location = locations
                    .iter()
                    .find(|(_, menu_id)| **menu_id == record.id)
                    .map(|(slug, _)| slug.clone());
                Ok(Some(Menu {
                    id: record.id,
                    slug: record.slug.clone(),
                    name: record.name.clone(),
                    location,
                    items: forest.roots,
                    extra: self.enricher.fields(EntityRef::Menu(record.id)),
                }))
            })
            .collect();

        let mut menus = Vec::new();
        for result in built {
            if let Some(menu) = result? {
                menus.push(menu);
            }
        }
        debug!("list_menus: {} non-empty menus", menus.len());
        Ok(menus)
    }

    /// The location slug → menu id assignment map.
    pub fn location_map(&self) -> ApplicationResult<BTreeMap<String, u64>> {
        self.store_call("fetch location map", |s| s.locations())
    }

    fn store_call<T>(
        &self,
        context: &str,
        f: impl FnOnce(&dyn MenuStore) -> std::io::Result<T>,
    ) -> ApplicationResult<T> {
        f(self.store.as_ref()).map_err(|e| ApplicationError::OperationFailed {
            context: context.to_string(),
            source: Box::new(e),
        })
    }
}
