//! Location resolver
//!
//! Maps location slugs to their assigned menus via the store's location map.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::services::MenuService;
use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{Location, Menu};
use crate::infrastructure::traits::{EntityRef, FieldEnricher, MenuStore};

/// Service for resolving locations and their menu snapshots.
pub struct LocationService {
    store: Arc<dyn MenuStore>,
    enricher: Arc<dyn FieldEnricher>,
    menus: Arc<MenuService>,
}

impl LocationService {
    /// Create a new location service.
    pub fn new(
        store: Arc<dyn MenuStore>,
        enricher: Arc<dyn FieldEnricher>,
        menus: Arc<MenuService>,
    ) -> Self {
        Self {
            store,
            enricher,
            menus,
        }
    }

    /// Resolve a location slug to its record with a materialized menu snapshot.
    ///
    /// # Errors
    ///
    /// [`ApplicationError::LocationNotFound`] if the slug is unknown or has
    /// no menu assigned.
    pub fn resolve(&self, input: &str) -> ApplicationResult<Location> {
        debug!("resolve location: {input}");
        let locations = self.menus.location_map()?;
        let menu_id = locations
            .get(input)
            .copied()
            .ok_or_else(|| ApplicationError::LocationNotFound(input.to_string()))?;

        self.materialize(input, menu_id, &locations)
    }

    /// All configured locations, keyed by slug in stable order.
    ///
    /// A slug whose assigned menu cannot be found still yields a location
    /// with an empty placeholder menu; one bad assignment never fails the
    /// whole listing.
    pub fn list_locations(&self) -> ApplicationResult<BTreeMap<String, Location>> {
        let assignments = self.menus.location_map()?;
        let mut locations = BTreeMap::new();
        for (slug, menu_id) in &assignments {
            let location = self.materialize(slug, *menu_id, &assignments)?;
            locations.insert(slug.clone(), location);
        }
        debug!("list_locations: {} locations", locations.len());
        Ok(locations)
    }

    fn materialize(
        &self,
        slug: &str,
        menu_id: u64,
        assignments: &BTreeMap<String, u64>,
    ) -> ApplicationResult<Location> {
        let record = self
            .store
            .menu_by_id(menu_id)
            .map_err(|e| ApplicationError::OperationFailed {
                context: format!("menu lookup for location `{slug}`"),
                source: Box::new(e),
            })?;

        let menu = match record {
            Some(record) => self.menus.build_menu(&record, assignments)?,
            None => {
                warn!("location `{slug}`: assigned menu {menu_id} not found, using placeholder");
                Menu::empty(menu_id)
            }
        };

        Ok(Location {
            slug: slug.to_string(),
            menu_id,
            menu,
            extra: self.enricher.fields(EntityRef::Location(slug)),
        })
    }
}
