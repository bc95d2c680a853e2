//! Query facade
//!
//! The four read operations, composed from the menu and location services.
//! Shapes are transport-agnostic; an HTTP layer or the CLI render them as-is.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::application::services::{LocationService, MenuService};
use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{Location, Menu};

/// Facade exposing the read-only query operations.
pub struct QueryService {
    menus: Arc<MenuService>,
    locations: Arc<LocationService>,
}

impl QueryService {
    pub fn new(menus: Arc<MenuService>, locations: Arc<LocationService>) -> Self {
        Self { menus, locations }
    }

    /// All menus with at least one entry, fully built.
    pub fn list_menus(&self) -> ApplicationResult<Vec<Menu>> {
        self.menus.list_menus()
    }

    /// Resolve a menu by menu id, menu slug, or indirectly through a
    /// location id/slug. Location assignment is checked first.
    pub fn get_menu(&self, input: &str) -> ApplicationResult<Menu> {
        match self.locations.resolve(input) {
            Ok(location) => return Ok(location.menu),
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(e),
        }

        self.menus
            .menu_by_ref(input)?
            .ok_or_else(|| ApplicationError::MenuNotFound(input.to_string()))
    }

    /// All configured locations, keyed by slug.
    pub fn list_locations(&self) -> ApplicationResult<BTreeMap<String, Location>> {
        self.locations.list_locations()
    }

    /// Resolve a single location by slug.
    pub fn get_location(&self, input: &str) -> ApplicationResult<Location> {
        self.locations.resolve(input)
    }
}
