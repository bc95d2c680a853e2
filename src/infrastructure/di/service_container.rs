//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::{LocationService, MenuService, QueryService};
use crate::config::Settings;
use crate::infrastructure::enrich::FileFieldEnricher;
use crate::infrastructure::store::FileStore;
use crate::infrastructure::traits::{FieldEnricher, MenuStore, NoopEnricher};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Storage abstraction
    pub store: Arc<dyn MenuStore>,

    /// Optional field enricher
    pub enricher: Arc<dyn FieldEnricher>,

    /// Menu pipeline service
    pub menus: Arc<MenuService>,

    /// Location resolver
    pub locations: Arc<LocationService>,

    /// Query facade
    pub queries: Arc<QueryService>,
}

impl ServiceContainer {
    /// Create a new service container with the file-backed implementations.
    ///
    /// The enricher is an injected capability: when the store directory has
    /// no `fields.toml`, the no-op default is wired in instead.
    pub fn new(settings: Settings) -> Self {
        let store = FileStore::new(settings.store_dir.clone());
        let enricher: Arc<dyn FieldEnricher> = if store.fields_path().is_file() {
            Arc::new(FileFieldEnricher::new(store.fields_path()))
        } else {
            Arc::new(NoopEnricher)
        };
        Self::with_deps(settings, Arc::new(store), enricher)
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        store: Arc<dyn MenuStore>,
        enricher: Arc<dyn FieldEnricher>,
    ) -> Self {
        let settings = Arc::new(settings);
        let menus = Arc::new(MenuService::new(store.clone(), enricher.clone()));
        let locations = Arc::new(LocationService::new(
            store.clone(),
            enricher.clone(),
            menus.clone(),
        ));
        let queries = Arc::new(QueryService::new(menus.clone(), locations.clone()));

        Self {
            settings,
            store,
            enricher,
            menus,
            locations,
            queries,
        }
    }
}
