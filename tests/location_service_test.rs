//! Tests for location resolution and listing

use std::collections::BTreeMap;
use std::io;
use std::sync::Arc;

use rsmenu::config::Settings;
use rsmenu::infrastructure::traits::{EntryRecord, MenuRecord, MenuStore, NoopEnricher};
use rsmenu::infrastructure::ServiceContainer;

/// In-memory store for location tests
#[derive(Default)]
struct MockStore {
    menus: Vec<MenuRecord>,
    entries: BTreeMap<u64, Vec<EntryRecord>>,
    locations: BTreeMap<String, u64>,
}

impl MenuStore for MockStore {
    fn menus(&self) -> io::Result<Vec<MenuRecord>> {
        Ok(self.menus.clone())
    }

    fn menu_by_id(&self, id: u64) -> io::Result<Option<MenuRecord>> {
        Ok(self.menus.iter().find(|m| m.id == id).cloned())
    }

    fn menu_by_slug(&self, slug: &str) -> io::Result<Option<MenuRecord>> {
        Ok(self.menus.iter().find(|m| m.slug == slug).cloned())
    }

    fn entries(&self, menu_id: u64) -> io::Result<Vec<EntryRecord>> {
        Ok(self.entries.get(&menu_id).cloned().unwrap_or_default())
    }

    fn locations(&self) -> io::Result<BTreeMap<String, u64>> {
        Ok(self.locations.clone())
    }
}

fn fixture() -> MockStore {
    let mut store = MockStore::default();
    store.menus.push(MenuRecord {
        id: 1,
        slug: "main".to_string(),
        name: "Main Menu".to_string(),
    });
    store.entries.insert(
        1,
        vec![EntryRecord {
            id: 10,
            parent: 0,
            title: "Home".to_string(),
            url: "/".to_string(),
            position: 1,
        }],
    );
    store.locations.insert("header".to_string(), 1);
    store
}

fn container(store: MockStore) -> ServiceContainer {
    ServiceContainer::with_deps(Settings::default(), Arc::new(store), Arc::new(NoopEnricher))
}

#[test]
fn given_known_slug_when_resolving_then_returns_menu_snapshot() {
    let container = container(fixture());

    let location = container.queries.get_location("header").unwrap();

    assert_eq!(location.slug, "header");
    assert_eq!(location.menu_id, 1);
    assert_eq!(location.menu.slug, "main");
    assert_eq!(location.menu.items.len(), 1);
}

#[test]
fn given_unknown_slug_when_resolving_then_location_not_found() {
    let container = container(fixture());

    let err = container.queries.get_location("sidebar").unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.status(), 404);
    assert!(err.to_string().contains("`sidebar`"));
}

#[test]
fn given_locations_when_listing_then_keyed_by_slug_in_order() {
    let mut store = fixture();
    store.locations.insert("footer".to_string(), 1);
    let container = container(store);

    let locations = container.queries.list_locations().unwrap();

    let slugs: Vec<&String> = locations.keys().collect();
    assert_eq!(slugs, vec!["footer", "header"]);
}

#[test]
fn given_missing_assigned_menu_when_listing_then_placeholder_menu() {
    let mut store = fixture();
    // Assignment points at a menu id with no record behind it
    store.locations.insert("broken".to_string(), 42);
    let container = container(store);

    let locations = container.queries.list_locations().unwrap();

    let broken = &locations["broken"];
    assert_eq!(broken.menu_id, 42);
    assert_eq!(broken.menu.id, 42);
    assert!(broken.menu.slug.is_empty());
    assert!(broken.menu.items.is_empty());
    // The intact location is unaffected
    assert_eq!(locations["header"].menu.slug, "main");
}

#[test]
fn given_resolved_location_when_rendering_then_menu_nested_in_json() {
    let container = container(fixture());

    let location = container.queries.get_location("header").unwrap();
    let rendered = location.to_json();

    assert_eq!(rendered["slug"], serde_json::json!("header"));
    assert_eq!(rendered["menu_id"], serde_json::json!(1));
    assert_eq!(rendered["menu"]["slug"], serde_json::json!("main"));
}
