//! Domain entities: core data structures

use std::collections::BTreeMap;

use serde_json::{json, Value};

/// Open mapping of extra named attributes attached to an entity by an enricher.
pub type ExtraFields = serde_json::Map<String, Value>;

/// One navigation item. Stored flat (id + parent id); `children` is empty
/// until the hierarchy builder attaches descendants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Identifier, unique within a menu
    pub id: u64,
    /// Parent entry id, 0 = root entry
    pub parent: u64,
    /// Display title
    pub title: String,
    /// Target path (source URL with scheme/host stripped)
    pub url: String,
    /// Stable source order position
    pub position: u32,
    /// Nested child entries, owned by this entry once attached
    pub children: Vec<Entry>,
    /// Extra fields merged onto the JSON rendering
    pub extra: ExtraFields,
}

impl Entry {
    pub fn new(id: u64, parent: u64, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id,
            parent,
            title: title.into(),
            url: url.into(),
            position: 0,
            children: Vec::new(),
            extra: ExtraFields::new(),
        }
    }

    /// Render as JSON. Extra fields are merged last and overwrite built-in
    /// attributes of the same name (observed upstream behavior, kept as-is).
    pub fn to_json(&self) -> Value {
        let mut obj = serde_json::Map::new();
        obj.insert("id".into(), json!(self.id));
        obj.insert("parent".into(), json!(self.parent));
        obj.insert("title".into(), json!(self.title));
        obj.insert("url".into(), json!(self.url));
        obj.insert("position".into(), json!(self.position));
        obj.insert(
            "children".into(),
            Value::Array(self.children.iter().map(Entry::to_json).collect()),
        );
        for (key, value) in &self.extra {
            obj.insert(key.clone(), value.clone());
        }
        Value::Object(obj)
    }
}

/// A named ordered forest of entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub id: u64,
    pub slug: String,
    pub name: String,
    /// Slug of the location this menu is assigned to, if any
    /// (derived by reverse lookup against the location map)
    pub location: Option<String>,
    /// Root entries with fully nested children
    pub items: Vec<Entry>,
    pub extra: ExtraFields,
}

impl Menu {
    /// Placeholder for a location whose assigned menu cannot be found.
    pub fn empty(id: u64) -> Self {
        Self {
            id,
            slug: String::new(),
            name: String::new(),
            location: None,
            items: Vec::new(),
            extra: ExtraFields::new(),
        }
    }

    pub fn to_json(&self) -> Value {
        let mut obj = serde_json::Map::new();
        obj.insert("id".into(), json!(self.id));
        obj.insert("slug".into(), json!(self.slug));
        obj.insert("name".into(), json!(self.name));
        obj.insert(
            "location".into(),
            self.location.as_ref().map_or(Value::Null, |s| json!(s)),
        );
        obj.insert(
            "items".into(),
            Value::Array(self.items.iter().map(Entry::to_json).collect()),
        );
        for (key, value) in &self.extra {
            obj.insert(key.clone(), value.clone());
        }
        Value::Object(obj)
    }
}

/// A named slot with its assigned menu, materialized at query time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub slug: String,
    pub menu_id: u64,
    /// Read-only snapshot, not a live link
    pub menu: Menu,
    pub extra: ExtraFields,
}

impl Location {
    pub fn to_json(&self) -> Value {
        let mut obj = serde_json::Map::new();
        obj.insert("slug".into(), json!(self.slug));
        obj.insert("menu_id".into(), json!(self.menu_id));
        obj.insert("menu".into(), self.menu.to_json());
        for (key, value) in &self.extra {
            obj.insert(key.clone(), value.clone());
        }
        Value::Object(obj)
    }
}

/// Render a slug → location mapping as a JSON object, preserving order.
pub fn locations_to_json(locations: &BTreeMap<String, Location>) -> Value {
    let mut obj = serde_json::Map::new();
    for (slug, location) in locations {
        obj.insert(slug.clone(), location.to_json());
    }
    Value::Object(obj)
}

/// Strip scheme and host from a URL, keeping only the path.
/// Relative or unparseable inputs are returned unchanged.
pub fn path_only(raw: &str) -> String {
    match url::Url::parse(raw) {
        Ok(parsed) if !parsed.cannot_be_a_base() => parsed.path().to_string(),
        _ => raw.to_string(),
    }
}
