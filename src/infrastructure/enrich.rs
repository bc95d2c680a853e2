//! File-backed field enricher
//!
//! Reads a `fields.toml` sidecar from the store directory:
//!
//! ```toml
//! [menus.2]
//! banner = "summer-sale"
//!
//! [locations.primary]
//! theme = "dark"
//!
//! [entries.7]
//! icon = "home"
//! ```
//!
//! Best-effort by contract: a missing or unreadable sidecar, a parse error,
//! or an unknown entity all resolve to an empty map.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::warn;

use crate::domain::ExtraFields;
use crate::infrastructure::traits::{EntityRef, FieldEnricher};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FieldsFile {
    menus: BTreeMap<String, toml::Table>,
    locations: BTreeMap<String, toml::Table>,
    entries: BTreeMap<String, toml::Table>,
}

/// Enricher backed by a TOML sidecar file.
#[derive(Debug)]
pub struct FileFieldEnricher {
    path: PathBuf,
}

impl FileFieldEnricher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Option<FieldsFile> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        match toml::from_str(&content) {
            Ok(fields) => Some(fields),
            Err(e) => {
                warn!("ignoring unparseable {}: {e}", self.path.display());
                None
            }
        }
    }
}

impl FieldEnricher for FileFieldEnricher {
    fn fields(&self, entity: EntityRef<'_>) -> ExtraFields {
        let Some(file) = self.load() else {
            return ExtraFields::new();
        };

        let table = match entity {
            EntityRef::Menu(id) => file.menus.get(&id.to_string()),
            EntityRef::Location(slug) => file.locations.get(slug),
            EntityRef::Entry(id) => file.entries.get(&id.to_string()),
        };

        table.map(table_to_fields).unwrap_or_default()
    }
}

fn table_to_fields(table: &toml::Table) -> ExtraFields {
    table
        .iter()
        .map(|(key, value)| (key.clone(), toml_to_json(value)))
        .collect()
}

fn toml_to_json(value: &toml::Value) -> serde_json::Value {
    use serde_json::Value;

    match value {
        toml::Value::String(s) => Value::String(s.clone()),
        toml::Value::Integer(i) => Value::from(*i),
        toml::Value::Float(f) => {
            serde_json::Number::from_f64(*f).map_or(Value::Null, Value::Number)
        }
        toml::Value::Boolean(b) => Value::Bool(*b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .iter()
                .map(|(k, v)| (k.clone(), toml_to_json(v)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn given_nested_toml_when_converting_then_maps_to_json() {
        let table: toml::Table = toml::from_str(
            r#"
            label = "Home"
            weight = 3
            tags = ["a", "b"]

            [meta]
            visible = true
            "#,
        )
        .unwrap();

        let fields = table_to_fields(&table);
        assert_eq!(fields["label"], json!("Home"));
        assert_eq!(fields["weight"], json!(3));
        assert_eq!(fields["tags"], json!(["a", "b"]));
        assert_eq!(fields["meta"], json!({"visible": true}));
    }

    #[test]
    fn given_missing_sidecar_when_enriching_then_returns_empty() {
        let enricher = FileFieldEnricher::new("/nonexistent/fields.toml");
        assert!(enricher.fields(EntityRef::Menu(1)).is_empty());
    }
}
