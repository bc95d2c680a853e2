//! End-to-end test: file store plus fields.toml sidecar

use tempfile::TempDir;

use rsmenu::config::Settings;
use rsmenu::infrastructure::ServiceContainer;

fn write_file(dir: &TempDir, name: &str, content: &str) {
    std::fs::write(dir.path().join(name), content).expect("write store file");
}

fn seeded_store() -> TempDir {
    let temp = TempDir::new().unwrap();
    write_file(
        &temp,
        "main.toml",
        r#"id = 1
slug = "main"
name = "Main Menu"

[[entries]]
id = 10
parent = 0
title = "Home"
url = "https://example.com/"
position = 1
"#,
    );
    write_file(&temp, "locations.toml", "header = 1\n");
    temp
}

fn container_for(temp: &TempDir) -> ServiceContainer {
    let settings = Settings {
        store_dir: temp.path().to_path_buf(),
    };
    ServiceContainer::new(settings)
}

#[test]
fn given_fields_sidecar_when_querying_then_fields_attached_at_all_levels() {
    let temp = seeded_store();
    write_file(
        &temp,
        "fields.toml",
        r#"[menus.1]
banner = "summer-sale"

[locations.header]
theme = "dark"

[entries.10]
icon = "house"
"#,
    );
    let container = container_for(&temp);

    let location = container.queries.get_location("header").unwrap();
    let rendered = location.to_json();

    assert_eq!(rendered["theme"], serde_json::json!("dark"));
    assert_eq!(rendered["menu"]["banner"], serde_json::json!("summer-sale"));
    assert_eq!(rendered["menu"]["items"][0]["icon"], serde_json::json!("house"));
}

#[test]
fn given_no_sidecar_when_querying_then_plain_output() {
    let temp = seeded_store();
    let container = container_for(&temp);

    let menu = container.queries.get_menu("main").unwrap();
    let rendered = menu.to_json();

    assert_eq!(rendered["items"][0].get("icon"), None);
    assert_eq!(rendered["slug"], serde_json::json!("main"));
}

#[test]
fn given_unparseable_sidecar_when_querying_then_query_still_succeeds() {
    let temp = seeded_store();
    write_file(&temp, "fields.toml", "not valid toml [[[");
    let container = container_for(&temp);

    let menu = container.queries.get_menu("main").unwrap();

    assert_eq!(menu.items.len(), 1);
    assert!(menu.extra.is_empty());
}
