//! Tests for layered settings loading

use std::path::PathBuf;

use rsmenu::config::{expand_env_vars, Settings};

#[test]
fn given_defaults_when_rendering_toml_then_contains_store_dir() {
    let settings = Settings::default();

    let rendered = settings.to_toml().unwrap();

    assert!(rendered.contains("store_dir"));
}

#[test]
fn given_template_when_generated_then_documents_store_dir() {
    let template = Settings::template();

    assert!(template.contains("store_dir"));
    assert!(template.contains("RSMENU_"));
}

#[test]
fn given_tilde_path_when_expanding_then_resolves_home() {
    let home = std::env::var("HOME").expect("HOME should be set");

    let expanded = expand_env_vars("~/menus");

    assert_eq!(expanded, format!("{home}/menus"));
}

#[test]
fn given_unknown_var_when_expanding_then_input_unchanged() {
    let expanded = expand_env_vars("$RSMENU_DOES_NOT_EXIST_12345/menus");

    assert_eq!(expanded, "$RSMENU_DOES_NOT_EXIST_12345/menus");
}

#[test]
fn given_env_override_when_loading_then_store_dir_from_env() {
    // Sole env-dependent test in this binary, no parallel interference
    std::env::set_var("RSMENU_STORE_DIR", "/tmp/rsmenu-test-store");

    let settings = Settings::load().unwrap();

    std::env::remove_var("RSMENU_STORE_DIR");
    assert_eq!(settings.store_dir, PathBuf::from("/tmp/rsmenu-test-store"));
}
