use std::fs;
use std::path::Path;

use catalog_model::{CatalogError, ComponentColumn, ComponentConfig, ComponentRow};
use catalog_store::{CatalogSource, CheckStatus, DirectoryStore, MemoryStore, check_catalog};
use tempfile::TempDir;

const SOCKET_HEAD: &str = r#"{
    "name": "Socket head cap screw",
    "standard": "ISO 4762",
    "columns": [
        { "key": "d", "label": "Thread", "type": "string" },
        { "key": "k", "label": "Head height", "type": "number", "unit": "mm" }
    ],
    "data": [
        { "d": "M3", "k": 3 },
        { "d": "M4", "k": 4 }
    ]
}"#;

const HEX_NUT: &str = r#"{
    "name": "Hex nut",
    "standard": "ISO 4032",
    "columns": [{ "key": "m", "label": "Height", "unit": "mm" }],
    "data": [{ "m": 2.4 }]
}"#;

fn write_component(root: &Path, path: &str, config: Option<&str>, diagram: Option<&str>) {
    let dir = root.join(path);
    fs::create_dir_all(&dir).unwrap();
    if let Some(config) = config {
        fs::write(dir.join("config.json"), config).unwrap();
    }
    if let Some(diagram) = diagram {
        fs::write(dir.join("diagram.svg"), diagram).unwrap();
    }
}

fn sample_catalog() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_component(
        dir.path(),
        "screws/socket_head",
        Some(SOCKET_HEAD),
        Some("<svg><text>{{k}}</text></svg>"),
    );
    write_component(dir.path(), "nuts/hex", Some(HEX_NUT), Some("<svg/>"));
    dir
}

#[test]
fn discovery_lists_component_directories_sorted() {
    let dir = sample_catalog();
    fs::create_dir_all(dir.path().join("empty/folder")).unwrap();
    fs::create_dir_all(dir.path().join(".git/objects")).unwrap();
    fs::write(dir.path().join(".git/objects/config.json"), "{}").unwrap();

    let store = DirectoryStore::new(dir.path());
    assert_eq!(
        store.list_component_paths().unwrap(),
        ["nuts/hex", "screws/socket_head"]
    );
}

#[test]
fn manifest_order_wins_over_discovery() {
    let dir = sample_catalog();
    fs::write(
        dir.path().join("catalog.toml"),
        "components = [\"screws/socket_head\", \"nuts/hex\", \"washers/plain\"]\n",
    )
    .unwrap();

    let store = DirectoryStore::new(dir.path());
    assert_eq!(
        store.list_component_paths().unwrap(),
        ["screws/socket_head", "nuts/hex", "washers/plain"]
    );
}

#[test]
fn invalid_manifest_is_a_format_error() {
    let dir = sample_catalog();
    fs::write(dir.path().join("catalog.toml"), "components = 3").unwrap();
    let err = DirectoryStore::new(dir.path())
        .list_component_paths()
        .unwrap_err();
    assert!(matches!(err, CatalogError::Format { .. }), "{err}");
}

#[test]
fn missing_root_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = DirectoryStore::new(dir.path().join("nope"));
    let err = store.list_component_paths().unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }), "{err}");
    assert!(err.is_unavailable());
}

#[test]
fn loads_config_and_diagram() {
    let dir = sample_catalog();
    let store = DirectoryStore::new(dir.path());
    let (config, diagram) = store.load_component("screws/socket_head").unwrap();
    assert_eq!(config.name, "Socket head cap screw");
    assert_eq!(config.data.len(), 2);
    assert_eq!(diagram.as_str(), "<svg><text>{{k}}</text></svg>");
}

#[test]
fn missing_resources_are_not_found() {
    let dir = sample_catalog();
    write_component(dir.path(), "washers/plain", Some(HEX_NUT), None);
    write_component(dir.path(), "washers/spring", None, Some("<svg/>"));
    let store = DirectoryStore::new(dir.path());

    for path in ["washers/plain", "washers/spring", "washers/lock"] {
        let err = store.load_component(path).unwrap_err();
        match err {
            CatalogError::NotFound { path: missing } => assert_eq!(missing, path),
            other => panic!("{path}: unexpected error {other}"),
        }
    }
}

#[test]
fn escaping_paths_are_not_found() {
    let dir = sample_catalog();
    fs::write(dir.path().join("config.json"), HEX_NUT).unwrap();
    fs::write(dir.path().join("diagram.svg"), "<svg/>").unwrap();
    let store = DirectoryStore::new(dir.path().join("screws"));

    for path in ["../", "../nuts/hex", "/etc", "nuts\\hex"] {
        let err = store.load_component(path).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { .. }), "{path}: {err}");
    }
}

#[test]
fn malformed_or_empty_config_is_a_format_error() {
    let dir = tempfile::tempdir().unwrap();
    write_component(dir.path(), "bad/json", Some("{ \"name\": "), Some("<svg/>"));
    write_component(
        dir.path(),
        "bad/rows",
        Some(r#"{ "name": "x", "standard": "y", "columns": [{ "key": "a", "label": "A" }], "data": [] }"#),
        Some("<svg/>"),
    );
    write_component(
        dir.path(),
        "bad/columns",
        Some(r#"{ "name": "x", "standard": "y", "data": [{ "a": 1 }] }"#),
        Some("<svg/>"),
    );
    let store = DirectoryStore::new(dir.path());

    for path in ["bad/json", "bad/rows", "bad/columns"] {
        let err = store.load_component(path).unwrap_err();
        match &err {
            CatalogError::Format { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("{path}: unexpected error {other}"),
        }
        assert!(err.to_string().starts_with("invalid component configuration for bad/"));
    }
}

fn nut_config() -> ComponentConfig {
    ComponentConfig {
        meta: None,
        name: "Hex nut".to_string(),
        standard: "ISO 4032".to_string(),
        columns: vec![ComponentColumn {
            key: "m".to_string(),
            label: "Height".to_string(),
            column_type: None,
            unit: Some("mm".to_string()),
        }],
        data: vec![ComponentRow::from([("m".to_string(), 2.4.into())])],
    }
}

#[test]
fn memory_store_keeps_insertion_order() {
    let mut store = MemoryStore::new()
        .with_component("nuts/hex", nut_config(), "<svg/>")
        .with_component("bolts/carriage", nut_config(), "<svg/>");
    store.insert_diagram("washers/plain", "<svg/>");

    assert_eq!(store.len(), 3);
    assert_eq!(
        store.list_component_paths().unwrap(),
        ["nuts/hex", "bolts/carriage", "washers/plain"]
    );
    assert!(store.load_component("nuts/hex").is_ok());
    assert!(matches!(
        store.load_component("washers/plain"),
        Err(CatalogError::NotFound { .. })
    ));
    assert!(matches!(
        store.load_component("missing"),
        Err(CatalogError::NotFound { .. })
    ));
}

#[test]
fn memory_store_lists_paths_that_load_back() {
    let mut store = MemoryStore::new().with_component(" nuts/hex ", nut_config(), "<svg/>");
    store.insert_diagram("nuts//hex", "<svg><g/></svg>");

    let listed = store.list_component_paths().unwrap();
    assert_eq!(listed, ["nuts/hex"]);
    let (config, diagram) = store.load_component(&listed[0]).unwrap();
    assert_eq!(config.name, "Hex nut");
    assert_eq!(diagram.as_str(), "<svg><g/></svg>");
}

#[test]
fn memory_store_validates_on_load() {
    let mut store = MemoryStore::new();
    store
        .insert_config_json("empty", r#"{ "name": "x", "standard": "y" }"#)
        .unwrap();
    store.insert_diagram("empty", "<svg/>");
    assert!(matches!(
        store.load_component("empty"),
        Err(CatalogError::Format { .. })
    ));
    assert!(store.insert_config_json("broken", "[").is_err());
}

#[test]
fn check_reports_each_component() {
    let dir = sample_catalog();
    write_component(
        dir.path(),
        "screws/hex_head",
        Some(
            r#"{ "name": "Hex head", "standard": "ISO 4017",
                 "columns": [{ "key": "s", "label": "Width" }, { "key": "k", "label": "Height" }],
                 "data": [{ "s": 5.5, "k": 2 }, { "s": 7 }] }"#,
        ),
        Some(r#"<svg><text>{{ s_raw }}</text><text>{{e}}</text></svg>"#),
    );
    write_component(dir.path(), "washers/plain", Some("{}"), Some("<svg/>"));

    let report = check_catalog(&DirectoryStore::new(dir.path())).unwrap();
    assert!(!report.is_ok());
    assert_eq!(report.components[0].status, CheckStatus::Ok);

    insta::assert_json_snapshot!(report, @r#"
    {
      "schema": "catalog.check",
      "schema_version": 1,
      "counts": {
        "components": 4,
        "ok": 3,
        "failed": 1,
        "warnings": 2
      },
      "components": [
        {
          "path": "nuts/hex",
          "status": "ok",
          "name": "Hex nut",
          "columns": 1,
          "rows": 1
        },
        {
          "path": "screws/hex_head",
          "status": "ok",
          "name": "Hex head",
          "columns": 2,
          "rows": 2,
          "warnings": [
            "placeholder 'e' has no matching column",
            "row 1 is missing k"
          ]
        },
        {
          "path": "screws/socket_head",
          "status": "ok",
          "name": "Socket head cap screw",
          "columns": 2,
          "rows": 2
        },
        {
          "path": "washers/plain",
          "status": "error",
          "columns": 0,
          "rows": 0,
          "error": "invalid component configuration for washers/plain: missing field `name` at line 1 column 2"
        }
      ]
    }
    "#);
}
