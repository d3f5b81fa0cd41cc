use catalog_cli::outline::format_outline;
use catalog_cli::tables::{check_table, matches_table};
use catalog_model::ComponentConfig;
use catalog_search::FuzzyTreeFilter;
use catalog_store::{CatalogSource, MemoryStore, check_catalog};
use catalog_tree::build_tree;

fn config(name: &str) -> ComponentConfig {
    serde_json::from_str(&format!(
        r#"{{ "name": "{name}", "standard": "ISO",
             "columns": [{{ "key": "d", "label": "Size" }}],
             "data": [{{ "d": "M3" }}] }}"#
    ))
    .unwrap()
}

fn store() -> MemoryStore {
    MemoryStore::new()
        .with_component("screws/socket_head", config("Socket head"), "<svg>{{d}}</svg>")
        .with_component("screws/hex_head", config("Hex head"), "<svg>{{ x }}</svg>")
        .with_component("nuts/hex", config("Hex nut"), "<svg/>")
        .with_component("nuts/wing", config("Wing nut"), "<svg/>")
}

#[test]
fn search_outline_keeps_tree_order() {
    let paths = store().list_component_paths().unwrap();
    let tree = build_tree(&paths).unwrap();
    let view = FuzzyTreeFilter::default().filter(&tree, "hex");
    insta::assert_snapshot!(format_outline(&view), @r"
    Screws/
      Hex Head  [screws/hex_head]
    Nuts/
      Hex  [nuts/hex]
    ");
}

#[test]
fn explain_table_lists_scores() {
    let paths = store().list_component_paths().unwrap();
    let tree = build_tree(&paths).unwrap();
    let scores = FuzzyTreeFilter::default().matches(&tree, "wing");
    let mut table = matches_table(&tree, &scores);
    table.force_no_tty();
    let text = table.to_string();
    assert!(text.contains("nuts/wing"));
    assert!(text.contains("0.000"));
    assert!(!text.contains("nuts/hex"));
}

#[test]
fn check_table_flags_warnings() {
    let mut store = store();
    store.insert_diagram("washers/plain", "<svg/>");
    let report = check_catalog(&store).unwrap();
    assert_eq!(report.counts.failed, 1);
    assert_eq!(report.counts.warnings, 1);

    let mut table = check_table(&report);
    table.force_no_tty();
    let text = table.to_string();
    assert!(text.contains("WARN"));
    assert!(text.contains("ERROR"));
    assert!(text.contains("component not found: washers/plain"));
}
