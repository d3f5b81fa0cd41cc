use catalog_model::{CatalogError, CellValue, ColumnType, ComponentConfig};

const SOCKET_HEAD: &str = r#"{
    "meta": { "id": "iso4762", "version": "1.2" },
    "name": "Socket head cap screw",
    "standard": "ISO 4762",
    "columns": [
        { "key": "d", "label": "Thread", "type": "string" },
        { "key": "pitch", "label": "Pitch", "type": "number", "unit": "mm" },
        { "key": "k", "label": "Head height", "unit": "" }
    ],
    "data": [
        { "d": "M3", "pitch": 0.5, "k": 3 },
        { "d": "M4", "pitch": 0.7, "k": 4 }
    ]
}"#;

fn parse(json: &str) -> ComponentConfig {
    serde_json::from_str(json).expect("parse config")
}

#[test]
fn parses_full_configuration() {
    let config = parse(SOCKET_HEAD);
    assert_eq!(config.name, "Socket head cap screw");
    assert_eq!(config.standard, "ISO 4762");
    assert_eq!(config.meta.as_ref().map(|m| m.version.as_str()), Some("1.2"));
    assert_eq!(config.columns.len(), 3);
    assert_eq!(config.columns[0].column_type, Some(ColumnType::String));
    assert_eq!(config.columns[2].column_type, None);
    assert_eq!(config.data.len(), 2);
    assert_eq!(config.data[1]["pitch"], CellValue::Number(0.7));
    assert!(config.validate("screws/socket_head").is_ok());
}

#[test]
fn units_skip_empty_declarations() {
    let config = parse(SOCKET_HEAD);
    let units = config.units();
    assert_eq!(units.len(), 1);
    assert_eq!(units.get("pitch").map(String::as_str), Some("mm"));
    assert_eq!(config.columns[1].header(), "Pitch [mm]");
    assert_eq!(config.columns[2].header(), "Head height");
}

#[test]
fn rows_are_addressable_by_index() {
    let config = parse(SOCKET_HEAD);
    let row = config.row(0).expect("first row");
    assert_eq!(row["d"].raw(), "M3");
    assert!(config.row(2).is_none());
    assert!(config.column("pitch").is_some());
    assert!(config.column("missing").is_none());
}

#[test]
fn empty_rows_fail_validation() {
    let config = parse(
        r#"{ "name": "Nut", "standard": "ISO 4032",
             "columns": [{ "key": "m", "label": "m" }], "data": [] }"#,
    );
    let err = config.validate("nuts/hex").unwrap_err();
    assert!(matches!(err, CatalogError::Format { .. }));
    assert!(err.to_string().contains("at least one row"));
}

#[test]
fn missing_columns_fail_validation() {
    let config = parse(r#"{ "name": "Nut", "standard": "ISO 4032", "data": [{ "m": 1 }] }"#);
    let err = config.validate("nuts/hex").unwrap_err();
    assert!(err.to_string().contains("column list is empty"));
}

#[test]
fn duplicate_column_keys_fail_validation() {
    let config = parse(
        r#"{ "name": "Nut", "standard": "ISO 4032",
             "columns": [{ "key": "m", "label": "m" }, { "key": "m", "label": "m2" }],
             "data": [{ "m": 1 }] }"#,
    );
    let err = config.validate("nuts/hex").unwrap_err();
    assert!(err.to_string().contains("duplicate column key 'm'"));
}

#[test]
fn serializes_back_without_absent_fields() {
    let config = parse(
        r#"{ "name": "Washer", "standard": "ISO 7089",
             "columns": [{ "key": "d1", "label": "Inner" }], "data": [{ "d1": 3.2 }] }"#,
    );
    let json = serde_json::to_value(&config).expect("serialize");
    assert!(json.get("meta").is_none());
    assert!(json["columns"][0].get("unit").is_none());
    assert!(json["columns"][0].get("type").is_none());
}
