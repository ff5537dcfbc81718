//! Integration tests for catalog loading and response building used by the CLI

use odata_filter_cli::{collection_response, find_entity_set, load_catalog, CliError};
use serde_json::json;
use std::io::Write;

const CATALOG_JSON: &str = r#"{
    "service_root": "https://odata.example.org/odata/",
    "entity_sets": [
        {
            "name": "Personas",
            "key": "ID",
            "fields": {"ID": "Edm.Int32", "Nombre": "Edm.String", "Edad": "Edm.Int32"},
            "records": [
                {"ID": 1, "Nombre": "Juan Pérez", "Edad": 30},
                {"ID": 2, "Nombre": "Ana Gómez", "Edad": 25}
            ]
        }
    ]
}"#;

fn catalog_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_query_from_catalog_file() {
    let file = catalog_file(CATALOG_JSON);
    let catalog = load_catalog(Some(file.path())).unwrap();
    let personas = find_entity_set(&catalog, "personas").unwrap();

    let records = personas.filter("Edad%20gt%2026");
    let response = collection_response(&catalog.context_url(&personas.name), &records);

    assert_eq!(
        response,
        json!({
            "@odata.context": "https://odata.example.org/odata/$metadata#Personas",
            "value": [{"ID": 1, "Nombre": "Juan Pérez", "Edad": 30}]
        })
    );
}

#[test]
fn test_unknown_field_returns_whole_collection() {
    let file = catalog_file(CATALOG_JSON);
    let catalog = load_catalog(Some(file.path())).unwrap();
    let personas = find_entity_set(&catalog, "Personas").unwrap();

    let records = personas.filter("Precio gt 100");
    assert_eq!(records.len(), 2);
}

#[test]
fn test_invalid_catalog_is_reported() {
    let file = catalog_file(
        r#"{"entity_sets": [{"name": "A", "key": "ID", "fields": {"ID": "Edm.Guid"}}]}"#,
    );
    let error = load_catalog(Some(file.path())).unwrap_err();

    assert!(matches!(error, CliError::CatalogLoad { .. }));
    assert!(error.to_string().contains("Invalid field type: Edm.Guid"));
}
