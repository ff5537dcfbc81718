use odata_filter::{record_to_json, Catalog, CatalogError, EntitySet, Record};
use serde_json::{json, Value as JsonValue};
use std::path::{Path, PathBuf};

/// Error type for CLI failures
#[derive(Debug)]
pub enum CliError {
    CatalogLoad { path: PathBuf, source: CatalogError },
    EntitySetNotFound { name: String, available: Vec<String> },
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::CatalogLoad { path, source } => {
                write!(
                    f,
                    "Failed to load catalog {}: {source}\n\nThe catalog must be a .yaml or .json file with an `entity_sets` list. Omit --catalog to use the built-in sample.",
                    path.display()
                )
            }
            CliError::EntitySetNotFound { name, available } => {
                write!(
                    f,
                    "Entity set not found: '{}'\n\nAvailable entity sets: {}",
                    name,
                    available.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::CatalogLoad { source, .. } => Some(source),
            CliError::EntitySetNotFound { .. } => None,
        }
    }
}

/// Loads the catalog from `path`, or the built-in sample when no path is given.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, CliError> {
    match path {
        Some(path) => {
            let catalog = Catalog::new_from_file(path).map_err(|source| CliError::CatalogLoad {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::info!("Loaded catalog from {}", path.display());
            Ok(catalog)
        }
        None => {
            tracing::debug!("No catalog given, using the built-in sample");
            Ok(Catalog::sample())
        }
    }
}

pub fn find_entity_set<'c>(catalog: &'c Catalog, name: &str) -> Result<&'c EntitySet, CliError> {
    catalog
        .entity_set(name)
        .ok_or_else(|| CliError::EntitySetNotFound {
            name: name.to_string(),
            available: catalog.entity_sets().map(|set| set.name.clone()).collect(),
        })
}

/// OData JSON collection envelope: `{"@odata.context": ..., "value": [...]}`.
pub fn collection_response(context_url: &str, records: &[&Record]) -> JsonValue {
    let value: Vec<JsonValue> = records.iter().map(|record| record_to_json(record)).collect();
    json!({
        "@odata.context": context_url,
        "value": value,
    })
}
