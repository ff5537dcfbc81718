//! Entity sets served by the filter engine.
//!
//! A catalog is process-wide configuration: a service root plus named entity
//! sets, each with its key, its filterable field schema and its records. It is
//! loaded once at startup from YAML or JSON, or taken from the built-in sample.

use crate::errors::CatalogError;
use crate::record::record_from_json;
use crate::schema::FieldSchema;
use crate::types::{FieldType, Record, Value};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::path::Path;

pub const DEFAULT_SERVICE_ROOT: &str = "http://localhost:5000/odata";

/// `@odata.context` URL of a collection response for `entity_set` under
/// `service_root`. A trailing `/` on the root is ignored.
pub fn context_url_for(service_root: &str, entity_set: &str) -> String {
    format!(
        "{}/$metadata#{}",
        service_root.trim_end_matches('/'),
        entity_set
    )
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    service_root: Option<String>,
    entity_sets: Vec<EntitySetFile>,
}

#[derive(Debug, Deserialize)]
struct EntitySetFile {
    name: String,
    key: String,
    fields: FieldSchema,
    #[serde(default)]
    records: Vec<JsonValue>,
}

#[derive(Debug, Clone)]
pub struct EntitySet {
    pub name: String,
    pub key: String,
    pub schema: FieldSchema,
    pub records: Vec<Record>,
}

impl EntitySet {
    pub fn new(
        name: impl Into<String>,
        key: impl Into<String>,
        schema: FieldSchema,
        records: &[JsonValue],
    ) -> Result<Self, CatalogError> {
        let name = name.into();
        let key = key.into();
        if !schema.contains(&key) {
            return Err(CatalogError::MissingKey {
                entity_set: name,
                key,
            });
        }

        let records = records
            .iter()
            .enumerate()
            .map(|(index, value)| {
                record_from_json(value, &schema).map_err(|source| CatalogError::InvalidRecord {
                    entity_set: name.clone(),
                    index,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name,
            key,
            schema,
            records,
        })
    }

    /// Runs a raw `$filter` value against this entity set's records.
    pub fn filter(&self, filter_text: &str) -> Vec<&Record> {
        crate::filter_records(&self.records, filter_text, &self.schema)
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    pub service_root: String,
    entity_sets: IndexMap<String, EntitySet>,
}

impl Catalog {
    pub fn new(service_root: impl Into<String>) -> Self {
        Self {
            service_root: service_root.into(),
            entity_sets: IndexMap::new(),
        }
    }

    pub fn add_entity_set(&mut self, entity_set: EntitySet) -> Result<(), CatalogError> {
        if self.entity_sets.contains_key(&entity_set.name) {
            return Err(CatalogError::DuplicateEntitySet(entity_set.name));
        }
        self.entity_sets.insert(entity_set.name.clone(), entity_set);
        Ok(())
    }

    /// Looks up an entity set by name, falling back to a case-insensitive match
    /// so `productos` finds `Productos`.
    pub fn entity_set(&self, name: &str) -> Option<&EntitySet> {
        self.entity_sets.get(name).or_else(|| {
            self.entity_sets
                .values()
                .find(|set| set.name.eq_ignore_ascii_case(name))
        })
    }

    pub fn entity_sets(&self) -> impl Iterator<Item = &EntitySet> {
        self.entity_sets.values()
    }

    pub fn context_url(&self, entity_set: &str) -> String {
        context_url_for(&self.service_root, entity_set)
    }

    pub fn new_from_file(path: &Path) -> Result<Self, CatalogError> {
        let input = fs_err::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_lowercase();

        match extension.as_str() {
            "json" => Self::new_from_str(&input, "json"),
            "yaml" | "yml" => Self::new_from_str(&input, "yaml"),
            other => Err(CatalogError::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn new_from_str(input: &str, format: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = match format {
            "yaml" => serde_yaml_ng::from_str(input)?,
            "json" => serde_json::from_str(input)?,
            other => return Err(CatalogError::UnsupportedFormat(other.to_string())),
        };

        let mut catalog =
            Catalog::new(file.service_root.as_deref().unwrap_or(DEFAULT_SERVICE_ROOT));
        for set in file.entity_sets {
            catalog.add_entity_set(EntitySet::new(set.name, set.key, set.fields, &set.records)?)?;
        }
        tracing::debug!(
            "Loaded catalog with {} entity set(s)",
            catalog.entity_sets.len()
        );
        Ok(catalog)
    }

    /// The `Productos` and `Personas` entity sets with a few sample records.
    pub fn sample() -> Self {
        let productos = EntitySet {
            name: "Productos".to_string(),
            key: "ID".to_string(),
            schema: FieldSchema::new()
                .with_field("ID", FieldType::Integer)
                .with_field("Nombre", FieldType::String)
                .with_field("Precio", FieldType::Float),
            records: vec![
                sample_record(1, "Producto A", ("Precio", Value::Float(100.5))),
                sample_record(2, "Producto B", ("Precio", Value::Float(200.0))),
                sample_record(3, "Producto C", ("Precio", Value::Float(150.75))),
            ],
        };
        let personas = EntitySet {
            name: "Personas".to_string(),
            key: "ID".to_string(),
            schema: FieldSchema::new()
                .with_field("ID", FieldType::Integer)
                .with_field("Nombre", FieldType::String)
                .with_field("Edad", FieldType::Integer),
            records: vec![
                sample_record(1, "Juan Pérez", ("Edad", Value::Integer(30))),
                sample_record(2, "Ana Gómez", ("Edad", Value::Integer(25))),
            ],
        };

        Self {
            service_root: DEFAULT_SERVICE_ROOT.to_string(),
            entity_sets: [productos, personas]
                .into_iter()
                .map(|set| (set.name.clone(), set))
                .collect(),
        }
    }
}

fn sample_record(id: i64, nombre: &str, extra: (&str, Value)) -> Record {
    let mut record = Record::new();
    record.insert("ID".to_string(), Value::Integer(id));
    record.insert("Nombre".to_string(), Value::from(nombre));
    record.insert(extra.0.to_string(), extra.1);
    record
}
