use crate::types::{FieldType, Operator};

/// Why a fragment of a filter string did not become a usable condition
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    UnparsableCondition(String),
    UnknownField(String),
    TypeMismatch {
        field: String,
        literal: String,
        expected: FieldType,
    },
    UnsupportedOperator {
        field: String,
        operator: Operator,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::UnparsableCondition(fragment) => {
                write!(f, "Unparsable condition: {}", fragment)
            }
            ParseError::UnknownField(field) => write!(f, "Unknown field: {}", field),
            ParseError::TypeMismatch {
                field,
                literal,
                expected,
            } => write!(
                f,
                "Type mismatch: {} cannot be used with {} field {}",
                literal, expected, field
            ),
            ParseError::UnsupportedOperator { field, operator } => {
                write!(f, "Operator {} is not supported for field {}", operator, field)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Error converting a JSON object into a typed record
#[derive(Debug, Clone, PartialEq)]
pub enum RecordError {
    NotAnObject(String),
    NotAnArray(String),
    UnknownField(String),
    TypeMismatch { field: String, expected: FieldType },
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordError::NotAnObject(found) => {
                write!(f, "Expected a JSON object, found {}", found)
            }
            RecordError::NotAnArray(found) => {
                write!(f, "Expected a JSON array of records, found {}", found)
            }
            RecordError::UnknownField(field) => write!(f, "Field not in schema: {}", field),
            RecordError::TypeMismatch { field, expected } => {
                write!(f, "Field {} must hold a value of type {}", field, expected)
            }
        }
    }
}

impl std::error::Error for RecordError {}

/// Error loading an entity catalog
#[derive(Debug)]
pub enum CatalogError {
    IoError(std::io::Error),
    SerdeJsonError(serde_json::Error),
    SerdeYamlError(serde_yaml_ng::Error),
    UnsupportedFormat(String),
    DuplicateEntitySet(String),
    MissingKey { entity_set: String, key: String },
    InvalidRecord { entity_set: String, index: usize, source: RecordError },
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::IoError(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::SerdeJsonError(err)
    }
}

impl From<serde_yaml_ng::Error> for CatalogError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        CatalogError::SerdeYamlError(err)
    }
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::IoError(err) => write!(f, "IO error: {}", err),
            CatalogError::SerdeJsonError(err) => write!(f, "Serde JSON error: {}", err),
            CatalogError::SerdeYamlError(err) => write!(f, "Serde YAML error: {}", err),
            CatalogError::UnsupportedFormat(format) => write!(
                f,
                "Unsupported catalog format '{}'. Use 'yaml' or 'json'.",
                format
            ),
            CatalogError::DuplicateEntitySet(name) => {
                write!(f, "Entity set declared twice: {}", name)
            }
            CatalogError::MissingKey { entity_set, key } => write!(
                f,
                "Key field {} of entity set {} is not declared in its fields",
                key, entity_set
            ),
            CatalogError::InvalidRecord {
                entity_set,
                index,
                source,
            } => write!(
                f,
                "Invalid record #{} in entity set {}: {}",
                index, entity_set, source
            ),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::IoError(err) => Some(err),
            CatalogError::SerdeJsonError(err) => Some(err),
            CatalogError::SerdeYamlError(err) => Some(err),
            CatalogError::InvalidRecord { source, .. } => Some(source),
            _ => None,
        }
    }
}
