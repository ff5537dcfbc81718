//! Shared fixtures for the odata-filter integration tests

#![allow(dead_code)]

use odata_filter::{FieldSchema, FieldType, Record, Value};

pub fn productos_schema() -> FieldSchema {
    FieldSchema::new()
        .with_field("ID", FieldType::Integer)
        .with_field("Nombre", FieldType::String)
        .with_field("Precio", FieldType::Float)
}

pub fn producto(id: i64, nombre: &str, precio: f64) -> Record {
    let mut record = Record::new();
    record.insert("ID".to_string(), Value::Integer(id));
    record.insert("Nombre".to_string(), Value::from(nombre));
    record.insert("Precio".to_string(), Value::Float(precio));
    record
}

/// The three sample products used throughout the tests
pub fn productos() -> Vec<Record> {
    vec![
        producto(1, "Producto A", 100.5),
        producto(2, "Producto B", 200.0),
        producto(3, "Producto C", 150.75),
    ]
}

/// A larger collection with repeated prices and mixed-case names
pub fn inventory() -> Vec<Record> {
    vec![
        producto(1, "Producto A", 100.5),
        producto(2, "Producto B", 200.0),
        producto(3, "Producto C", 150.75),
        producto(4, "servicio premium", 99.99),
        producto(5, "PRODUCTO D", 200.0),
        producto(6, "Accesorio", 0.0),
        producto(7, "Producto E", 1500.0),
    ]
}

pub fn ids(records: &[&Record]) -> Vec<i64> {
    records
        .iter()
        .filter_map(|r| match r.get("ID") {
            Some(Value::Integer(id)) => Some(*id),
            _ => None,
        })
        .collect()
}
