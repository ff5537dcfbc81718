use crate::errors::RecordError;
use crate::schema::FieldSchema;
use crate::types::{FieldType, Record, Value};
use serde_json::Value as JsonValue;

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

fn convert_value(
    field: &str,
    value: &JsonValue,
    field_type: FieldType,
) -> Result<Value, RecordError> {
    let converted = match (field_type, value) {
        (FieldType::Integer, JsonValue::Number(n)) => n.as_i64().map(Value::Integer),
        (FieldType::Float, JsonValue::Number(n)) => n.as_f64().map(Value::Float),
        (FieldType::String, JsonValue::String(s)) => Some(Value::String(s.clone())),
        _ => None,
    };
    converted.ok_or_else(|| RecordError::TypeMismatch {
        field: field.to_string(),
        expected: field_type,
    })
}

/// Converts a JSON object into a typed record, checking every field against the
/// schema. Null fields are left out of the record.
pub fn record_from_json(value: &JsonValue, schema: &FieldSchema) -> Result<Record, RecordError> {
    let object = value
        .as_object()
        .ok_or_else(|| RecordError::NotAnObject(json_kind(value).to_string()))?;

    let mut record = Record::with_capacity(object.len());
    for (field, field_value) in object {
        let field_type = schema
            .field_type(field)
            .ok_or_else(|| RecordError::UnknownField(field.clone()))?;
        if field_value.is_null() {
            continue;
        }
        record.insert(field.clone(), convert_value(field, field_value, field_type)?);
    }
    Ok(record)
}

/// Converts a JSON array of objects into records, in order.
pub fn records_from_json(
    value: &JsonValue,
    schema: &FieldSchema,
) -> Result<Vec<Record>, RecordError> {
    match value {
        JsonValue::Array(items) => items
            .iter()
            .map(|item| record_from_json(item, schema))
            .collect(),
        other => Err(RecordError::NotAnArray(json_kind(other).to_string())),
    }
}

pub fn record_to_json(record: &Record) -> JsonValue {
    JsonValue::Object(
        record
            .iter()
            .map(|(field, value)| {
                let json = match value {
                    Value::Integer(i) => JsonValue::from(*i),
                    Value::Float(f) => JsonValue::from(*f),
                    Value::String(s) => JsonValue::from(s.as_str()),
                };
                (field.clone(), json)
            })
            .collect(),
    )
}
