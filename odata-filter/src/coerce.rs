use crate::errors::ParseError;
use crate::parser::RawCondition;
use crate::schema::FieldSchema;
use crate::types::{Condition, FieldType, Operator, Value};

/// Turns a scanned triple into a typed condition using the field's declared type.
///
/// String fields keep the literal text. Integer fields take an integer unless the
/// text contains a `.`, in which case it becomes a float. Float fields always
/// take a float. `contains` is only valid on string fields.
pub fn coerce(raw: &RawCondition, schema: &FieldSchema) -> Result<Condition, ParseError> {
    let field_type = schema
        .field_type(&raw.field)
        .ok_or_else(|| ParseError::UnknownField(raw.field.clone()))?;

    if raw.operator == Operator::Contains && field_type != FieldType::String {
        return Err(ParseError::UnsupportedOperator {
            field: raw.field.clone(),
            operator: raw.operator,
        });
    }

    let literal =
        coerce_literal(&raw.literal, field_type).ok_or_else(|| ParseError::TypeMismatch {
            field: raw.field.clone(),
            literal: raw.literal.clone(),
            expected: field_type,
        })?;

    Ok(Condition {
        field: raw.field.clone(),
        operator: raw.operator,
        literal,
    })
}

pub fn coerce_literal(text: &str, field_type: FieldType) -> Option<Value> {
    let trimmed = text.trim();
    match field_type {
        FieldType::String => Some(Value::String(text.to_string())),
        FieldType::Integer if !trimmed.contains('.') => {
            trimmed.parse::<i64>().ok().map(Value::Integer)
        }
        FieldType::Integer | FieldType::Float => trimmed
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(Value::Float),
    }
}
