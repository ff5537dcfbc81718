//! Applies parsed conditions to a record collection.
//!
//! Conditions are AND-ed by successive narrowing: each condition scans the
//! survivors of the previous one, so the candidate set never grows. Results keep
//! the input order and borrow from the caller's collection.

use crate::schema::FieldSchema;
use crate::types::{Condition, Operator, Record, Value};

pub struct Evaluator<'s> {
    schema: &'s FieldSchema,
}

impl<'s> Evaluator<'s> {
    pub fn new(schema: &'s FieldSchema) -> Self {
        Self { schema }
    }

    /// Returns the records satisfying every condition.
    ///
    /// An empty condition list returns every record. If any condition names a
    /// field outside the schema, the whole list is ignored and every record is
    /// returned.
    pub fn evaluate<'r>(&self, records: &'r [Record], conditions: &[Condition]) -> Vec<&'r Record> {
        let mut matching: Vec<&'r Record> = records.iter().collect();

        if let Some(unknown) = conditions
            .iter()
            .find(|c| !self.schema.contains(&c.field))
        {
            tracing::warn!(
                "Ignoring {} filter condition(s): unknown field {}",
                conditions.len(),
                unknown.field
            );
            return matching;
        }

        for condition in conditions {
            let before = matching.len();
            matching.retain(|record| record_matches(record, condition));
            tracing::debug!(
                "Condition {} kept {} of {} record(s)",
                condition,
                matching.len(),
                before
            );
        }

        matching
    }
}

/// Tests a single condition against a single record. Missing fields and values
/// whose type cannot be compared with the literal never match.
pub fn record_matches(record: &Record, condition: &Condition) -> bool {
    match record.get(&condition.field) {
        Some(value) => value_matches(value, condition.operator, &condition.literal),
        None => false,
    }
}

fn value_matches(value: &Value, operator: Operator, literal: &Value) -> bool {
    match operator {
        Operator::Contains => match (value, literal) {
            (Value::String(haystack), Value::String(needle)) => haystack
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            _ => false,
        },
        _ => value
            .compare(literal)
            .is_some_and(|ordering| operator.accepts(ordering)),
    }
}
