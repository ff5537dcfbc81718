//! OData-style `$filter` support for in-memory entity collections.
//!
//! A filter such as `Precio gt 100 Nombre contains('producto')` is parsed into
//! typed [`Condition`]s against a [`FieldSchema`] and evaluated by narrowing a
//! record collection one condition at a time.

mod catalog;
mod coerce;
mod errors;
mod evaluator;
mod parser;
mod record;
mod schema;
mod types;

pub use catalog::{context_url_for, Catalog, EntitySet, DEFAULT_SERVICE_ROOT};
pub use coerce::{coerce, coerce_literal};
pub use errors::{CatalogError, ParseError, RecordError};
pub use evaluator::{record_matches, Evaluator};
pub use parser::{decode_filter, parse, scan, RawCondition};
pub use record::{record_from_json, record_to_json, records_from_json};
pub use schema::FieldSchema;
pub use types::{Condition, FieldType, Operator, Record, Value};

/// Parses `filter_text` and applies it to `records`.
///
/// Never fails: a filter naming a field outside `schema` is discarded and every
/// record is returned, as is the case for an empty or unrecognizable filter.
pub fn filter_records<'r>(
    records: &'r [Record],
    filter_text: &str,
    schema: &FieldSchema,
) -> Vec<&'r Record> {
    match parse(filter_text, schema) {
        Ok(conditions) => Evaluator::new(schema).evaluate(records, &conditions),
        Err(_) => records.iter().collect(),
    }
}
