use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Declared type of a filterable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FieldType {
    Integer,
    Float,
    String,
}

impl FieldType {
    /// Name of the matching EDM primitive type, as used in OData metadata.
    pub fn edm_name(&self) -> &'static str {
        match self {
            FieldType::Integer => "Edm.Int32",
            FieldType::Float => "Edm.Double",
            FieldType::String => "Edm.String",
        }
    }
}

impl FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Edm.Int16" | "Edm.Int32" | "Edm.Int64" => return Ok(FieldType::Integer),
            "Edm.Double" | "Edm.Single" | "Edm.Decimal" => return Ok(FieldType::Float),
            "Edm.String" => return Ok(FieldType::String),
            _ => {}
        }
        match s.to_lowercase().as_str() {
            "integer" | "int" => Ok(FieldType::Integer),
            "float" | "double" => Ok(FieldType::Float),
            "string" | "text" => Ok(FieldType::String),
            _ => Err(format!("Invalid field type: {}", s)),
        }
    }
}

impl TryFrom<String> for FieldType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FieldType> for String {
    fn from(value: FieldType) -> Self {
        value.edm_name().to_string()
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Integer => write!(f, "Integer"),
            FieldType::Float => write!(f, "Float"),
            FieldType::String => write!(f, "String"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Equal,
    NotEqual,
    GreaterThan,
    LessThan,
    GreaterOrEqual,
    LessOrEqual,
    Contains,
}

impl Operator {
    /// Looks up one of the six comparison keywords. Keywords are case-sensitive.
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "eq" => Some(Operator::Equal),
            "ne" => Some(Operator::NotEqual),
            "gt" => Some(Operator::GreaterThan),
            "lt" => Some(Operator::LessThan),
            "ge" => Some(Operator::GreaterOrEqual),
            "le" => Some(Operator::LessOrEqual),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Operator::Equal => "eq",
            Operator::NotEqual => "ne",
            Operator::GreaterThan => "gt",
            Operator::LessThan => "lt",
            Operator::GreaterOrEqual => "ge",
            Operator::LessOrEqual => "le",
            Operator::Contains => "contains",
        }
    }

    /// True when `ordering` (record value compared to the literal) satisfies
    /// this operator. Always false for `Contains`.
    pub fn accepts(&self, ordering: Ordering) -> bool {
        match self {
            Operator::Equal => ordering == Ordering::Equal,
            Operator::NotEqual => ordering != Ordering::Equal,
            Operator::GreaterThan => ordering == Ordering::Greater,
            Operator::LessThan => ordering == Ordering::Less,
            Operator::GreaterOrEqual => ordering != Ordering::Less,
            Operator::LessOrEqual => ordering != Ordering::Greater,
            Operator::Contains => false,
        }
    }
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "contains" {
            return Ok(Operator::Contains);
        }
        Operator::from_keyword(s).ok_or_else(|| format!("Invalid comparison operator: {}", s))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// A typed field value or literal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),
    Float(f64),
    String(String),
}

impl Value {
    fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::String(_) => None,
        }
    }

    /// Orders two values of compatible types.
    ///
    /// Integers compare exactly, any other numeric pair compares as `f64`, and
    /// strings compare lexicographically (case-sensitive). A string never
    /// compares with a number, and NaN compares with nothing.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
            (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
            (Value::String(_), _) | (_, Value::String(_)) => None,
            (a, b) => a.as_f64()?.partial_cmp(&b.as_f64()?),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::String(s) => write!(f, "'{}'", s),
        }
    }
}

/// One `field operator literal` triple of a filter expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub field: String,
    pub operator: Operator,
    pub literal: Value,
}

impl Condition {
    pub fn new(field: impl Into<String>, operator: Operator, literal: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            operator,
            literal: literal.into(),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operator {
            Operator::Contains => write!(f, "{} contains({})", self.field, self.literal),
            op => write!(f, "{} {} {}", self.field, op, self.literal),
        }
    }
}

/// A single entity: field name to typed value, in declaration order.
pub type Record = IndexMap<String, Value>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_names() {
        assert_eq!("Edm.Int32".parse::<FieldType>().unwrap(), FieldType::Integer);
        assert_eq!("Edm.Double".parse::<FieldType>().unwrap(), FieldType::Float);
        assert_eq!("Edm.String".parse::<FieldType>().unwrap(), FieldType::String);
        assert_eq!("integer".parse::<FieldType>().unwrap(), FieldType::Integer);
        assert_eq!("Float".parse::<FieldType>().unwrap(), FieldType::Float);
        assert!("Edm.Guid".parse::<FieldType>().is_err());
    }

    #[test]
    fn test_operator_keywords_are_case_sensitive() {
        assert_eq!(Operator::from_keyword("gt"), Some(Operator::GreaterThan));
        assert_eq!(Operator::from_keyword("GT"), None);
        assert_eq!(Operator::from_keyword("contains"), None);
        assert_eq!("contains".parse::<Operator>().unwrap(), Operator::Contains);
    }

    #[test]
    fn test_compare_mixed_numeric() {
        let ordering = Value::Integer(100).compare(&Value::Float(100.5));
        assert_eq!(ordering, Some(Ordering::Less));
        let ordering = Value::Float(200.0).compare(&Value::Integer(200));
        assert_eq!(ordering, Some(Ordering::Equal));
    }

    #[test]
    fn test_compare_string_with_number_is_none() {
        assert_eq!(Value::from("100").compare(&Value::Integer(100)), None);
        assert_eq!(Value::Float(1.0).compare(&Value::from("1.0")), None);
    }

    #[test]
    fn test_compare_nan() {
        assert_eq!(Value::Float(f64::NAN).compare(&Value::Float(1.0)), None);
    }

    #[test]
    fn test_condition_display() {
        let cond = Condition::new("Precio", Operator::GreaterThan, 100.0);
        assert_eq!(cond.to_string(), "Precio gt 100.0");
        let cond = Condition::new("Nombre", Operator::Contains, "prod");
        assert_eq!(cond.to_string(), "Nombre contains('prod')");
    }
}
