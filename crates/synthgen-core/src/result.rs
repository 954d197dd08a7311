use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Scalar value returned by the generation service for one cell.
///
/// Arrays and objects are not expected but are kept verbatim in `Nested`
/// so that nothing the service returns is lost on export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum CellValue {
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
    Nested(Value),
}

impl From<Value> for CellValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => CellValue::Null,
            Value::Bool(flag) => CellValue::Bool(flag),
            Value::Number(number) => CellValue::Number(number),
            Value::String(text) => CellValue::Text(text),
            nested @ (Value::Array(_) | Value::Object(_)) => CellValue::Nested(nested),
        }
    }
}

impl From<CellValue> for Value {
    fn from(value: CellValue) -> Self {
        match value {
            CellValue::Null => Value::Null,
            CellValue::Bool(flag) => Value::Bool(flag),
            CellValue::Number(number) => Value::Number(number),
            CellValue::Text(text) => Value::String(text),
            CellValue::Nested(nested) => nested,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Bool(flag) => write!(f, "{flag}"),
            CellValue::Number(number) => write!(f, "{number}"),
            CellValue::Text(text) => f.write_str(text),
            CellValue::Nested(nested) => write!(f, "{nested}"),
        }
    }
}

/// One schema-less record; keys keep the order the service sent them in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultRow {
    cells: IndexMap<String, CellValue>,
}

impl ResultRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a cell. A replaced key keeps its original position.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.cells.insert(key.into(), CellValue::from(value.into()));
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &CellValue> {
        self.cells.values()
    }

    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.cells.get(key)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl FromIterator<(String, CellValue)> for ResultRow {
    fn from_iter<I: IntoIterator<Item = (String, CellValue)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// Ordered rows of one successful generation.
pub type ResultSet = Vec<ResultRow>;
