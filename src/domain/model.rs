use crate::domain::currency::Currency;
use crate::domain::ports::WireRecord;
use crate::utils::error::Result;
use serde_json::{Map, Number, Value};

/// Shape of a field as seen by the projector and the hydrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Scalar,
    Record,
    Collection,
    Mapping,
}

/// A field's current value, read through its accessor and already projected.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Scalar(Value),
    Record(Map<String, Value>),
    Collection(Vec<Value>),
    Mapping(Map<String, Value>),
}

impl FieldValue {
    pub fn string(value: Option<&str>) -> Self {
        FieldValue::Scalar(value.map_or(Value::Null, |s| Value::String(s.to_string())))
    }

    pub fn number(value: Option<f64>) -> Self {
        FieldValue::Scalar(
            value
                .and_then(Number::from_f64)
                .map_or(Value::Null, Value::Number),
        )
    }

    pub fn integer(value: Option<i64>) -> Self {
        FieldValue::Scalar(value.map_or(Value::Null, |n| Value::Number(n.into())))
    }

    pub fn flag(value: Option<bool>) -> Self {
        FieldValue::Scalar(value.map_or(Value::Null, Value::Bool))
    }

    pub fn currency(value: Option<Currency>) -> Self {
        FieldValue::string(value.map(|c| c.code()))
    }

    pub fn record<R: WireRecord>(record: &R) -> Self {
        FieldValue::Record(crate::core::projection::project(record))
    }

    pub fn collection<R: WireRecord>(elements: &[Element<R>]) -> Self {
        FieldValue::Collection(
            elements
                .iter()
                .map(|element| match element {
                    Element::Record(record) => {
                        Value::Object(crate::core::projection::project(record))
                    }
                    Element::Raw(raw) => raw.clone(),
                })
                .collect(),
        )
    }

    pub fn strings(values: &[String]) -> Self {
        FieldValue::Collection(values.iter().cloned().map(Value::String).collect())
    }

    pub fn mapping(map: &Map<String, Value>) -> Self {
        FieldValue::Mapping(map.clone())
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Scalar(_) => FieldKind::Scalar,
            FieldValue::Record(_) => FieldKind::Record,
            FieldValue::Collection(_) => FieldKind::Collection,
            FieldValue::Mapping(_) => FieldKind::Mapping,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            FieldValue::Scalar(value) => value,
            FieldValue::Record(map) | FieldValue::Mapping(map) => Value::Object(map),
            FieldValue::Collection(items) => Value::Array(items),
        }
    }
}

/// An element of a record collection. Elements the API sends that do not look
/// like the record are carried through untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum Element<R> {
    Record(R),
    Raw(Value),
}

impl<R> From<R> for Element<R>
where
    R: WireRecord,
{
    fn from(record: R) -> Self {
        Element::Record(record)
    }
}

/// One row of a record's field table.
pub struct FieldDescriptor<R> {
    pub name: &'static str,
    pub wire_name: &'static str,
    pub kind: FieldKind,
    pub get: fn(&R) -> FieldValue,
    pub set: fn(&mut R, &Value) -> Result<()>,
}

impl<R> FieldDescriptor<R> {
    pub const fn new(
        name: &'static str,
        wire_name: &'static str,
        kind: FieldKind,
        get: fn(&R) -> FieldValue,
        set: fn(&mut R, &Value) -> Result<()>,
    ) -> Self {
        Self {
            name,
            wire_name,
            kind,
            get,
            set,
        }
    }

    pub const fn scalar(
        name: &'static str,
        get: fn(&R) -> FieldValue,
        set: fn(&mut R, &Value) -> Result<()>,
    ) -> Self {
        Self::new(name, name, FieldKind::Scalar, get, set)
    }

    pub const fn record(
        name: &'static str,
        get: fn(&R) -> FieldValue,
        set: fn(&mut R, &Value) -> Result<()>,
    ) -> Self {
        Self::new(name, name, FieldKind::Record, get, set)
    }

    pub const fn collection(
        name: &'static str,
        get: fn(&R) -> FieldValue,
        set: fn(&mut R, &Value) -> Result<()>,
    ) -> Self {
        Self::new(name, name, FieldKind::Collection, get, set)
    }

    pub const fn mapping(
        name: &'static str,
        get: fn(&R) -> FieldValue,
        set: fn(&mut R, &Value) -> Result<()>,
    ) -> Self {
        Self::new(name, name, FieldKind::Mapping, get, set)
    }

    /// Same field, transmitted under a different key.
    pub const fn on_wire(mut self, wire_name: &'static str) -> Self {
        self.wire_name = wire_name;
        self
    }
}

impl<R> std::fmt::Debug for FieldDescriptor<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("wire_name", &self.wire_name)
            .field("kind", &self.kind)
            .finish()
    }
}
