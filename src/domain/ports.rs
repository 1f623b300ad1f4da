use crate::core::{hydration, projection};
use crate::domain::model::FieldDescriptor;
use crate::utils::error::{ModelError, Result};
use serde_json::{Map, Value};

/// A record that travels over the wire. Implementors only supply their field
/// table; projection and hydration are shared.
pub trait WireRecord: Default + Sized + 'static {
    /// Name used in logs.
    const KIND: &'static str;

    fn fields() -> &'static [FieldDescriptor<Self>];

    fn to_wire(&self) -> Map<String, Value> {
        projection::project(self)
    }

    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_wire())?)
    }

    fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_wire())?)
    }

    fn from_wire(map: &Map<String, Value>) -> Result<Self> {
        hydration::hydrate(map)
    }

    fn from_json(json: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(json)? {
            Value::Object(map) => Self::from_wire(&map),
            other => Err(ModelError::unexpected("object", &other)),
        }
    }

    fn wire_name(field: &str) -> Option<&'static str> {
        Self::fields()
            .iter()
            .find(|d| d.name == field)
            .map(|d| d.wire_name)
    }

    fn field_name(wire_name: &str) -> Option<&'static str> {
        Self::fields()
            .iter()
            .find(|d| d.wire_name == wire_name)
            .map(|d| d.name)
    }
}
