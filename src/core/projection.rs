use crate::domain::ports::WireRecord;
use serde_json::{Map, Value};

/// Projects a record into its ordered wire mapping.
///
/// Fields are visited in table order. Every field whose projected value is
/// empty (see [`is_empty_value`]) is left out, so a default record projects to
/// an empty map and a parent drops a nested record that has nothing set.
pub fn project<R: WireRecord>(record: &R) -> Map<String, Value> {
    let mut elements = Map::new();

    for field in R::fields() {
        let projected = (field.get)(record);
        debug_assert_eq!(projected.kind(), field.kind, "{}.{}", R::KIND, field.name);

        let value = projected.into_value();
        if is_empty_value(&value) {
            tracing::trace!(record = R::KIND, field = field.wire_name, "omitting empty field");
            continue;
        }
        elements.insert(field.wire_name.to_string(), value);
    }

    elements
}

/// The single omission predicate: null, `false`, zero, `""`, `[]` and `{}`.
///
/// Strings are empty only when they have no characters. Unlike PHP's
/// `empty()`, the string `"0"` is a real value (a user id or reference of
/// `"0"` is still sent).
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}
