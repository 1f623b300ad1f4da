use crate::domain::model::{Element, FieldKind};
use crate::domain::ports::WireRecord;
use crate::utils::error::{ModelError, Result};
use serde_json::{Map, Value};

/// Builds a record from a wire mapping using the record's field table.
///
/// Keys are matched on wire name. Missing and `null` keys leave the field at
/// its default; keys the table does not know are skipped.
pub fn hydrate<R: WireRecord>(map: &Map<String, Value>) -> Result<R> {
    let mut record = R::default();

    for field in R::fields() {
        let Some(value) = map.get(field.wire_name) else {
            continue;
        };
        if value.is_null() {
            continue;
        }

        check_shape(field.kind, value).map_err(|e| e.in_field(field.wire_name))?;
        (field.set)(&mut record, value).map_err(|e| e.in_field(field.wire_name))?;
    }

    for key in map.keys() {
        if R::field_name(key).is_none() {
            tracing::debug!(record = R::KIND, key = %key, "ignoring unknown wire key");
        }
    }

    Ok(record)
}

/// Hydrates a nested record from a single JSON value.
pub fn hydrate_value<R: WireRecord>(value: &Value) -> Result<R> {
    match value {
        Value::Object(map) => hydrate(map),
        other => Err(ModelError::unexpected("object", other)),
    }
}

/// Hydrates a record collection. Objects whose keys are all known wire names
/// become records; anything else is kept as a raw element so it projects back
/// unchanged.
pub fn hydrate_elements<R: WireRecord>(value: &Value) -> Result<Vec<Element<R>>> {
    let items = value
        .as_array()
        .ok_or_else(|| ModelError::unexpected("array", value))?;

    items
        .iter()
        .map(|item| match item {
            Value::Object(map) if map.keys().all(|key| R::field_name(key).is_some()) => {
                hydrate(map).map(Element::Record)
            }
            raw => Ok(Element::Raw(raw.clone())),
        })
        .collect()
}

fn check_shape(kind: FieldKind, value: &Value) -> Result<()> {
    match kind {
        FieldKind::Record | FieldKind::Mapping if !value.is_object() => {
            Err(ModelError::unexpected("object", value))
        }
        FieldKind::Collection if !value.is_array() => Err(ModelError::unexpected("array", value)),
        _ => Ok(()),
    }
}

/// Scalar decoders used by field setters.
pub mod decode {
    use crate::domain::currency::Currency;
    use crate::utils::error::{ModelError, Result};
    use serde_json::{Map, Value};

    pub fn string(value: &Value) -> Result<Option<String>> {
        match value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.clone())),
            other => Err(ModelError::unexpected("string", other)),
        }
    }

    pub fn number(value: &Value) -> Result<Option<f64>> {
        match value {
            Value::Null => Ok(None),
            Value::Number(n) => Ok(n.as_f64()),
            other => Err(ModelError::unexpected("number", other)),
        }
    }

    pub fn integer(value: &Value) -> Result<Option<i64>> {
        match value {
            Value::Null => Ok(None),
            Value::Number(n) => n
                .as_i64()
                .map(Some)
                .ok_or_else(|| ModelError::unexpected("integer", value)),
            other => Err(ModelError::unexpected("integer", other)),
        }
    }

    pub fn flag(value: &Value) -> Result<Option<bool>> {
        match value {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(*b)),
            other => Err(ModelError::unexpected("boolean", other)),
        }
    }

    pub fn currency(value: &Value) -> Result<Option<Currency>> {
        string(value)?.map(|code| code.parse()).transpose()
    }

    pub fn strings(value: &Value) -> Result<Vec<String>> {
        let items = value
            .as_array()
            .ok_or_else(|| ModelError::unexpected("array", value))?;
        items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| ModelError::unexpected("string", item))
            })
            .collect()
    }

    pub fn mapping(value: &Value) -> Result<Map<String, Value>> {
        value
            .as_object()
            .cloned()
            .ok_or_else(|| ModelError::unexpected("object", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_scalars() {
        assert_eq!(decode::string(&json!("abc")).unwrap(), Some("abc".to_string()));
        assert_eq!(decode::string(&Value::Null).unwrap(), None);
        assert!(decode::string(&json!(1)).is_err());

        assert_eq!(decode::number(&json!(10.5)).unwrap(), Some(10.5));
        assert_eq!(decode::number(&json!(3)).unwrap(), Some(3.0));
        assert!(decode::number(&json!("3")).is_err());

        assert_eq!(decode::integer(&json!(100)).unwrap(), Some(100));
        assert!(decode::integer(&json!(1.5)).is_err());

        assert_eq!(decode::flag(&json!(true)).unwrap(), Some(true));
        assert!(decode::flag(&json!("true")).is_err());
    }

    #[test]
    fn test_decode_currency_rejects_unknown_codes() {
        assert!(decode::currency(&json!("USD")).unwrap().is_some());
        assert!(matches!(
            decode::currency(&json!("ZZZ")),
            Err(ModelError::InvalidCurrency { .. })
        ));
    }

    #[test]
    fn test_decode_strings() {
        assert_eq!(
            decode::strings(&json!(["BTC", "ETH"])).unwrap(),
            vec!["BTC".to_string(), "ETH".to_string()]
        );
        assert!(decode::strings(&json!(["BTC", 1])).is_err());
    }

    #[test]
    fn test_elements_with_unknown_keys_stay_raw() {
        use crate::domain::payout::PayoutTransaction;

        let value = json!([
            {"txid": "a", "amount": 1.0},
            {"txid": "b", "amount": 2.0, "confirmations": 6},
            {}
        ]);
        let elements: Vec<Element<PayoutTransaction>> = hydrate_elements(&value).unwrap();

        assert!(matches!(elements[0], Element::Record(_)));
        assert_eq!(
            elements[1],
            Element::Raw(json!({"txid": "b", "amount": 2.0, "confirmations": 6}))
        );
        assert_eq!(elements[2], Element::Record(PayoutTransaction::default()));
    }

    #[test]
    fn test_check_shape() {
        assert!(check_shape(FieldKind::Record, &json!({})).is_ok());
        assert!(check_shape(FieldKind::Record, &json!([])).is_err());
        assert!(check_shape(FieldKind::Mapping, &json!("x")).is_err());
        assert!(check_shape(FieldKind::Collection, &json!([])).is_ok());
        assert!(check_shape(FieldKind::Collection, &json!({})).is_err());
        assert!(check_shape(FieldKind::Scalar, &json!({})).is_ok());
    }
}
