//! Devices as cached by the client

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::metadata::MetaField;
use crate::widget::Widget;

/// A device record. Attributes this type does not model are kept in `extra`
/// so a cached device serializes back with everything the API sent.
///
/// Decoding never fails: a null modelled attribute reads as absent, and one
/// of an unexpected type stays in `extra` under its own key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "Value")]
pub struct Device {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub meta_fields: Vec<MetaField>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub widgets: Vec<Widget>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Device {
    /// Build a device from a raw API record, dropping whatever metadata it came
    /// with in favour of `meta_fields`.
    pub fn from_record(mut record: Value, meta_fields: Vec<MetaField>) -> Self {
        if let Value::Object(map) = &mut record {
            map.remove("metaFields");
        }
        let mut device = Device::from(record);
        device.meta_fields = meta_fields;
        device
    }
}

impl From<Value> for Device {
    fn from(record: Value) -> Self {
        let mut extra = match record {
            Value::Object(map) => map,
            other => {
                tracing::warn!("Device record is not an object: {}", other);
                return Device::default();
            }
        };

        let id = match extra.remove("id") {
            Some(raw) => match lenient_id(&raw) {
                Some(id) => Some(id),
                None => {
                    if !raw.is_null() {
                        tracing::debug!("Keeping unparseable device id {}", raw);
                        extra.insert("id".to_string(), raw);
                    }
                    None
                }
            },
            None => None,
        };

        Device {
            id,
            org_id: take(&mut extra, "orgId"),
            name: take(&mut extra, "name"),
            meta_fields: take(&mut extra, "metaFields").unwrap_or_default(),
            widgets: take(&mut extra, "widgets").unwrap_or_default(),
            extra,
        }
    }
}

/// Numeric ids, also when sent as decimal strings
fn lenient_id(raw: &Value) -> Option<u64> {
    match raw {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Remove and decode `key`. Null counts as absent; a value of the wrong type
/// is put back.
fn take<T: DeserializeOwned>(map: &mut Map<String, Value>, key: &str) -> Option<T> {
    let raw = map.remove(key)?;
    if raw.is_null() {
        return None;
    }
    match serde_json::from_value(raw.clone()) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!("Keeping device attribute {} as is: {}", key, e);
            map.insert(key.to_string(), raw);
            None
        }
    }
}
