use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{Map, Value};

/// A problem record as returned by `problems/find`.
///
/// The contents are not interpreted; only the requested fields are projected
/// out when the record is converted for output.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RadarRecord {
    fields: Map<String, Value>,
}

impl RadarRecord {
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Converts the record into a field name to value mapping.
    ///
    /// The mapping contains exactly `fields`, in that order. Fields missing
    /// from the record map to `null`.
    #[must_use]
    pub fn to_map(&self, fields: &[&str]) -> IndexMap<String, Value> {
        fields
            .iter()
            .map(|&name| {
                let value = self.fields.get(name).cloned().unwrap_or(Value::Null);
                (name.to_string(), value)
            })
            .collect()
    }
}
