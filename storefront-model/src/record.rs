use crate::error::{ModelError, ModelResult};
use crate::value::FieldValue;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// One line of a record file: an ordered list of scalar fields.
///
/// Key order is significant. It is preserved from the parsed line (or from
/// the codec that built the record) and reproduced exactly by
/// [`Record::to_line`], so rewriting a record only changes the fields that
/// were explicitly set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Record::set`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Parses one JSON-object line.
    pub fn parse_line(line: &str) -> ModelResult<Self> {
        let object: serde_json::Map<String, Value> = serde_json::from_str(line)?;
        let mut fields = Vec::with_capacity(object.len());
        for (key, value) in object {
            let value = match value {
                Value::String(s) => FieldValue::Text(s),
                Value::Number(n) => FieldValue::Number(n),
                other => {
                    return Err(ModelError::NonScalarField {
                        key,
                        found: json_kind(&other),
                    });
                }
            };
            fields.push((key, value));
        }
        Ok(Self { fields })
    }

    /// Serializes to a single JSON line without the trailing newline.
    pub fn to_line(&self) -> ModelResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns the field as a string slice if it holds text.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FieldValue::as_text)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Overwrites `key` in place, or appends it if absent.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
        Value::String(_) => "a string",
        Value::Number(_) => "a number",
    }
}
