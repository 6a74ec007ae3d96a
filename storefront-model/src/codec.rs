use crate::error::{ModelError, ModelResult};
use crate::record::Record;
use crate::schema::RecordSchema;
use std::str::FromStr;

/// Two-way mapping between a typed entity and its record line.
///
/// `to_record` must emit the schema's required keys in schema order; line
/// readers that match raw text depend on that order. `from_record` checks
/// the required keys and parses every typed field, failing the whole record
/// on the first malformed one.
pub trait FieldCodec: Sized {
    /// Required keys for this entity type.
    const SCHEMA: &'static RecordSchema;

    fn to_record(&self) -> Record;

    fn from_record(record: &Record) -> ModelResult<Self>;

    /// The value stored under the schema's id key.
    fn record_id(&self) -> String;
}

/// Reads a required text field.
pub(crate) fn text(record: &Record, key: &'static str) -> ModelResult<String> {
    match record.get(key) {
        Some(value) => value.as_text().map(str::to_string).ok_or_else(|| ModelError::InvalidField {
            key,
            reason: format!("expected a string, found {value}"),
        }),
        None => Err(missing(key)),
    }
}

/// Reads an optional text field; a present non-text value is an error.
pub(crate) fn optional_text(record: &Record, key: &'static str) -> ModelResult<Option<String>> {
    if record.contains_key(key) {
        text(record, key).map(Some)
    } else {
        Ok(None)
    }
}

/// Reads a required field and parses it with `FromStr`. Numeric fields may be
/// stored either as JSON numbers or as quoted strings.
pub(crate) fn parsed<T>(record: &Record, key: &'static str) -> ModelResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = record.get(key).ok_or_else(|| missing(key))?.to_plain_string();
    raw.parse::<T>().map_err(|e| ModelError::InvalidField {
        key,
        reason: e.to_string(),
    })
}

fn missing(key: &'static str) -> ModelError {
    ModelError::InvalidField {
        key,
        reason: "field is absent".to_string(),
    }
}
