use crate::shared::error::TevCatError;
use crate::shared::Result;
use serde_json::{Map, Value};

/// Typed access to the fields of one raw JSON record
///
/// TeVCat publishes most numbers as strings, so integer and float readers
/// accept both JSON numbers and numeric strings. `optional_*` readers treat a
/// missing key and `null` alike.
pub struct FieldReader<'a> {
    record: &'a Map<String, Value>,
    label: String,
}

impl<'a> FieldReader<'a> {
    /// `label` names the record in error messages, e.g. `source #3`.
    pub fn new(record: &'a Map<String, Value>, label: impl Into<String>) -> Self {
        Self {
            record,
            label: label.into(),
        }
    }

    fn required(&self, field: &str) -> Result<&'a Value> {
        self.record.get(field).ok_or_else(|| {
            TevCatError::MissingField {
                record: self.label.clone(),
                field: field.to_string(),
            }
            .into()
        })
    }

    fn optional(&self, field: &str) -> Option<&'a Value> {
        self.record.get(field).filter(|v| !v.is_null())
    }

    fn invalid(&self, field: &str, value: &Value, expected: &str) -> anyhow::Error {
        TevCatError::InvalidField {
            record: self.label.clone(),
            field: field.to_string(),
            value: value.to_string(),
            expected: expected.to_string(),
        }
        .into()
    }

    pub fn string(&self, field: &str) -> Result<String> {
        let value = self.required(field)?;
        as_string(value).ok_or_else(|| self.invalid(field, value, "a string"))
    }

    pub fn optional_string(&self, field: &str) -> Result<Option<String>> {
        self.optional(field)
            .map(|value| as_string(value).ok_or_else(|| self.invalid(field, value, "a string")))
            .transpose()
    }

    pub fn int(&self, field: &str) -> Result<i64> {
        let value = self.required(field)?;
        as_int(value).ok_or_else(|| self.invalid(field, value, "an integer"))
    }

    pub fn optional_int(&self, field: &str) -> Result<Option<i64>> {
        self.optional(field)
            .map(|value| as_int(value).ok_or_else(|| self.invalid(field, value, "an integer")))
            .transpose()
    }

    pub fn optional_float(&self, field: &str) -> Result<Option<f64>> {
        self.optional(field)
            .map(|value| as_float(value).ok_or_else(|| self.invalid(field, value, "a number")))
            .transpose()
    }

    /// Optional text field run through `parse`; `None` from `parse` is an
    /// invalid value described by `expected`.
    pub fn optional_parsed<T, F>(&self, field: &str, expected: &str, parse: F) -> Result<Option<T>>
    where
        F: Fn(&str) -> Option<T>,
    {
        self.optional(field)
            .map(|value| {
                as_string(value)
                    .and_then(|text| parse(&text))
                    .ok_or_else(|| self.invalid(field, value, expected))
            })
            .transpose()
    }

    /// Integer flag where any non-zero value is true.
    pub fn flag(&self, field: &str) -> Result<bool> {
        let value = self.required(field)?;
        match value {
            Value::Bool(b) => Ok(*b),
            other => as_int(other)
                .map(|v| v != 0)
                .ok_or_else(|| self.invalid(field, value, "0 or 1")),
        }
    }
}

fn as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn as_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_int_accepts_numbers_and_strings() {
        let rec = record(json!({"a": 5, "b": "17", "c": " 3 ", "d": 2.0}));
        let reader = FieldReader::new(&rec, "source #0");
        assert_eq!(reader.int("a").unwrap(), 5);
        assert_eq!(reader.int("b").unwrap(), 17);
        assert_eq!(reader.int("c").unwrap(), 3);
        assert_eq!(reader.int("d").unwrap(), 2);
    }

    #[test]
    fn test_int_rejects_fractions_and_text() {
        let rec = record(json!({"a": 2.5, "b": "many", "c": null}));
        let reader = FieldReader::new(&rec, "source #3");
        for field in ["a", "b", "c"] {
            let err = reader.int(field).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<TevCatError>(),
                Some(TevCatError::InvalidField { record, .. }) if record == "source #3"
            ));
        }
    }

    #[test]
    fn test_missing_required_field() {
        let rec = record(json!({}));
        let reader = FieldReader::new(&rec, "source #1");
        let err = reader.string("canonical_name").unwrap_err();
        match err.downcast_ref::<TevCatError>() {
            Some(TevCatError::MissingField { record, field }) => {
                assert_eq!(record, "source #1");
                assert_eq!(field, "canonical_name");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_optional_fields() {
        let rec = record(json!({"flux": "0.5", "eth": null, "rank": "2", "notes": "x"}));
        let reader = FieldReader::new(&rec, "source #0");
        assert_eq!(reader.optional_float("flux").unwrap(), Some(0.5));
        assert_eq!(reader.optional_float("eth").unwrap(), None);
        assert_eq!(reader.optional_float("missing").unwrap(), None);
        assert_eq!(reader.optional_int("rank").unwrap(), Some(2));
        assert_eq!(reader.optional_string("notes").unwrap().as_deref(), Some("x"));
        assert!(reader.optional_float("notes").is_err());
    }

    #[test]
    fn test_flag() {
        let rec = record(json!({"a": "1", "b": "0", "c": true, "d": "yes"}));
        let reader = FieldReader::new(&rec, "source #0");
        assert!(reader.flag("a").unwrap());
        assert!(!reader.flag("b").unwrap());
        assert!(reader.flag("c").unwrap());
        assert!(reader.flag("d").is_err());
    }

    #[test]
    fn test_string_coerces_numbers() {
        let rec = record(json!({"a": 12, "b": [1]}));
        let reader = FieldReader::new(&rec, "source #0");
        assert_eq!(reader.string("a").unwrap(), "12");
        assert!(reader.string("b").is_err());
    }
}
