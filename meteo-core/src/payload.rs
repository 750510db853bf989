//! Lenient accessors over raw forecast payloads.
//!
//! Upstream sections are keyed by the requested variable names; anything
//! missing or non-numeric reads as `None` so callers can apply defaults.

use serde_json::{Map, Value};

use crate::error::WeatherError;

/// Required object section such as `current` or `daily`.
pub(crate) fn section<'a>(
    payload: &'a Value,
    name: &str,
) -> Result<&'a Map<String, Value>, WeatherError> {
    payload
        .get(name)
        .and_then(Value::as_object)
        .ok_or_else(|| WeatherError::data_shape(format!("response has no `{name}` section")))
}

/// Optional object section.
pub(crate) fn optional_section<'a>(
    payload: &'a Value,
    name: &str,
) -> Option<&'a Map<String, Value>> {
    payload.get(name).and_then(Value::as_object)
}

pub(crate) fn number(section: &Map<String, Value>, key: &str) -> Option<f64> {
    section.get(key).and_then(Value::as_f64)
}

pub(crate) fn text<'a>(section: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    section.get(key).and_then(Value::as_str)
}

/// Element `index` of the parallel array `key`.
pub(crate) fn series_number(section: &Map<String, Value>, key: &str, index: usize) -> Option<f64> {
    section
        .get(key)
        .and_then(Value::as_array)
        .and_then(|values| values.get(index))
        .and_then(Value::as_f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_section_is_data_shape_error() {
        let payload = json!({ "daily": {} });
        let err = section(&payload, "current").unwrap_err();
        assert!(matches!(err, WeatherError::DataShape(_)));
        assert!(section(&payload, "daily").is_ok());
    }

    #[test]
    fn non_object_section_is_rejected() {
        let payload = json!({ "current": [1, 2, 3] });
        assert!(section(&payload, "current").is_err());
        assert!(optional_section(&payload, "current").is_none());
    }

    #[test]
    fn accessors_tolerate_nulls_and_wrong_types() {
        let payload = json!({
            "current": { "a": 1.5, "b": null, "c": "x", "t": "2024-06-01T12:00" },
            "hourly": { "v": [null, 3, "bad"] }
        });
        let current = section(&payload, "current").unwrap();
        assert_eq!(number(current, "a"), Some(1.5));
        assert_eq!(number(current, "b"), None);
        assert_eq!(number(current, "c"), None);
        assert_eq!(number(current, "missing"), None);
        assert_eq!(text(current, "t"), Some("2024-06-01T12:00"));

        let hourly = section(&payload, "hourly").unwrap();
        assert_eq!(series_number(hourly, "v", 0), None);
        assert_eq!(series_number(hourly, "v", 1), Some(3.0));
        assert_eq!(series_number(hourly, "v", 2), None);
        assert_eq!(series_number(hourly, "v", 9), None);
    }
}
