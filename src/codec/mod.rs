//! Wire encoding for request parameters
//!
//! Typed query values ([`ParamValue`]) are turned into the strings TestRail
//! expects: identifier lists become comma-joined decimals, booleans `1`/`0`,
//! dates follow the configured [`DateFormat`], and text is trimmed. Empty
//! lists and blank text are omitted from the query string entirely.
//!
//! Body values go through serde; dates in bodies use [`Timestamp`].

mod timestamp;

pub use timestamp::Timestamp;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;
use std::fmt;
use std::num::ParseIntError;

/// A typed query parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Unsigned(u64),
    Integer(i64),
    Bool(bool),
    Text(String),
    Date(Timestamp),
    Ids(Vec<u64>),
}

/// Conversion into a [`ParamValue`].
///
/// Only the types below can be passed as parameters; anything else is
/// rejected at compile time.
pub trait IntoParam {
    fn into_param(self) -> ParamValue;
}

impl IntoParam for ParamValue {
    fn into_param(self) -> ParamValue {
        self
    }
}

impl IntoParam for u64 {
    fn into_param(self) -> ParamValue {
        ParamValue::Unsigned(self)
    }
}

impl IntoParam for u32 {
    fn into_param(self) -> ParamValue {
        ParamValue::Unsigned(u64::from(self))
    }
}

impl IntoParam for i64 {
    fn into_param(self) -> ParamValue {
        ParamValue::Integer(self)
    }
}

impl IntoParam for i32 {
    fn into_param(self) -> ParamValue {
        ParamValue::Integer(i64::from(self))
    }
}

impl IntoParam for bool {
    fn into_param(self) -> ParamValue {
        ParamValue::Bool(self)
    }
}

impl IntoParam for &str {
    fn into_param(self) -> ParamValue {
        ParamValue::Text(self.to_string())
    }
}

impl IntoParam for String {
    fn into_param(self) -> ParamValue {
        ParamValue::Text(self)
    }
}

impl IntoParam for Timestamp {
    fn into_param(self) -> ParamValue {
        ParamValue::Date(self)
    }
}

impl IntoParam for DateTime<Utc> {
    fn into_param(self) -> ParamValue {
        ParamValue::Date(self.into())
    }
}

impl IntoParam for Vec<u64> {
    fn into_param(self) -> ParamValue {
        ParamValue::Ids(self)
    }
}

impl IntoParam for &[u64] {
    fn into_param(self) -> ParamValue {
        ParamValue::Ids(self.to_vec())
    }
}

impl<const N: usize> IntoParam for [u64; N] {
    fn into_param(self) -> ParamValue {
        ParamValue::Ids(self.to_vec())
    }
}

/// How dates are written into query parameters
#[derive(Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFormat {
    /// Whole Unix seconds (TestRail's native format)
    #[default]
    UnixSeconds,
    /// Unix milliseconds
    UnixMillis,
    /// RFC 3339 in UTC, e.g. `2024-01-31T08:00:00Z`
    Rfc3339,
    /// Caller-supplied conversion
    #[serde(skip)]
    Custom(fn(&DateTime<Utc>) -> String),
}

impl fmt::Debug for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateFormat::UnixSeconds => f.write_str("UnixSeconds"),
            DateFormat::UnixMillis => f.write_str("UnixMillis"),
            DateFormat::Rfc3339 => f.write_str("Rfc3339"),
            DateFormat::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl DateFormat {
    pub fn format(&self, value: &DateTime<Utc>) -> String {
        match self {
            DateFormat::UnixSeconds => value.timestamp().to_string(),
            DateFormat::UnixMillis => value.timestamp_millis().to_string(),
            DateFormat::Rfc3339 => value.to_rfc3339_opts(SecondsFormat::Secs, true),
            DateFormat::Custom(convert) => convert(value),
        }
    }
}

/// Converts typed values into their canonical wire strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParamCodec {
    dates: DateFormat,
}

impl ParamCodec {
    pub fn new(dates: DateFormat) -> Self {
        Self { dates }
    }

    pub fn date_format(&self) -> DateFormat {
        self.dates
    }

    /// Encode a value; `None` means the parameter is omitted.
    pub fn encode(&self, value: &ParamValue) -> Option<String> {
        match value {
            ParamValue::Unsigned(v) => Some(v.to_string()),
            ParamValue::Integer(v) => Some(v.to_string()),
            ParamValue::Bool(v) => Some(if *v { "1" } else { "0" }.to_string()),
            ParamValue::Text(v) => {
                let trimmed = v.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            ParamValue::Date(v) => Some(self.dates.format(v.as_datetime())),
            ParamValue::Ids(v) => (!v.is_empty()).then(|| encode_ids(v)),
        }
    }
}

/// Join identifiers with commas, keeping order and duplicates.
pub fn encode_ids(ids: &[u64]) -> String {
    ids.iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Inverse of [`encode_ids`]; an empty string yields an empty list.
pub fn decode_ids(encoded: &str) -> Result<Vec<u64>, ParseIntError> {
    if encoded.trim().is_empty() {
        return Ok(Vec::new());
    }
    encoded.split(',').map(|id| id.trim().parse()).collect()
}

/// Ordered query parameters for one request.
///
/// Setting a name twice replaces the earlier value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    params: Vec<(String, ParamValue)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl IntoParam) {
        let name = name.into();
        let value = value.into_param();
        match self.params.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.params.push((name, value)),
        }
    }

    /// Set the parameter only when a value is present.
    pub fn set_optional<T: IntoParam>(&mut self, name: impl Into<String>, value: Option<T>) {
        if let Some(v) = value {
            self.set(name, v);
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.params
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Encoded `(name, value)` pairs with omitted parameters dropped.
    pub fn encode(&self, codec: &ParamCodec) -> Vec<(String, String)> {
        self.params
            .iter()
            .filter_map(|(name, value)| codec.encode(value).map(|v| (name.clone(), v)))
            .collect()
    }

    /// Render as `name=value` pairs joined by `&`, without a leading separator.
    ///
    /// Id lists keep their commas literal; every other value is fully
    /// percent-encoded.
    pub fn to_query_string(&self, codec: &ParamCodec) -> String {
        self.params
            .iter()
            .filter_map(|(name, value)| {
                let encoded = codec.encode(value)?;
                let escaped = match value {
                    ParamValue::Ids(_) => encoded,
                    _ => urlencoding::encode(&encoded).into_owned(),
                };
                Some(format!("{}={}", urlencoding::encode(name), escaped))
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_ids_preserves_order_and_duplicates() {
        assert_eq!(encode_ids(&[3, 1, 3, 2]), "3,1,3,2");
        assert_eq!(decode_ids("3,1,3,2").unwrap(), vec![3, 1, 3, 2]);
        assert_eq!(decode_ids("").unwrap(), Vec::<u64>::new());
        assert!(decode_ids("1,x").is_err());
    }

    #[test]
    fn test_encode_scalars() {
        let codec = ParamCodec::default();
        assert_eq!(codec.encode(&42u64.into_param()).as_deref(), Some("42"));
        assert_eq!(codec.encode(&(-7i64).into_param()).as_deref(), Some("-7"));
        assert_eq!(codec.encode(&true.into_param()).as_deref(), Some("1"));
        assert_eq!(codec.encode(&false.into_param()).as_deref(), Some("0"));
        assert_eq!(codec.encode(&"  passed ".into_param()).as_deref(), Some("passed"));
    }

    #[test]
    fn test_empty_values_are_omitted() {
        let codec = ParamCodec::default();
        assert_eq!(codec.encode(&Vec::<u64>::new().into_param()), None);
        assert_eq!(codec.encode(&"   ".into_param()), None);
    }

    #[test]
    fn test_date_formats() {
        let ts = Timestamp::from_unix(1_700_000_000).unwrap();

        let codec = ParamCodec::new(DateFormat::UnixSeconds);
        assert_eq!(codec.encode(&ts.into_param()).as_deref(), Some("1700000000"));

        let codec = ParamCodec::new(DateFormat::UnixMillis);
        assert_eq!(
            codec.encode(&ts.into_param()).as_deref(),
            Some("1700000000000")
        );

        let codec = ParamCodec::new(DateFormat::Rfc3339);
        assert_eq!(
            codec.encode(&ts.into_param()).as_deref(),
            Some("2023-11-14T22:13:20Z")
        );

        fn day_only(value: &DateTime<Utc>) -> String {
            value.format("%Y-%m-%d").to_string()
        }
        let codec = ParamCodec::new(DateFormat::Custom(day_only));
        assert_eq!(codec.encode(&ts.into_param()).as_deref(), Some("2023-11-14"));
    }

    #[test]
    fn test_query_params_replace_in_place() {
        let mut params = QueryParams::new();
        params.set("suite_id", 2u64);
        params.set("created_by", vec![1u64, 2, 3]);
        params.set("suite_id", 5u64);

        assert_eq!(params.get("suite_id"), Some(&ParamValue::Unsigned(5)));
        assert_eq!(
            params.to_query_string(&ParamCodec::default()),
            "suite_id=5&created_by=1,2,3"
        );
    }

    #[test]
    fn test_query_string_escapes_text() {
        let mut params = QueryParams::new();
        params.set("email", "jane doe+qa@example.com");
        params.set_optional("milestone_id", None::<Vec<u64>>);
        params.set("priority_id", Vec::<u64>::new());

        assert_eq!(
            params.to_query_string(&ParamCodec::default()),
            "email=jane%20doe%2Bqa%40example.com"
        );
    }

    #[test]
    fn test_commas_only_literal_in_id_lists() {
        let mut params = QueryParams::new();
        params.set("created_by", vec![4u64, 9]);
        params.set("refs", "RF-1, RF-2");

        assert_eq!(
            params.to_query_string(&ParamCodec::default()),
            "created_by=4,9&refs=RF-1%2C%20RF-2"
        );
    }
}
