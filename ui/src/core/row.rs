//! Metric rows as delivered by the data-access layer.
//!
//! Rows arrive already scoped to a tenant. Only the name, date and value
//! columns matter here; any other column (`id`, `tenant_id`, `created_at`)
//! is ignored on the way in.

use serde::{de, Deserialize, Deserializer, Serialize};
use time::{
    format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime,
    UtcOffset,
};

use super::error::ChartError;
use crate::series::{check_duplicates, DuplicatePolicy};

/// One observation of a named metric on a calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRow {
    #[serde(alias = "metricName")]
    pub metric_name: String,
    #[serde(alias = "metricDate", with = "metric_date")]
    pub metric_date: Date,
    #[serde(alias = "metricValue", deserialize_with = "deserialize_value")]
    pub metric_value: f64,
}

impl MetricRow {
    pub fn new<T: Into<String>>(metric_name: T, metric_date: Date, metric_value: f64) -> Self {
        Self {
            metric_name: metric_name.into(),
            metric_date,
            metric_value,
        }
    }
}

/// Parse a JSON array of rows, applying `policy` to repeated `(name, date)` pairs.
pub fn parse_rows(json: &str, policy: DuplicatePolicy) -> Result<Vec<MetricRow>, ChartError> {
    let rows: Vec<MetricRow> = serde_json::from_str(json).map_err(ChartError::InvalidRows)?;
    check_duplicates(&rows, policy)?;
    Ok(rows)
}

/// Normalize a stored date to its calendar day.
///
/// Plain `YYYY-MM-DD` values are taken as-is; RFC 3339 timestamps collapse to
/// their UTC date.
pub fn parse_metric_date(raw: &str) -> Option<Date> {
    let trimmed = raw.trim();
    if let Ok(date) = Date::parse(trimmed, &format_description!("[year]-[month]-[day]")) {
        return Some(date);
    }

    OffsetDateTime::parse(trimmed, &Rfc3339)
        .ok()
        .map(|ts| ts.to_offset(UtcOffset::UTC).date())
}

fn deserialize_value<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawValue {
        Number(f64),
        Text(String),
    }

    match RawValue::deserialize(deserializer)? {
        RawValue::Number(value) => Ok(value),
        RawValue::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("metric value `{text}` is not numeric"))),
    }
}

mod metric_date {
    use serde::{de, ser, Deserialize, Deserializer, Serializer};
    use time::{macros::format_description, Date};

    pub fn serialize<S>(date: &Date, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let text = date
            .format(&format_description!("[year]-[month]-[day]"))
            .map_err(ser::Error::custom)?;
        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Date, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_metric_date(&raw)
            .ok_or_else(|| de::Error::custom(format!("unrecognised metric date `{raw}`")))
    }
}
