//! Chart settings: the static part of the area chart configuration.
//!
//! Everything here is configuration rather than computation. `Default`
//! reproduces the built-in dashboard look; a JSON document may override any
//! subset of fields.

use serde::{Deserialize, Serialize};

use super::{error::ChartError, format::DateFormat};

/// Metrics charted when the caller doesn't name any.
pub const DEFAULT_METRIC_NAMES: [&str; 2] = ["Revenue", "Users"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub title: String,
    pub default_metrics: Vec<String>,
    pub date_format: DateFormat,
    pub series: SeriesStyle,
    pub animation: AnimationSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesStyle {
    pub smooth: bool,
    pub symbol: String,
    pub symbol_size: u32,
    pub area_opacity: f64,
    pub line_width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    pub enabled: bool,
    pub duration_ms: u32,
    pub easing: String,
}

impl ChartSettings {
    pub fn from_json_str(raw: &str) -> Result<Self, ChartError> {
        serde_json::from_str(raw).map_err(ChartError::InvalidSettings)
    }
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            title: "Metrics Overview".to_string(),
            default_metrics: DEFAULT_METRIC_NAMES.iter().map(|name| name.to_string()).collect(),
            date_format: DateFormat::ShortMonthDay,
            series: SeriesStyle::default(),
            animation: AnimationSettings::default(),
        }
    }
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            smooth: true,
            symbol: "circle".to_string(),
            symbol_size: 6,
            area_opacity: 0.3,
            line_width: 3,
        }
    }
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_ms: 1000,
            easing: "cubicOut".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_documents_keep_defaults() {
        let settings = ChartSettings::from_json_str(
            r#"{ "title": "Tenant KPIs", "animation": { "duration_ms": 250 } }"#,
        )
        .unwrap();

        assert_eq!(settings.title, "Tenant KPIs");
        assert_eq!(settings.default_metrics, vec!["Revenue", "Users"]);
        assert_eq!(settings.animation.duration_ms, 250);
        assert_eq!(settings.animation.easing, "cubicOut");
        assert_eq!(settings.series, SeriesStyle::default());
    }

    #[test]
    fn malformed_documents_are_reported() {
        let err = ChartSettings::from_json_str(r#"{ "title": 5 }"#).unwrap_err();
        assert!(matches!(err, ChartError::InvalidSettings(_)));
    }
}
