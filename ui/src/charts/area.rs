//! Area chart configuration for an ECharts-style renderer.
//!
//! Unlike [`format_metrics_data`](super::format_metrics_data), the caller
//! decides which metrics are charted and in which order. A requested metric
//! with no rows is still charted, as a flat zero line, so the legend and the
//! series list always line up with the request.
//!
//! The JSON key names are bound structurally by the renderer and must not
//! change. Formatter callbacks are expressed as named modes (`"compact"`,
//! `"axisSeriesList"`); [`AreaChartConfig::format_axis_label`] and
//! [`AreaChartConfig::tooltip_html`] produce the text those modes stand for.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::tooltip::render_axis_tooltip;
use crate::{
    core::{
        format::{format_date, format_value, ValueFormat},
        palette::series_color,
        settings::SeriesStyle,
        ChartSettings, MetricRow,
    },
    series::{unify_axis, SeriesIndex},
};

const MUTED_TEXT: &str = "#666";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaChartConfig {
    pub title: Title,
    pub tooltip: Tooltip,
    pub legend: Legend,
    pub grid: Grid,
    pub x_axis: CategoryAxis,
    pub y_axis: ValueAxis,
    pub series: Vec<AreaSeries>,
    pub animation: bool,
    pub animation_duration: u32,
    pub animation_easing: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Title {
    pub text: String,
    pub left: String,
    pub text_style: TitleTextStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleTextStyle {
    pub font_size: u32,
    pub font_weight: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TooltipFormat {
    /// Date header, then name, swatch and grouped value for every series.
    AxisSeriesList,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub trigger: String,
    pub background_color: String,
    pub border_color: String,
    pub border_width: u32,
    pub text_style: TextColor,
    pub formatter: TooltipFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextColor {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSize {
    pub font_size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Legend {
    pub data: Vec<String>,
    pub bottom: u32,
    pub text_style: FontSize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    pub left: String,
    pub right: String,
    pub bottom: String,
    pub top: String,
    pub contain_label: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAxis {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: Vec<String>,
    pub boundary_gap: bool,
    pub axis_line: AxisLine,
    pub axis_label: AxisLabel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueAxis {
    #[serde(rename = "type")]
    pub kind: String,
    pub axis_line: Toggle,
    pub axis_tick: Toggle,
    pub axis_label: AxisLabel,
    pub split_line: SplitLine,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLine {
    pub line_style: TextColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toggle {
    pub show: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLabel {
    pub color: String,
    pub font_size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatter: Option<ValueFormat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitLine {
    pub line_style: DashedLine,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashedLine {
    pub color: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaSeries {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub smooth: bool,
    pub symbol: String,
    pub symbol_size: u32,
    pub area_style: AreaStyle,
    pub line_style: LineWidth,
    pub data: Vec<f64>,
    pub item_style: TextColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaStyle {
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineWidth {
    pub width: u32,
}

impl AreaChartConfig {
    /// Display labels of the category axis, one per unified date.
    pub fn labels(&self) -> &[String] {
        &self.x_axis.data
    }

    /// Y-axis tick text for `value`, following the axis formatter mode.
    pub fn format_axis_label(&self, value: f64) -> String {
        let mode = self.y_axis.axis_label.formatter.unwrap_or(ValueFormat::Plain);
        format_value(value, mode)
    }

    /// Tooltip markup for the axis position `index`, or `None` past the end of the axis.
    pub fn tooltip_html(&self, index: usize) -> Option<String> {
        match self.tooltip.formatter {
            TooltipFormat::AxisSeriesList => render_axis_tooltip(self, index),
        }
    }
}

impl AreaSeries {
    fn new(name: &str, data: Vec<f64>, color: &str, style: &SeriesStyle) -> Self {
        Self {
            name: name.to_string(),
            kind: "line".to_string(),
            smooth: style.smooth,
            symbol: style.symbol.clone(),
            symbol_size: style.symbol_size,
            area_style: AreaStyle {
                opacity: style.area_opacity,
            },
            line_style: LineWidth {
                width: style.line_width,
            },
            data,
            item_style: TextColor {
                color: color.to_string(),
            },
        }
    }
}

/// Chart the metrics named in `metric_names`, in that order, with default settings.
pub fn create_area_chart_config<S: AsRef<str>>(
    rows: &[MetricRow],
    metric_names: &[S],
) -> AreaChartConfig {
    create_area_chart_config_with(rows, metric_names, &ChartSettings::default())
}

/// Chart the default metrics (`Revenue`, `Users`).
pub fn create_default_area_chart_config(rows: &[MetricRow]) -> AreaChartConfig {
    let settings = ChartSettings::default();
    create_area_chart_config_with(rows, settings.default_metrics.as_slice(), &settings)
}

pub fn create_area_chart_config_with<S: AsRef<str>>(
    rows: &[MetricRow],
    metric_names: &[S],
    settings: &ChartSettings,
) -> AreaChartConfig {
    let axis = unify_axis(rows);
    let index = SeriesIndex::build(rows);

    let labels: Vec<String> = axis
        .iter()
        .map(|date| format_date(*date, settings.date_format))
        .collect();

    let series: Vec<AreaSeries> = metric_names
        .iter()
        .enumerate()
        .map(|(position, name)| {
            let name = name.as_ref();
            AreaSeries::new(
                name,
                index.align(name, &axis),
                series_color(position),
                &settings.series,
            )
        })
        .collect();

    debug!(
        rows = rows.len(),
        dates = axis.len(),
        series = series.len(),
        duplicates = index.duplicates().len(),
        "built area chart config"
    );

    AreaChartConfig {
        title: Title {
            text: settings.title.clone(),
            left: "center".to_string(),
            text_style: TitleTextStyle {
                font_size: 18,
                font_weight: "bold".to_string(),
            },
        },
        tooltip: Tooltip {
            trigger: "axis".to_string(),
            background_color: "rgba(255, 255, 255, 0.9)".to_string(),
            border_color: "#ddd".to_string(),
            border_width: 1,
            text_style: TextColor {
                color: "#333".to_string(),
            },
            formatter: TooltipFormat::AxisSeriesList,
        },
        legend: Legend {
            data: metric_names
                .iter()
                .map(|name| name.as_ref().to_string())
                .collect(),
            bottom: 10,
            text_style: FontSize { font_size: 12 },
        },
        grid: Grid {
            left: "3%".to_string(),
            right: "4%".to_string(),
            bottom: "15%".to_string(),
            top: "15%".to_string(),
            contain_label: true,
        },
        x_axis: CategoryAxis {
            kind: "category".to_string(),
            data: labels,
            boundary_gap: false,
            axis_line: AxisLine {
                line_style: TextColor {
                    color: "#e0e0e0".to_string(),
                },
            },
            axis_label: AxisLabel {
                color: MUTED_TEXT.to_string(),
                font_size: 11,
                formatter: None,
            },
        },
        y_axis: ValueAxis {
            kind: "value".to_string(),
            axis_line: Toggle { show: false },
            axis_tick: Toggle { show: false },
            axis_label: AxisLabel {
                color: MUTED_TEXT.to_string(),
                font_size: 11,
                formatter: Some(ValueFormat::Compact),
            },
            split_line: SplitLine {
                line_style: DashedLine {
                    color: "#f0f0f0".to_string(),
                    kind: "dashed".to_string(),
                },
            },
        },
        series,
        animation: settings.animation.enabled,
        animation_duration: settings.animation.duration_ms,
        animation_easing: settings.animation.easing.clone(),
    }
}
