//! Generic `{labels, datasets}` shape with metric names discovered from the rows.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    core::{
        format::{format_date, DateFormat},
        palette::series_color,
        MetricRow,
    },
    series::{unify_axis, SeriesIndex},
};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricsData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub name: String,
    pub data: Vec<f64>,
    pub color: String,
}

impl MetricsData {
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    /// First and last axis label, if the axis isn't empty.
    pub fn label_range(&self) -> Option<(&str, &str)> {
        let first = self.labels.first()?;
        let last = self.labels.last()?;
        Some((first.as_str(), last.as_str()))
    }
}

impl Dataset {
    /// Value on the most recent axis date.
    pub fn latest(&self) -> Option<f64> {
        self.data.last().copied()
    }

    pub fn total(&self) -> f64 {
        self.data.iter().sum()
    }
}

/// Group rows by metric, align each metric to the shared axis and color it by position.
///
/// Datasets follow the order in which each metric name first appears in `rows`.
pub fn format_metrics_data(rows: &[MetricRow]) -> MetricsData {
    let axis = unify_axis(rows);
    let index = SeriesIndex::build(rows);

    let labels = axis
        .iter()
        .map(|date| format_date(*date, DateFormat::ShortMonthDay))
        .collect();

    let datasets: Vec<Dataset> = index
        .metric_names()
        .iter()
        .enumerate()
        .map(|(position, name)| Dataset {
            name: name.to_string(),
            data: index.align(name, &axis),
            color: series_color(position).to_string(),
        })
        .collect();

    debug!(
        rows = rows.len(),
        dates = axis.len(),
        datasets = datasets.len(),
        duplicates = index.duplicates().len(),
        "formatted metrics data"
    );

    MetricsData { labels, datasets }
}
