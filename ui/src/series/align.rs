//! Series aligner: remaps each metric's rows onto the unified axis.
//!
//! Missing days are filled with `0.0`; there is no "no data" marker in the
//! output. When a `(metric, date)` pair repeats, the first row in input
//! order supplies the value and later ones are reported as duplicates.

use std::collections::{hash_map::Entry, HashMap};

use serde::{Deserialize, Serialize};
use time::Date;
use tracing::warn;

use crate::core::{ChartError, MetricRow};

/// What to do with repeated `(metric, date)` rows at the input boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Keep the first row in input order, log the rest.
    #[default]
    FirstWins,
    /// Refuse the whole batch.
    Reject,
}

/// A repeated `(metric, date)` pair whose value was not used.
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateKey {
    pub metric: String,
    pub date: Date,
    pub ignored_value: f64,
}

/// Rows grouped by metric and date, built once and shared by every series of a request.
#[derive(Debug, Clone, Default)]
pub struct SeriesIndex<'a> {
    names: Vec<&'a str>,
    values: HashMap<&'a str, HashMap<Date, f64>>,
    duplicates: Vec<DuplicateKey>,
}

impl<'a> SeriesIndex<'a> {
    pub fn build(rows: &'a [MetricRow]) -> Self {
        let mut names = Vec::new();
        let mut values: HashMap<&'a str, HashMap<Date, f64>> = HashMap::new();
        let mut duplicates = Vec::new();

        for row in rows {
            let name = row.metric_name.as_str();
            let by_date = values.entry(name).or_insert_with(|| {
                names.push(name);
                HashMap::new()
            });

            match by_date.entry(row.metric_date) {
                Entry::Vacant(slot) => {
                    slot.insert(row.metric_value);
                }
                Entry::Occupied(_) => duplicates.push(DuplicateKey {
                    metric: row.metric_name.clone(),
                    date: row.metric_date,
                    ignored_value: row.metric_value,
                }),
            }
        }

        Self {
            names,
            values,
            duplicates,
        }
    }

    /// Metric names in order of first appearance.
    pub fn metric_names(&self) -> &[&'a str] {
        &self.names
    }

    pub fn duplicates(&self) -> &[DuplicateKey] {
        &self.duplicates
    }

    /// Values for `metric_name` positioned on `axis`; all zeros for an unknown metric.
    pub fn align(&self, metric_name: &str, axis: &[Date]) -> Vec<f64> {
        match self.values.get(metric_name) {
            Some(by_date) => axis
                .iter()
                .map(|date| by_date.get(date).copied().unwrap_or(0.0))
                .collect(),
            None => vec![0.0; axis.len()],
        }
    }
}

/// Align a single metric without building an index for the others.
pub fn align_series(rows: &[MetricRow], metric_name: &str, axis: &[Date]) -> Vec<f64> {
    let mut by_date: HashMap<Date, f64> = HashMap::new();
    for row in rows.iter().filter(|row| row.metric_name == metric_name) {
        by_date.entry(row.metric_date).or_insert(row.metric_value);
    }

    axis.iter()
        .map(|date| by_date.get(date).copied().unwrap_or(0.0))
        .collect()
}

/// Apply `policy` to repeated `(metric, date)` rows.
pub fn check_duplicates(rows: &[MetricRow], policy: DuplicatePolicy) -> Result<(), ChartError> {
    let index = SeriesIndex::build(rows);
    let Some(first) = index.duplicates().first() else {
        return Ok(());
    };

    match policy {
        DuplicatePolicy::Reject => Err(ChartError::DuplicateRow {
            metric: first.metric.clone(),
            date: first.date,
        }),
        DuplicatePolicy::FirstWins => {
            for duplicate in index.duplicates() {
                warn!(
                    metric = %duplicate.metric,
                    date = %duplicate.date,
                    ignored_value = duplicate.ignored_value,
                    "duplicate metric row ignored; first row wins"
                );
            }
            Ok(())
        }
    }
}
