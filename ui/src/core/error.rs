//! Error type shared by the row boundary, settings loader and exporters.

use thiserror::Error;
use time::Date;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("metric rows are malformed: {0}")]
    InvalidRows(#[source] serde_json::Error),

    #[error("chart settings are malformed: {0}")]
    InvalidSettings(#[source] serde_json::Error),

    #[error("duplicate row for metric `{metric}` on {date}")]
    DuplicateRow { metric: String, date: Date },

    #[error("couldn't serialize export: {0}")]
    Export(#[source] serde_json::Error),
}
