//! Axis unifier: the shared date axis every series is aligned to.

use std::collections::BTreeSet;

use time::Date;

use crate::core::MetricRow;

/// Distinct dates across all rows, ascending, regardless of which metric produced them.
pub fn unify_axis(rows: &[MetricRow]) -> Vec<Date> {
    rows.iter()
        .map(|row| row.metric_date)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
