//! Metrics persistence collaborator and an in-memory implementation.
//!
//! Implementations own tenant filtering: rows handed back are already scoped
//! to `MetricsQuery::tenant_id`.

use serde_json::Value;
use time::OffsetDateTime;
use ui::MetricRow;

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsQuery {
    pub tenant_id: String,
    pub limit: usize,
    /// Order by metric date, oldest first.
    pub ascending: bool,
}

#[allow(async_fn_in_trait)]
pub trait MetricsStore {
    async fn metrics(&self, query: &MetricsQuery) -> Result<Vec<MetricRow>, ApiError>;

    /// Most recently created radar chart row for `user_id`.
    async fn latest_radar_chart(&self, user_id: &str) -> Result<Option<Value>, ApiError>;
}

#[derive(Debug, Clone)]
struct TenantMetric {
    tenant_id: String,
    row: MetricRow,
}

#[derive(Debug, Clone)]
struct RadarChartRow {
    user_id: String,
    created_at: OffsetDateTime,
    data: Value,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    metrics: Vec<TenantMetric>,
    radar_charts: Vec<RadarChartRow>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_metric<T: Into<String>>(&mut self, tenant_id: T, row: MetricRow) {
        self.metrics.push(TenantMetric {
            tenant_id: tenant_id.into(),
            row,
        });
    }

    pub fn insert_radar_chart<T: Into<String>>(
        &mut self,
        user_id: T,
        created_at: OffsetDateTime,
        data: Value,
    ) {
        self.radar_charts.push(RadarChartRow {
            user_id: user_id.into(),
            created_at,
            data,
        });
    }
}

impl MetricsStore for MemoryStore {
    async fn metrics(&self, query: &MetricsQuery) -> Result<Vec<MetricRow>, ApiError> {
        let mut rows: Vec<MetricRow> = self
            .metrics
            .iter()
            .filter(|metric| metric.tenant_id == query.tenant_id)
            .map(|metric| metric.row.clone())
            .collect();

        if query.ascending {
            rows.sort_by_key(|row| row.metric_date);
        } else {
            rows.sort_by_key(|row| std::cmp::Reverse(row.metric_date));
        }
        rows.truncate(query.limit);

        Ok(rows)
    }

    async fn latest_radar_chart(&self, user_id: &str) -> Result<Option<Value>, ApiError> {
        Ok(self
            .radar_charts
            .iter()
            .filter(|chart| chart.user_id == user_id)
            .max_by_key(|chart| chart.created_at)
            .map(|chart| chart.data.clone()))
    }
}
