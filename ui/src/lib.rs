//! Chart-ready metrics for Metricboard.
//!
//! Sparse per-day metric rows go in; a unified date axis, zero-filled series
//! aligned to it, and renderer-facing structures come out. Nothing here does
//! I/O or keeps state between calls.

pub mod charts;
pub mod core;
pub mod series;
pub mod views;

pub use charts::{
    create_area_chart_config, create_default_area_chart_config, format_metrics_data,
    AreaChartConfig, MetricsData,
};
pub use crate::core::{ChartError, ChartSettings, MetricRow};
