//! Presentation formatter: turns aligned series into renderer-facing structures.

mod area;
pub use area::{
    create_area_chart_config, create_area_chart_config_with, create_default_area_chart_config,
    AreaChartConfig, AreaSeries, TooltipFormat,
};

mod dataset;
pub use dataset::{format_metrics_data, Dataset, MetricsData};

mod export;
pub use export::{export_csv, export_json};

mod tooltip;
