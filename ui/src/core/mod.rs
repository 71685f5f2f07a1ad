//! Shared building blocks: input rows, formatting, palette and settings.

pub mod error;
pub mod format;
pub mod palette;
pub mod row;
pub mod settings;

pub use error::ChartError;
pub use row::{parse_rows, MetricRow};
pub use settings::ChartSettings;
