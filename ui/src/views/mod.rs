//! Dioxus views over the presentation shapes.

mod overview;
pub use overview::MetricsOverview;
