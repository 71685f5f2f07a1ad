use dioxus::prelude::*;

use crate::{
    charts::{Dataset, MetricsData},
    core::format::{format_value, ValueFormat},
};

/// Highlight card for the generic metrics shape: one tile per dataset.
#[component]
pub fn MetricsOverview(data: MetricsData) -> Element {
    let series_count = data.datasets.len();
    let range_meta = data
        .label_range()
        .map(|(first, last)| {
            if first == last {
                first.to_string()
            } else {
                format!("{first} – {last}")
            }
        })
        .unwrap_or_default();

    let highlights: Vec<Highlight> = data.datasets.iter().map(Highlight::from_dataset).collect();

    rsx! {
        section { class: "metrics-card metrics-overview",
            div { class: "metrics-card__header",
                h2 { "Metrics" }
                if series_count > 0 {
                    span { class: "metrics-card__meta", "{range_meta}" }
                }
            }

            if series_count == 0 {
                p { class: "metrics-card__placeholder", "Metrics will show up here once data is recorded." }
            } else {
                div { class: "metrics-highlights",
                    for highlight in highlights.into_iter() {
                        {render_highlight(highlight)}
                    }
                }
            }
        }
    }
}

#[derive(Clone)]
struct Highlight {
    name: String,
    color: String,
    latest: String,
    total: String,
}

impl Highlight {
    fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            name: dataset.name.clone(),
            color: dataset.color.clone(),
            latest: dataset
                .latest()
                .map(|value| format_value(value, ValueFormat::Compact))
                .unwrap_or_else(|| "—".to_string()),
            total: format_value(dataset.total(), ValueFormat::Grouped),
        }
    }
}

fn render_highlight(highlight: Highlight) -> Element {
    let Highlight {
        name,
        color,
        latest,
        total,
    } = highlight;

    rsx! {
        div { class: "metrics-highlight",
            span { class: "metrics-highlight__swatch", style: "background-color: {color};" }
            span { class: "metrics-highlight__label", "{name}" }
            strong { class: "metrics-highlight__value", "{latest}" }
            span { class: "metrics-highlight__meta", "Total {total}" }
        }
    }
}
