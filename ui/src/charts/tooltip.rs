//! Axis tooltip markup: a bold date header and one swatch line per series.

use html_escape::encode_text;

use super::area::AreaChartConfig;
use crate::core::format::{format_value, ValueFormat};

pub(crate) fn render_axis_tooltip(config: &AreaChartConfig, index: usize) -> Option<String> {
    let label = config.x_axis.data.get(index)?;

    let mut html = format!(
        r#"<div style="font-weight: bold; margin-bottom: 4px;">{}</div>"#,
        encode_text(label)
    );

    for series in &config.series {
        let value = series.data.get(index).copied().unwrap_or(0.0);
        html.push_str(&format!(
            concat!(
                r#"<div style="display: flex; align-items: center; margin: 2px 0;">"#,
                r#"<span style="display: inline-block; width: 10px; height: 10px; background-color: {color}; border-radius: 50%; margin-right: 8px;"></span>"#,
                r#"<span style="margin-right: 8px;">{name}:</span>"#,
                r#"<span style="font-weight: bold;">{value}</span>"#,
                "</div>"
            ),
            color = series.item_style.color,
            name = encode_text(&series.name),
            value = format_value(value, ValueFormat::Grouped),
        ));
    }

    Some(html)
}
