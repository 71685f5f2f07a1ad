//! Tabular and JSON exports of aligned series.

use crate::{
    charts::MetricsData,
    core::{
        format::{format_date, format_value, DateFormat, ValueFormat},
        ChartError, MetricRow,
    },
    series::{unify_axis, SeriesIndex},
};

/// One line per unified date (ISO form), one column per metric in first-appearance order.
pub fn export_csv(rows: &[MetricRow]) -> String {
    let axis = unify_axis(rows);
    let index = SeriesIndex::build(rows);
    let names = index.metric_names();
    let columns: Vec<Vec<f64>> = names.iter().map(|name| index.align(name, &axis)).collect();

    let mut lines: Vec<Vec<String>> = Vec::with_capacity(axis.len() + 1);

    let mut header = vec!["date".to_string()];
    header.extend(names.iter().map(|name| name.to_string()));
    lines.push(header);

    for (position, date) in axis.iter().enumerate() {
        let mut line = vec![format_date(*date, DateFormat::Iso)];
        line.extend(
            columns
                .iter()
                .map(|column| format_value(column[position], ValueFormat::Plain)),
        );
        lines.push(line);
    }

    let mut csv = String::new();
    for line in lines {
        let joined = line
            .into_iter()
            .map(|field| escape_csv(&field))
            .collect::<Vec<_>>()
            .join(",");
        csv.push_str(&joined);
        csv.push('\n');
    }

    csv
}

pub fn export_json(data: &MetricsData) -> Result<String, ChartError> {
    serde_json::to_string_pretty(data).map_err(ChartError::Export)
}

fn escape_csv(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let needs_quotes = value.contains(',') || value.contains('"')
        || value.contains('\n')
        || value.contains('\r');
    if needs_quotes {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::format_metrics_data;
    use time::macros::date;

    #[test]
    fn csv_has_one_line_per_date() {
        let rows = vec![
            MetricRow::new("Revenue", date!(2024 - 01 - 03), 300.0),
            MetricRow::new("Users, active", date!(2024 - 01 - 02), 5.0),
            MetricRow::new("Revenue", date!(2024 - 01 - 01), 100.5),
        ];

        assert_eq!(
            export_csv(&rows),
            "date,Revenue,\"Users, active\"\n\
             2024-01-01,100.5,0\n\
             2024-01-02,0,5\n\
             2024-01-03,300,0\n"
        );
    }

    #[test]
    fn carriage_returns_are_quoted() {
        assert_eq!(escape_csv("Users\rweekly"), "\"Users\rweekly\"");
        assert_eq!(escape_csv("Say \"hi\""), "\"Say \"\"hi\"\"\"");
        assert_eq!(escape_csv("Revenue"), "Revenue");
    }

    #[test]
    fn empty_export_is_header_only() {
        assert_eq!(export_csv(&[]), "date\n");
    }

    #[test]
    fn json_export_keeps_generic_shape() {
        let rows = vec![MetricRow::new("Users", date!(2024 - 07 - 04), 12.0)];
        let json = export_json(&format_metrics_data(&rows)).unwrap();
        let parsed: MetricsData = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.labels, vec!["Jul 4"]);
        assert_eq!(parsed.datasets[0].data, vec![12.0]);
    }
}
