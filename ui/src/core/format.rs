//! Formatting helpers for presenting metrics.
//!
//! Every renderer-facing string goes through one of these functions so that
//! labels, tooltips and exports agree on the same text for the same value.

use num_format::{Locale, ToFormattedString};
use serde::{Deserialize, Serialize};
use time::{macros::format_description, Date};

/// How a numeric value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueFormat {
    /// Axis style: `1.5M`, `2.5K`, or plain text below one thousand.
    Compact,
    /// English thousands separators with up to three fraction digits.
    Grouped,
    /// Shortest round-trip decimal text.
    Plain,
}

/// How an axis date is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateFormat {
    /// `Jan 1`
    ShortMonthDay,
    /// `2024-01-01`
    Iso,
}

pub fn format_value(value: f64, mode: ValueFormat) -> String {
    match mode {
        ValueFormat::Compact => format_compact(value),
        ValueFormat::Grouped => format_grouped(value),
        ValueFormat::Plain => format_plain(value),
    }
}

pub fn format_date(date: Date, mode: DateFormat) -> String {
    let formatted = match mode {
        DateFormat::ShortMonthDay => {
            date.format(&format_description!("[month repr:short] [day padding:none]"))
        }
        DateFormat::Iso => date.format(&format_description!("[year]-[month]-[day]")),
    };
    formatted.unwrap_or_else(|_| "—".to_string())
}

fn format_compact(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", round_half_away(value / 1_000_000.0, 1))
    } else if value >= 1_000.0 {
        format!("{:.1}K", round_half_away(value / 1_000.0, 1))
    } else {
        format_plain(value)
    }
}

fn format_plain(value: f64) -> String {
    if value == 0.0 {
        // Covers -0.0 as well.
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Round to `digits` fraction digits with ties going away from zero.
/// `{:.N}` alone rounds exact ties to even (`1.25` -> `1.2`).
fn round_half_away(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

fn format_grouped(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let symbol = if value > 0.0 { "∞" } else { "-∞" };
        return symbol.to_string();
    }

    let text = format!("{:.3}", round_half_away(value.abs(), 3));
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut grouped = match int_part.parse::<u128>() {
        Ok(whole) => whole.to_formatted_string(&Locale::en),
        Err(_) => int_part.to_string(),
    };

    let frac = frac_part.trim_end_matches('0');
    if !frac.is_empty() {
        grouped.push('.');
        grouped.push_str(frac);
    }

    if value < 0.0 && grouped != "0" {
        format!("-{grouped}")
    } else {
        grouped
    }
}
