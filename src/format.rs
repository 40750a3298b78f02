// ABOUTME: Display formatting helpers shared by analytics consumers
// ABOUTME: Calendar-day keys and value-with-unit rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 La Forge Athlétique

use crate::models::MeasurementValue;
use chrono::{DateTime, NaiveDate, Utc};

/// Canonical ISO key (`YYYY-MM-DD`) for a calendar day
///
/// Every date-grouping and alignment path in the crate keys on this, so two
/// timestamps on the same UTC day always collapse to the same key.
#[must_use]
pub fn day_key(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

/// Calendar-day key of a timestamp
#[must_use]
pub fn date_key(timestamp: DateTime<Utc>) -> String {
    day_key(timestamp.date_naive())
}

/// Render a value with its unit for record cards and tooltips
///
/// Integral values render without decimals; fractional values keep at most
/// two decimals with trailing zeros trimmed. Text values pass through as-is.
#[must_use]
pub fn format_value(value: &MeasurementValue, unit: &str) -> String {
    match value {
        MeasurementValue::Text(text) => format!("{text} {unit}"),
        MeasurementValue::Number(n) => {
            if n.fract() == 0.0 {
                format!("{n:.0} {unit}")
            } else {
                let rendered = format!("{n:.2}");
                let trimmed = rendered.trim_end_matches('0').trim_end_matches('.');
                format!("{trimmed} {unit}")
            }
        }
    }
}
