// ABOUTME: Chart-ready time-series assembly from raw measurements
// ABOUTME: Groups by calendar day into date-sorted multi-metric rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 La Forge Athlétique

use crate::format::day_key;
use crate::models::{ChartRow, Measurement};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;
use uuid::Uuid;

/// Assemble date-aligned chart rows from measurements spanning several metrics
///
/// Measurements are grouped by UTC calendar day; each group becomes one row
/// holding one entry per metric observed that day, keyed by the metric's
/// display name. Textual values use the standard coercion rule (unparseable
/// text counts as zero), and duplicate (metric, day) entries are resolved
/// last-seen-wins. Metrics missing from `metric_names` cannot be labeled and
/// are dropped.
///
/// Rows come back sorted ascending by date. Grouping and ordering go through
/// `BTreeMap`, never hash iteration order, so the output is identical on
/// every call over the same input.
#[must_use]
pub fn assemble_series(
    measurements: &[Measurement],
    metric_names: &HashMap<Uuid, String>,
) -> Vec<ChartRow> {
    let mut by_day: BTreeMap<NaiveDate, BTreeMap<String, f64>> = BTreeMap::new();

    for measurement in measurements {
        let Some(name) = metric_names.get(&measurement.metric_type_id) else {
            debug!(metric_type_id = %measurement.metric_type_id, "unlabeled metric, dropped from series");
            continue;
        };
        by_day
            .entry(measurement.day())
            .or_default()
            .insert(name.clone(), measurement.value.numeric_or_zero());
    }

    by_day
        .into_iter()
        .map(|(day, values)| ChartRow {
            date: day_key(day),
            values,
        })
        .collect()
}
