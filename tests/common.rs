// ABOUTME: Shared test fixtures for the analytics integration tests
// ABOUTME: Metric/measurement builders and a pre-seeded in-memory store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 La Forge Athlétique
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::must_use_candidate,
    clippy::missing_panics_doc
)]
//! Shared fixtures for `forge-analytics` integration tests

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use forge_analytics::models::{
    Measurement, MeasurementValue, MetricCategory, MetricType,
};
use forge_analytics::store::InMemoryMeasurementStore;
use uuid::Uuid;

/// Build a metric type with a fresh id
pub fn metric(
    name: &str,
    unit: &str,
    category: MetricCategory,
    is_higher_better: bool,
) -> MetricType {
    MetricType {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        category,
        unit: unit.to_owned(),
        description: None,
        is_higher_better,
    }
}

/// Parse an ISO day (`YYYY-MM-DD`) into a UTC timestamp at 08:00
pub fn day(iso: &str) -> DateTime<Utc> {
    at_hour(iso, 8)
}

/// Parse an ISO day into a UTC timestamp at the given hour
pub fn at_hour(iso: &str, hour: u32) -> DateTime<Utc> {
    let date = NaiveDate::parse_from_str(iso, "%Y-%m-%d").unwrap();
    Utc.from_utc_datetime(&date.and_hms_opt(hour, 0, 0).unwrap())
}

/// Build a measurement for one athlete/metric pair
pub fn measurement(
    athlete_id: Uuid,
    metric_type: &MetricType,
    date: DateTime<Utc>,
    value: impl Into<MeasurementValue>,
) -> Measurement {
    Measurement {
        id: Uuid::new_v4(),
        athlete_id,
        metric_type_id: metric_type.id,
        date,
        value: value.into(),
        unit: metric_type.unit.clone(),
        notes: None,
        created_at: Utc::now(),
    }
}

/// Seed a store with one metric's values on consecutive ISO days
pub fn seed_daily_values(
    store: &mut InMemoryMeasurementStore,
    athlete_id: Uuid,
    metric_type: &MetricType,
    days_and_values: &[(&str, f64)],
) {
    for (iso, value) in days_and_values {
        store.add_measurement(measurement(athlete_id, metric_type, day(iso), *value));
    }
}

/// A sprint-time metric (smaller is better)
pub fn sprint_metric() -> MetricType {
    metric("Sprint 20m", "s", MetricCategory::PowerSpeed, false)
}

/// A body-weight metric (tracked, polarity larger-is-better is irrelevant
/// for records here but required by the model)
pub fn weight_metric() -> MetricType {
    metric("Weight", "kg", MetricCategory::Anthropometry, false)
}

/// A jump-height metric (larger is better)
pub fn jump_metric() -> MetricType {
    metric("CMJ Height", "cm", MetricCategory::PowerSpeed, true)
}
