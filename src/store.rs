// ABOUTME: Measurement store contract consumed by the analytics engine
// ABOUTME: Async trait plus an in-memory implementation for tests and embedding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 La Forge Athlétique

use crate::errors::AnalyticsResult;
use crate::models::{DateRange, Measurement, MetricType};
use async_trait::async_trait;
use uuid::Uuid;

/// Read-side contract of the measurement store
///
/// The analytics engine never mutates the store; its read path must be
/// idempotent. Implementations back this with an embedded database, a remote
/// relational backend, or the in-memory fixture below — the engine does not
/// care, which keeps every pipeline stage unit-testable.
///
/// # Ordering contract
///
/// Both measurement queries return results sorted by `date` ascending.
/// Implementations that cannot sort at the query layer must sort before
/// returning.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`; the engine issues independent reads
/// that may run concurrently across async tasks.
#[async_trait]
pub trait MeasurementStore: Send + Sync {
    /// Measurements of one metric for one athlete, optionally date-bounded
    /// (inclusive on both ends), date ascending
    async fn fetch_measurements(
        &self,
        athlete_id: Uuid,
        metric_type_id: Uuid,
        date_range: Option<&DateRange>,
    ) -> AnalyticsResult<Vec<Measurement>>;

    /// Every measurement of one athlete across all metrics, date ascending
    async fn fetch_all_measurements(&self, athlete_id: Uuid)
        -> AnalyticsResult<Vec<Measurement>>;

    /// Metric metadata, restricted to the given ids when provided
    ///
    /// Ids with no corresponding metric type are silently absent from the
    /// result; callers treat those metrics as unlabeled and drop them.
    async fn fetch_metric_types(&self, ids: Option<&[Uuid]>)
        -> AnalyticsResult<Vec<MetricType>>;
}

/// In-memory [`MeasurementStore`] for tests and store-less embedding
///
/// Holds measurements and metric types in plain vectors; queries filter and
/// sort on the fly. Insertion order is preserved within a day, which gives
/// last-seen-wins semantics downstream for duplicate (athlete, metric, day)
/// entries.
#[derive(Debug, Default, Clone)]
pub struct InMemoryMeasurementStore {
    measurements: Vec<Measurement>,
    metric_types: Vec<MetricType>,
}

impl InMemoryMeasurementStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one metric type
    pub fn add_metric_type(&mut self, metric_type: MetricType) {
        self.metric_types.push(metric_type);
    }

    /// Add one measurement
    pub fn add_measurement(&mut self, measurement: Measurement) {
        self.measurements.push(measurement);
    }

    /// Bulk-load measurements, preserving input order
    pub fn extend_measurements(&mut self, measurements: impl IntoIterator<Item = Measurement>) {
        self.measurements.extend(measurements);
    }

    /// Number of stored measurements
    #[must_use]
    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    /// Whether the store holds no measurements
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    fn sorted_by_date(mut selected: Vec<Measurement>) -> Vec<Measurement> {
        // Stable: same-day entries keep insertion order
        selected.sort_by_key(|m| m.date);
        selected
    }
}

#[async_trait]
impl MeasurementStore for InMemoryMeasurementStore {
    async fn fetch_measurements(
        &self,
        athlete_id: Uuid,
        metric_type_id: Uuid,
        date_range: Option<&DateRange>,
    ) -> AnalyticsResult<Vec<Measurement>> {
        let selected = self
            .measurements
            .iter()
            .filter(|m| m.athlete_id == athlete_id && m.metric_type_id == metric_type_id)
            .filter(|m| date_range.map_or(true, |range| range.contains(m.date)))
            .cloned()
            .collect();
        Ok(Self::sorted_by_date(selected))
    }

    async fn fetch_all_measurements(
        &self,
        athlete_id: Uuid,
    ) -> AnalyticsResult<Vec<Measurement>> {
        let selected = self
            .measurements
            .iter()
            .filter(|m| m.athlete_id == athlete_id)
            .cloned()
            .collect();
        Ok(Self::sorted_by_date(selected))
    }

    async fn fetch_metric_types(
        &self,
        ids: Option<&[Uuid]>,
    ) -> AnalyticsResult<Vec<MetricType>> {
        let selected = self
            .metric_types
            .iter()
            .filter(|mt| ids.map_or(true, |wanted| wanted.contains(&mt.id)))
            .cloned()
            .collect();
        Ok(selected)
    }
}
