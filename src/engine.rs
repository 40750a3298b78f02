// ABOUTME: Store-injected facade exposing the public analytics operations
// ABOUTME: Personal records, chart series, correlations, and recent measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 La Forge Athlétique

use crate::config::AnalyticsConfig;
use crate::correlation::{self, MetricSeries};
use crate::errors::AnalyticsResult;
use crate::models::{ChartRow, CorrelationResult, DateRange, Measurement, PersonalRecord};
use crate::records;
use crate::series;
use crate::store::MeasurementStore;
use std::collections::HashMap;
use tracing::{debug, warn};
use uuid::Uuid;

/// Analytics facade over an injected measurement store
///
/// Every operation recomputes from the store's current state; nothing is
/// cached, so callers invalidate simply by calling again after the underlying
/// measurement set or metric selection changes. The store reference is
/// constructor-injected, keeping the whole pipeline testable against
/// [`crate::store::InMemoryMeasurementStore`].
pub struct AnalyticsEngine<S> {
    store: S,
    config: AnalyticsConfig,
}

impl<S: MeasurementStore> AnalyticsEngine<S> {
    /// Create an engine with default thresholds
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            config: AnalyticsConfig::default(),
        }
    }

    /// Create an engine with custom thresholds
    #[must_use]
    pub const fn with_config(store: S, config: AnalyticsConfig) -> Self {
        Self { store, config }
    }

    /// Personal records for one athlete: the best value per metric under each
    /// metric's polarity
    ///
    /// Store failures propagate unchanged; there is no retry logic in this
    /// core.
    pub async fn compute_records(&self, athlete_id: Uuid) -> AnalyticsResult<Vec<PersonalRecord>> {
        let measurements = self.store.fetch_all_measurements(athlete_id).await?;
        let metric_types = self.store.fetch_metric_types(None).await?;
        Ok(records::compute_records(&measurements, &metric_types))
    }

    /// Date-aligned chart rows for the selected metrics of one athlete
    ///
    /// Store failures propagate unchanged.
    pub async fn build_chart_series(
        &self,
        athlete_id: Uuid,
        metric_ids: &[Uuid],
        date_range: Option<&DateRange>,
    ) -> AnalyticsResult<Vec<ChartRow>> {
        let metric_names = self.metric_names(metric_ids).await?;

        let mut measurements = Vec::new();
        for metric_id in metric_ids {
            measurements.extend(
                self.store
                    .fetch_measurements(athlete_id, *metric_id, date_range)
                    .await?,
            );
        }

        Ok(series::assemble_series(&measurements, &metric_names))
    }

    /// Pairwise Pearson correlations across the selected metrics
    ///
    /// Degrades to an empty list on any store failure instead of propagating,
    /// so a transient fetch error never takes down an otherwise responsive
    /// dashboard. An empty list is also the legitimate "no pair had enough
    /// common data" outcome.
    pub async fn analyze_correlations(
        &self,
        athlete_id: Uuid,
        metric_ids: &[Uuid],
        date_range: Option<&DateRange>,
    ) -> Vec<CorrelationResult> {
        match self
            .correlation_series(athlete_id, metric_ids, date_range)
            .await
        {
            Ok(series) => correlation::analyze_pairs(&series, &self.config.correlation),
            Err(err) => {
                warn!(%athlete_id, error = %err, "correlation analysis degraded to empty result");
                Vec::new()
            }
        }
    }

    /// Most recent measurements of one athlete, newest first
    pub async fn latest_measurements(
        &self,
        athlete_id: Uuid,
        limit: usize,
    ) -> AnalyticsResult<Vec<Measurement>> {
        let mut measurements = self.store.fetch_all_measurements(athlete_id).await?;
        measurements.sort_by(|a, b| b.date.cmp(&a.date));
        measurements.truncate(limit);
        Ok(measurements)
    }

    async fn metric_names(&self, metric_ids: &[Uuid]) -> AnalyticsResult<HashMap<Uuid, String>> {
        let metric_types = self.store.fetch_metric_types(Some(metric_ids)).await?;
        Ok(metric_types
            .into_iter()
            .map(|mt| (mt.id, mt.name))
            .collect())
    }

    /// Re-query the store per metric and reduce to day-keyed series, keeping
    /// the requested metric order and dropping metrics with no label or no
    /// measurements
    async fn correlation_series(
        &self,
        athlete_id: Uuid,
        metric_ids: &[Uuid],
        date_range: Option<&DateRange>,
    ) -> AnalyticsResult<Vec<MetricSeries>> {
        let metric_names = self.metric_names(metric_ids).await?;

        let mut all_series = Vec::new();
        for metric_id in metric_ids {
            let Some(name) = metric_names.get(metric_id) else {
                debug!(metric_type_id = %metric_id, "unlabeled metric, dropped from correlation");
                continue;
            };
            let measurements = self
                .store
                .fetch_measurements(athlete_id, *metric_id, date_range)
                .await?;
            if measurements.is_empty() {
                continue;
            }
            all_series.push(MetricSeries::from_measurements(
                *metric_id,
                name.clone(),
                &measurements,
            ));
        }
        Ok(all_series)
    }
}
