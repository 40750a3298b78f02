// ABOUTME: Pearson correlation over date-aligned metric series
// ABOUTME: Pairwise analysis with strength tiers and |r|-descending ranking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 La Forge Athlétique

use crate::config::CorrelationConfig;
use crate::models::{CorrelationResult, Measurement};
use chrono::NaiveDate;
use rayon::prelude::*;
use std::collections::BTreeMap;
use uuid::Uuid;

/// One metric's measurements reduced to a day-keyed numeric series
///
/// Building the map in input order gives last-seen-wins semantics when the
/// same metric was measured twice on one calendar day.
#[derive(Debug, Clone)]
pub struct MetricSeries {
    /// Metric the series belongs to
    pub metric_type_id: Uuid,
    /// Metric display name, used to label correlation results
    pub name: String,
    /// Numeric value per UTC calendar day
    pub points: BTreeMap<NaiveDate, f64>,
}

impl MetricSeries {
    /// Reduce raw measurements to a day-keyed series with the standard
    /// coercion rule (unparseable text counts as zero)
    #[must_use]
    pub fn from_measurements(
        metric_type_id: Uuid,
        name: String,
        measurements: &[Measurement],
    ) -> Self {
        let mut points = BTreeMap::new();
        for measurement in measurements {
            points.insert(measurement.day(), measurement.value.numeric_or_zero());
        }
        Self {
            metric_type_id,
            name,
            points,
        }
    }
}

/// Pearson correlation coefficient over two aligned value vectors
///
/// Returns `0.0` when the vectors differ in length, hold fewer than two
/// points, or either series has no variance (zero denominator) — never a
/// division error.
#[must_use]
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.len() < 2 {
        return 0.0;
    }

    let n = x.len() as f64;
    let sum_x: f64 = x.iter().sum();
    let sum_y: f64 = y.iter().sum();
    let sum_x_squared: f64 = x.iter().map(|v| v * v).sum();
    let sum_y_squared: f64 = y.iter().map(|v| v * v).sum();
    let sum_xy: f64 = x.iter().zip(y).map(|(a, b)| a * b).sum();

    let numerator = n.mul_add(sum_xy, -(sum_x * sum_y));
    let denominator = (n.mul_add(sum_x_squared, -sum_x.powi(2))
        * n.mul_add(sum_y_squared, -sum_y.powi(2)))
    .sqrt();

    if denominator == 0.0 {
        return 0.0;
    }

    numerator / denominator
}

/// Correlate every unordered pair of series over their common calendar days
///
/// Pairs are generated in the order the series are given (`i < j`), so ties
/// in the final ranking stay in generation order. A pair with fewer common
/// days than `config.min_common_points` is omitted as statistically
/// insufficient. Coefficients are rounded to 2 decimals before
/// classification, and results come back sorted descending by absolute
/// correlation.
#[must_use]
pub fn analyze_pairs(series: &[MetricSeries], config: &CorrelationConfig) -> Vec<CorrelationResult> {
    let mut pair_indices = Vec::new();
    for i in 0..series.len() {
        for j in (i + 1)..series.len() {
            pair_indices.push((i, j));
        }
    }

    // par collect preserves pair-generation order
    let mut results: Vec<CorrelationResult> = pair_indices
        .par_iter()
        .filter_map(|&(i, j)| correlate_pair(&series[i], &series[j], config))
        .collect();

    results.sort_by(|a, b| b.correlation.abs().total_cmp(&a.correlation.abs()));
    results
}

fn correlate_pair(
    first: &MetricSeries,
    second: &MetricSeries,
    config: &CorrelationConfig,
) -> Option<CorrelationResult> {
    // BTreeMap keys are ascending, so common days align in date order
    let mut x = Vec::new();
    let mut y = Vec::new();
    for (day, value) in &first.points {
        if let Some(other) = second.points.get(day) {
            x.push(*value);
            y.push(*other);
        }
    }

    if x.len() < config.min_common_points {
        return None;
    }

    let coefficient = round_to_hundredths(pearson(&x, &y));
    Some(CorrelationResult {
        metric1: first.name.clone(),
        metric2: second.name.clone(),
        correlation: coefficient,
        strength: config.classify(coefficient),
        data_points: x.len(),
    })
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
