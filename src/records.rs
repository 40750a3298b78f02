// ABOUTME: Personal record computation over an athlete's full measurement set
// ABOUTME: One best value per metric, honoring larger-vs-smaller-is-better polarity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 La Forge Athlétique

use crate::models::{Measurement, MetricType, PersonalRecord};
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

/// Compute one personal record per metric with at least one numeric value
///
/// Measurements are partitioned by metric type; within each partition,
/// entries whose value does not parse to a finite number are discarded, then
/// the extremal entry is selected according to the metric's polarity.
/// Ties keep the first entry in input order — a tie is not an error.
///
/// A metric present in `measurements` but absent from `metric_types` cannot
/// be labeled and is skipped, not an error. Output order follows the first
/// appearance of each metric in `measurements`, so recomputation over an
/// unchanged set is idempotent.
#[must_use]
pub fn compute_records(
    measurements: &[Measurement],
    metric_types: &[MetricType],
) -> Vec<PersonalRecord> {
    let metadata: HashMap<Uuid, &MetricType> =
        metric_types.iter().map(|mt| (mt.id, mt)).collect();

    // Partition by metric, first-appearance order
    let mut order: Vec<Uuid> = Vec::new();
    let mut by_metric: HashMap<Uuid, Vec<&Measurement>> = HashMap::new();
    for measurement in measurements {
        by_metric
            .entry(measurement.metric_type_id)
            .or_insert_with(|| {
                order.push(measurement.metric_type_id);
                Vec::new()
            })
            .push(measurement);
    }

    let mut records = Vec::new();
    for metric_type_id in order {
        let Some(metric_type) = metadata.get(&metric_type_id) else {
            debug!(%metric_type_id, "no metric type metadata, skipping record");
            continue;
        };

        let Some(entries) = by_metric.get(&metric_type_id) else {
            continue;
        };

        let mut best: Option<(f64, &Measurement)> = None;
        for entry in entries {
            let Some(value) = entry.value.numeric() else {
                continue;
            };
            let replace = best.map_or(true, |(best_value, _)| {
                if metric_type.is_higher_better {
                    value > best_value
                } else {
                    value < best_value
                }
            });
            if replace {
                best = Some((value, entry));
            }
        }

        if let Some((value, entry)) = best {
            records.push(PersonalRecord {
                metric_type_id,
                metric_name: metric_type.name.clone(),
                value,
                unit: metric_type.unit.clone(),
                date: entry.date,
                is_higher_better: metric_type.is_higher_better,
            });
        }
    }

    records
}
