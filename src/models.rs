// ABOUTME: Domain models for athlete measurements and derived analytics results
// ABOUTME: Measurement, MetricType, PersonalRecord, ChartRow, CorrelationResult
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 La Forge Athlétique

use crate::errors::{AnalyticsError, AnalyticsResult};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Raw measurement value as stored
///
/// Most metrics are numeric; qualitative entries (e.g. menstrual cycle phase,
/// subjective notes captured as a value) are free text. Analytics stages only
/// ever operate on the numeric interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MeasurementValue {
    /// Numeric observation
    Number(f64),
    /// Textual observation
    Text(String),
}

impl MeasurementValue {
    /// Numeric interpretation, if the value parses to a finite float
    #[must_use]
    pub fn numeric(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(*n),
            Self::Number(_) => None,
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        }
    }

    /// Numeric interpretation with the analytics coercion rule: anything that
    /// does not parse to a finite number counts as zero
    #[must_use]
    pub fn numeric_or_zero(&self) -> f64 {
        self.numeric().unwrap_or(0.0)
    }
}

impl From<f64> for MeasurementValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for MeasurementValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// A single observation of one metric for one athlete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Unique identifier of this observation
    pub id: Uuid,
    /// Athlete the observation belongs to
    pub athlete_id: Uuid,
    /// Metric that was measured
    pub metric_type_id: Uuid,
    /// When the observation was taken; time-of-day is not semantically
    /// significant, alignment works on the UTC calendar day
    pub date: DateTime<Utc>,
    /// Observed value
    pub value: MeasurementValue,
    /// Display unit, carried through but never used in computation
    pub unit: String,
    /// Optional free-text note, ignored by analytics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// When the observation was recorded
    pub created_at: DateTime<Utc>,
}

impl Measurement {
    /// UTC calendar day of the observation; the alignment identity for every
    /// analytics stage
    #[must_use]
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }
}

/// Grouping tag for a metric, used by dashboards to organize metric pickers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetricCategory {
    /// Body composition and circumference measurements
    Anthropometry,
    /// Maximal strength tests (1RM, 3RM, ...)
    MaxStrength,
    /// Jump, sprint, and agility tests
    PowerSpeed,
    /// Aerobic capacity and threshold tests
    Endurance,
    /// Daily subjective wellness entries
    Wellness,
    /// Session and weekly load tracking
    TrainingLoad,
    /// Dietary intake tracking
    Nutrition,
}

/// Describes a kind of measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricType {
    /// Unique identifier of the metric
    pub id: Uuid,
    /// Display name, used as the series label in chart rows and correlations
    pub name: String,
    /// Grouping tag; not used in analytics computation
    pub category: MetricCategory,
    /// Display unit
    pub unit: String,
    /// Optional free-text description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Polarity: `true` when larger values are better (jump height),
    /// `false` when smaller values are better (sprint time)
    pub is_higher_better: bool,
}

/// Inclusive date range filter for store queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Range start, inclusive
    pub start: DateTime<Utc>,
    /// Range end, inclusive
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// Create a range, rejecting a start after the end
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> AnalyticsResult<Self> {
        if start > end {
            return Err(AnalyticsError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Whether the given instant falls inside the range
    #[must_use]
    pub fn contains(&self, date: DateTime<Utc>) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Best value ever recorded for one athlete/metric pair
///
/// Derived on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalRecord {
    /// Metric the record belongs to
    pub metric_type_id: Uuid,
    /// Metric display name
    pub metric_name: String,
    /// Best numeric value under the metric's polarity
    pub value: f64,
    /// Display unit
    pub unit: String,
    /// Date of the best measurement
    pub date: DateTime<Utc>,
    /// Polarity of the metric, so consumers can render direction
    pub is_higher_better: bool,
}

/// One date-keyed row of a multi-series chart
///
/// Serializes flat (`{"date": "2024-01-01", "Weight": 70.0, ...}`) the way
/// charting components consume it. A metric with no value on the row's day is
/// absent from the map; an explicit zero means the stored value coerced to
/// zero. Callers filtering "at least one populated field" rely on that
/// distinction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRow {
    /// ISO calendar-day key (`YYYY-MM-DD`)
    pub date: String,
    /// Metric display name to numeric value for this day
    #[serde(flatten)]
    pub values: BTreeMap<String, f64>,
}

impl ChartRow {
    /// Value of the named metric on this row's day, if present
    #[must_use]
    pub fn value(&self, metric_name: &str) -> Option<f64> {
        self.values.get(metric_name).copied()
    }
}

/// Categorical strength of a correlation coefficient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrelationStrength {
    /// |r| > 0.7
    Strong,
    /// 0.5 < |r| <= 0.7
    Moderate,
    /// |r| <= 0.5
    Weak,
}

impl fmt::Display for CorrelationStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Strong => "strong",
            Self::Moderate => "moderate",
            Self::Weak => "weak",
        };
        f.write_str(label)
    }
}

/// Pearson correlation between one unordered pair of metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationResult {
    /// Display name of the first metric of the pair
    pub metric1: String,
    /// Display name of the second metric of the pair
    pub metric2: String,
    /// Pearson coefficient over the common days, rounded to 2 decimals
    pub correlation: f64,
    /// Three-tier strength classification of the coefficient
    pub strength: CorrelationStrength,
    /// Number of common calendar days the coefficient was computed over
    pub data_points: usize,
}
