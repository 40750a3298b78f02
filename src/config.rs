// ABOUTME: Threshold and window configuration for the analytics stages
// ABOUTME: Correlation strength tiers, minimum sample sizes, dashboard windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 La Forge Athlétique

use crate::models::CorrelationStrength;
use serde::{Deserialize, Serialize};

/// Configuration for the analytics engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AnalyticsConfig {
    /// Correlation analysis thresholds
    pub correlation: CorrelationConfig,
}

/// Thresholds for pairwise correlation analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationConfig {
    /// Minimum number of common calendar days required before a pair is
    /// reported; below this the pair is omitted as statistically insufficient
    pub min_common_points: usize,
    /// |r| above this is classified as a strong correlation
    pub strong_threshold: f64,
    /// |r| above this (and at most the strong threshold) is moderate
    pub moderate_threshold: f64,
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            min_common_points: 3,
            strong_threshold: 0.7,
            moderate_threshold: 0.5,
        }
    }
}

impl CorrelationConfig {
    /// Classify a coefficient into the three-tier strength scale
    #[must_use]
    pub fn classify(&self, coefficient: f64) -> CorrelationStrength {
        let magnitude = coefficient.abs();
        if magnitude > self.strong_threshold {
            CorrelationStrength::Strong
        } else if magnitude > self.moderate_threshold {
            CorrelationStrength::Moderate
        } else {
            CorrelationStrength::Weak
        }
    }
}
