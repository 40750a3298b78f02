// ABOUTME: Error types for the analytics core with structured context
// ABOUTME: Defines AnalyticsError and the AnalyticsResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 La Forge Athlétique

use chrono::{DateTime, Utc};
use std::error::Error;

/// Result alias used throughout the analytics core
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Common error types for analytics operations
///
/// Malformed measurement values, missing metric metadata, and statistically
/// insufficient data are *not* errors in this core: they degrade to coercion,
/// dropped entries, and omitted pairs respectively. Only failures of the
/// underlying measurement store and invalid caller input surface here.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    /// The measurement store failed to serve a query
    #[error("measurement store query failed: {context}")]
    Store {
        /// Description of the query that failed
        context: String,
        /// Underlying store error, when available
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },

    /// A date range whose start is after its end
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Requested range start
        start: DateTime<Utc>,
        /// Requested range end
        end: DateTime<Utc>,
    },
}

impl AnalyticsError {
    /// Create a store error with context only
    #[must_use]
    pub fn store(context: impl Into<String>) -> Self {
        Self::Store {
            context: context.into(),
            source: None,
        }
    }

    /// Create a store error wrapping an underlying cause
    #[must_use]
    pub fn store_with_source(
        context: impl Into<String>,
        source: impl Error + Send + Sync + 'static,
    ) -> Self {
        Self::Store {
            context: context.into(),
            source: Some(Box::new(source)),
        }
    }
}
