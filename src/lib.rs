// ABOUTME: Analytics core for athlete performance tracking: records, series, correlations
// ABOUTME: Pure computation stages over an injected measurement store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 La Forge Athlétique

#![deny(unsafe_code)]

//! # Forge Analytics
//!
//! Analytics core of the La Forge athlete performance-tracking platform.
//! Coaches record anthropometric, strength, power, endurance, and wellness
//! measurements; this crate turns those raw measurements into the derived
//! views the dashboards consume:
//!
//! - **Personal records**: the best value per athlete/metric pair, honoring
//!   each metric's polarity (larger-is-better vs smaller-is-better).
//! - **Chart series**: date-aligned rows ready for multi-series charting.
//! - **Correlations**: pairwise Pearson coefficients across selected metrics,
//!   aligned on common calendar days and ranked by strength.
//!
//! All derived values are recomputed on demand from the current measurement
//! set; nothing here is persisted or cached. Persistence lives behind the
//! [`store::MeasurementStore`] trait, injected into [`AnalyticsEngine`] so the
//! pipeline is unit-testable with in-memory fixtures.

/// Threshold and window configuration for the analytics stages
pub mod config;

/// Pearson correlation and pairwise metric analysis
pub mod correlation;

/// Store-injected facade exposing the public analytics operations
pub mod engine;

/// Error types and the crate-wide result alias
pub mod errors;

/// Display formatting helpers for values and calendar-day keys
pub mod format;

/// Domain models: measurements, metric types, and derived result types
pub mod models;

/// Personal record computation
pub mod records;

/// Chart-ready time-series assembly
pub mod series;

/// Measurement store contract and in-memory implementation
pub mod store;

pub use engine::AnalyticsEngine;
pub use errors::{AnalyticsError, AnalyticsResult};
