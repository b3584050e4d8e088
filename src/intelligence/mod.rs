// ABOUTME: Derived health metrics computed on demand from the profile document
// ABOUTME: Pure calculators, never persisted, recomputed on every read
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Derived metrics intelligence
//!
//! Projections of the `basic` profile section (BMI, BMI category, BMR, TDEE)
//! used by both the live profile screens and analytics. Everything here is
//! deterministic and side-effect free.

/// BMI/BMR/TDEE calculation from the profile document
pub mod derived_metrics;

/// Formula coefficients and thresholds backed by published research
pub mod physiological_constants;

pub use derived_metrics::{compute_derived, BmiCategory, DerivedMetrics};
