// ABOUTME: BMI, BMR, and TDEE projection of the basic profile section
// ABOUTME: Degrades to absent fields on missing or unusable inputs, never errors
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Derived metrics calculator
//!
//! Computes BMI, BMI category, BMR (Mifflin-St Jeor), and TDEE from the
//! `basic` section of a profile document. The profile is user-entered form
//! data, so inputs can be missing, zero, or the wrong JSON type at any time
//! during the form flow; each metric independently degrades to `None`
//! instead of failing. The presentation layer owns deciding what an absent
//! metric looks like.

use super::physiological_constants::{activity_factors, bmi, bmr};
use crate::models::ProfileDocument;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// BMI classification band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI in [18.5, 23)
    Normal,
    /// BMI in [23, 25)
    Overweight,
    /// BMI of 25 or more
    Obese,
}

/// Derived metrics projection of a profile document
///
/// Never persisted; recomputed from the current document on every read so
/// the live display and analytics always agree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DerivedMetrics {
    /// Body mass index, rounded to one decimal place
    pub bmi: Option<f64>,
    /// Classification band of the rounded BMI
    pub bmi_category: Option<BmiCategory>,
    /// Basal metabolic rate in kcal/day, rounded to the nearest integer
    pub bmr: Option<i64>,
    /// Total daily energy expenditure in kcal/day
    pub tdee: Option<i64>,
}

/// Compute all derived metrics from the current profile document
///
/// Pure and deterministic: identical input yields identical output on every
/// call.
#[must_use]
pub fn compute_derived(profile: &ProfileDocument) -> DerivedMetrics {
    let basic = profile.get("basic").and_then(Value::as_object);

    let weight_kg = basic.and_then(|b| positive_number(b.get("weight_kg")));
    let height_cm = basic.and_then(|b| positive_number(b.get("height_cm")));
    let age = basic.and_then(|b| positive_number(b.get("age")));
    let sex = basic.and_then(|b| b.get("sex")).and_then(Value::as_str);
    let activity_level = basic
        .and_then(|b| b.get("activity_level"))
        .and_then(Value::as_str);

    let bmi_value = match (weight_kg, height_cm) {
        (Some(w), Some(h)) => {
            let height_m = h / 100.0;
            Some(round_to_tenth(w / (height_m * height_m)))
        }
        _ => None,
    };

    let bmi_category = bmi_value.map(classify_bmi);

    let bmr_value = match (weight_kg, height_cm, age) {
        (Some(w), Some(h), Some(a)) => {
            // Male constant is the fallback for any sex value other than "female"
            let sex_constant = if sex == Some("female") {
                bmr::FEMALE_CONSTANT
            } else {
                bmr::MALE_CONSTANT
            };
            let kcal =
                bmr::WEIGHT_COEF * w + bmr::HEIGHT_COEF * h - bmr::AGE_COEF * a + sex_constant;
            Some(round_to_integer(kcal))
        }
        _ => None,
    };

    let tdee_value = bmr_value.map(|value| {
        let factor = activity_factor(activity_level);
        round_to_integer(to_f64(value) * factor)
    });

    DerivedMetrics {
        bmi: bmi_value,
        bmi_category,
        bmr: bmr_value,
        tdee: tdee_value,
    }
}

/// Classify a (rounded) BMI value into its band
///
/// Bands are half-open with inclusive lower bounds, so 18.5 is normal,
/// 23.0 is overweight, and 25.0 is obese.
#[must_use]
pub fn classify_bmi(value: f64) -> BmiCategory {
    if value < bmi::UNDERWEIGHT_MAX {
        BmiCategory::Underweight
    } else if value < bmi::NORMAL_MAX {
        BmiCategory::Normal
    } else if value < bmi::OVERWEIGHT_MAX {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// TDEE multiplier for an activity level code
///
/// Unknown or missing levels use the moderate factor, matching the form's
/// pre-selected default.
#[must_use]
pub fn activity_factor(level: Option<&str>) -> f64 {
    match level {
        Some("sedentary") => activity_factors::SEDENTARY,
        Some("light") => activity_factors::LIGHT,
        Some("moderate") => activity_factors::MODERATE,
        Some("high") => activity_factors::HIGH,
        Some("athlete") => activity_factors::ATHLETE,
        _ => activity_factors::MODERATE,
    }
}

/// Read a field as a usable positive number
///
/// Missing fields, non-numeric JSON values, and zero all count as unusable.
fn positive_number(value: Option<&Value>) -> Option<f64> {
    value
        .and_then(Value::as_f64)
        .filter(|n| n.is_finite() && *n > 0.0)
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[allow(clippy::cast_possible_truncation)]
fn round_to_integer(value: f64) -> i64 {
    value.round() as i64
}

#[allow(clippy::cast_precision_loss)]
fn to_f64(value: i64) -> f64 {
    value as f64
}
