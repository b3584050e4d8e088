// ABOUTME: Open-schema profile document and its deep-merge update protocol
// ABOUTME: Nested mappings merge recursively, every other value replaces wholesale
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Profile document model
//!
//! The health profile is an open, additively-extensible nested mapping. The
//! form flow writes it one section at a time (`basic`, `conditions`,
//! `allergies`, `goals`, plus whatever later form pages introduce), so the
//! document is modeled as a recursive JSON mapping rather than a closed
//! struct. New sections must not require a schema change here.

use serde_json::{Map, Value};

/// The nested health-profile data held by the draft store
///
/// Keys are logical section names; values are arbitrary JSON. Typical shape:
///
/// ```json
/// {
///   "basic": {"age": 30, "sex": "female", "weight_kg": 60, "height_cm": 160,
///             "activity_level": "sedentary"},
///   "conditions": ["diabetes", "hypertension"],
///   "allergies": ["peanut"],
///   "goals": ["lose_weight"]
/// }
/// ```
pub type ProfileDocument = Map<String, Value>;

/// Deep-merge `patch` into `base`
///
/// Recurses wherever both sides hold a mapping. Any non-mapping value in the
/// patch (scalar, array, null) replaces the base value wholesale — arrays are
/// never concatenated or unioned, so re-submitting a multi-select section
/// replaces the earlier selection. Holds for arbitrary nesting depth.
pub fn deep_merge(base: &mut Value, patch: &Value) {
    match (base, patch) {
        (Value::Object(base_map), Value::Object(patch_map)) => {
            for (key, patch_value) in patch_map {
                match base_map.get_mut(key) {
                    Some(base_value) => deep_merge(base_value, patch_value),
                    None => {
                        base_map.insert(key.clone(), patch_value.clone());
                    }
                }
            }
        }
        (base_slot, patch_value) => {
            *base_slot = patch_value.clone();
        }
    }
}

/// Merge two profile documents, returning the combined result
///
/// `base` entries survive unless the patch overrides them; patch entries win
/// per the [`deep_merge`] rules. `merge_documents(doc, empty)` and
/// `merge_documents(empty, doc)` both yield `doc` unchanged.
#[must_use]
pub fn merge_documents(base: &ProfileDocument, patch: &ProfileDocument) -> ProfileDocument {
    let mut merged = Value::Object(base.clone());
    deep_merge(&mut merged, &Value::Object(patch.clone()));
    match merged {
        Value::Object(map) => map,
        // deep_merge of two objects always yields an object
        _ => Map::new(),
    }
}
