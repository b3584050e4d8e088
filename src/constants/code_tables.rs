// ABOUTME: Static mappings from localized form labels to stable machine codes
// ABOUTME: Covers gender, activity level, medical conditions, allergies, and goals
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Label-to-code tables
//!
//! The form screens present localized labels; everything behind the form
//! (server payloads, business-rule matching, derived metrics) works on
//! stable ASCII codes. Tables are plain lookup data, fixed at compile time.
//! Several labels may collapse to one code: the screens have renamed options
//! over time and both the old and the new wording must keep resolving.

/// A fixed label-to-code table
pub type CodeTable = &'static [(&'static str, &'static str)];

/// Gender selection labels
pub static GENDER_LABEL_TO_CODE: CodeTable = &[
    ("Nam", "male"),
    ("Nam giới", "male"),
    ("Nữ", "female"),
    ("Nữ giới", "female"),
];

/// Activity level selection labels
pub static ACTIVITY_LABEL_TO_CODE: CodeTable = &[
    ("Ít vận động", "sedentary"),
    ("Ít vận động (ngồi nhiều)", "sedentary"),
    ("Vận động nhẹ (1–3 ngày/tuần)", "light"),
    ("Vận động vừa (3–5 ngày/tuần)", "moderate"),
    ("Vận động nhiều (6–7 ngày/tuần)", "high"),
    ("Vận động viên (tập 2 lần/ngày)", "athlete"),
];

/// Medical condition labels
pub static CONDITION_LABEL_TO_CODE: CodeTable = &[
    ("Tiểu đường", "diabetes"),
    ("Đái tháo đường", "diabetes"),
    ("Cao huyết áp", "hypertension"),
    ("Tăng huyết áp", "hypertension"),
    ("Bệnh phổi tắc nghẽn mạn tính", "copd"),
    ("COPD", "copd"),
    ("Bệnh tim mạch", "heart_disease"),
    ("Suy thận", "kidney_disease"),
    ("Gút (gout)", "gout"),
    ("Mỡ máu cao", "dyslipidemia"),
    ("Đau dạ dày", "gastritis"),
];

/// Food allergy labels
pub static ALLERGY_LABEL_TO_CODE: CodeTable = &[
    ("Đậu phộng (lạc)", "peanut"),
    ("Hải sản", "shellfish"),
    ("Tôm cua", "shellfish"),
    ("Sữa bò", "milk"),
    ("Trứng", "egg"),
    ("Gluten (lúa mì)", "gluten"),
    ("Đậu nành", "soy"),
    ("Mè (vừng)", "sesame"),
];

/// Nutrition goal labels
pub static GOAL_LABEL_TO_CODE: CodeTable = &[
    ("Giảm cân", "lose_weight"),
    ("Tăng cân", "gain_weight"),
    ("Tăng cơ", "gain_muscle"),
    ("Duy trì cân nặng", "maintain"),
    ("Giữ dáng", "maintain"),
    ("Ăn uống lành mạnh", "eat_healthy"),
    ("Kiểm soát đường huyết", "control_blood_sugar"),
];

/// Resolve a display label to its machine code
///
/// Pure lookup over a fixed table. An unmapped label yields `None`; callers
/// treat that as a data-entry problem to report, not a reason to crash.
#[must_use]
pub fn label_to_code(table: CodeTable, label: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == label)
        .map(|(_, code)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_label_resolves() {
        assert_eq!(
            label_to_code(ACTIVITY_LABEL_TO_CODE, "Vận động nhẹ (1–3 ngày/tuần)"),
            Some("light")
        );
    }

    #[test]
    fn test_unknown_label_is_none() {
        assert_eq!(label_to_code(GENDER_LABEL_TO_CODE, "Khác"), None);
    }

    #[test]
    fn test_condition_aliases_collapse() {
        let long_form = label_to_code(CONDITION_LABEL_TO_CODE, "Bệnh phổi tắc nghẽn mạn tính");
        let short_form = label_to_code(CONDITION_LABEL_TO_CODE, "COPD");
        assert_eq!(long_form, Some("copd"));
        assert_eq!(short_form, Some("copd"));
    }
}
