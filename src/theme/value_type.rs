//! Value type inference
//!
//! Checks run in a fixed order and the first match wins, so a color literal that also
//! happens to contain a number with a unit is still reported as a color.

use std::sync::LazyLock;

use regex::Regex;

use crate::theme::constants::REFERENCE_TOKEN;
use crate::theme::variable::VariableType;

static COLOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)oklch|rgb|hsl|#[0-9a-f]{3,8}").expect("color pattern is valid")
});

static SIZE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(px|rem|em|vh|vw|%)").expect("size pattern is valid"));

static FONT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"["'].*["']"#).expect("font pattern is valid"));

/// Infer the type of an effective value (the resolved value when there is one)
pub fn detect_type(value: &str) -> VariableType {
    if COLOR_PATTERN.is_match(value) {
        return VariableType::Color;
    }

    if SIZE_PATTERN.is_match(value) {
        return VariableType::Size;
    }

    if FONT_PATTERN.is_match(value) {
        return VariableType::Font;
    }

    if value.contains(REFERENCE_TOKEN) {
        return VariableType::Reference;
    }

    VariableType::Other
}
