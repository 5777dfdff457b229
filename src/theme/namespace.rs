//! Namespace classification for custom property names.

use crate::theme::constants::{CUSTOM_PROPERTY_PREFIX, NAMESPACE_OTHER, is_known_namespace};

/// Detect the namespace of a custom property name
///
/// `--color-mint-500` → `color`, `--inset-shadow-sm` → `inset-shadow`, `--custom-value` → `other`.
/// The segment must be followed by another `-`, so `--color` alone is `other`.
pub fn detect_namespace(var_name: &str) -> &str {
    let Some(rest) = var_name.strip_prefix(CUSTOM_PROPERTY_PREFIX) else {
        return NAMESPACE_OTHER;
    };

    let Some(dash) = rest.find('-') else {
        return NAMESPACE_OTHER;
    };

    let segment = &rest[..dash];
    if segment.is_empty() {
        return NAMESPACE_OTHER;
    }

    if is_known_namespace(segment) {
        return segment;
    }

    // Hyphenated namespaces span two segments
    if let Some(second_dash) = rest[dash + 1..].find('-') {
        let segment = &rest[..dash + 1 + second_dash];
        if is_known_namespace(segment) {
            return segment;
        }
    }

    NAMESPACE_OTHER
}

/// Strip the namespace prefix to get the display name
///
/// `--color-mint-500` with namespace `color` → `mint-500`; when the prefix does not match,
/// only the leading `--` is removed.
pub fn extract_short_name<'a>(var_name: &'a str, namespace: &str) -> &'a str {
    let prefix = format!("{CUSTOM_PROPERTY_PREFIX}{namespace}-");
    if let Some(short) = var_name.strip_prefix(prefix.as_str()) {
        return short;
    }
    var_name
        .strip_prefix(CUSTOM_PROPERTY_PREFIX)
        .unwrap_or(var_name)
}
