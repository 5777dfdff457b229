//! Reference resolution for custom property values.
//!
//! Follows `var(--name)` chains through a name → value lookup until a value without a
//! reference is reached. Resolution never fails loudly:
//!
//! - **Dangling**: the referenced name is not declared (or declared empty)
//! - **Cyclic**: the referenced name was already visited on this walk
//! - **Too deep**: more hops than the depth budget allows
//!
//! all end as [`ReferenceResolution::Unresolved`]. Only the first `var()` of a value is
//! followed and any fallback argument is ignored.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::theme::constants::{DEFAULT_MAX_REFERENCE_DEPTH, REFERENCE_TOKEN};

static VAR_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"var\((--[^,)]+)").expect("var() pattern is valid"));

/// Outcome of resolving a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceResolution {
    /// The value does not contain a `var(--…)` reference
    NotReference,
    /// The chain is dangling, cyclic or deeper than the budget
    Unresolved,
    /// The chain ends in this literal value
    Resolved(String),
}

impl ReferenceResolution {
    /// The resolved literal, if any
    pub fn into_resolved(self) -> Option<String> {
        match self {
            ReferenceResolution::Resolved(value) => Some(value),
            _ => None,
        }
    }
}

/// Returns true if the value contains a reference token
pub fn contains_reference(value: &str) -> bool {
    value.contains(REFERENCE_TOKEN)
}

/// Extract the referenced name from the first `var(--name` in the value
///
/// `var(--color-blue-500)` → `--color-blue-500`, `var(--a, red)` → `--a`
pub fn extract_var_reference(value: &str) -> Option<&str> {
    VAR_REFERENCE
        .captures(value)
        .and_then(|captures| captures.get(1))
        .map(|name| name.as_str().trim_end())
}

/// Resolve a value against the lookup with the default depth budget
pub fn resolve_reference(value: &str, lookup: &HashMap<String, String>) -> ReferenceResolution {
    let mut visited = HashSet::new();
    resolve_reference_with(value, lookup, &mut visited, DEFAULT_MAX_REFERENCE_DEPTH)
}

/// Resolve a value, tracking visited names and the remaining hop budget
pub fn resolve_reference_with(
    value: &str,
    lookup: &HashMap<String, String>,
    visited: &mut HashSet<String>,
    depth: usize,
) -> ReferenceResolution {
    let Some(ref_name) = extract_var_reference(value) else {
        return ReferenceResolution::NotReference;
    };

    if depth == 0 {
        return ReferenceResolution::Unresolved;
    }

    // Cycle back to a name seen earlier on this walk
    if !visited.insert(ref_name.to_string()) {
        return ReferenceResolution::Unresolved;
    }

    let ref_value = match lookup.get(ref_name) {
        Some(ref_value) if !ref_value.is_empty() => ref_value,
        _ => return ReferenceResolution::Unresolved,
    };

    if contains_reference(ref_value) {
        return match resolve_reference_with(ref_value, lookup, visited, depth - 1) {
            // `var(--` without a parseable name still counts as a reference
            ReferenceResolution::NotReference => ReferenceResolution::Unresolved,
            other => other,
        };
    }

    ReferenceResolution::Resolved(ref_value.clone())
}
