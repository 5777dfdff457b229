//! Merging a base token set with user declarations.
//!
//! The user theme can reset parts of the base set before the two are merged:
//!
//! - `--*: initial` (blanket reset) drops the whole base set
//! - `--color-*: initial` drops every base variable starting with `--color`
//! - `--color-red-500: initial` drops exactly that base variable
//!
//! Reset markers themselves never reach the merged output.

use std::collections::HashMap;

use log::debug;

use crate::theme::constants::{WILDCARD_SUFFIX, is_reset_value};
use crate::theme::variable::ThemeVariable;

/// A reset directive collected from the user declarations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetPattern {
    /// Remove base variables whose name starts with the prefix
    Prefix(String),
    /// Remove the base variable with exactly this name
    Exact(String),
}

impl ResetPattern {
    /// Build a pattern from a reset declaration name
    pub fn from_name(name: &str) -> Self {
        match name.strip_suffix(WILDCARD_SUFFIX) {
            Some(prefix) => ResetPattern::Prefix(prefix.to_string()),
            None => ResetPattern::Exact(name.to_string()),
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            ResetPattern::Prefix(prefix) => name.starts_with(prefix.as_str()),
            ResetPattern::Exact(exact) => name == exact,
        }
    }
}

/// Collect reset patterns from every user variable whose value is `initial`
pub fn collect_reset_patterns(user: &[ThemeVariable]) -> Vec<ResetPattern> {
    user.iter()
        .filter(|variable| is_reset_value(&variable.value))
        .map(|variable| ResetPattern::from_name(&variable.name))
        .collect()
}

/// Remove base variables matched by any of the user's reset patterns
pub fn apply_resets(base: &[ThemeVariable], user: &[ThemeVariable]) -> Vec<ThemeVariable> {
    let patterns = collect_reset_patterns(user);
    if patterns.is_empty() {
        return base.to_vec();
    }

    debug!("Applying {} reset pattern(s) to {} base variables", patterns.len(), base.len());

    base.iter()
        .filter(|variable| !patterns.iter().any(|pattern| pattern.matches(&variable.name)))
        .cloned()
        .collect()
}

/// Merge variables by name, later entries overriding earlier ones
///
/// An overridden variable keeps the position of its first declaration. Entries whose
/// value is `initial` are dropped.
pub fn merge_and_deduplicate<I>(variables: I) -> Vec<ThemeVariable>
where
    I: IntoIterator<Item = ThemeVariable>,
{
    let mut merged: Vec<ThemeVariable> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for variable in variables {
        if is_reset_value(&variable.value) {
            continue;
        }

        match positions.get(&variable.name) {
            Some(&index) => merged[index] = variable,
            None => {
                positions.insert(variable.name.clone(), merged.len());
                merged.push(variable);
            }
        }
    }

    merged
}

/// Combine the base set with the user set, honoring blanket and selective resets
pub fn merge_with_reset(
    base: &[ThemeVariable],
    user: &[ThemeVariable],
    blanket_reset: bool,
) -> Vec<ThemeVariable> {
    let filtered_base = if blanket_reset {
        debug!("Blanket reset: discarding {} base variables", base.len());
        Vec::new()
    } else {
        apply_resets(base, user)
    };

    merge_and_deduplicate(filtered_base.into_iter().chain(user.iter().cloned()))
}
