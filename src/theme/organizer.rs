//! Organizing variables for display
//!
//! Groups declarations by namespace, resolves references, infers types and applies the
//! per-namespace ordering.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::theme::constants::{NAMESPACE_COLOR, NAMESPACE_SPACING};
use crate::theme::namespace::{detect_namespace, extract_short_name};
use crate::theme::reference_resolver::{contains_reference, resolve_reference};
use crate::theme::value_type::detect_type;
use crate::theme::variable::{
    DeclarationSequence, OrganizedVariable, OrganizedVariables, RawVariable,
};

static FIRST_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("number pattern is valid"));

static TRAILING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-(\d+)$").expect("trailing number pattern is valid"));

/// How a namespace group is ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// By the first integer in the short name (`4`, `8`, `20`)
    Numeric,
    /// By family in first-seen order, then by trailing integer within a family
    ColorFamily,
    /// Lexicographic by short name
    Alphabetical,
}

/// Namespaces with a non-default ordering
const SORT_ORDERS: &[(&str, SortOrder)] = &[
    (NAMESPACE_SPACING, SortOrder::Numeric),
    (NAMESPACE_COLOR, SortOrder::ColorFamily),
];

/// Look up the ordering of a namespace
pub fn sort_order_for(namespace: &str) -> SortOrder {
    SORT_ORDERS
        .iter()
        .find(|(name, _)| *name == namespace)
        .map(|(_, order)| *order)
        .unwrap_or(SortOrder::Alphabetical)
}

/// First integer in a name, 0 when there is none
fn first_number(name: &str) -> u64 {
    FIRST_NUMBER
        .find(name)
        .and_then(|number| number.as_str().parse().ok())
        .unwrap_or(0)
}

/// Color family of a short name: `red-500` → `red`, `brand` → `brand`
pub fn color_family(name: &str) -> &str {
    match TRAILING_NUMBER.find(name) {
        Some(suffix) => &name[..suffix.start()],
        None => name,
    }
}

/// Trailing shade of a short name: `red-500` → 500, 0 when there is none
fn trailing_number(name: &str) -> u64 {
    TRAILING_NUMBER
        .captures(name)
        .and_then(|captures| captures.get(1))
        .and_then(|number| number.as_str().parse().ok())
        .unwrap_or(0)
}

/// Sort one namespace group in place
pub fn sort_variables(variables: &mut [OrganizedVariable], namespace: &str) {
    match sort_order_for(namespace) {
        SortOrder::Numeric => {
            variables.sort_by_key(|variable| first_number(&variable.name));
        }
        SortOrder::ColorFamily => sort_by_color_family(variables),
        SortOrder::Alphabetical => {
            variables.sort_by(|a, b| a.name.cmp(&b.name));
        }
    }
}

/// Families never move relative to each other; only members of one family are reordered
fn sort_by_color_family(variables: &mut [OrganizedVariable]) {
    let mut family_rank: HashMap<String, usize> = HashMap::new();
    for variable in variables.iter() {
        let family = color_family(&variable.name);
        if !family_rank.contains_key(family) {
            family_rank.insert(family.to_string(), family_rank.len());
        }
    }

    variables.sort_by(|a, b| {
        let rank_a = family_rank.get(color_family(&a.name));
        let rank_b = family_rank.get(color_family(&b.name));
        match rank_a.cmp(&rank_b) {
            Ordering::Equal => trailing_number(&a.name).cmp(&trailing_number(&b.name)),
            other => other,
        }
    });
}

/// Build one organized entry, resolving references against the lookup
fn organize_variable(
    variable: &RawVariable,
    lookup: &HashMap<String, String>,
) -> OrganizedVariable {
    let namespace = detect_namespace(&variable.name);
    let short_name = extract_short_name(&variable.name, namespace);

    let resolved_value = if contains_reference(&variable.value) {
        resolve_reference(&variable.value, lookup).into_resolved()
    } else {
        None
    };

    let variable_type = detect_type(resolved_value.as_deref().unwrap_or(&variable.value));

    OrganizedVariable {
        name: short_name.to_string(),
        var_name: variable.name.clone(),
        value: variable.value.clone(),
        resolved_value,
        variable_type,
        namespace: namespace.to_string(),
    }
}

/// Organize declarations from one or more sources
///
/// The reference lookup is built from every source before anything is resolved, so a
/// variable can reference one declared later or in another source. Re-declarations
/// replace the earlier entry in place.
pub fn organize(sequences: &[DeclarationSequence]) -> OrganizedVariables {
    let mut lookup: HashMap<String, String> = HashMap::new();
    for variable in sequences.iter().flatten() {
        lookup.insert(variable.name.clone(), variable.value.clone());
    }

    let mut groups: Vec<(String, Vec<OrganizedVariable>)> = Vec::new();
    let mut group_index: HashMap<String, usize> = HashMap::new();
    let mut entry_index: HashMap<String, usize> = HashMap::new();

    for variable in sequences.iter().flatten() {
        let organized = organize_variable(variable, &lookup);

        let group = match group_index.get(&organized.namespace) {
            Some(&index) => index,
            None => {
                group_index.insert(organized.namespace.clone(), groups.len());
                groups.push((organized.namespace.clone(), Vec::new()));
                groups.len() - 1
            }
        };

        let entries = &mut groups[group].1;
        match entry_index.get(&organized.var_name) {
            Some(&index) => entries[index] = organized,
            None => {
                entry_index.insert(organized.var_name.clone(), entries.len());
                entries.push(organized);
            }
        }
    }

    for (namespace, variables) in groups.iter_mut() {
        sort_variables(variables, namespace);
    }

    OrganizedVariables::from_groups(groups)
}
