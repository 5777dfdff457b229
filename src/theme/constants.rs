//! Theme variable constants
//!
//! The closed set of known namespaces and the reset-marker conventions live here so the
//! classifier, the reset/merge engine and the parsers all agree on them.

/// Namespaces recognised by the classifier, in the order they are documented.
/// Anything else falls back to [`NAMESPACE_OTHER`].
pub const KNOWN_NAMESPACES: &[&str] = &[
    "color",
    "font",
    "spacing",
    "breakpoint",
    "text",
    "radius",
    "shadow",
    "animate",
    "ease",
    "inset-shadow",
    "drop-shadow",
];

/// Fallback namespace for unknown or missing prefixes
pub const NAMESPACE_OTHER: &str = "other";

/// Namespace sorted numerically (`--spacing-4`, `--spacing-20`)
pub const NAMESPACE_SPACING: &str = "spacing";
/// Namespace sorted by color family then shade
pub const NAMESPACE_COLOR: &str = "color";

/// Prefix every custom property name starts with
pub const CUSTOM_PROPERTY_PREFIX: &str = "--";

/// Value marking a variable (or a wildcard group) as reset
pub const RESET_VALUE: &str = "initial";

/// Property name that, with [`RESET_VALUE`], discards the whole base theme (`--*: initial`)
pub const BLANKET_RESET_NAME: &str = "--*";

/// Suffix turning a reset pattern into a prefix match (`--color-*: initial`)
pub const WILDCARD_SUFFIX: &str = "-*";

/// Substring that marks a value as a variable reference
pub const REFERENCE_TOKEN: &str = "var(--";

/// Maximum number of reference hops followed before giving up
pub const DEFAULT_MAX_REFERENCE_DEPTH: usize = 10;

/// At-rule holding theme declarations
pub const AT_RULE_THEME: &str = "theme";
/// At-rule pulling in another stylesheet
pub const AT_RULE_IMPORT: &str = "import";
/// Import target that brings in the default token set
pub const BASE_THEME_IMPORT: &str = "tailwindcss";

/// Selector fragment marking compiled custom property blocks
pub const ROOT_SELECTOR: &str = ":root";

/// Returns true if the namespace is part of [`KNOWN_NAMESPACES`]
pub fn is_known_namespace(segment: &str) -> bool {
    KNOWN_NAMESPACES.contains(&segment)
}

/// Returns true if a declared value is the reset marker
pub fn is_reset_value(value: &str) -> bool {
    value.trim() == RESET_VALUE
}
