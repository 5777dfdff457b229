//! Variable data types shared by the parsers, the merge engine and the organizer.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::theme::constants::is_reset_value;
use crate::theme::namespace::detect_namespace;

/// A custom property declaration as found in the source (`--name: value`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawVariable {
    pub name: String,
    pub value: String,
}

impl RawVariable {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One input source worth of declarations, in document order
pub type DeclarationSequence = Vec<RawVariable>;

/// A declaration extracted from a `@theme` block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeVariable {
    /// Full name, e.g. `--color-brand-500`
    pub name: String,
    /// Declared value, e.g. `oklch(0.65 0.20 200)`
    pub value: String,
    /// Classified namespace, e.g. `color`
    pub namespace: String,
    /// True when the value is the `initial` reset marker
    pub is_reset: bool,
}

impl ThemeVariable {
    /// Create a theme variable, classifying its namespace and reset flag from the name and value
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        Self {
            namespace: detect_namespace(&name).to_string(),
            is_reset: is_reset_value(&value),
            name,
            value,
        }
    }

    pub fn to_raw(&self) -> RawVariable {
        RawVariable::new(self.name.clone(), self.value.clone())
    }
}

/// Coarse classification of a variable's effective value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VariableType {
    Color,
    Size,
    Font,
    Reference,
    Other,
}

impl VariableType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VariableType::Color => "color",
            VariableType::Size => "size",
            VariableType::Font => "font",
            VariableType::Reference => "reference",
            VariableType::Other => "other",
        }
    }
}

/// A variable ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizedVariable {
    /// Short name with the namespace prefix stripped (`brand-500`)
    pub name: String,
    /// Full declared name (`--color-brand-500`)
    pub var_name: String,
    /// Value as declared
    pub value: String,
    /// Terminal literal when `value` is a resolvable reference
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub resolved_value: Option<String>,
    #[serde(rename = "type")]
    pub variable_type: VariableType,
    pub namespace: String,
}

impl OrganizedVariable {
    /// The value used for previews: the resolved literal if there is one, else the declared value
    pub fn effective_value(&self) -> &str {
        self.resolved_value.as_deref().unwrap_or(&self.value)
    }
}

/// Organized variables grouped by namespace.
///
/// Namespaces keep the order in which they were first seen; serializes as a JSON object
/// keyed by namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizedVariables {
    groups: Vec<(String, Vec<OrganizedVariable>)>,
}

impl OrganizedVariables {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_groups(groups: Vec<(String, Vec<OrganizedVariable>)>) -> Self {
        Self { groups }
    }

    /// Variables of one namespace, if any were declared
    pub fn get(&self, namespace: &str) -> Option<&[OrganizedVariable]> {
        self.groups
            .iter()
            .find(|(name, _)| name == namespace)
            .map(|(_, variables)| variables.as_slice())
    }

    /// Namespace names in first-seen order
    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(name, _)| name.as_str())
    }

    /// Iterate `(namespace, variables)` pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[OrganizedVariable])> {
        self.groups
            .iter()
            .map(|(name, variables)| (name.as_str(), variables.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of namespaces
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Number of variables across all namespaces
    pub fn total(&self) -> usize {
        self.groups.iter().map(|(_, variables)| variables.len()).sum()
    }
}

impl Serialize for OrganizedVariables {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (namespace, variables) in &self.groups {
            map.serialize_entry(namespace, variables)?;
        }
        map.end()
    }
}
