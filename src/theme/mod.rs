//! Theme variable extraction and organization
//!
//! Turns custom property declarations into namespaced, reference-resolved, sorted groups:
//! - `theme_parser` reads `@theme` blocks from source stylesheets
//! - `root_parser` reads `:root` blocks from compiled CSS (tree-sitter-css)
//! - `reset_merge` merges a base token set with user declarations
//! - `organizer` classifies, resolves and orders the final set

pub mod constants;
pub mod namespace;
pub mod organizer;
pub mod reference_resolver;
pub mod reset_merge;
pub mod root_parser;
pub mod theme_parser;
pub mod value_type;
pub mod variable;

pub use organizer::organize;
pub use reset_merge::merge_with_reset;
pub use variable::{
    DeclarationSequence, OrganizedVariable, OrganizedVariables, RawVariable, ThemeVariable,
    VariableType,
};

#[cfg(test)]
mod organizer_tests;
