//! Compiled CSS parser using tree-sitter-css
//!
//! Build output puts theme variables into `:root` rule sets, usually nested in a layer
//! (`@layer theme { :root, :host { --color-red-500: …; } }`). This walks the syntax tree
//! for those rule sets and collects their custom property declarations.

use std::path::Path;

use log::{info, warn};
use tree_sitter::{Node, Parser, Tree};

use crate::error::{IoContext, ViewerError, ViewerResult};
use crate::theme::constants::{CUSTOM_PROPERTY_PREFIX, ROOT_SELECTOR, is_reset_value};
use crate::theme::variable::{DeclarationSequence, RawVariable};

const NODE_RULE_SET: &str = "rule_set";
const NODE_SELECTORS: &str = "selectors";
const NODE_DECLARATION: &str = "declaration";

/// Parser for custom properties declared in `:root` rule sets
pub struct RootVariableParser {
    parser: Parser,
}

impl RootVariableParser {
    /// Create a new parser
    pub fn new() -> ViewerResult<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_css::LANGUAGE.into())
            .map_err(|e| ViewerError::TreeSitterLanguage {
                message: e.to_string(),
            })?;

        Ok(Self { parser })
    }

    /// Parse CSS content and return the syntax tree
    pub fn parse_tree(&mut self, content: &str) -> Option<Tree> {
        self.parser.parse(content, None)
    }

    /// Collect `:root` custom properties in document order
    ///
    /// Returns `None` only if tree-sitter produced no tree at all; syntax errors elsewhere
    /// in the stylesheet do not stop extraction.
    pub fn parse_source(&mut self, content: &str) -> Option<DeclarationSequence> {
        let tree = self.parse_tree(content)?;
        let mut variables = Vec::new();
        collect_root_variables(tree.root_node(), content, false, &mut variables);
        Some(variables)
    }

    /// Read a compiled CSS file and collect its `:root` custom properties
    pub async fn parse_file(&mut self, path: &Path) -> ViewerResult<DeclarationSequence> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_io_context(&format!("Failed to read CSS file {}", path.display()))?;

        let variables = self.parse_source(&content).ok_or_else(|| ViewerError::Parse {
            file: path.to_path_buf(),
            message: "tree-sitter returned no syntax tree".to_string(),
        })?;

        if variables.is_empty() {
            warn!("No :root variables found in {}", path.display());
        } else {
            info!("Found {} :root variable(s) in {}", variables.len(), path.display());
        }

        Ok(variables)
    }
}

/// Recursively collect declarations that sit inside a `:root` rule set
fn collect_root_variables(
    node: Node,
    content: &str,
    in_root: bool,
    variables: &mut Vec<RawVariable>,
) {
    if node.kind() == NODE_DECLARATION {
        if in_root {
            if let Some(variable) = declaration_to_variable(node, content) {
                variables.push(variable);
            }
        }
        return;
    }

    let in_root = in_root || (node.kind() == NODE_RULE_SET && selects_root(node, content));

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_root_variables(child, content, in_root, variables);
    }
}

fn selects_root(rule_set: Node, content: &str) -> bool {
    let mut cursor = rule_set.walk();
    let found = rule_set
        .children(&mut cursor)
        .find(|child| child.kind() == NODE_SELECTORS)
        .is_some_and(|selectors| node_text(selectors, content).contains(ROOT_SELECTOR));
    found
}

/// Split a declaration's source text into name and value
fn declaration_to_variable(node: Node, content: &str) -> Option<RawVariable> {
    let text = node_text(node, content);
    let (property, value) = text.split_once(':')?;
    let property = property.trim();
    if !property.starts_with(CUSTOM_PROPERTY_PREFIX) {
        return None;
    }

    let value = value.trim().trim_end_matches(';').trim_end();
    if is_reset_value(value) {
        return None;
    }

    Some(RawVariable::new(property, value))
}

/// Get text content of a node
fn node_text<'a>(node: Node, content: &'a str) -> &'a str {
    &content[node.start_byte()..node.end_byte()]
}
