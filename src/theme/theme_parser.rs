//! `@theme` block parser
//!
//! Extracts custom property declarations from `@theme` at-rules in a source stylesheet.
//! This is a scanner, not a CSS parser: it understands comments, strings, parenthesised
//! groups and nested blocks well enough to find declarations, and ignores everything else.
//!
//! Theme sources use syntax such as `--*: initial` and `--color-*: initial` that a
//! grammar-based parser reports as errors, which is why declarations are split by hand
//! here instead of going through tree-sitter (see [`crate::theme::root_parser`] for the
//! compiled-CSS side).

use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Serialize;

use crate::error::{IoContext, ViewerError, ViewerResult};
use crate::theme::constants::{
    AT_RULE_IMPORT, AT_RULE_THEME, BASE_THEME_IMPORT, BLANKET_RESET_NAME, CUSTOM_PROPERTY_PREFIX,
    is_reset_value,
};
use crate::theme::variable::ThemeVariable;

/// Result of parsing one theme source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedTheme {
    /// Source file, when parsed from disk
    pub file_path: Option<PathBuf>,
    /// `--*: initial` appeared inside a theme block
    pub has_reset: bool,
    /// `@import "tailwindcss"` appeared (only checked on request)
    pub has_import: bool,
    /// Declarations in document order, reset markers other than `--*` included
    pub variables: Vec<ThemeVariable>,
}

/// Parse theme declarations from CSS source text
pub fn parse_theme_source(source: &str, check_import: bool) -> ParsedTheme {
    let stripped = strip_comments(source);
    let mut scanner = ThemeScanner {
        check_import,
        result: ParsedTheme::default(),
    };
    scanner.walk_statements(&stripped);
    scanner.result
}

/// Read a file and parse its theme declarations
pub async fn parse_theme_file(path: &Path, check_import: bool) -> ViewerResult<ParsedTheme> {
    if !tokio::fs::try_exists(path).await.unwrap_or(false) {
        return Err(ViewerError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let source = tokio::fs::read_to_string(path)
        .await
        .with_io_context(&format!("Failed to read theme file {}", path.display()))?;

    let mut parsed = parse_theme_source(&source, check_import);
    parsed.file_path = Some(path.to_path_buf());

    info!(
        "Parsed {} theme variable(s) from {} (import: {}, reset: {})",
        parsed.variables.len(),
        path.display(),
        parsed.has_import,
        parsed.has_reset
    );

    Ok(parsed)
}

struct ThemeScanner {
    check_import: bool,
    result: ParsedTheme,
}

impl ThemeScanner {
    /// Walk rules and at-rules, looking for imports and theme blocks at any depth
    fn walk_statements(&mut self, text: &str) {
        let mut pos = 0;
        while pos < text.len() {
            let Some((stop, delimiter)) = find_top_level(text, pos, b";{}") else {
                break;
            };
            let prelude = text[pos..stop].trim();

            match delimiter {
                b'{' => {
                    let end = find_block_end(text, stop);
                    self.visit_block(prelude, &text[stop + 1..end]);
                    pos = end + 1;
                }
                b';' => {
                    self.visit_statement(prelude);
                    pos = stop + 1;
                }
                _ => {
                    // Stray closing brace
                    pos = stop + 1;
                }
            }
        }

        let rest = text.get(pos..).unwrap_or_default().trim();
        if !rest.is_empty() {
            self.visit_statement(rest);
        }
    }

    fn visit_statement(&mut self, statement: &str) {
        if !self.check_import {
            return;
        }

        if let Some((name, params)) = split_at_rule(statement) {
            if name == AT_RULE_IMPORT && params.replace(['"', '\''], "").trim() == BASE_THEME_IMPORT {
                debug!("Found base theme import: {}", statement);
                self.result.has_import = true;
            }
        }
    }

    fn visit_block(&mut self, prelude: &str, body: &str) {
        match split_at_rule(prelude) {
            Some((name, _)) if name == AT_RULE_THEME => self.collect_declarations(body),
            _ => self.walk_statements(body),
        }
    }

    /// Collect every declaration inside a theme block, including nested blocks
    fn collect_declarations(&mut self, text: &str) {
        let mut pos = 0;
        while pos < text.len() {
            let Some((stop, delimiter)) = find_top_level(text, pos, b";{}") else {
                break;
            };

            match delimiter {
                b'{' => {
                    let end = find_block_end(text, stop);
                    self.collect_declarations(&text[stop + 1..end]);
                    pos = end + 1;
                }
                _ => {
                    self.visit_declaration(&text[pos..stop]);
                    pos = stop + 1;
                }
            }
        }

        if let Some(rest) = text.get(pos..) {
            self.visit_declaration(rest);
        }
    }

    fn visit_declaration(&mut self, declaration: &str) {
        let Some((property, value)) = declaration.split_once(':') else {
            return;
        };
        let property = property.trim();
        let value = strip_important(value.trim());

        if property == BLANKET_RESET_NAME && is_reset_value(value) {
            self.result.has_reset = true;
            return;
        }

        if property.starts_with(CUSTOM_PROPERTY_PREFIX) {
            self.result
                .variables
                .push(ThemeVariable::new(property, value));
        }
    }
}

/// Split `@name params` into its name and params
fn split_at_rule(prelude: &str) -> Option<(&str, &str)> {
    let rest = prelude.strip_prefix('@')?;
    let name_end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        .unwrap_or(rest.len());
    Some((&rest[..name_end], rest[name_end..].trim()))
}

fn strip_important(value: &str) -> &str {
    let lower = value.to_ascii_lowercase();
    match lower.strip_suffix("!important") {
        Some(kept) => value[..kept.len()].trim_end(),
        None => value,
    }
}

/// Replace `/* … */` comments outside strings with a space
pub(crate) fn strip_comments(source: &str) -> String {
    let mut output = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    let mut quote: Option<char> = None;

    while let Some(c) = chars.next() {
        if let Some(open) = quote {
            output.push(c);
            if c == '\\' {
                if let Some(escaped) = chars.next() {
                    output.push(escaped);
                }
            } else if c == open {
                quote = None;
            }
            continue;
        }

        if c == '/' && chars.peek() == Some(&'*') {
            chars.next();
            let mut previous = '\0';
            for inner in chars.by_ref() {
                if previous == '*' && inner == '/' {
                    break;
                }
                previous = inner;
            }
            output.push(' ');
            continue;
        }

        if c == '"' || c == '\'' {
            quote = Some(c);
        }
        output.push(c);
    }

    output
}

/// Find the next delimiter from `stops` outside strings and parentheses
///
/// All delimiters are ASCII, so the returned index is always a char boundary.
fn find_top_level(text: &str, start: usize, stops: &[u8]) -> Option<(usize, u8)> {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut quote: Option<u8> = None;
    let mut i = start;

    while i < bytes.len() {
        let b = bytes[i];
        if let Some(open) = quote {
            if b == b'\\' {
                i += 1;
            } else if b == open {
                quote = None;
            }
        } else {
            match b {
                b'"' | b'\'' => quote = Some(b),
                b'(' | b'[' => depth += 1,
                b')' | b']' => depth = depth.saturating_sub(1),
                _ if depth == 0 && stops.contains(&b) => return Some((i, b)),
                _ => {}
            }
        }
        i += 1;
    }

    None
}

/// Index of the `}` closing the block opened at `open`, or the end of text if unterminated
fn find_block_end(text: &str, open: usize) -> usize {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut quote: Option<u8> = None;
    let mut i = open;

    while i < bytes.len() {
        let b = bytes[i];
        if let Some(q) = quote {
            if b == b'\\' {
                i += 1;
            } else if b == q {
                quote = None;
            }
        } else {
            match b {
                b'"' | b'\'' => quote = Some(b),
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        return i;
                    }
                }
                _ => {}
            }
        }
        i += 1;
    }

    text.len()
}
