//! End-to-end variable collection
//!
//! Reads the configured theme files, merges them with the base token file when a theme
//! imports it, appends `:root` variables from compiled CSS and organizes the result.

use log::{debug, info, warn};

use crate::config::ViewerConfig;
use crate::error::ViewerResult;
use crate::theme::reset_merge::merge_and_deduplicate;
use crate::theme::root_parser::RootVariableParser;
use crate::theme::theme_parser::parse_theme_file;
use crate::theme::{DeclarationSequence, OrganizedVariables, ThemeVariable, merge_with_reset, organize};

/// Theme variables gathered from every configured theme file
#[derive(Debug, Clone, Default)]
pub struct CollectedTheme {
    pub has_import: bool,
    pub has_reset: bool,
    /// User declarations from all theme files, in file then document order
    pub user_variables: Vec<ThemeVariable>,
    /// Variables after merging with the base token set
    pub variables: Vec<ThemeVariable>,
}

/// Parse the theme files and merge them with the base token set if one is imported
pub async fn collect_theme(config: &ViewerConfig) -> ViewerResult<CollectedTheme> {
    let mut collected = CollectedTheme::default();

    for path in &config.theme_files {
        let parsed = parse_theme_file(path, true).await?;
        collected.has_import |= parsed.has_import;
        collected.has_reset |= parsed.has_reset;
        collected.user_variables.extend(parsed.variables);
    }

    if !collected.has_import {
        collected.variables = merge_and_deduplicate(collected.user_variables.iter().cloned());
        return Ok(collected);
    }

    info!(
        "Detected @import \"tailwindcss\", loading default theme variables from {}",
        config.base_theme.display()
    );

    let base = match parse_theme_file(&config.base_theme, false).await {
        Ok(base) => {
            info!("Loaded {} default theme variables", base.variables.len());
            base.variables
        }
        Err(e) => {
            warn!("Could not load default theme: {}", e);
            Vec::new()
        }
    };

    if collected.has_reset {
        info!("Applying global reset (--*: initial)");
    }

    collected.variables = merge_with_reset(&base, &collected.user_variables, collected.has_reset);
    Ok(collected)
}

/// Collect `:root` variables from each compiled CSS file, skipping files that fail
pub async fn collect_compiled(config: &ViewerConfig) -> ViewerResult<Vec<DeclarationSequence>> {
    if config.compiled_css_files.is_empty() {
        return Ok(Vec::new());
    }

    let mut parser = RootVariableParser::new()?;
    let mut sequences = Vec::new();
    for path in &config.compiled_css_files {
        match parser.parse_file(path).await {
            Ok(variables) => sequences.push(variables),
            Err(e) => warn!("Skipping {}: {}", path.display(), e),
        }
    }

    Ok(sequences)
}

/// Build the organized variables for a config
pub async fn build_variables(config: &ViewerConfig) -> ViewerResult<OrganizedVariables> {
    let collected = collect_theme(config).await?;

    if collected.variables.is_empty() {
        warn!("No @theme variables found");
    }
    info!(
        "Found {} @theme variables (user: {})",
        collected.variables.len(),
        collected.user_variables.len()
    );

    let mut sequences: Vec<DeclarationSequence> = vec![
        collected
            .variables
            .iter()
            .map(ThemeVariable::to_raw)
            .collect(),
    ];
    sequences.extend(collect_compiled(config).await?);

    let organized = organize(&sequences);
    log_summary(&organized);
    Ok(organized)
}

fn log_summary(organized: &OrganizedVariables) {
    if organized.total() == 0 {
        warn!("No theme variables found");
        return;
    }

    info!("Extracted {} theme variables", organized.total());
    for (namespace, variables) in organized.iter() {
        info!("  - {} ({})", namespace, variables.len());
        for variable in variables {
            debug!(
                "    {} = {} [{}]",
                variable.var_name,
                variable.effective_value(),
                variable.variable_type.as_str()
            );
        }
    }
}
