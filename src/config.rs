//! Command line configuration

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::error::{ViewerError, ViewerResult};

/// Default location of the base token file, relative to the working directory
pub const DEFAULT_BASE_THEME: &str = "node_modules/tailwindcss/theme.css";
/// Default directory holding the built preview UI
pub const DEFAULT_UI_DIR: &str = "dist/ui";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Parser, Debug, Clone)]
#[command(name = "theme_variables_viewer")]
#[command(version)]
#[command(about = "View Tailwind CSS v4 theme variables in your browser")]
#[command(after_help = "Examples:
  theme_variables_viewer -c ./src/app.css
  theme_variables_viewer -c ./theme.css -p 3001
  theme_variables_viewer -c ./base.css -c ./colors.css --css ./dist/output.css")]
pub struct Cli {
    /// CSS file(s) with @theme directives
    #[arg(short = 'c', long = "config", required = true, num_args = 1..)]
    pub config: Vec<PathBuf>,

    /// Compiled CSS file(s) whose :root variables are shown as well
    #[arg(long = "css", num_args = 1..)]
    pub css: Vec<PathBuf>,

    /// Base token file loaded when a theme imports "tailwindcss"
    #[arg(long, default_value = DEFAULT_BASE_THEME)]
    pub base_theme: PathBuf,

    /// Port number
    #[arg(short = 'p', long, default_value = "3000", value_parser = parse_port)]
    pub port: u16,

    /// Directory with the preview UI
    #[arg(long, default_value = DEFAULT_UI_DIR)]
    pub ui_dir: PathBuf,

    /// Also write the organized variables as JSON to this path
    #[arg(long)]
    pub json_out: Option<PathBuf>,

    /// Organize and write output, but don't start the server
    #[arg(long)]
    pub no_serve: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// Validate a port argument
pub fn parse_port(value: &str) -> Result<u16, String> {
    match value.trim().parse::<u32>() {
        Ok(port) if (1..=65535).contains(&port) => Ok(port as u16),
        _ => Err(ViewerError::InvalidPort {
            value: value.to_string(),
        }
        .to_string()),
    }
}

/// Resolved settings for one viewer run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    pub theme_files: Vec<PathBuf>,
    pub compiled_css_files: Vec<PathBuf>,
    pub base_theme: PathBuf,
    pub port: u16,
    pub ui_dir: PathBuf,
    pub json_out: Option<PathBuf>,
    pub serve: bool,
    pub log_file: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl ViewerConfig {
    /// Config for the given theme files with every other setting at its default
    pub fn new(theme_files: Vec<PathBuf>) -> Self {
        Self {
            theme_files,
            compiled_css_files: Vec::new(),
            base_theme: PathBuf::from(DEFAULT_BASE_THEME),
            port: DEFAULT_PORT,
            ui_dir: PathBuf::from(DEFAULT_UI_DIR),
            json_out: None,
            serve: true,
            log_file: None,
            log_level: LevelFilter::Info,
        }
    }

    /// Check that every input file exists
    ///
    /// The base theme is optional and is not checked here.
    pub fn validate(&self) -> ViewerResult<()> {
        for path in self.theme_files.iter().chain(self.compiled_css_files.iter()) {
            if !path.is_file() {
                return Err(ViewerError::FileNotFound { path: path.clone() });
            }
        }
        Ok(())
    }
}

impl From<Cli> for ViewerConfig {
    fn from(cli: Cli) -> Self {
        Self {
            theme_files: cli.config,
            compiled_css_files: cli.css,
            base_theme: cli.base_theme,
            port: cli.port,
            ui_dir: cli.ui_dir,
            json_out: cli.json_out,
            serve: !cli.no_serve,
            log_file: cli.log_file,
            log_level: if cli.verbose {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}
