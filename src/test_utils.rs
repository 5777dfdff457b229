//! Test utilities shared across the codebase

use std::fs;
use std::path::{Path, PathBuf};

/// Imports the default tokens without touching them
pub const SCENARIO_DEFAULT_ONLY: &str = r#"@import "tailwindcss";
"#;

/// Imports the default tokens and drops all of them
pub const SCENARIO_RESET_ALL: &str = r#"@import "tailwindcss";

@theme {
  --*: initial;
}
"#;

/// Imports the default tokens and adds five custom ones
pub const SCENARIO_EXTEND_DEFAULTS: &str = r#"@import "tailwindcss";

@theme {
  --color-brand-500: oklch(0.65 0.20 200);
  --color-brand-600: oklch(0.55 0.20 200);
  --spacing-18: 4.5rem;
  --font-display: "Satoshi", sans-serif;
  --radius-card: var(--radius-lg);
}
"#;

/// Drops the default tokens and declares six custom ones
pub const SCENARIO_RESET_AND_CUSTOM: &str = r#"@import "tailwindcss";

@theme {
  --*: initial;

  /* Colors */
  --color-primary: oklch(0.5 0.2 240);
  --color-secondary: oklch(0.7 0.15 180);

  /* Spacing */
  --spacing-sm: 0.5rem;
  --spacing-md: 1rem;
  --spacing-lg: 2rem;

  --font-sans: "Inter", system-ui, sans-serif;
}
"#;

/// A small stand-in for the default token file
pub const BASE_THEME: &str = r#"@theme default {
  --font-sans: ui-sans-serif, system-ui, sans-serif;
  --color-red-500: oklch(63.7% 0.237 25.331);
  --color-red-100: oklch(93.6% 0.032 17.717);
  --color-blue-500: oklch(62.3% 0.214 259.815);
  --spacing: 0.25rem;
  --spacing-4: 1rem;
  --radius-lg: 0.5rem;
  --shadow-sm: 0 1px 3px 0 rgb(0 0 0 / 0.1);
}
"#;

/// Write a CSS file into a directory and return its path
pub fn write_css(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    fs::write(&path, content).expect("Failed to write CSS fixture");
    path
}
