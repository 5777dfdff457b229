//! Theme Variables Viewer Library
//!
//! Extracts design-token custom properties from `@theme` blocks, merges them with a base
//! token set, resolves `var()` references and organizes them by namespace for the
//! browser preview.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod server;
pub mod theme;

#[cfg(test)]
pub mod test_utils;
