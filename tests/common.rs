//! Shared test utilities for integration tests.
//!
//! Provides helpers for building configurations that write into temporary
//! directories and for reading generated pages back.

#![allow(dead_code)]

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wandering::Config;

/// Creates a temporary output directory and a configuration writing into it.
///
/// # Returns
///
/// Temporary directory guard and configuration pointing at `<tmp>/dist`
///
/// # Errors
///
/// Returns error if the temporary directory cannot be created
pub fn temp_config() -> Result<(TempDir, Config)> {
    let dir = TempDir::new()?;
    let config = Config {
        output: dir.path().join("dist"),
        title: "Блуждающие мысли".to_string(),
        author: "Мария".to_string(),
        article: None,
        no_open: true,
    };
    Ok((dir, config))
}

/// Returns the path of an article page below the output directory.
pub fn article_page(output: &Path, slug: &str) -> PathBuf {
    output.join("article").join(slug).join("index.html")
}

/// Reads a generated page.
///
/// # Errors
///
/// Returns error naming the page if it cannot be read
pub fn read_page(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
