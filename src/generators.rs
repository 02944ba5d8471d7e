//! Whole-site generation.

use anyhow::{Context, Result, bail};
use maud::Markup;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::assets::write_css_assets;
use crate::catalog::Article;
use crate::config::Config;
use crate::pages;
use crate::path::article_dir;

/// Result of a site generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSummary {
    output: PathBuf,
    index_path: PathBuf,
    article_count: usize,
}

impl SiteSummary {
    /// Output directory.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Path of the generated home page.
    pub fn index_path(&self) -> &Path {
        &self.index_path
    }

    /// Number of article pages written.
    pub fn article_count(&self) -> usize {
        self.article_count
    }
}

/// Generates the complete static site.
///
/// Creates the output and assets directories, writes the bundled CSS, the
/// home page, one page per article at `article/<slug>/index.html` and a
/// `404.html` page for static hosts.
///
/// # Arguments
///
/// * `config`: Validated configuration
/// * `articles`: Articles to publish, in display order
///
/// # Returns
///
/// Summary of the written site
///
/// # Errors
///
/// Returns error if any directory or file cannot be written.
pub fn generate_site(config: &Config, articles: &[Article]) -> Result<SiteSummary> {
    let site = config.site();
    let output = config.output.as_path();

    fs::create_dir_all(output).context("Failed to create output directory")?;

    let assets_dir = output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    write_css_assets(&assets_dir).context("Failed to write CSS assets")?;

    let index_path = output.join("index.html");
    write_page(&index_path, pages::index::generate(&site, articles))?;

    for article in articles {
        let dir = output.join(article_dir(article.slug()));
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create article directory {}", dir.display()))?;
        write_page(&dir.join("index.html"), pages::article::generate(&site, article))?;
    }

    write_page(&output.join("404.html"), pages::not_found::generate(&site, 0))?;

    tracing::info!(
        articles = articles.len(),
        output = %output.display(),
        "generated site"
    );

    Ok(SiteSummary {
        output: output.to_path_buf(),
        index_path,
        article_count: articles.len(),
    })
}

/// Renders a single article page by slug.
///
/// Writes the CSS assets and `article/<slug>/index.html`. Unknown slugs
/// produce the not-found page at the same location, matching what a
/// visitor following a stale link would see.
///
/// # Errors
///
/// Returns error if the slug is not a single path component, or if a
/// directory or file cannot be written.
pub fn generate_article(config: &Config, slug: &str) -> Result<PathBuf> {
    validate_slug(slug)?;

    let site = config.site();
    let output = config.output.as_path();

    let assets_dir = output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    write_css_assets(&assets_dir).context("Failed to write CSS assets")?;

    let dir = output.join(article_dir(slug));
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create article directory {}", dir.display()))?;

    let path = dir.join("index.html");
    write_page(&path, pages::article::generate_for_slug(&site, slug))?;
    tracing::info!(slug, path = %path.display(), "generated article");

    Ok(path)
}

/// Rejects slugs that are not a single normal path component.
fn validate_slug(slug: &str) -> Result<()> {
    if slug.is_empty() {
        bail!("Article slug must not be empty");
    }
    if slug.contains('/') || slug.contains('\\') {
        bail!("Article slug must be a single path component: {}", slug);
    }

    let mut components = Path::new(slug).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => bail!("Article slug must be a single path component: {}", slug),
    }
}

fn write_page(path: &Path, markup: Markup) -> Result<()> {
    fs::write(path, markup.into_string())
        .with_context(|| format!("Failed to write page to {}", path.display()))?;
    tracing::debug!(path = %path.display(), "wrote page");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::articles;
    use tempfile::TempDir;

    fn config(output: &Path) -> Config {
        Config {
            output: output.to_path_buf(),
            title: crate::config::DEFAULT_TITLE.to_string(),
            author: crate::config::DEFAULT_AUTHOR.to_string(),
            article: None,
            no_open: true,
        }
    }

    #[test]
    fn test_generate_site_writes_all_pages() -> Result<()> {
        // Arrange
        let dir = TempDir::new()?;
        let config = config(&dir.path().join("dist"));

        // Act
        let summary = generate_site(&config, articles())?;

        // Assert
        assert_eq!(summary.article_count(), articles().len());
        assert!(summary.index_path().exists());
        assert!(summary.output().join("404.html").exists());
        assert!(summary.output().join("assets/index.css").exists());
        assert!(summary.output().join("assets/article.css").exists());
        for article in articles() {
            let page = summary
                .output()
                .join("article")
                .join(article.slug())
                .join("index.html");
            assert!(page.exists(), "Missing page for {}", article.slug());
        }

        Ok(())
    }

    #[test]
    fn test_generate_site_empty_catalog() -> Result<()> {
        // Arrange
        let dir = TempDir::new()?;
        let config = config(dir.path());

        // Act
        let summary = generate_site(&config, &[])?;

        // Assert
        assert_eq!(summary.article_count(), 0);
        assert!(!dir.path().join("article").exists());
        let index = fs::read_to_string(summary.index_path())?;
        assert!(index.contains("empty-state"));

        Ok(())
    }

    #[test]
    fn test_generate_article_unknown_slug_writes_not_found() -> Result<()> {
        // Arrange
        let dir = TempDir::new()?;
        let config = config(dir.path());

        // Act
        let path = generate_article(&config, "missing")?;

        // Assert
        let html = fs::read_to_string(&path)?;
        assert!(html.contains(crate::pages::not_found::NOT_FOUND_TITLE));
        assert!(dir.path().join("assets/article.css").exists());

        Ok(())
    }

    #[test]
    fn test_generate_article_rejects_traversal() {
        // Arrange
        let dir = TempDir::new().expect("Temp dir should be created");
        let config = config(dir.path());

        // Act & Assert
        assert!(generate_article(&config, "../escape").is_err());
        assert!(generate_article(&config, "a/b").is_err());
        assert!(generate_article(&config, "").is_err());
        assert!(generate_article(&config, "a\\b").is_err());
    }

    #[test]
    fn test_generate_article_rejects_dot_slugs() {
        // Arrange
        let dir = TempDir::new().expect("Temp dir should be created");
        let config = config(dir.path());

        // Act
        let current = generate_article(&config, ".");
        let parent = generate_article(&config, "..");

        // Assert
        for result in [current, parent] {
            let message = format!("{:#}", result.expect_err("Dot slug should be rejected"));
            assert!(
                message.contains("single path component"),
                "Unexpected error: {}",
                message
            );
        }
        assert!(!dir.path().join("article").exists());
    }
}
