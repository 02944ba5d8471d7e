//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const LAYOUT: &str = include_str!("../assets/components/layout.css");
const META: &str = include_str!("../assets/components/meta.css");
const CARD: &str = include_str!("../assets/components/card.css");

const INDEX_PAGE: &str = include_str!("../assets/page-index.css");
const ARTICLE_PAGE: &str = include_str!("../assets/page-article.css");
const PROSE: &str = include_str!("../assets/prose.css");

/// Stylesheet for the home and not-found pages.
pub const INDEX_CSS: &str = "index.css";

/// Stylesheet for article pages.
pub const ARTICLE_CSS: &str = "article.css";

/// Writes all bundled CSS assets to output directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    write_bundled(assets_dir, INDEX_CSS, &[BASE, LAYOUT, META, CARD, INDEX_PAGE])?;
    write_bundled(
        assets_dir,
        ARTICLE_CSS,
        &[BASE, LAYOUT, META, ARTICLE_PAGE, PROSE],
    )?;
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    tracing::debug!(asset = name, "wrote stylesheet");
    Ok(())
}
