//! Path utilities for HTML generation

/// Directory holding one subdirectory per article page.
pub const ARTICLE_DIR: &str = "article";

/// Depth of every article page (`article/<slug>/index.html`).
pub const ARTICLE_DEPTH: usize = 2;

/// Returns the `../` prefix leading from a page at `depth` to the site root.
///
/// # Arguments
///
/// * `depth`: Number of directories between the page and the site root
///
/// # Returns
///
/// Relative prefix, empty for root level pages
pub fn root_prefix(depth: usize) -> String {
    "../".repeat(depth)
}

/// Returns the site relative directory of an article page.
pub fn article_dir(slug: &str) -> String {
    format!("{}/{}", ARTICLE_DIR, slug)
}

/// Returns the link to an article page from a page at `depth`.
///
/// Links point at the directory index file so pages work when opened
/// straight from disk as well as behind a static host.
pub fn article_href(slug: &str, depth: usize) -> String {
    format!("{}{}/index.html", root_prefix(depth), article_dir(slug))
}

/// Returns the link to the home page from a page at `depth`.
pub fn home_href(depth: usize) -> String {
    format!("{}index.html", root_prefix(depth))
}

/// Returns the link to a bundled stylesheet from a page at `depth`.
pub fn asset_href(name: &str, depth: usize) -> String {
    format!("{}assets/{}", root_prefix(depth), name)
}
