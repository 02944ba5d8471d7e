//! Static site generator for the Wandering Thoughts blog.

mod assets;
pub mod catalog;
pub mod components;
mod config;
pub mod content;
mod generators;
pub mod pages;
mod path;

pub use assets::{ARTICLE_CSS, INDEX_CSS, write_css_assets};
pub use catalog::{Article, CatalogError, articles, find};
pub use config::{Config, Site};
pub use content::{Block, Span, render_blocks, render_spans};
pub use generators::{SiteSummary, generate_article, generate_site};
