//! Article content rendering.
//!
//! Converts the blog's lightweight markup into typed display blocks. Four
//! constructs are recognised: blank-line paragraph breaks, `## ` headings,
//! `- ` list items and inline `**bold**` / `*italic*` emphasis. Nothing else
//! is interpreted; unmatched markers pass through as plain text.

mod blocks;
mod spans;

pub use blocks::{Block, render_blocks};
pub use spans::{Span, render_spans};
