//! Article content components
//!
//! Maps rendered content blocks onto HTML elements: headings become `h2`,
//! paragraphs `p`, lists `ul`/`li`. Inline spans become `strong`, `em` or
//! escaped text.

use maud::{Markup, html};

use crate::content::{Block, Span};

/// Renders inline spans.
pub fn spans(items: &[Span]) -> Markup {
    html! {
        @for span in items {
            @match span {
                Span::Plain(text) => { (text) },
                Span::Bold(text) => { strong { (text) } },
                Span::Italic(text) => { em { (text) } },
            }
        }
    }
}

/// Renders display blocks inside the prose container.
///
/// # Arguments
///
/// * `content`: Blocks in source order
///
/// # Returns
///
/// Prose markup
pub fn blocks(content: &[Block]) -> Markup {
    html! {
        div class="prose" {
            @for block in content {
                @match block {
                    Block::Heading(heading) => { h2 { (spans(heading)) } },
                    Block::Paragraph(paragraph) => { p { (spans(paragraph)) } },
                    Block::List(items) => {
                        ul {
                            @for item in items {
                                li { (spans(item)) }
                            }
                        }
                    },
                }
            }
        }
    }
}
