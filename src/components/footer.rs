//! Site footer component

use maud::{Markup, html};

/// Renders the bottom footer bar with a single line of text.
pub fn site_footer(text: &str) -> Markup {
    html! {
        footer class="site-footer" {
            p { (text) }
        }
    }
}
