//! Article metadata components

use maud::{Markup, html};

/// Renders the category badge pill.
pub fn category_badge(category: &str) -> Markup {
    html! {
        span class="badge" { (category) }
    }
}

/// Renders publish date and reading time separated by a dot.
///
/// # Arguments
///
/// * `date`: Publish date as displayed
/// * `read_time`: Reading time label as displayed
///
/// # Returns
///
/// Meta line markup
pub fn meta_line(date: &str, read_time: &str) -> Markup {
    html! {
        div class="meta-line" {
            span { (date) }
            span class="meta-dot" {}
            span { (read_time) }
        }
    }
}
