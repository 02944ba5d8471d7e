//! Navigation components

use maud::{Markup, html};

/// Renders the "back to all articles" link shown above an article.
///
/// # Arguments
///
/// * `home_href`: Relative path back to index.html
/// * `label`: Link text
///
/// # Returns
///
/// Navigation bar markup with a left arrow icon
pub fn back_nav(home_href: &str, label: &str) -> Markup {
    html! {
        nav class="back-nav" {
            div class="narrow" {
                a href=(home_href) class="back-link" {
                    svg xmlns="http://www.w3.org/2000/svg" width="16" height="16"
                        viewBox="0 0 24 24" fill="none" stroke="currentColor"
                        stroke-width="2" stroke-linecap="round" stroke-linejoin="round" {
                        path d="M19 12H5M12 19l-7-7 7-7" {}
                    }
                    (label)
                }
            }
        }
    }
}
