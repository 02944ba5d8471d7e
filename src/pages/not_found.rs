//! Not-found page generation

use maud::{Markup, html};

use crate::assets::INDEX_CSS;
use crate::components::footer::site_footer;
use crate::components::layout::page_wrapper;
use crate::config::Site;
use crate::path::{asset_href, home_href};

/// Title shown when an article cannot be found.
pub const NOT_FOUND_TITLE: &str = "Статья не найдена";

/// Generates the page shown for unknown article slugs
///
/// # Arguments
///
/// * `site`: Site identity
/// * `depth`: Directory depth of the page, used for relative links
///
/// # Returns
///
/// Complete HTML markup for the not-found page
pub fn generate(site: &Site<'_>, depth: usize) -> Markup {
    let css = asset_href(INDEX_CSS, depth);

    page_wrapper(
        NOT_FOUND_TITLE,
        site.description,
        &[css.as_str()],
        html! {
            header class="site-header" {
                div class="narrow" {
                    h1 class="site-title" { (NOT_FOUND_TITLE) }
                    p class="site-tagline" {
                        a class="more-link" href=(home_href(depth)) { "← Все статьи" }
                    }
                }
            }
            (site_footer(site.title))
        },
    )
}
