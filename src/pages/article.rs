//! Article page generation

use maud::{Markup, html};

use crate::assets::ARTICLE_CSS;
use crate::catalog::{self, Article};
use crate::components::content::blocks;
use crate::components::layout::page_wrapper;
use crate::components::meta::{category_badge, meta_line};
use crate::components::nav::back_nav;
use crate::config::Site;
use crate::path::{ARTICLE_DEPTH, asset_href, home_href};

use super::not_found;

/// Generates the detail page of one article
///
/// Renders back navigation, the article header (cover, category, title,
/// date and reading time), the article content converted from the blog
/// markup, and the closing footer. The page lives at
/// `article/<slug>/index.html`, so every link is relative to that depth.
///
/// # Arguments
///
/// * `site`: Site identity
/// * `article`: Article to render
///
/// # Returns
///
/// Complete HTML markup for the article page
pub fn generate(site: &Site<'_>, article: &Article) -> Markup {
    let css = asset_href(ARTICLE_CSS, ARTICLE_DEPTH);
    let home = home_href(ARTICLE_DEPTH);
    let title = format!("{} | {}", article.title(), site.title);
    let content = article.blocks();

    page_wrapper(
        &title,
        article.excerpt(),
        &[css.as_str()],
        html! {
            (back_nav(&home, "Все статьи"))

            header class="article-header" {
                div class="narrow" {
                    div class="article-badges" {
                        span class="article-cover" { (article.cover()) }
                        (category_badge(article.category()))
                    }
                    h1 class="article-title" { (article.title()) }
                    (meta_line(article.date(), article.read_time()))
                }
            }

            main class="article-body" {
                div class="narrow" {
                    (blocks(&content))
                }
            }

            footer class="article-footer" {
                div class="narrow" {
                    p { "Спасибо за чтение ✨" }
                    a href=(home) class="more-link" { "← Ещё статьи" }
                }
            }
        },
    )
}

/// Generates the page for a slug, falling back to the not-found page
///
/// Looks the slug up in the catalog. Unknown slugs render the not-found
/// page at article depth so its links still resolve.
///
/// # Arguments
///
/// * `site`: Site identity
/// * `slug`: Requested article slug
///
/// # Returns
///
/// Article page markup, or not-found page markup for unknown slugs
pub fn generate_for_slug(site: &Site<'_>, slug: &str) -> Markup {
    match catalog::find(slug) {
        Ok(article) => generate(site, article),
        Err(e) => {
            tracing::warn!(slug, error = %e, "rendering not-found page");
            not_found::generate(site, ARTICLE_DEPTH)
        }
    }
}
