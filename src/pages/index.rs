//! Home page generation

use maud::{Markup, html};

use crate::assets::INDEX_CSS;
use crate::catalog::Article;
use crate::components::card::article_card;
use crate::components::footer::site_footer;
use crate::components::layout::page_wrapper;
use crate::config::Site;
use crate::path::{article_href, asset_href};

/// Footer line of the home page.
const FOOTER_TEXT: &str = "Написано с ☕ и тихим созерцанием";

/// Suffix appended to the blog title in the home page document title.
const TITLE_SUFFIX: &str = "Личный блог";

/// Generates the home page listing every article
///
/// Renders the site header (title, tagline, author) followed by a grid of
/// article cards in catalog order. The first card is featured and spans the
/// full grid width.
///
/// # Arguments
///
/// * `site`: Site identity
/// * `articles`: Articles in display order
///
/// # Returns
///
/// Complete HTML markup for index.html
pub fn generate(site: &Site<'_>, articles: &[Article]) -> Markup {
    let css = asset_href(INDEX_CSS, 0);
    let title = format!("{} | {}", site.title, TITLE_SUFFIX);

    page_wrapper(
        &title,
        site.description,
        &[css.as_str()],
        html! {
            header class="site-header" {
                div class="narrow" {
                    h1 class="site-title" { (site.title) }
                    p class="site-tagline" { (site.tagline) }
                    div class="site-author" {
                        span class="site-author-rule" {}
                        span { (site.author) }
                        span class="site-author-rule" {}
                    }
                }
            }

            main class="articles" {
                div class="wide" {
                    @if articles.is_empty() {
                        p class="empty-state" { "Пока здесь ничего нет" }
                    } @else {
                        div class="card-grid" {
                            @for (index, article) in articles.iter().enumerate() {
                                (article_card(article, &article_href(article.slug(), 0), index == 0))
                            }
                        }
                    }
                }
            }

            (site_footer(FOOTER_TEXT))
        },
    )
}
