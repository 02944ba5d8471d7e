//! Article card component for the home page grid

use maud::{Markup, html};

use super::meta::{category_badge, meta_line};
use crate::catalog::Article;

/// Renders a clickable article card.
///
/// The featured card spans the full grid width and uses larger type.
///
/// # Arguments
///
/// * `article`: Article to summarise
/// * `href`: Link to the article page
/// * `featured`: Whether this is the lead card
///
/// # Returns
///
/// Card markup wrapped in a link
pub fn article_card(article: &Article, href: &str, featured: bool) -> Markup {
    let class = if featured { "card card-featured" } else { "card" };

    html! {
        a href=(href) class=(class) {
            article {
                div class="card-top" {
                    span class="card-cover" role="img" aria-label=(article.category()) {
                        (article.cover())
                    }
                    (category_badge(article.category()))
                }
                h2 class="card-title" { (article.title()) }
                p class="card-excerpt" { (article.excerpt()) }
                (meta_line(article.date(), article.read_time()))
            }
        }
    }
}
