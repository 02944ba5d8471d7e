//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

/// Google Fonts stylesheet for the serif display face and the body face.
const FONTS_HREF: &str = "https://fonts.googleapis.com/css2?family=Fraunces:opsz,wght@9..144,400;9..144,500&family=Source+Sans+3:wght@400;600&subset=latin,cyrillic&display=swap";

/// Wraps page content with standard HTML structure
///
/// Provides consistent DOCTYPE, html, head, and page container across all
/// page types. The wrapper handles language, viewport, charset, description
/// meta, web fonts and stylesheet loading while the caller provides the
/// page-specific body content.
///
/// # Arguments
///
/// * `title`: Full document title
/// * `description`: Text for the description meta tag
/// * `stylesheets`: CSS file paths to include
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(title: &str, description: &str, stylesheets: &[&str], body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ru" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(description);
                title { (title) }
                link rel="preconnect" href="https://fonts.googleapis.com";
                link rel="preconnect" href="https://fonts.gstatic.com" crossorigin;
                link rel="stylesheet" href=(FONTS_HREF);
                @for stylesheet in stylesheets {
                    link rel="stylesheet" href=(stylesheet);
                }
            }
            body {
                div class="page" {
                    (body)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_wrapper_head() {
        // Arrange
        let body = html! { p { "hello" } };

        // Act
        let html = page_wrapper("Title & more", "About it", &["assets/index.css"], body)
            .into_string();

        // Assert
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"ru\">"));
        assert!(html.contains("<title>Title &amp; more</title>"));
        assert!(html.contains("<meta name=\"description\" content=\"About it\">"));
        assert!(html.contains("href=\"assets/index.css\""));
        assert!(html.contains("Source+Sans+3"));
        assert!(html.contains("<div class=\"page\"><p>hello</p></div>"));
    }
}
