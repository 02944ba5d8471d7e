//! Inline emphasis rendering.

use regex::Regex;
use std::sync::LazyLock;

/// Matches a fully delimited bold or italic run.
///
/// The bold alternative is tried first at each position, so a `**x**` run is
/// never read as two italics. Neither alternative admits an asterisk inside.
static EMPHASIS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*(?P<bold>[^*]+)\*\*|\*(?P<italic>[^*]+)\*")
        .expect("emphasis pattern is valid")
});

/// One inline formatted run of text within a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    /// Literal text, kept exactly as written
    Plain(String),
    /// Text that was wrapped in `**`
    Bold(String),
    /// Text that was wrapped in `*`
    Italic(String),
}

impl Span {
    /// Returns the span text without any markers.
    pub fn text(&self) -> &str {
        match self {
            Span::Plain(text) | Span::Bold(text) | Span::Italic(text) => text,
        }
    }
}

/// Splits inline text into plain, bold and italic spans.
///
/// Text between emphasis runs is emitted unchanged, including whitespace.
/// Matched runs lose their two (italic) or four (bold) marker characters.
/// Empty plain pieces are skipped, so an empty input yields no spans.
///
/// # Arguments
///
/// * `text`: Single logical line of inline text
///
/// # Returns
///
/// Spans in source order
pub fn render_spans(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut last_end = 0;

    for caps in EMPHASIS.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };

        if whole.start() > last_end {
            spans.push(Span::Plain(text[last_end..whole.start()].to_string()));
        }

        if let Some(bold) = caps.name("bold") {
            spans.push(Span::Bold(bold.as_str().to_string()));
        } else if let Some(italic) = caps.name("italic") {
            spans.push(Span::Italic(italic.as_str().to_string()));
        }

        last_end = whole.end();
    }

    if last_end < text.len() {
        spans.push(Span::Plain(text[last_end..].to_string()));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn plain(text: &str) -> Span {
        Span::Plain(text.to_string())
    }

    fn bold(text: &str) -> Span {
        Span::Bold(text.to_string())
    }

    fn italic(text: &str) -> Span {
        Span::Italic(text.to_string())
    }

    #[test]
    fn test_render_spans_mixed_emphasis() {
        // Arrange
        let text = "A **bold** and *italic* word";

        // Act
        let spans = render_spans(text);

        // Assert
        assert_eq!(
            spans,
            vec![
                plain("A "),
                bold("bold"),
                plain(" and "),
                italic("italic"),
                plain(" word"),
            ]
        );
    }

    #[test]
    fn test_render_spans_plain_text_is_single_span() {
        let spans = render_spans("just some words");

        assert_eq!(spans, vec![plain("just some words")]);
    }

    #[test]
    fn test_render_spans_empty_input() {
        assert!(render_spans("").is_empty());
    }

    #[test]
    fn test_render_spans_whole_text_emphasised() {
        assert_eq!(render_spans("**всё**"), vec![bold("всё")]);
        assert_eq!(render_spans("*всё*"), vec![italic("всё")]);
    }

    #[test]
    fn test_render_spans_adjacent_runs_skip_empty_plain() {
        // Arrange
        let text = "**a***b*";

        // Act
        let spans = render_spans(text);

        // Assert
        assert_eq!(spans, vec![bold("a"), italic("b")]);
    }

    #[test]
    fn test_render_spans_unmatched_marker_is_plain() {
        assert_eq!(render_spans("5 * 3 = 15"), vec![plain("5 * 3 = 15")]);
        assert_eq!(render_spans("**open"), vec![plain("**open")]);
        assert_eq!(render_spans("***"), vec![plain("***")]);
    }

    #[test]
    fn test_render_spans_triple_markers_prefer_bold() {
        // Stray markers stay plain text, never an empty italic.
        // Arrange
        let text = "***text***";

        // Act
        let spans = render_spans(text);

        // Assert
        assert_eq!(spans, vec![plain("*"), bold("text"), plain("*")]);
    }

    #[test]
    fn test_render_spans_preserves_internal_whitespace() {
        let spans = render_spans("a  *b c*  d");

        assert_eq!(spans, vec![plain("a  "), italic("b c"), plain("  d")]);
    }

    proptest! {
        #[test]
        fn prop_render_spans_drops_only_matched_markers(text in "[a-z *#\n-]{0,64}") {
            let spans = render_spans(&text);
            let joined: String = spans.iter().map(Span::text).collect();
            let expected = EMPHASIS.replace_all(&text, "${bold}${italic}");

            prop_assert_eq!(joined, expected.into_owned());
            prop_assert!(
                spans
                    .iter()
                    .all(|span| !matches!(span, Span::Plain(t) if t.is_empty())),
                "Empty plain span in {:?}",
                spans
            );
        }
    }

    #[test]
    fn test_render_spans_concatenation_drops_only_markers() {
        // Arrange
        let text = "Утро, *кофе* и **тишина** — вот *всё*.";

        // Act
        let joined: String = render_spans(text).iter().map(Span::text).collect();

        // Assert
        assert_eq!(joined, "Утро, кофе и тишина — вот всё.");
    }
}
