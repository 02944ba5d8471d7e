//! Block level rendering of article content.

use super::spans::{Span, render_spans};

const HEADING_PREFIX: &str = "## ";
const LIST_PREFIX: &str = "- ";

/// One structural unit of rendered article content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Consecutive text lines joined with single spaces
    Paragraph(Vec<Span>),
    /// Second level heading from a `## ` line
    Heading(Vec<Span>),
    /// Bulleted list, one span sequence per `- ` item
    List(Vec<Vec<Span>>),
}

/// Running state of the single pass over content lines.
///
/// At most one of the two buffers holds lines at any time: starting a list
/// flushes the paragraph and a text line after list items flushes the list.
#[derive(Default)]
struct BlockBuilder<'a> {
    blocks: Vec<Block>,
    paragraph: Vec<&'a str>,
    list: Vec<&'a str>,
}

impl<'a> BlockBuilder<'a> {
    fn push_line(mut self, line: &'a str) -> Self {
        let line = line.trim();

        if line.is_empty() {
            self.flush_list();
            self.flush_paragraph();
        } else if let Some(heading) = line.strip_prefix(HEADING_PREFIX) {
            self.flush_list();
            self.flush_paragraph();
            self.blocks.push(Block::Heading(render_spans(heading)));
        } else if let Some(item) = line.strip_prefix(LIST_PREFIX) {
            self.flush_paragraph();
            self.list.push(item);
        } else {
            self.flush_list();
            self.paragraph.push(line);
        }

        self
    }

    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }

        let text = self.paragraph.join(" ");
        self.blocks.push(Block::Paragraph(render_spans(&text)));
        self.paragraph.clear();
    }

    fn flush_list(&mut self) {
        if self.list.is_empty() {
            return;
        }

        let items = self.list.drain(..).map(render_spans).collect();
        self.blocks.push(Block::List(items));
    }

    fn finish(mut self) -> Vec<Block> {
        self.flush_list();
        self.flush_paragraph();
        self.blocks
    }
}

/// Renders raw article content into display blocks.
///
/// Lines are trimmed and classified in one pass: blank lines separate
/// blocks, `## ` lines become headings, `- ` lines accumulate into a list and
/// any other line joins the pending paragraph. Accepts any input; an empty
/// string yields no blocks.
///
/// # Arguments
///
/// * `raw`: Article content in the blog markup
///
/// # Returns
///
/// Blocks in source line order
pub fn render_blocks(raw: &str) -> Vec<Block> {
    raw.split('\n')
        .fold(BlockBuilder::default(), BlockBuilder::push_line)
        .finish()
}
