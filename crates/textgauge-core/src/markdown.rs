//! Markdown to prose.
//!
//! Readability formulas count sentences, so Markdown structure has to turn
//! into sentence structure: each paragraph and list item becomes its own
//! sentence (a period is added when the block has no terminal punctuation),
//! and anything that is not running prose is dropped.

use std::path::Path;

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Whether a path names a Markdown file (`.md` or `.markdown`).
pub fn is_markdown_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("markdown"))
}

/// Strip Markdown down to the prose a reader would read aloud.
///
/// Dropped: YAML front matter, headings, code blocks, inline code, tables,
/// images, and raw HTML. Kept: paragraph, list item and block quote text,
/// link text, and emphasized text without its markers.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_to_prose(text: &str) -> String {
    let body = strip_frontmatter(text);
    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;

    let mut prose = String::with_capacity(body.len() / 2);
    let mut block = String::new();
    let mut hidden: usize = 0;

    for event in Parser::new_ext(body, options) {
        match event {
            Event::Start(
                Tag::CodeBlock(_)
                | Tag::Heading { .. }
                | Tag::Table(_)
                | Tag::Image { .. }
                | Tag::HtmlBlock,
            ) => hidden += 1,
            Event::End(
                TagEnd::CodeBlock
                | TagEnd::Heading(_)
                | TagEnd::Table
                | TagEnd::Image
                | TagEnd::HtmlBlock,
            ) => hidden = hidden.saturating_sub(1),

            Event::Text(t) if hidden == 0 => block.push_str(&t),
            Event::SoftBreak | Event::HardBreak if hidden == 0 => block.push(' '),

            // A nested list starts a new block so the parent item's text
            // does not run into its children.
            Event::Start(Tag::List(_)) | Event::End(TagEnd::Paragraph | TagEnd::Item) => {
                flush_block(&mut prose, &mut block);
            }

            _ => {}
        }
    }
    flush_block(&mut prose, &mut block);

    tracing::debug!(prose_len = prose.len(), "stripped markdown");
    prose
}

fn flush_block(prose: &mut String, block: &mut String) {
    let sentence = block.trim();
    if !sentence.is_empty() {
        if !prose.is_empty() {
            prose.push(' ');
        }
        prose.push_str(sentence);
        if !sentence.ends_with(['.', '!', '?', '"', '\u{201D}', ')']) {
            prose.push('.');
        }
    }
    block.clear();
}

/// Drop a YAML front matter block delimited by `---` lines.
fn strip_frontmatter(text: &str) -> &str {
    let trimmed = text.trim_start();
    let Some(after_opening) = trimmed.strip_prefix("---") else {
        return text;
    };
    let Some(close) = after_opening.find("\n---") else {
        return text;
    };
    let rest = &after_opening[close + 4..];
    // Skip the remainder of the closing delimiter line
    rest.find('\n').map_or("", |nl| &rest[nl + 1..])
}
