//! Class-based syntax highlighting for fenced code blocks
//!
//! Emits syntect class spans instead of inline styles, so coloring stays in
//! the stylesheet the template links (`pygmentize.css`). Indented code
//! blocks pass through unhighlighted.

use once_cell::sync::Lazy;
use pulldown_cmark::{CodeBlockKind, Event, Tag, TagEnd};
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);

/// Event remapper that replaces each fenced code block with a single
/// pre-highlighted HTML event.
pub struct Highlighter<I> {
    generator: Option<ClassedHTMLGenerator<'static>>,
    inner: I,
}

impl<I> Highlighter<I> {
    pub fn new(inner: I) -> Self {
        Highlighter { generator: None, inner }
    }
}

fn html_generator(syntax: &'static SyntaxReference) -> ClassedHTMLGenerator<'static> {
    ClassedHTMLGenerator::new_with_class_style(syntax, &SYNTAX_SET, ClassStyle::Spaced)
}

fn syntax_for(label: &str) -> &'static SyntaxReference {
    // Fence labels like "rust,no_run" carry the language first
    let lang = label.split([',', ' ']).next().unwrap_or(label);
    SYNTAX_SET
        .find_syntax_by_token(lang)
        .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text())
}

impl<'a, I: Iterator<Item = Event<'a>>> Iterator for Highlighter<I> {
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(label))) => {
                    self.generator = Some(html_generator(syntax_for(&label)));
                }
                Event::Text(text) if self.generator.is_some() => {
                    let generator = self.generator.as_mut().unwrap();
                    for line in LinesWithEndings::from(&text) {
                        let _ = generator.parse_html_for_line_which_includes_newline(line);
                    }
                }
                Event::End(TagEnd::CodeBlock) if self.generator.is_some() => {
                    let generator = self.generator.take().unwrap();
                    let html = format!(
                        "<div class=\"codehilite\"><pre><code>{}</code></pre></div>",
                        generator.finalize()
                    );
                    return Some(Event::Html(html.into()));
                }
                ev => return Some(ev),
            }
        }
    }
}
