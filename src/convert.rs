//! Markdown body to HTML fragment conversion
//!
//! Wires the parser, the wiki link policy, and the highlighter together.
//! The link policy replaces the engine's default hyperlink resolution: bare
//! wiki page references become concrete site-relative `.html` links, while
//! external and already-resolved links pass through untouched.

use pulldown_cmark::{html, Event, LinkType, Parser, Tag};

use crate::extensions::ExtensionSet;
use crate::highlight::Highlighter;

/// Link-resolution policy for wiki-style page references.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkPolicy {
    /// Directory-like targets resolve to `index.html` inside the directory
    pub auto_index: bool,
}

impl LinkPolicy {
    /// Rewrite one link target.
    pub fn resolve(&self, dest: &str) -> String {
        if dest.starts_with("http") || dest.ends_with(".html") {
            return dest.to_string();
        }
        if self.auto_index && dest.ends_with('/') {
            return format!("{dest}index.html");
        }
        if !dest.ends_with('/') {
            return format!("{dest}.html");
        }
        dest.to_string()
    }

    fn remap<'a>(&self, event: Event<'a>) -> Event<'a> {
        match event {
            // Autolinks (`<me@example.com>`, `<ftp://host>`) carry their
            // destination verbatim; only written-out link targets are wiki
            // page references.
            Event::Start(Tag::Link { link_type, dest_url, title, id })
                if !matches!(link_type, LinkType::Email | LinkType::Autolink) =>
            {
                Event::Start(Tag::Link {
                    link_type,
                    dest_url: self.resolve(&dest_url).into(),
                    title,
                    id,
                })
            }
            ev => ev,
        }
    }
}

/// Convert a markdown body to an HTML fragment.
pub fn to_html(body: &str, extensions: &ExtensionSet, policy: &LinkPolicy) -> String {
    let events = Parser::new_ext(body, extensions.options()).map(|ev| policy.remap(ev));

    // codehilite is part of the baseline set, so every run highlights
    let mut out = String::new();
    html::push_html(&mut out, Highlighter::new(events));
    out
}
