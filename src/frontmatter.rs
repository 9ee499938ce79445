//! Front-matter extraction
//!
//! Splits a wiki page into an optional leading `---` delimited YAML block
//! and the markdown body. Only four keys matter to the converter; anything
//! else in the block is ignored.

/// Metadata recognized in the leading block, plus the remaining body.
#[derive(Debug, Default, PartialEq)]
pub struct Document {
    /// `%title%` override
    pub title: Option<String>,
    /// `%date%` override
    pub date: Option<String>,
    /// Template name to load in place of the default
    pub template: Option<String>,
    /// Suppression directive: skip HTML generation entirely
    pub nohtml: bool,
    /// Markdown body, trimmed, with exactly one trailing newline
    pub body: String,
}

/// Parse a wiki page into metadata and body.
pub fn parse(content: &str) -> Document {
    let (block, body) = split(content);

    let mut doc = Document {
        body: format!("{}\n", body.trim()),
        ..Document::default()
    };

    let Some(block) = block else {
        return doc;
    };

    // An unparseable block still counts as front matter: the body starts
    // after it, the metadata is simply empty.
    let Ok(serde_yaml::Value::Mapping(map)) = serde_yaml::from_str(block) else {
        return doc;
    };

    doc.title = get_scalar(&map, "title");
    doc.date = get_scalar(&map, "date");
    doc.template = get_scalar(&map, "template");
    doc.nohtml = get_scalar(&map, "nohtml").as_deref() == Some("true");
    doc
}

/// Split off the leading `---` block, if any.
///
/// The closing `---` must sit on a line of its own (trailing whitespace
/// allowed); a block without one is treated as plain body.
fn split(content: &str) -> (Option<&str>, &str) {
    let Some(rest) = content.strip_prefix("---") else {
        return (None, content);
    };

    let mut search = 0;
    while let Some(pos) = rest[search..].find("\n---") {
        let fence = search + pos;
        let after = &rest[fence + 4..];
        let (line_rest, body) = match after.find('\n') {
            Some(nl) => (&after[..nl], &after[nl + 1..]),
            None => (after, ""),
        };
        if line_rest.trim().is_empty() {
            return (Some(&rest[..fence]), body);
        }
        // a longer dash run or trailing text is content, keep looking
        search = fence + 1;
    }

    (None, content)
}

/// Read a mapping entry and render scalar values to their string form,
/// so `nohtml: true` and `nohtml: "true"` read alike.
fn get_scalar(map: &serde_yaml::Mapping, key: &str) -> Option<String> {
    match map.get(&serde_yaml::Value::String(key.to_string()))? {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
