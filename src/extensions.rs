//! Markdown extension configuration
//!
//! `VIMWIKI_MARKDOWN_EXTENSIONS` maps extension ids to per-extension config
//! objects, either as a JSON object (`{"tables": {}, "toc": {}}`) or, for
//! backward compatibility, a comma-separated id list (`"tables,toc"`). A
//! fixed baseline set always loads with empty configuration.

use std::collections::BTreeMap;
use std::env;

use pulldown_cmark::Options;
use serde_json::Value;

/// Extensions every run loads, with empty configuration.
pub const BASELINE: &[&str] = &["fenced_code", "tables", "codehilite"];

/// Merged extension-id → config mapping for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtensionSet {
    configs: BTreeMap<String, Value>,
}

impl Default for ExtensionSet {
    fn default() -> Self {
        Self::parse("")
    }
}

impl ExtensionSet {
    /// Read the extension configuration from the environment.
    pub fn from_env() -> ExtensionSet {
        Self::parse(&env::var(crate::ENV_MARKDOWN_EXTENSIONS).unwrap_or_default())
    }

    /// Parse a raw configuration value and merge in the baseline set.
    ///
    /// Accepts a JSON object (id → config), a JSON array of ids, or the
    /// legacy comma-separated id list. Malformed JSON falls back to the
    /// legacy form; it is never an error.
    pub fn parse(raw: &str) -> ExtensionSet {
        let mut configs: BTreeMap<String, Value> = match serde_json::from_str(raw) {
            Ok(Value::Object(map)) => map.into_iter().collect(),
            Ok(Value::Array(ids)) => ids
                .into_iter()
                .filter_map(|id| match id {
                    Value::String(id) => Some((id, Value::Object(Default::default()))),
                    _ => None,
                })
                .collect(),
            _ => raw
                .split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(|id| (id.to_string(), Value::Object(Default::default())))
                .collect(),
        };

        for id in BASELINE {
            configs
                .entry((*id).to_string())
                .or_insert_with(|| Value::Object(Default::default()));
        }

        ExtensionSet { configs }
    }

    /// Whether an extension id is loaded for this run.
    pub fn enabled(&self, id: &str) -> bool {
        self.configs.contains_key(id)
    }

    /// Config object for an extension, if present. The engine itself takes
    /// no per-extension options; configs are carried but not interpreted.
    pub fn config(&self, id: &str) -> Option<&Value> {
        self.configs.get(id)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.configs.keys().map(String::as_str)
    }

    /// Map the loaded ids onto engine options. Unknown ids have no effect;
    /// `fenced_code` is inherent to the dialect and `codehilite` is handled
    /// by the highlighter rather than a parser flag.
    pub fn options(&self) -> Options {
        let mut options = Options::empty();
        for id in self.configs.keys() {
            match id.as_str() {
                "tables" => options.insert(Options::ENABLE_TABLES),
                "footnotes" => options.insert(Options::ENABLE_FOOTNOTES),
                "strikethrough" | "tilde" => options.insert(Options::ENABLE_STRIKETHROUGH),
                "tasklists" | "task_list" => options.insert(Options::ENABLE_TASKLISTS),
                "smarty" => options.insert(Options::ENABLE_SMART_PUNCTUATION),
                "attr_list" => options.insert(Options::ENABLE_HEADING_ATTRIBUTES),
                "def_list" => options.insert(Options::ENABLE_DEFINITION_LIST),
                "wikilinks" => options.insert(Options::ENABLE_WIKILINKS),
                _ => {}
            }
        }
        options
    }
}
