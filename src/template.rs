//! Template selection and placeholder substitution
//!
//! Templates are plain HTML carrying any of the literal tokens `%title%`,
//! `%date%`, `%root_path%` and `%content%`. Substitution is sequential
//! literal replacement; the tokens are disjoint and non-recursive (a value
//! containing another token's literal text would collide, which is accepted).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::cli::Config;

/// Built-in page skeleton used when no template file is found.
pub const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
    <head>
        <meta charset="UTF-8" />
        <meta name="date" content="%date%" scheme="YYYY-MM-DD">
        <meta name="viewport" content="width=device-width" />
        <title>%title%</title>
        <link rel="stylesheet" href="%root_path%style.css" type="text/css"
         media="screen" title="no title" charset="utf-8">
        <link rel="stylesheet" href="%root_path%pygmentize.css" type="text/css"
         media="screen" title="no title" charset="utf-8">
    </head>
    <body>

%content%

    </body>
</html>
"#;

/// Resolved values for the placeholder tokens.
#[derive(Debug, Clone)]
pub struct Placeholders {
    pub title: String,
    pub date: String,
    pub root_path: String,
    pub content: String,
}

/// Template file location: `<template-dir>/<name><ext>`.
///
/// The extension is appended verbatim, as the host editor supplies it
/// (typically with a leading dot).
pub fn template_file(template_path: &str, name: &str, ext: &str) -> PathBuf {
    let joined = Path::new(template_path).join(name);
    PathBuf::from(format!("{}{}", joined.display(), ext))
}

/// Select the template for this run.
///
/// The on-disk default template replaces the built-in when its file exists;
/// a front-matter override replaces that in turn. A missing override file
/// silently keeps the previous selection. Reading an existing file that
/// fails propagates the underlying error.
pub fn select(config: &Config, override_name: Option<&str>) -> io::Result<String> {
    let mut template = DEFAULT_TEMPLATE.to_string();

    let default_file = template_file(
        &config.template_path,
        &config.template_default,
        &config.template_ext,
    );
    if default_file.is_file() {
        template = fs::read_to_string(&default_file)?;
    }

    if let Some(name) = override_name {
        let file = template_file(&config.template_path, name, &config.template_ext);
        if file.is_file() {
            template = fs::read_to_string(&file)?;
        }
    }

    Ok(template)
}

/// Substitute every placeholder token with its resolved value.
pub fn render(template: &str, values: &Placeholders) -> String {
    template
        .replace("%title%", &values.title)
        .replace("%date%", &values.date)
        .replace("%root_path%", &values.root_path)
        .replace("%content%", &values.content)
}
