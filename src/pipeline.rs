//! The conversion pipeline
//!
//! Strictly sequential per-file run: read the page, split front matter,
//! convert the body, select and render the template, write the output.
//! The auto-index flag is supplied by the caller (see `probe`); everything
//! else comes from the resolved [`Config`].

use std::fs;
use std::io;
use std::path::PathBuf;

use chrono::Local;

use crate::cli::Config;
use crate::convert::{self, LinkPolicy};
use crate::extensions::ExtensionSet;
use crate::frontmatter;
use crate::template::{self, Placeholders};

/// What a run produced.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// The rendered page was written here
    Written(PathBuf),
    /// The page carried `nohtml: true`; nothing was written
    Suppressed,
}

/// Convert one wiki page. Filesystem failures (missing input, unreadable
/// template, unwritable output directory) propagate to the caller.
pub fn run(config: &Config, auto_index: bool) -> io::Result<Outcome> {
    let raw = fs::read_to_string(&config.input_file)?;
    let doc = frontmatter::parse(&raw);
    if doc.nohtml {
        return Ok(Outcome::Suppressed);
    }

    let extensions = ExtensionSet::from_env();
    let policy = LinkPolicy { auto_index };
    let content = convert::to_html(&doc.body, &extensions, &policy);

    let template = template::select(config, doc.template.as_deref())?;
    let values = Placeholders {
        title: doc.title.unwrap_or_else(|| config.input_stem()),
        date: doc
            .date
            .unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string()),
        root_path: config.root_path.clone(),
        content,
    };

    let output_file = config.output_file();
    fs::write(&output_file, template::render(&template, &values))?;
    Ok(Outcome::Written(output_file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn config(dir: &Path, input: &str) -> Config {
        Config {
            output_dir: dir.to_path_buf(),
            input_file: dir.join(input),
            template_path: dir.to_string_lossy().into_owned(),
            template_default: "default".into(),
            template_ext: ".html".into(),
            root_path: String::new(),
        }
    }

    #[test]
    fn test_scenario_title_and_wiki_link() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("page.md"),
            "---\ntitle: Hello\n---\n# Hi\n[Page](sub/page)\n",
        )
        .unwrap();
        fs::write(dir.path().join("default.html"), "%title%...%content%").unwrap();

        let outcome = run(&config(dir.path(), "page.md"), false).unwrap();
        assert_eq!(outcome, Outcome::Written(dir.path().join("page.html")));

        let html = fs::read_to_string(dir.path().join("page.html")).unwrap();
        assert!(html.starts_with("Hello..."));
        assert!(html.contains("<a href=\"sub/page.html\">Page</a>"));
    }

    #[test]
    fn test_defaults_without_front_matter() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("my-page.md"), "# Hi\n").unwrap();
        fs::write(
            dir.path().join("default.html"),
            "<title>%title%</title><meta content=\"%date%\">",
        )
        .unwrap();

        run(&config(dir.path(), "my-page.md"), false).unwrap();

        let html = fs::read_to_string(dir.path().join("my-page.html")).unwrap();
        // title falls back to the basename, date to today
        assert!(html.contains("<title>my-page</title>"));
        let today = Local::now().format("%Y-%m-%d").to_string();
        assert!(html.contains(&today));
    }

    #[test]
    fn test_nohtml_suppresses_output() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("page.md"), "---\nnohtml: true\n---\nBody\n").unwrap();

        let outcome = run(&config(dir.path(), "page.md"), false).unwrap();
        assert_eq!(outcome, Outcome::Suppressed);
        assert!(!dir.path().join("page.html").exists());
    }

    #[test]
    fn test_root_path_substituted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("page.md"), "Body\n").unwrap();
        fs::write(
            dir.path().join("default.html"),
            "href=\"%root_path%style.css\"",
        )
        .unwrap();

        // resolver already mapped "-" to the empty string
        run(&config(dir.path(), "page.md"), false).unwrap();
        let html = fs::read_to_string(dir.path().join("page.html")).unwrap();
        assert!(html.contains("href=\"style.css\""));
    }

    #[test]
    fn test_front_matter_template_override() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("page.md"),
            "---\ntemplate: fancy\n---\nBody\n",
        )
        .unwrap();
        fs::write(dir.path().join("default.html"), "default %content%").unwrap();
        fs::write(dir.path().join("fancy.html"), "fancy %content%").unwrap();

        run(&config(dir.path(), "page.md"), false).unwrap();
        let html = fs::read_to_string(dir.path().join("page.html")).unwrap();
        assert!(html.starts_with("fancy "));
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(&config(dir.path(), "absent.md"), false).is_err());
    }

    #[test]
    fn test_auto_index_threaded_into_links() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("page.md"), "[Dir](notes/)\n").unwrap();
        fs::write(dir.path().join("default.html"), "%content%").unwrap();

        run(&config(dir.path(), "page.md"), true).unwrap();
        let html = fs::read_to_string(dir.path().join("page.html")).unwrap();
        assert!(html.contains("href=\"notes/index.html\""));
    }
}
