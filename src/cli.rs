use std::env;
use std::path::PathBuf;

use clap::Parser;

/// vimwiki-markdown - Convert a vimwiki markdown page to HTML
///
/// Invoked per-file by vimwiki's `custom_wiki2html` hook:
///
/// ```vim
/// let g:vimwiki_list = [{
///     \ 'path': '~/wiki',
///     \ 'syntax': 'markdown',
///     \ 'ext': '.md',
///     \ 'custom_wiki2html': 'vimwiki_markdown',
///     \ }]
/// ```
///
/// The trailing template/root parameters may instead come from the
/// environment: `VIMWIKI_TEMPLATE_PATH`, `VIMWIKI_TEMPLATE_DEFAULT`,
/// `VIMWIKI_TEMPLATE_EXT`, `VIMWIKI_ROOT_PATH`. A root path of `-` means
/// "no root prefix" (output and stylesheet share a directory).
#[derive(Parser, Debug)]
#[command(name = "vimwiki_markdown")]
#[command(version)]
#[command(about = "Convert vimwiki markdown pages to HTML")]
pub struct Cli {
    /// Overwrite flag passed by vimwiki (unused)
    pub force: String,

    /// Wiki syntax (only "markdown" is supported)
    pub syntax: String,

    /// Wiki file extension (unused)
    pub extension: String,

    /// Directory the generated HTML file is written to
    pub output_dir: PathBuf,

    /// Wiki page to convert
    pub input_file: PathBuf,

    /// Stylesheet path passed by vimwiki (unused)
    pub css_file: String,

    /// Directory containing HTML templates
    pub template_path: Option<String>,

    /// Default template name, without extension
    pub template_default: Option<String>,

    /// Template file extension (e.g. ".html")
    pub template_ext: Option<String>,

    /// Prefix for the `%root_path%` placeholder ("-" for none)
    pub root_path: Option<String>,
}

/// Fully resolved run parameters, immutable for the run.
#[derive(Debug, Clone)]
pub struct Config {
    pub output_dir: PathBuf,
    pub input_file: PathBuf,
    pub template_path: String,
    pub template_default: String,
    pub template_ext: String,
    pub root_path: String,
}

impl Config {
    /// Resolve positional arguments with environment-variable fallbacks.
    pub fn resolve(cli: Cli) -> Config {
        Self::resolve_with(cli, |key| env::var(key).ok(), || {
            env::current_dir()
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
    }

    /// Resolution against an injected environment, so tests never touch
    /// the process environment.
    pub fn resolve_with(
        cli: Cli,
        lookup: impl Fn(&str) -> Option<String>,
        cwd: impl Fn() -> String,
    ) -> Config {
        let root_path = cli
            .root_path
            .or_else(|| lookup(crate::ENV_ROOT_PATH))
            .unwrap_or_else(cwd);

        Config {
            output_dir: cli.output_dir,
            input_file: cli.input_file,
            template_path: cli
                .template_path
                .or_else(|| lookup(crate::ENV_TEMPLATE_PATH))
                .unwrap_or_default(),
            template_default: cli
                .template_default
                .or_else(|| lookup(crate::ENV_TEMPLATE_DEFAULT))
                .unwrap_or_default(),
            template_ext: cli
                .template_ext
                .or_else(|| lookup(crate::ENV_TEMPLATE_EXT))
                .unwrap_or_default(),
            // "-" means the stylesheet sits next to the output file
            root_path: if root_path == "-" { String::new() } else { root_path },
        }
    }

    /// Base name of the input file with its extension stripped.
    pub fn input_stem(&self) -> String {
        self.input_file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Where the rendered page is written: `<output-dir>/<input-basename>.html`
    pub fn output_file(&self) -> PathBuf {
        self.output_dir.join(format!("{}.html", self.input_stem()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("vimwiki_markdown").chain(args.iter().copied()))
    }

    const BASE: &[&str] = &["1", "markdown", "md", "/out", "/wiki/page.md", "style.css"];

    #[test]
    fn test_positional_args() {
        let cli = cli(BASE);
        assert_eq!(cli.syntax, "markdown");
        assert_eq!(cli.input_file, PathBuf::from("/wiki/page.md"));
        assert!(cli.template_path.is_none());
    }

    #[test]
    fn test_env_fallbacks() {
        let config = Config::resolve_with(
            cli(BASE),
            |key| match key {
                crate::ENV_TEMPLATE_PATH => Some("/templates".into()),
                crate::ENV_TEMPLATE_DEFAULT => Some("default".into()),
                crate::ENV_TEMPLATE_EXT => Some(".tpl".into()),
                crate::ENV_ROOT_PATH => Some("../".into()),
                _ => None,
            },
            || "/cwd".into(),
        );
        assert_eq!(config.template_path, "/templates");
        assert_eq!(config.template_default, "default");
        assert_eq!(config.template_ext, ".tpl");
        assert_eq!(config.root_path, "../");
    }

    #[test]
    fn test_positional_wins_over_env() {
        let args: Vec<&str> = BASE
            .iter()
            .copied()
            .chain(["/tpl", "page", ".html", "../../"])
            .collect();
        let config = Config::resolve_with(cli(&args), |_| Some("from-env".into()), || "/cwd".into());
        assert_eq!(config.template_path, "/tpl");
        assert_eq!(config.template_default, "page");
        assert_eq!(config.root_path, "../../");
    }

    #[test]
    fn test_root_path_falls_back_to_cwd() {
        let config = Config::resolve_with(cli(BASE), |_| None, || "/somewhere".into());
        assert_eq!(config.root_path, "/somewhere");
    }

    #[test]
    fn test_root_path_dash_sentinel() {
        let args: Vec<&str> = BASE.iter().copied().chain(["", "", "", "-"]).collect();
        let config = Config::resolve_with(cli(&args), |_| None, || "/cwd".into());
        assert_eq!(config.root_path, "");
    }

    #[test]
    fn test_output_file_name() {
        let config = Config::resolve_with(cli(BASE), |_| None, || String::new());
        assert_eq!(config.input_stem(), "page");
        assert_eq!(config.output_file(), PathBuf::from("/out/page.html"));
    }
}
