pub mod cli;
pub mod convert;
pub mod extensions;
pub mod frontmatter;
pub mod highlight;
pub mod pipeline;
pub mod probe;
pub mod template;

pub use cli::{Cli, Config};
pub use convert::LinkPolicy;
pub use extensions::ExtensionSet;
pub use pipeline::{run, Outcome};

/// The only markup dialect this converter handles
pub const SUPPORTED_SYNTAX: &str = "markdown";

/// Environment fallbacks for the optional trailing CLI parameters
pub const ENV_TEMPLATE_PATH: &str = "VIMWIKI_TEMPLATE_PATH";
pub const ENV_TEMPLATE_DEFAULT: &str = "VIMWIKI_TEMPLATE_DEFAULT";
pub const ENV_TEMPLATE_EXT: &str = "VIMWIKI_TEMPLATE_EXT";
pub const ENV_ROOT_PATH: &str = "VIMWIKI_ROOT_PATH";

/// Extra markdown extensions, JSON object or legacy comma-separated list
pub const ENV_MARKDOWN_EXTENSIONS: &str = "VIMWIKI_MARKDOWN_EXTENSIONS";
