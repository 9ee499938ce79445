use std::process;

use clap::Parser;
use vimwiki_markdown::{probe, Cli, Config, SUPPORTED_SYNTAX};

fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    if cli.syntax != SUPPORTED_SYNTAX {
        eprintln!("Unsupported syntax: {}", cli.syntax);
        process::exit(1);
    }

    let auto_index = probe::detect_auto_index();
    let config = Config::resolve(cli);
    vimwiki_markdown::run(&config, auto_index)?;
    Ok(())
}
