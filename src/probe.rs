//! Editor configuration probe
//!
//! Auto-index mode is a vimwiki convention: links to directory-like targets
//! resolve to an `index.html` inside the directory. Whether it is active
//! lives in the editor's own configuration (`g:vimwiki_dir_link`), so the
//! probe asks a headless editor instance and reads the echoed value back
//! from stderr. No editor on PATH, or any answer other than `index`,
//! disables auto-index without error.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Query the editor for auto-index mode. The result is threaded into the
/// link policy as plain data; nothing else reads the environment.
pub fn detect_auto_index() -> bool {
    match editor_binary() {
        Some(editor) => query_dir_link(&editor).map(is_auto_index).unwrap_or(false),
        None => false,
    }
}

/// First compatible editor on PATH, vim before nvim.
fn editor_binary() -> Option<PathBuf> {
    which::which("vim").or_else(|_| which::which("nvim")).ok()
}

/// Echo `g:vimwiki_dir_link` from a headless editor and capture stderr,
/// where the echoed value lands.
fn query_dir_link(editor: &Path) -> Option<Vec<u8>> {
    let output = Command::new(editor)
        .args(["-c", "echo g:vimwiki_dir_link", "-c", ":q", "--headless"])
        .output()
        .ok()?;
    Some(output.stderr)
}

/// The editor answers with the raw option value; only the exact bytes
/// `index` enable auto-index mode.
fn is_auto_index(answer: Vec<u8>) -> bool {
    answer == b"index"
}
