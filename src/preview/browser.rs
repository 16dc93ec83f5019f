//! Handing the preview to the outside world
//!
//! The native window cannot run the user's scripts, so "Open in Browser"
//! writes a sandboxed host page to the temp directory and opens it with the
//! system browser. The composite document can also be copied to the
//! clipboard.

use super::document::{sandboxed_host_page, SandboxPolicy};
use crate::error::{Error, Result};
use arboard::Clipboard;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory under the OS temp dir holding preview pages.
const PREVIEW_DIR_NAME: &str = "crx-builder";

/// File name of the preview host page.
const PREVIEW_FILE_NAME: &str = "preview.html";

/// Default location of the preview host page.
pub fn preview_path() -> PathBuf {
    std::env::temp_dir()
        .join(PREVIEW_DIR_NAME)
        .join(PREVIEW_FILE_NAME)
}

/// Write the sandboxed host page for `document` into `dir`.
///
/// Returns the path of the written page. The page is overwritten on every
/// call; it is a throwaway artifact, not a saved project.
pub fn write_preview_in(dir: &Path, document: &str) -> Result<PathBuf> {
    let path = dir.join(PREVIEW_FILE_NAME);
    fs::create_dir_all(dir).map_err(|source| Error::PreviewWrite {
        path: dir.to_path_buf(),
        source,
    })?;

    let page = sandboxed_host_page(document, SandboxPolicy::default());
    fs::write(&path, page).map_err(|source| Error::PreviewWrite {
        path: path.clone(),
        source,
    })?;

    debug!("Wrote preview page ({} bytes) to {}", document.len(), path.display());
    Ok(path)
}

/// Write the preview page to the temp directory and open it in the browser.
pub fn open_in_browser(document: &str) -> Result<PathBuf> {
    let path = preview_path();
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let path = write_preview_in(dir, document)?;

    open::that(&path).map_err(|source| Error::BrowserOpen {
        path: path.clone(),
        source,
    })?;

    info!("Opened preview in browser: {}", path.display());
    Ok(path)
}

/// Copy the composite document to the system clipboard.
pub fn copy_to_clipboard(document: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(document)?;
    info!("Copied preview document ({} bytes) to clipboard", document.len());
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
