//! Live preview of the page buffers
//!
//! `document` builds the composite HTML, `panel` shows it in the window and
//! `browser` hands it to the system browser or the clipboard.

mod browser;
mod document;
mod panel;

pub use browser::{copy_to_clipboard, open_in_browser};
pub use panel::{PreviewAction, PreviewPanel};
