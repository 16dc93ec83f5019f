//! Editor module for CRX Builder
//!
//! Pure text operations (abbreviation expansion, Tab handling) live next to
//! the egui widgets that use them: the code editor panel and the language
//! tabs.

pub mod abbreviation;
mod keys;
pub mod syntax;
mod tabs;
mod widget;

pub use keys::EditorLanguage;
pub use tabs::{EditorTab, EditorTabs};
pub use widget::CodeEditorPanel;
