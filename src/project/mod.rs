//! Project data: the static file trees shown in the sidebar and on template
//! pages, and the built-in template catalogue.

pub mod templates;
pub mod tree;

pub use templates::{starter_project, template, StructureEntry, TemplateInfo, TemplateKind};
pub use tree::{
    activate, file_count, is_selected, visible_rows, FileNode, SelectedFile, TreeViewState,
};
