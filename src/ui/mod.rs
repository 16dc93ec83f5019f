//! UI components for CRX Builder
//!
//! Shell widgets (header, side menu, file tree) and the page views.

mod file_tree;
mod header;
pub mod home_page;
pub mod not_found;
mod side_menu;
pub mod template_page;

pub use file_tree::FileTreePanel;
pub use header::{Header, HeaderAction};
pub use side_menu::SideMenu;
