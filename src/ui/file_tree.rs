//! File tree sidebar panel.
//!
//! Renders a static `FileNode` tree with chevrons, folder/file icons and a
//! name-based selection highlight. Folder open state lives in a
//! `TreeViewState` owned by the page; clicking a file hands back a detached
//! copy of it.

use crate::config::Settings;
use crate::project::{
    activate, file_count, is_selected, visible_rows, FileNode, SelectedFile, TreeViewState,
};
use crate::theme::ThemeColors;
use eframe::egui::{self, RichText, Sense, Ui, Vec2};
use log::debug;

/// Height of each tree row.
const ROW_HEIGHT: f32 = 22.0;

/// Output from the file tree.
#[derive(Debug, Default)]
pub struct FileTreeOutput {
    /// File that was clicked
    pub file_clicked: Option<SelectedFile>,
    /// New panel width if resized
    pub new_width: Option<f32>,
}

/// Render the rows of a tree into `ui`.
///
/// Returns the file copy if a file row was clicked this frame. Folder clicks
/// toggle `state` directly.
pub fn show_tree(
    ui: &mut Ui,
    nodes: &[FileNode],
    state: &mut TreeViewState,
    selected_name: Option<&str>,
    colors: &ThemeColors,
) -> Option<SelectedFile> {
    let mut clicked_path = None;

    for row in visible_rows(nodes, state) {
        let row_width = ui.available_width();
        let (row_rect, response) =
            ui.allocate_exact_size(Vec2::new(row_width, ROW_HEIGHT), Sense::click());

        if is_selected(row.node, selected_name) {
            ui.painter().rect_filled(row_rect, 4.0, colors.base.selected);
        } else if response.hovered() {
            ui.painter().rect_filled(row_rect, 4.0, colors.base.hover);
        }
        if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }

        let painter = ui.painter();
        let mut pos = egui::pos2(row_rect.left() + row.indent(), row_rect.center().y);

        if row.node.is_folder() {
            let chevron = if row.is_open { "⏷" } else { "⏵" };
            painter.text(
                pos,
                egui::Align2::LEFT_CENTER,
                chevron,
                egui::FontId::proportional(10.0),
                colors.text.muted,
            );
        }
        pos.x += 14.0;

        let icon = match (row.node.is_folder(), row.is_open) {
            (true, true) => "📂",
            (true, false) => "📁",
            (false, _) => "📄",
        };
        painter.text(
            pos,
            egui::Align2::LEFT_CENTER,
            icon,
            egui::FontId::proportional(13.0),
            colors.text.muted,
        );
        pos.x += 20.0;

        painter.text(
            pos,
            egui::Align2::LEFT_CENTER,
            &row.node.name,
            egui::FontId::proportional(13.0),
            colors.text.primary,
        );

        if response.clicked() {
            clicked_path = Some(row.path.clone());
        }
    }

    let path = clicked_path?;
    let selected = activate(nodes, &path, state);
    if selected.is_none() {
        debug!("Toggled folder at {:?}", path);
    }
    selected
}

/// "1 file", "12 files".
fn file_count_label(count: usize) -> String {
    if count == 1 {
        "1 file".to_string()
    } else {
        format!("{} files", count)
    }
}

/// File tree sidebar of the home page.
pub struct FileTreePanel<'a> {
    nodes: &'a [FileNode],
    state: &'a mut TreeViewState,
    selected_name: Option<&'a str>,
    width: f32,
}

impl<'a> FileTreePanel<'a> {
    pub fn new(nodes: &'a [FileNode], state: &'a mut TreeViewState) -> Self {
        Self {
            nodes,
            state,
            selected_name: None,
            width: 256.0,
        }
    }

    pub fn selected(mut self, name: Option<&'a str>) -> Self {
        self.selected_name = name;
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = width.clamp(Settings::MIN_FILE_TREE_WIDTH, Settings::MAX_FILE_TREE_WIDTH);
        self
    }

    /// Render the panel on the left of the window.
    pub fn show(self, ctx: &egui::Context, colors: &ThemeColors) -> FileTreeOutput {
        let mut output = FileTreeOutput::default();

        egui::SidePanel::left("file_tree_panel")
            .resizable(true)
            .default_width(self.width)
            .width_range(Settings::MIN_FILE_TREE_WIDTH..=Settings::MAX_FILE_TREE_WIDTH)
            .frame(
                egui::Frame::none()
                    .fill(colors.base.background_secondary)
                    .stroke(egui::Stroke::new(1.0, colors.base.border))
                    .inner_margin(egui::Margin::same(8.0)),
            )
            .show(ctx, |ui| {
                let panel_width = ui.available_width() + 16.0;
                if (panel_width - self.width).abs() > 1.0 {
                    output.new_width = Some(panel_width);
                }

                ui.horizontal(|ui| {
                    ui.label(RichText::new("📁").size(14.0));
                    ui.label(RichText::new("Project Files").size(12.0).strong());
                    ui.label(
                        RichText::new(file_count_label(file_count(self.nodes)))
                            .size(11.0)
                            .color(colors.text.muted),
                    );
                });
                ui.add_space(2.0);
                ui.separator();

                egui::ScrollArea::vertical()
                    .id_source("file_tree_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        output.file_clicked =
                            show_tree(ui, self.nodes, self.state, self.selected_name, colors);
                    });
            });

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_width_uses_settings_range() {
        let mut state = TreeViewState::new();
        let panel = FileTreePanel::new(&[], &mut state).width(9000.0);
        assert_eq!(panel.width, Settings::MAX_FILE_TREE_WIDTH);

        let mut state = TreeViewState::new();
        let panel = FileTreePanel::new(&[], &mut state).width(10.0);
        assert_eq!(panel.width, Settings::MIN_FILE_TREE_WIDTH);

        let mut settings = Settings {
            file_tree_width: 155.0,
            ..Settings::default()
        };
        settings.sanitize();
        let mut state = TreeViewState::new();
        let panel = FileTreePanel::new(&[], &mut state).width(settings.file_tree_width);
        assert_eq!(panel.width, 155.0);
    }

    #[test]
    fn test_file_count_label() {
        assert_eq!(file_count_label(1), "1 file");
        assert_eq!(file_count_label(0), "0 files");
        assert_eq!(file_count_label(12), "12 files");
    }
}
