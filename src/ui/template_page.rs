//! SEO starter template pages
//!
//! Heading, description, feature and use-case lists, the "Use This Template"
//! button, and either the template's browsable file tree with a read-only
//! viewer for the picked file or a grid of file summary cards.

use super::file_tree::show_tree;
use crate::config::Settings;
use crate::editor::{CodeEditorPanel, EditorLanguage};
use crate::project::{StructureEntry, TemplateInfo};
use crate::state::TemplatePage;
use crate::theme::ThemeColors;
use eframe::egui::{self, RichText, Ui};

/// Height of the file tree card.
const TREE_CARD_HEIGHT: f32 = 400.0;

/// Width at which the two-column layout kicks in.
const TWO_COLUMN_MIN_WIDTH: f32 = 900.0;

/// Output from a template page.
#[derive(Debug, Default)]
pub struct TemplatePageOutput {
    /// "Use This Template" was clicked
    pub use_template: bool,
}

pub fn heading(info: &TemplateInfo) -> String {
    format!("{} Template", info.title)
}

/// Number of card columns for the structure grid.
pub fn grid_columns(width: f32) -> usize {
    if width >= 1024.0 {
        3
    } else if width >= 640.0 {
        2
    } else {
        1
    }
}

/// Show a template page.
pub fn show(
    ui: &mut Ui,
    page: &mut TemplatePage,
    settings: &Settings,
    colors: &ThemeColors,
) -> TemplatePageOutput {
    let mut output = TemplatePageOutput::default();
    let info = page.info();

    egui::ScrollArea::vertical()
        .id_source("template_page_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.set_max_width(1152.0);
            ui.label(RichText::new(heading(info)).size(28.0).strong());
            ui.add_space(8.0);
            ui.label(RichText::new(&info.description).size(17.0).color(colors.text.muted));
            ui.add_space(16.0);

            let two_columns = ui.available_width() >= TWO_COLUMN_MIN_WIDTH;
            if two_columns {
                ui.columns(2, |columns| {
                    show_overview(&mut columns[0], info, colors, &mut output);
                    show_side_card(&mut columns[1], page, colors);
                });
            } else {
                show_overview(ui, info, colors, &mut output);
                ui.add_space(16.0);
                show_side_card(ui, page, colors);
            }

            let viewer_id = ui.id().with(("template_file_viewer", page.viewer_key()));
            if let Some(file) = &mut page.selected_file {
                ui.add_space(16.0);
                let language = EditorLanguage::from_file_name(&file.name);
                CodeEditorPanel::new(&mut file.content, language)
                    .file_name(Some(file.name.as_str()))
                    .read_only(true)
                    .font_size(settings.font_size)
                    .word_wrap(settings.word_wrap)
                    .syntax_highlighting(settings.syntax_highlighting)
                    .colors(colors.editor)
                    .id(viewer_id)
                    .show(ui);
            }

            if !info.structure.is_empty() {
                ui.add_space(24.0);
                show_structure(ui, &info.structure, colors);
            }
            ui.add_space(16.0);
        });

    output
}

fn show_overview(
    ui: &mut Ui,
    info: &TemplateInfo,
    colors: &ThemeColors,
    output: &mut TemplatePageOutput,
) {
    bullet_section(ui, "Features", &info.features, colors);
    ui.add_space(16.0);
    bullet_section(ui, "Use Cases", &info.use_cases, colors);
    ui.add_space(16.0);

    let button = egui::Button::new(
        RichText::new("Use This Template  ➡")
            .size(15.0)
            .color(egui::Color32::WHITE),
    )
    .fill(colors.ui.accent)
    .min_size(egui::vec2(180.0, 40.0));
    if ui.add(button).clicked() {
        output.use_template = true;
    }
}

fn bullet_section(ui: &mut Ui, title: &str, items: &[String], colors: &ThemeColors) {
    ui.label(RichText::new(title).size(20.0).strong());
    ui.add_space(6.0);
    for item in items {
        ui.horizontal_wrapped(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("•").color(colors.text.muted));
            ui.label(item);
        });
    }
}

/// Right-hand card: the template file tree, or a title banner for
/// templates without one.
fn show_side_card(ui: &mut Ui, page: &mut TemplatePage, colors: &ThemeColors) {
    let info = page.info();

    if !info.has_file_tree() {
        egui::Frame::none()
            .fill(colors.editor.background)
            .rounding(8.0)
            .inner_margin(egui::Margin::same(24.0))
            .show(ui, |ui| {
                ui.set_min_height(160.0);
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.label(
                        RichText::new(&info.title)
                            .size(20.0)
                            .strong()
                            .color(colors.editor.text),
                    );
                    ui.label(RichText::new(&info.description).color(colors.editor.line));
                });
            });
        return;
    }

    card(ui, "Template Files", colors, |ui| {
        egui::ScrollArea::vertical()
            .id_source("template_tree_scroll")
            .max_height(TREE_CARD_HEIGHT)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let selected_name = page.selected_file.as_ref().map(|file| file.name.as_str());
                if let Some(file) = show_tree(ui, &info.files, &mut page.tree, selected_name, colors)
                {
                    page.view_file(file);
                }
            });
    });
}

fn show_structure(ui: &mut Ui, entries: &[StructureEntry], colors: &ThemeColors) {
    ui.label(RichText::new("Template Code Structure").size(20.0).strong());
    ui.add_space(6.0);
    ui.label(RichText::new("This Chrome extension template includes:").color(colors.text.muted));
    ui.add_space(12.0);

    let columns = grid_columns(ui.available_width());
    for chunk in entries.chunks(columns) {
        ui.columns(columns, |cols| {
            for (col, entry) in cols.iter_mut().zip(chunk) {
                egui::Frame::none()
                    .stroke(egui::Stroke::new(1.0, colors.base.border))
                    .rounding(8.0)
                    .inner_margin(egui::Margin::same(14.0))
                    .show(col, |ui| {
                        ui.set_min_width(ui.available_width());
                        ui.label(RichText::new(&entry.file).strong());
                        ui.add_space(4.0);
                        ui.label(RichText::new(&entry.summary).size(13.0).color(colors.text.muted));
                    });
            }
        });
        ui.add_space(12.0);
    }
}

fn card(ui: &mut Ui, title: &str, colors: &ThemeColors, add_contents: impl FnOnce(&mut Ui)) {
    egui::Frame::none()
        .stroke(egui::Stroke::new(1.0, colors.base.border))
        .rounding(8.0)
        .show(ui, |ui| {
            egui::Frame::none()
                .fill(colors.base.background_secondary)
                .rounding(egui::Rounding {
                    nw: 8.0,
                    ne: 8.0,
                    sw: 0.0,
                    se: 0.0,
                })
                .inner_margin(egui::Margin::same(14.0))
                .show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.label(RichText::new(title).strong());
                });
            egui::Frame::none()
                .inner_margin(egui::Margin::same(6.0))
                .show(ui, add_contents);
        });
}
