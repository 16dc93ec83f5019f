//! Home page: editor tabs and live preview
//!
//! The "Editor" tab shows the HTML/CSS/JavaScript editors (or the file
//! picked from the tree) and, on wide windows, the live preview beside
//! them. The "Preview" tab gives the preview the whole page.

use crate::config::Settings;
use crate::editor::{CodeEditorPanel, EditorTabs};
use crate::preview::{PreviewAction, PreviewPanel};
use crate::state::{HomePage, MainTab};
use crate::theme::ThemeColors;
use eframe::egui::{self, RichText, Ui};
use log::debug;

/// Output from the home page.
#[derive(Debug, Default)]
pub struct HomePageOutput {
    /// Name to confirm in a save toast
    pub save_requested: Option<String>,
    /// Preview title bar action, with the document it applies to
    pub preview_action: Option<(PreviewAction, String)>,
}

pub fn show(
    ui: &mut Ui,
    page: &mut HomePage,
    settings: &Settings,
    colors: &ThemeColors,
    narrow: bool,
) -> HomePageOutput {
    let mut output = HomePageOutput::default();

    show_main_tabs(ui, &mut page.main_tab, colors);
    ui.add_space(12.0);

    match page.main_tab {
        MainTab::Editor if narrow => {
            show_editor(ui, page, settings, colors, &mut output);
        }
        MainTab::Editor => {
            let total = ui.available_width();
            let editor_width = total * settings.preview_split_ratio;
            ui.horizontal_top(|ui| {
                ui.allocate_ui(egui::vec2(editor_width - 8.0, ui.available_height()), |ui| {
                    ui.vertical(|ui| show_editor(ui, page, settings, colors, &mut output));
                });
                ui.add_space(16.0);
                ui.vertical(|ui| show_preview(ui, page, settings, colors, &mut output));
            });
        }
        MainTab::Preview => {
            show_preview(ui, page, settings, colors, &mut output);
        }
    }

    output
}

fn show_main_tabs(ui: &mut Ui, active: &mut MainTab, colors: &ThemeColors) {
    ui.horizontal(|ui| {
        for (tab, icon) in [(MainTab::Editor, "</>"), (MainTab::Preview, "👁")] {
            let selected = *active == tab;
            let text = RichText::new(format!("{}  {}", icon, tab.label())).size(14.0);
            let button = if selected {
                egui::Button::new(text.color(egui::Color32::WHITE)).fill(colors.ui.accent)
            } else {
                egui::Button::new(text).fill(colors.base.background_secondary)
            }
            .rounding(8.0)
            .min_size(egui::vec2(110.0, 36.0));

            if ui.add(button).clicked() && !selected {
                debug!("Main tab switched to {}", tab.label());
                *active = tab;
            }
        }
    });
}

fn show_editor(
    ui: &mut Ui,
    page: &mut HomePage,
    settings: &Settings,
    colors: &ThemeColors,
    output: &mut HomePageOutput,
) {
    let language = page.active_language();
    let file_id = file_editor_id(ui.id(), page);

    if let Some(file) = &mut page.editor.selected_file {
        let mut close = false;
        ui.horizontal(|ui| {
            ui.label(RichText::new(&file.name).strong());
            if ui
                .small_button("✕")
                .on_hover_text("Back to the HTML, CSS and JavaScript editors")
                .clicked()
            {
                close = true;
            }
        });
        ui.add_space(4.0);

        let editor = CodeEditorPanel::new(&mut file.content, language)
            .file_name(Some(file.name.as_str()))
            .font_size(settings.font_size)
            .word_wrap(settings.word_wrap)
            .indent_width(settings.indent_width)
            .syntax_highlighting(settings.syntax_highlighting)
            .colors(colors.editor)
            .id(file_id)
            .show(ui);
        if editor.save_clicked {
            output.save_requested = Some(file.name.clone());
        }

        if close {
            page.close_file();
        }
        return;
    }

    let tabs_key = page.tabs_key();
    let editor = &mut page.editor;
    let tabs = EditorTabs::new(
        &mut page.editor_tab,
        &mut editor.html,
        &mut editor.css,
        &mut editor.js,
    )
    .id_source(tabs_key)
    .show(ui, settings, colors);
    if tabs.save_requested.is_some() {
        output.save_requested = tabs.save_requested;
    }
}

/// Widget id of the editor for the file opened from the tree.
fn file_editor_id(parent: egui::Id, page: &HomePage) -> egui::Id {
    parent.with(("selected_file_editor", page.selected_file_key()))
}

fn show_preview(
    ui: &mut Ui,
    page: &HomePage,
    settings: &Settings,
    colors: &ThemeColors,
    output: &mut HomePageOutput,
) {
    let editor = &page.editor;
    let preview = PreviewPanel::new(&editor.html, &editor.css, &editor.js).show(ui, settings, colors);
    if let Some(action) = preview.action {
        output.preview_action = Some((action, preview.document));
    }
}
