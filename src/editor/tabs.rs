//! HTML / CSS / JavaScript editor tabs
//!
//! One `CodeEditorPanel` per language, with a tab strip choosing which one is
//! shown. Switching tabs never touches the buffers.

use super::keys::EditorLanguage;
use super::widget::{display_name, CodeEditorPanel};
use crate::config::Settings;
use crate::theme::ThemeColors;
use eframe::egui::{self, RichText, Ui};
use log::debug;
use std::hash::Hash;

/// Which language buffer the editor area shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTab {
    #[default]
    Html,
    Css,
    Js,
}

impl EditorTab {
    pub fn all() -> [EditorTab; 3] {
        [EditorTab::Html, EditorTab::Css, EditorTab::Js]
    }

    pub fn language(&self) -> EditorLanguage {
        match self {
            EditorTab::Html => EditorLanguage::Html,
            EditorTab::Css => EditorLanguage::Css,
            EditorTab::Js => EditorLanguage::JavaScript,
        }
    }

    /// Tab strip label.
    pub fn label(&self) -> &'static str {
        self.language().label()
    }
}

/// Output from the editor tabs.
#[derive(Debug, Default)]
pub struct EditorTabsOutput {
    /// Whether any buffer changed
    pub changed: bool,
    /// Name to confirm in the save toast, if the save icon was clicked
    pub save_requested: Option<String>,
}

/// Tabbed editors over the three page buffers.
pub struct EditorTabs<'a> {
    active: &'a mut EditorTab,
    html: &'a mut String,
    css: &'a mut String,
    js: &'a mut String,
    id_source: egui::Id,
}

impl<'a> EditorTabs<'a> {
    pub fn new(
        active: &'a mut EditorTab,
        html: &'a mut String,
        css: &'a mut String,
        js: &'a mut String,
    ) -> Self {
        Self {
            active,
            html,
            css,
            js,
            id_source: egui::Id::new("editor_tabs"),
        }
    }

    /// Distinguish these buffers from other sets shown at the same place.
    pub fn id_source(mut self, source: impl Hash) -> Self {
        self.id_source = egui::Id::new(source);
        self
    }

    pub fn show(self, ui: &mut Ui, settings: &Settings, colors: &ThemeColors) -> EditorTabsOutput {
        let mut output = EditorTabsOutput::default();

        ui.horizontal(|ui| {
            for tab in EditorTab::all() {
                let selected = *self.active == tab;
                let text = if selected {
                    RichText::new(tab.label()).strong().color(colors.editor.text)
                } else {
                    RichText::new(tab.label()).color(colors.text.secondary)
                };
                let button = egui::Button::new(text)
                    .fill(if selected {
                        colors.editor.background
                    } else {
                        egui::Color32::TRANSPARENT
                    })
                    .min_size(egui::vec2(72.0, 26.0));
                if ui.add(button).clicked() && !selected {
                    debug!("Editor tab switched to {}", tab.label());
                    *self.active = tab;
                }
            }
        });
        ui.add_space(4.0);

        let active = *self.active;
        let buffer = match active {
            EditorTab::Html => self.html,
            EditorTab::Css => self.css,
            EditorTab::Js => self.js,
        };

        let editor = CodeEditorPanel::new(buffer, active.language())
            .font_size(settings.font_size)
            .word_wrap(settings.word_wrap)
            .indent_width(settings.indent_width)
            .syntax_highlighting(settings.syntax_highlighting)
            .colors(colors.editor)
            .id(ui.id().with((self.id_source, active.label())))
            .show(ui);

        output.changed = editor.changed;
        if editor.save_clicked {
            output.save_requested = Some(display_name(None, active.language()));
        }
        output
    }
}
