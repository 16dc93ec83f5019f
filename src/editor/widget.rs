//! Code editor panel
//!
//! A header line (file name or language, save icon) above a multi-line,
//! syntax highlighted `TextEdit`. The Tab key is taken away from the
//! `TextEdit` before it runs and routed through [`handle_tab`] instead, so it
//! never moves focus and never inserts a literal tab character.

use super::keys::{handle_tab, EditorLanguage, TabAction};
use super::syntax::highlight_layout_job;
use crate::theme::EditorColors;
use eframe::egui::text::{CCursor, CCursorRange};
use eframe::egui::{self, Event, FontId, Key, RichText, ScrollArea, TextEdit, Ui};
use log::debug;
use std::sync::Arc;

/// Result of showing the code editor panel.
#[derive(Debug, Default)]
pub struct CodeEditorOutput {
    /// Whether the content was modified this frame.
    pub changed: bool,
    /// Whether the save icon was clicked.
    pub save_clicked: bool,
    /// What a Tab press did, if one was handled.
    pub tab_action: Option<TabAction>,
}

/// Name shown in the editor header and in the save toast.
pub fn display_name(file_name: Option<&str>, language: EditorLanguage) -> String {
    file_name.unwrap_or(language.label()).to_string()
}

/// A code editor over a borrowed buffer.
///
/// # Example
///
/// ```ignore
/// let output = CodeEditorPanel::new(&mut page.editor.html, EditorLanguage::Html)
///     .font_size(settings.font_size)
///     .indent_width(settings.indent_width)
///     .colors(colors.editor)
///     .show(ui);
/// ```
pub struct CodeEditorPanel<'a> {
    content: &'a mut String,
    language: EditorLanguage,
    file_name: Option<&'a str>,
    font_size: f32,
    word_wrap: bool,
    indent_width: u8,
    syntax_highlighting: bool,
    read_only: bool,
    colors: EditorColors,
    id: Option<egui::Id>,
}

impl<'a> CodeEditorPanel<'a> {
    pub fn new(content: &'a mut String, language: EditorLanguage) -> Self {
        Self {
            content,
            language,
            file_name: None,
            font_size: 14.0,
            word_wrap: true,
            indent_width: 2,
            syntax_highlighting: true,
            read_only: false,
            colors: EditorColors::dark(),
            id: None,
        }
    }

    /// Show a file name in the header instead of the language label.
    #[must_use]
    pub fn file_name(mut self, name: Option<&'a str>) -> Self {
        self.file_name = name;
        self
    }

    #[must_use]
    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    #[must_use]
    pub fn word_wrap(mut self, wrap: bool) -> Self {
        self.word_wrap = wrap;
        self
    }

    /// Spaces inserted by Tab when no abbreviation applies.
    #[must_use]
    pub fn indent_width(mut self, width: u8) -> Self {
        self.indent_width = width;
        self
    }

    #[must_use]
    pub fn syntax_highlighting(mut self, enabled: bool) -> Self {
        self.syntax_highlighting = enabled;
        self
    }

    /// Disable editing and hide the save icon.
    #[must_use]
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    #[must_use]
    pub fn colors(mut self, colors: EditorColors) -> Self {
        self.colors = colors;
        self
    }

    /// Set a custom ID for the editor (for cursor state persistence).
    #[must_use]
    pub fn id(mut self, id: egui::Id) -> Self {
        self.id = Some(id);
        self
    }

    /// Show the panel and return what happened.
    pub fn show(mut self, ui: &mut Ui) -> CodeEditorOutput {
        let mut output = CodeEditorOutput::default();
        let id = self
            .id
            .unwrap_or_else(|| ui.id().with(("code_editor", self.language.label())));
        let colors = self.colors;
        let title = display_name(self.file_name, self.language);

        // ─────────────────────────────────────────────────────────────────────
        // Header
        // ─────────────────────────────────────────────────────────────────────
        egui::Frame::none()
            .fill(colors.background.gamma_multiply(0.6))
            .rounding(egui::Rounding {
                nw: 8.0,
                ne: 8.0,
                sw: 0.0,
                se: 0.0,
            })
            .inner_margin(egui::Margin::symmetric(10.0, 6.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&title).size(13.0).strong().color(colors.line));
                    if !self.read_only {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            let save = ui
                                .add(
                                    egui::Button::new(RichText::new("💾").color(colors.line))
                                        .frame(false),
                                )
                                .on_hover_text("Save file");
                            output.save_clicked = save.clicked();
                        });
                    }
                });
            });

        // ─────────────────────────────────────────────────────────────────────
        // Tab interception (must run before the TextEdit sees the events)
        // ─────────────────────────────────────────────────────────────────────
        if let Some(action) = self.intercept_tab(ui, id) {
            output.changed = true;
            output.tab_action = Some(action);
        }

        // ─────────────────────────────────────────────────────────────────────
        // Code area
        // ─────────────────────────────────────────────────────────────────────
        let font_size = self.font_size;
        let word_wrap = self.word_wrap;
        let highlighting = self.syntax_highlighting;
        let token = self.language.syntax_token();
        let mut layouter = move |ui: &Ui, text: &str, wrap_width: f32| -> Arc<egui::Galley> {
            let mut job = highlight_layout_job(
                text,
                token,
                colors.is_dark(),
                highlighting,
                FontId::monospace(font_size),
                colors.text,
            );
            job.wrap.max_width = if word_wrap { wrap_width } else { f32::INFINITY };
            ui.fonts(|f| f.layout_job(job))
        };

        let hint = format!("Write your {} code here...", self.language.label());
        let read_only = self.read_only;
        let content = &mut *self.content;

        egui::Frame::none()
            .fill(colors.background)
            .rounding(egui::Rounding {
                nw: 0.0,
                ne: 0.0,
                sw: 8.0,
                se: 8.0,
            })
            .inner_margin(egui::Margin::same(12.0))
            .show(ui, |ui| {
                ScrollArea::both()
                    .id_source(id.with("scroll"))
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let response = TextEdit::multiline(content)
                            .id(id)
                            .frame(false)
                            .lock_focus(true)
                            .interactive(!read_only)
                            .font(FontId::monospace(font_size))
                            .hint_text(hint)
                            .desired_width(f32::INFINITY)
                            .desired_rows(24)
                            .layouter(&mut layouter)
                            .show(ui)
                            .response;
                        if response.changed() {
                            output.changed = true;
                        }
                    });
            });

        output
    }

    /// Consume this frame's Tab presses and apply them to the buffer.
    fn intercept_tab(&mut self, ui: &Ui, id: egui::Id) -> Option<TabAction> {
        if self.read_only || !ui.memory(|m| m.has_focus(id)) {
            return None;
        }

        let mut shift = None;
        ui.input_mut(|i| {
            i.events.retain(|event| match event {
                Event::Key {
                    key: Key::Tab,
                    pressed,
                    modifiers,
                    ..
                } => {
                    if *pressed {
                        shift = Some(modifiers.shift);
                    }
                    false
                }
                _ => true,
            });
        });
        let shift = shift?;

        let mut state = TextEdit::load_state(ui.ctx(), id).unwrap_or_default();
        let end_of_text = self.content.chars().count();
        let selection = state
            .cursor
            .char_range()
            .map(|range| {
                let (a, b) = (range.primary.index, range.secondary.index);
                (a.min(b), a.max(b))
            })
            .unwrap_or((end_of_text, end_of_text));

        let edit = handle_tab(
            self.content.as_str(),
            selection,
            shift,
            self.language,
            self.indent_width,
        );
        debug!("Tab in {} editor: {:?}", self.language.label(), edit.action);

        *self.content = edit.text;
        state
            .cursor
            .set_char_range(Some(CCursorRange::one(CCursor::new(edit.cursor))));
        state.store(ui.ctx(), id);

        Some(edit.action)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::Modifiers;

    fn tab() -> Event {
        Event::Key {
            key: Key::Tab,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: Modifiers::NONE,
        }
    }

    /// Run one frame with an HTML editor over `text`.
    fn frame(
        ctx: &egui::Context,
        id: egui::Id,
        text: &mut String,
        read_only: bool,
        events: Vec<Event>,
    ) -> CodeEditorOutput {
        let mut output = CodeEditorOutput::default();
        let input = egui::RawInput {
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                output = CodeEditorPanel::new(text, EditorLanguage::Html)
                    .syntax_highlighting(false)
                    .read_only(read_only)
                    .id(id)
                    .show(ui);
            });
        });
        output
    }

    /// Show the editor, focus it, and let the focus lock settle.
    fn focus(ctx: &egui::Context, id: egui::Id, text: &mut String) {
        frame(ctx, id, text, false, Vec::new());
        ctx.memory_mut(|m| m.request_focus(id));
        frame(ctx, id, text, false, Vec::new());
    }

    fn cursor(ctx: &egui::Context, id: egui::Id) -> Option<usize> {
        TextEdit::load_state(ctx, id)
            .and_then(|state| state.cursor.char_range())
            .map(|range| range.primary.index)
    }

    #[test]
    fn test_display_name_prefers_file_name() {
        assert_eq!(display_name(Some("popup.html"), EditorLanguage::Html), "popup.html");
        assert_eq!(display_name(None, EditorLanguage::JavaScript), "JavaScript");
    }

    #[test]
    fn test_tab_expands_in_place_and_keeps_focus() {
        let ctx = egui::Context::default();
        let id = egui::Id::new("popup_html");
        let mut text = "div.card".to_string();
        focus(&ctx, id, &mut text);

        let mut state = TextEdit::load_state(&ctx, id).unwrap_or_default();
        state
            .cursor
            .set_char_range(Some(CCursorRange::one(CCursor::new(8))));
        state.store(&ctx, id);

        let output = frame(&ctx, id, &mut text, false, vec![tab()]);
        assert_eq!(text, "<div class=\"card\"></div>");
        assert!(output.changed);
        assert_eq!(
            output.tab_action,
            Some(TabAction::Expanded {
                abbreviation: "div.card".to_string()
            })
        );
        assert_eq!(cursor(&ctx, id), Some(24));
        assert!(ctx.memory(|m| m.has_focus(id)));

        // Nothing left to expand: the next Tab indents at the cursor.
        let output = frame(&ctx, id, &mut text, false, vec![tab()]);
        assert_eq!(text, "<div class=\"card\"></div>  ");
        assert_eq!(output.tab_action, Some(TabAction::Indented));
        assert_eq!(cursor(&ctx, id), Some(26));
        assert!(ctx.memory(|m| m.has_focus(id)));
        assert!(!text.contains('\t'));
    }

    #[test]
    fn test_read_only_editor_ignores_tab() {
        let ctx = egui::Context::default();
        let id = egui::Id::new("preview_source");
        let mut text = "div.card".to_string();

        frame(&ctx, id, &mut text, true, Vec::new());
        ctx.memory_mut(|m| m.request_focus(id));
        let output = frame(&ctx, id, &mut text, true, vec![tab()]);
        assert_eq!(text, "div.card");
        assert_eq!(output.tab_action, None);
    }
}
