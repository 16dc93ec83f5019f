//! In-window preview pane
//!
//! Recomposes the document from the three buffers on every frame and shows
//! its source read-only, under a browser-style title bar with the actions
//! that hand the document to a real browser or to the clipboard.

use super::document::compose_document;
use crate::config::Settings;
use crate::editor::{CodeEditorPanel, EditorLanguage};
use crate::theme::ThemeColors;
use eframe::egui::{self, Color32, RichText, Ui};

/// Title bar label. The pane shows the document's source, not a rendering.
const PANE_TITLE: &str = "Preview source";

/// Actions offered by the preview title bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewAction {
    OpenInBrowser,
    CopyDocument,
}

/// Output from the preview panel.
#[derive(Debug)]
pub struct PreviewPanelOutput {
    /// The document shown this frame
    pub document: String,
    /// Title bar action clicked this frame
    pub action: Option<PreviewAction>,
}

/// Preview of the composite document built from the page buffers.
pub struct PreviewPanel<'a> {
    html: &'a str,
    css: &'a str,
    js: &'a str,
}

impl<'a> PreviewPanel<'a> {
    pub fn new(html: &'a str, css: &'a str, js: &'a str) -> Self {
        Self { html, css, js }
    }

    pub fn show(self, ui: &mut Ui, settings: &Settings, colors: &ThemeColors) -> PreviewPanelOutput {
        let mut document = compose_document(self.html, self.css, self.js);
        let mut action = None;

        egui::Frame::none()
            .fill(colors.base.background_secondary)
            .stroke(egui::Stroke::new(1.0, colors.base.border))
            .rounding(8.0)
            .inner_margin(egui::Margin::same(8.0))
            .show(ui, |ui| {
                // Title bar
                ui.horizontal(|ui| {
                    for color in [
                        Color32::from_rgb(239, 68, 68),
                        Color32::from_rgb(234, 179, 8),
                        Color32::from_rgb(34, 197, 94),
                    ] {
                        let (rect, _) =
                            ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                        ui.painter()
                            .circle_filled(rect.center(), 6.0, color.gamma_multiply(0.7));
                    }
                    ui.add_space(8.0);
                    ui.label(RichText::new(PANE_TITLE).size(12.0).color(colors.text.muted));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .button("🌐 Open in Browser")
                            .on_hover_text("Run the preview in a sandboxed browser frame")
                            .clicked()
                        {
                            action = Some(PreviewAction::OpenInBrowser);
                        }
                        if ui
                            .button("📋 Copy HTML")
                            .on_hover_text("Copy the combined document")
                            .clicked()
                        {
                            action = Some(PreviewAction::CopyDocument);
                        }
                    });
                });
                ui.add_space(6.0);

                CodeEditorPanel::new(&mut document, EditorLanguage::Html)
                    .file_name(Some("Combined HTML (read-only)"))
                    .read_only(true)
                    .font_size(settings.font_size)
                    .word_wrap(settings.word_wrap)
                    .syntax_highlighting(settings.syntax_highlighting)
                    .colors(colors.editor)
                    .id(ui.id().with("preview_source"))
                    .show(ui);
            });

        PreviewPanelOutput { document, action }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pane_shows_composed_source() {
        assert_eq!(PANE_TITLE, "Preview source");

        let ctx = egui::Context::default();
        let settings = Settings::default();
        let colors = ThemeColors::dark();
        let mut output = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                output = Some(
                    PreviewPanel::new("<h1>Hi</h1>", "h1 { color: red; }", "").show(
                        ui, &settings, &colors,
                    ),
                );
            });
        });

        let output = output.unwrap();
        assert_eq!(
            output.document,
            compose_document("<h1>Hi</h1>", "h1 { color: red; }", "")
        );
        assert_eq!(output.action, None);
    }
}
