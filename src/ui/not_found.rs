//! Not-found page, also shown for the placeholder menu routes.

use crate::theme::ThemeColors;
use eframe::egui::{self, RichText, Ui};

/// Show the page. Returns `true` when "Return to Home" was clicked.
pub fn show(ui: &mut Ui, path: &str, colors: &ThemeColors) -> bool {
    let mut go_home = false;

    ui.vertical_centered(|ui| {
        ui.add_space((ui.available_height() / 2.0 - 90.0).max(24.0));
        ui.label(RichText::new("404").size(36.0).strong());
        ui.add_space(8.0);
        ui.label(
            RichText::new("Oops! Page not found")
                .size(20.0)
                .color(colors.text.secondary),
        );
        ui.label(RichText::new(path).monospace().color(colors.text.muted));
        ui.add_space(12.0);
        if ui
            .add(egui::Button::new(
                RichText::new("Return to Home").color(colors.ui.accent),
            ).frame(false))
            .clicked()
        {
            go_home = true;
        }
    });

    go_home
}
