//! Top header bar
//!
//! Sidebar toggle, side menu button, the app title and tagline, and the
//! theme switch on the right.

use crate::theme::{ThemeColors, ThemeManager};
use eframe::egui::{self, RichText, Ui, Vec2};

/// Title on wide windows.
pub const TITLE: &str = "Chrome Extension Builder";

/// Title on narrow windows.
pub const NARROW_TITLE: &str = "Extension Builder";

pub const TAGLINE: &str = "Create your extension with live preview and Emmet support";

/// Size of icon buttons.
const ICON_BUTTON_SIZE: Vec2 = Vec2::new(32.0, 28.0);

/// Actions that can be triggered from the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    ToggleSidebar,
    OpenSideMenu,
    CycleTheme,
}

pub fn title_for(narrow: bool) -> &'static str {
    if narrow {
        NARROW_TITLE
    } else {
        TITLE
    }
}

/// The header bar.
pub struct Header<'a> {
    narrow: bool,
    show_sidebar_toggle: bool,
    theme: &'a ThemeManager,
}

impl<'a> Header<'a> {
    pub fn new(theme: &'a ThemeManager) -> Self {
        Self {
            narrow: false,
            show_sidebar_toggle: true,
            theme,
        }
    }

    pub fn narrow(mut self, narrow: bool) -> Self {
        self.narrow = narrow;
        self
    }

    /// Only pages with a file tree offer the sidebar toggle.
    pub fn sidebar_toggle(mut self, show: bool) -> Self {
        self.show_sidebar_toggle = show;
        self
    }

    pub fn show(self, ui: &mut Ui, colors: &ThemeColors) -> Option<HeaderAction> {
        let mut action = None;

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if self.show_sidebar_toggle
                && icon_button(ui, "◧", "Toggle file tree").clicked()
            {
                action = Some(HeaderAction::ToggleSidebar);
            }
            if icon_button(ui, "☰", "Open side menu").clicked() {
                action = Some(HeaderAction::OpenSideMenu);
            }

            ui.add_space(8.0);
            let size = if self.narrow { 20.0 } else { 28.0 };
            ui.add(
                egui::Label::new(
                    RichText::new(title_for(self.narrow))
                        .size(size)
                        .strong()
                        .color(colors.ui.accent),
                )
                .truncate(),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if icon_button(ui, self.theme.icon(), &self.theme.tooltip()).clicked() {
                    action = Some(HeaderAction::CycleTheme);
                }
            });
        });
        ui.label(
            RichText::new(TAGLINE)
                .size(if self.narrow { 12.0 } else { 14.0 })
                .color(colors.text.muted),
        );
        ui.add_space(8.0);

        action
    }
}

fn icon_button(ui: &mut Ui, icon: &str, tooltip: &str) -> egui::Response {
    ui.add(egui::Button::new(RichText::new(icon).size(16.0)).min_size(ICON_BUTTON_SIZE))
        .on_hover_text(tooltip)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_by_width() {
        assert_eq!(title_for(false), "Chrome Extension Builder");
        assert_eq!(title_for(true), "Extension Builder");
    }
}
