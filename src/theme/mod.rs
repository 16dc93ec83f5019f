//! Theme System for CRX Builder
//!
//! Colors are grouped into a `ThemeColors` palette with a light and a dark
//! variant. The `Theme` setting in `config::settings` (Light/Dark/System)
//! selects the palette at runtime, and `ThemeColors::to_visuals` turns it into
//! egui `Visuals`.
//!
//! # Color Categories
//!
//! - **Base colors**: window background, panels, borders, hover/selection
//! - **Text colors**: primary, secondary, muted
//! - **Editor colors**: code area background, code text, header line
//! - **UI colors**: accent, success, overlay

pub mod manager;

pub use manager::ThemeManager;

use eframe::egui::{Color32, Rounding, Stroke, Visuals};

// ─────────────────────────────────────────────────────────────────────────────
// Theme Colors
// ─────────────────────────────────────────────────────────────────────────────

/// Colors for the whole application.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeColors {
    /// Base UI colors (backgrounds, borders)
    pub base: BaseColors,
    /// Text colors for various contexts
    pub text: TextColors,
    /// Colors for code editors and the preview source view
    pub editor: EditorColors,
    /// Accent and feedback colors
    pub ui: UiColors,
}

impl ThemeColors {
    pub fn light() -> Self {
        Self {
            base: BaseColors::light(),
            text: TextColors::light(),
            editor: EditorColors::light(),
            ui: UiColors::light(),
        }
    }

    pub fn dark() -> Self {
        Self {
            base: BaseColors::dark(),
            text: TextColors::dark(),
            editor: EditorColors::dark(),
            ui: UiColors::dark(),
        }
    }

    /// Check if this is a dark palette.
    pub fn is_dark(&self) -> bool {
        self.base.background.r() < 128
    }

    /// Convert the palette into egui Visuals.
    pub fn to_visuals(&self) -> Visuals {
        let mut visuals = if self.is_dark() {
            Visuals::dark()
        } else {
            Visuals::light()
        };
        let rounding = Rounding::same(6.0);

        // ─────────────────────────────────────────────────────────────────────
        // Window & Panel Background
        // ─────────────────────────────────────────────────────────────────────
        visuals.panel_fill = self.base.background;
        visuals.window_fill = self.base.background_secondary;
        visuals.extreme_bg_color = self.editor.background;
        visuals.faint_bg_color = self.base.background_secondary;
        visuals.code_bg_color = self.editor.background;
        visuals.window_stroke = Stroke::new(1.0, self.base.border);
        visuals.window_rounding = Rounding::same(8.0);

        // ─────────────────────────────────────────────────────────────────────
        // Text & Selection
        // ─────────────────────────────────────────────────────────────────────
        visuals.override_text_color = None;
        visuals.hyperlink_color = self.ui.accent;
        visuals.selection.bg_fill = self.base.selected;
        visuals.selection.stroke = Stroke::new(1.0, self.ui.accent);

        // ─────────────────────────────────────────────────────────────────────
        // Widgets
        // ─────────────────────────────────────────────────────────────────────
        visuals.widgets.noninteractive.bg_fill = self.base.background_secondary;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.base.border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text.primary);
        visuals.widgets.noninteractive.rounding = rounding;

        visuals.widgets.inactive.bg_fill = self.base.background_secondary;
        visuals.widgets.inactive.weak_bg_fill = self.base.background_secondary;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text.secondary);
        visuals.widgets.inactive.rounding = rounding;

        visuals.widgets.hovered.bg_fill = self.base.hover;
        visuals.widgets.hovered.weak_bg_fill = self.base.hover;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.5, self.text.primary);
        visuals.widgets.hovered.rounding = rounding;

        visuals.widgets.active.bg_fill = self.base.selected;
        visuals.widgets.active.weak_bg_fill = self.base.selected;
        visuals.widgets.active.fg_stroke = Stroke::new(2.0, self.text.primary);
        visuals.widgets.active.rounding = rounding;

        visuals
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Base Colors
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseColors {
    /// Primary background color
    pub background: Color32,
    /// Cards, headers and side panels
    pub background_secondary: Color32,
    /// Primary border color
    pub border: Color32,
    /// Hover state background
    pub hover: Color32,
    /// Selected/active state background
    pub selected: Color32,
}

impl BaseColors {
    pub fn light() -> Self {
        Self {
            background: Color32::from_rgb(248, 250, 252),
            background_secondary: Color32::from_rgb(255, 255, 255),
            border: Color32::from_rgb(214, 220, 228),
            hover: Color32::from_rgb(236, 240, 245),
            selected: Color32::from_rgb(219, 234, 254),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(17, 24, 39),
            background_secondary: Color32::from_rgb(31, 41, 55),
            border: Color32::from_rgb(55, 65, 81),
            hover: Color32::from_rgb(45, 55, 72),
            selected: Color32::from_rgb(30, 58, 95),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Text Colors
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextColors {
    /// Main content
    pub primary: Color32,
    /// Descriptions, labels
    pub secondary: Color32,
    /// Hints, placeholders, taglines
    pub muted: Color32,
}

impl TextColors {
    pub fn light() -> Self {
        Self {
            primary: Color32::from_rgb(15, 23, 42),
            secondary: Color32::from_rgb(71, 85, 105),
            muted: Color32::from_rgb(120, 130, 145),
        }
    }

    pub fn dark() -> Self {
        Self {
            primary: Color32::from_rgb(229, 231, 235),
            secondary: Color32::from_rgb(190, 196, 205),
            muted: Color32::from_rgb(140, 148, 160),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Editor Colors
// ─────────────────────────────────────────────────────────────────────────────

/// Colors of the code area.
///
/// The editor keeps a dark surface in both palettes, so code looks the same
/// whichever theme the chrome around it uses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorColors {
    /// Code area background
    pub background: Color32,
    /// Unhighlighted code text
    pub text: Color32,
    /// Editor header line (file name, save icon)
    pub line: Color32,
}

impl EditorColors {
    pub fn light() -> Self {
        Self {
            background: Color32::from_rgb(30, 30, 46),
            text: Color32::from_rgb(205, 214, 244),
            line: Color32::from_rgb(137, 146, 178),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(22, 22, 34),
            text: Color32::from_rgb(205, 214, 244),
            line: Color32::from_rgb(127, 132, 156),
        }
    }

    /// Whether the code surface is dark (selects the syntax theme).
    pub fn is_dark(&self) -> bool {
        self.background.r() < 128
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// UI Colors
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiColors {
    /// Buttons, links, the side menu badge
    pub accent: Color32,
    /// Toast border
    pub success: Color32,
    /// Dimmed layer behind the side menu on narrow windows
    pub overlay: Color32,
}

impl UiColors {
    pub fn light() -> Self {
        Self {
            accent: Color32::from_rgb(37, 99, 235),
            success: Color32::from_rgb(22, 163, 74),
            overlay: Color32::from_black_alpha(90),
        }
    }

    pub fn dark() -> Self {
        Self {
            accent: Color32::from_rgb(96, 165, 250),
            success: Color32::from_rgb(74, 222, 128),
            overlay: Color32::from_black_alpha(140),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_colors_light() {
        let colors = ThemeColors::light();
        assert!(colors.base.background.r() > 200);
        assert!(!colors.is_dark());
    }

    #[test]
    fn test_theme_colors_dark() {
        let colors = ThemeColors::dark();
        assert!(colors.base.background.r() < 50);
        assert!(colors.is_dark());
    }

    #[test]
    fn test_code_surface_dark_in_both_palettes() {
        assert!(ThemeColors::light().editor.is_dark());
        assert!(ThemeColors::dark().editor.is_dark());
    }

    #[test]
    fn test_to_visuals() {
        let light = ThemeColors::light();
        let visuals = light.to_visuals();
        assert!(!visuals.dark_mode);
        assert_eq!(visuals.panel_fill, light.base.background);

        let dark = ThemeColors::dark();
        let visuals = dark.to_visuals();
        assert!(visuals.dark_mode);
        assert_eq!(visuals.code_bg_color, dark.editor.background);
    }

    #[test]
    fn test_text_contrast() {
        assert!(TextColors::light().primary.r() < 50);
        assert!(TextColors::dark().primary.r() > 200);
    }
}
