//! User settings and preferences for CRX Builder
//!
//! This module defines the `Settings` struct that holds all user-configurable
//! options, with serde support for JSON persistence. Edited buffers are never
//! part of the settings; only presentation preferences and window geometry are.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Theme Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Available color themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
    System,
}

impl Theme {
    /// Get a display label for the theme.
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::System => "System",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Window Size Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Window dimensions and position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSize {
    /// Window width in pixels
    pub width: f32,
    /// Window height in pixels
    pub height: f32,
    /// Window X position (optional, for restoring position)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    /// Window Y position (optional, for restoring position)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    /// Whether the window was maximized
    #[serde(default)]
    pub maximized: bool,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 820.0,
            x: None,
            y: None,
            maximized: false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Main Settings Struct
// ─────────────────────────────────────────────────────────────────────────────

/// User preferences and application settings.
///
/// Serialized to JSON in the user's config directory. Every field has a
/// default via `#[serde(default)]`, so partial or older files load cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // ─────────────────────────────────────────────────────────────────────────
    // Appearance
    // ─────────────────────────────────────────────────────────────────────────
    /// Color theme (light, dark, or system)
    pub theme: Theme,

    /// Font size for code buffers (in points)
    pub font_size: f32,

    /// Whether code buffers and previews are syntax highlighted
    pub syntax_highlighting: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Editor Behavior
    // ─────────────────────────────────────────────────────────────────────────
    /// Number of spaces the Tab key inserts when no abbreviation applies
    pub indent_width: u8,

    /// Whether to wrap long lines in the code editor
    pub word_wrap: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Layout
    // ─────────────────────────────────────────────────────────────────────────
    /// Width of the file tree sidebar in pixels
    pub file_tree_width: f32,

    /// Window widths below this are treated as narrow (sidebar auto-closes)
    pub narrow_breakpoint: f32,

    /// Fraction of the editor area given to the code panes when the preview
    /// is shown side by side (0.0 to 1.0)
    pub preview_split_ratio: f32,

    /// How long toast notifications stay visible, in seconds
    pub toast_duration_secs: f64,

    // ─────────────────────────────────────────────────────────────────────────
    // Window State
    // ─────────────────────────────────────────────────────────────────────────
    /// Window size and position
    pub window_size: WindowSize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            font_size: 14.0,
            syntax_highlighting: true,

            indent_width: 2,
            word_wrap: true,

            file_tree_width: 256.0,
            narrow_breakpoint: 768.0,
            preview_split_ratio: 0.5,
            toast_duration_secs: 4.0,

            window_size: WindowSize::default(),
        }
    }
}

impl Settings {
    // ─────────────────────────────────────────────────────────────────────────
    // Validation Constants and Sanitization
    // ─────────────────────────────────────────────────────────────────────────

    /// Minimum allowed font size.
    pub const MIN_FONT_SIZE: f32 = 8.0;
    /// Maximum allowed font size.
    pub const MAX_FONT_SIZE: f32 = 48.0;
    /// Minimum allowed indent width.
    pub const MIN_INDENT_WIDTH: u8 = 1;
    /// Maximum allowed indent width.
    pub const MAX_INDENT_WIDTH: u8 = 8;
    /// Minimum file tree width.
    pub const MIN_FILE_TREE_WIDTH: f32 = 150.0;
    /// Maximum file tree width.
    pub const MAX_FILE_TREE_WIDTH: f32 = 500.0;
    /// Minimum window dimension.
    pub const MIN_WINDOW_SIZE: f32 = 200.0;
    /// Maximum window dimension.
    pub const MAX_WINDOW_SIZE: f32 = 10000.0;

    /// Sanitize settings by clamping values to valid ranges.
    ///
    /// Applied after loading a file that may have been edited by hand.
    pub fn sanitize(&mut self) {
        self.font_size = self
            .font_size
            .clamp(Self::MIN_FONT_SIZE, Self::MAX_FONT_SIZE);

        self.indent_width = self
            .indent_width
            .clamp(Self::MIN_INDENT_WIDTH, Self::MAX_INDENT_WIDTH);

        self.file_tree_width = self
            .file_tree_width
            .clamp(Self::MIN_FILE_TREE_WIDTH, Self::MAX_FILE_TREE_WIDTH);

        if !self.narrow_breakpoint.is_finite() || self.narrow_breakpoint < 0.0 {
            self.narrow_breakpoint = Settings::default().narrow_breakpoint;
        }

        self.preview_split_ratio = self.preview_split_ratio.clamp(0.2, 0.8);

        if !(0.5..=60.0).contains(&self.toast_duration_secs) {
            self.toast_duration_secs = self.toast_duration_secs.clamp(0.5, 60.0);
        }

        self.window_size.width = self
            .window_size
            .width
            .clamp(Self::MIN_WINDOW_SIZE, Self::MAX_WINDOW_SIZE);
        self.window_size.height = self
            .window_size
            .height
            .clamp(Self::MIN_WINDOW_SIZE, Self::MAX_WINDOW_SIZE);
    }

    /// Deserialize settings and clamp them into valid ranges.
    pub fn from_json_sanitized(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();

        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.indent_width, 2);
        assert_eq!(settings.font_size, 14.0);
        assert_eq!(settings.narrow_breakpoint, 768.0);
        assert!(settings.syntax_highlighting);
        assert_eq!(settings.window_size.width, 1280.0);
    }

    #[test]
    fn test_theme_serialization() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(serde_json::to_string(&Theme::System).unwrap(), "\"system\"");
        assert_eq!(
            serde_json::from_str::<Theme>("\"system\"").unwrap(),
            Theme::System
        );
    }

    #[test]
    fn test_settings_deserialize_with_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"theme": "light"}"#).unwrap();

        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.indent_width, 2);
        assert_eq!(settings.toast_duration_secs, 4.0);
    }

    #[test]
    fn test_settings_deserialize_empty_json() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_sanitize_indent_width() {
        let mut settings = Settings::default();
        settings.indent_width = 0;
        settings.sanitize();
        assert_eq!(settings.indent_width, Settings::MIN_INDENT_WIDTH);

        settings.indent_width = 40;
        settings.sanitize();
        assert_eq!(settings.indent_width, Settings::MAX_INDENT_WIDTH);
    }

    #[test]
    fn test_sanitize_breakpoint_and_split() {
        let mut settings = Settings::default();
        settings.narrow_breakpoint = -10.0;
        settings.preview_split_ratio = 1.5;
        settings.toast_duration_secs = 0.0;
        settings.sanitize();

        assert_eq!(settings.narrow_breakpoint, 768.0);
        assert_eq!(settings.preview_split_ratio, 0.8);
        assert_eq!(settings.toast_duration_secs, 0.5);
    }

    #[test]
    fn test_from_json_sanitized() {
        let json = r#"{"font_size": 2.0, "file_tree_width": 9000.0}"#;
        let settings = Settings::from_json_sanitized(json).unwrap();
        assert_eq!(settings.font_size, Settings::MIN_FONT_SIZE);
        assert_eq!(settings.file_tree_width, Settings::MAX_FILE_TREE_WIDTH);
    }
}
