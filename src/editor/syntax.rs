//! Syntax highlighting for code buffers
//!
//! Wraps syntect with a lazily loaded, process-wide `SyntaxHighlighter` and
//! turns its output into egui `LayoutJob`s. The job text is always the exact
//! input text, so it can back a `TextEdit` layouter without shifting cursors.

use eframe::egui::text::{LayoutJob, TextFormat};
use eframe::egui::{Color32, FontId, Stroke};
use log::{debug, warn};
use std::sync::OnceLock;
use syntect::easy::HighlightLines;
use syntect::highlighting::{FontStyle, Style, Theme, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Default dark theme name from syntect's built-in themes
pub const DEFAULT_DARK_THEME: &str = "base16-ocean.dark";

/// Default light theme name from syntect's built-in themes
pub const DEFAULT_LIGHT_THEME: &str = "InspiredGitHub";

// ─────────────────────────────────────────────────────────────────────────────
// Highlighted Segment
// ─────────────────────────────────────────────────────────────────────────────

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightedSegment {
    pub text: String,
    pub foreground: Color32,
    pub italic: bool,
    pub underline: bool,
}

impl HighlightedSegment {
    fn plain(text: &str, foreground: Color32) -> Self {
        Self {
            text: text.to_string(),
            foreground,
            italic: false,
            underline: false,
        }
    }

    fn from_style(style: Style, text: &str) -> Self {
        Self {
            text: text.to_string(),
            foreground: syntect_to_egui_color(style.foreground),
            italic: style.font_style.contains(FontStyle::ITALIC),
            underline: style.font_style.contains(FontStyle::UNDERLINE),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Syntax Highlighter
// ─────────────────────────────────────────────────────────────────────────────

/// Syntax highlighter holding the loaded syntect sets.
///
/// Loading is slow, so use the shared instance from [`get_highlighter`].
pub struct SyntaxHighlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        debug!("Loading syntect syntax and theme sets");
        let syntax_set = SyntaxSet::load_defaults_newlines();
        let theme_set = ThemeSet::load_defaults();
        debug!(
            "Loaded {} syntaxes and {} themes",
            syntax_set.syntaxes().len(),
            theme_set.themes.len()
        );
        Self {
            syntax_set,
            theme_set,
        }
    }

    /// Get the bundled theme for dark or light mode.
    pub fn theme_for_mode(&self, dark_mode: bool) -> Option<&Theme> {
        let name = if dark_mode {
            DEFAULT_DARK_THEME
        } else {
            DEFAULT_LIGHT_THEME
        };
        self.theme_set.themes.get(name)
    }

    /// Find the syntax for a language token such as `html`, `css` or `js`.
    fn find_syntax(&self, language: &str) -> Option<&SyntaxReference> {
        if language.is_empty() {
            return None;
        }

        let lang_lower = language.to_lowercase();
        let extension = match lang_lower.as_str() {
            "html" | "htm" => "html",
            "css" => "css",
            "javascript" | "js" | "mjs" => "js",
            "json" => "json",
            other => other,
        };

        self.syntax_set
            .find_syntax_by_extension(extension)
            .or_else(|| self.syntax_set.find_syntax_by_name(language))
    }

    /// Highlight `code` into styled segments.
    ///
    /// Concatenating the segment texts always reproduces `code`. Unknown
    /// languages or highlighter failures yield plain segments in
    /// `fallback_color`.
    pub fn highlight(
        &self,
        code: &str,
        language: &str,
        dark_mode: bool,
        fallback_color: Color32,
    ) -> Vec<HighlightedSegment> {
        let (Some(syntax), Some(theme)) =
            (self.find_syntax(language), self.theme_for_mode(dark_mode))
        else {
            debug!("No syntax found for language: {:?}", language);
            return vec![HighlightedSegment::plain(code, fallback_color)];
        };

        let mut highlighter = HighlightLines::new(syntax, theme);
        let mut segments = Vec::new();

        for line in LinesWithEndings::from(code) {
            match highlighter.highlight_line(line, &self.syntax_set) {
                Ok(ranges) => segments.extend(
                    ranges
                        .into_iter()
                        .map(|(style, text)| HighlightedSegment::from_style(style, text)),
                ),
                Err(e) => {
                    warn!("Failed to highlight line: {}", e);
                    segments.push(HighlightedSegment::plain(line, fallback_color));
                }
            }
        }

        segments
    }
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Helper Functions
// ─────────────────────────────────────────────────────────────────────────────

/// Convert syntect Color to egui Color32.
pub fn syntect_to_egui_color(color: syntect::highlighting::Color) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

static HIGHLIGHTER: OnceLock<SyntaxHighlighter> = OnceLock::new();

/// Get or create the global syntax highlighter.
pub fn get_highlighter() -> &'static SyntaxHighlighter {
    HIGHLIGHTER.get_or_init(SyntaxHighlighter::new)
}

/// Build a layout job for `code`.
///
/// With `enabled == false` the whole text is laid out in `text_color`.
pub fn highlight_layout_job(
    code: &str,
    language: &str,
    dark_mode: bool,
    enabled: bool,
    font_id: FontId,
    text_color: Color32,
) -> LayoutJob {
    let segments = if enabled {
        get_highlighter().highlight(code, language, dark_mode, text_color)
    } else {
        vec![HighlightedSegment::plain(code, text_color)]
    };

    let mut job = LayoutJob::default();
    for segment in &segments {
        let underline = if segment.underline {
            Stroke::new(1.0, segment.foreground)
        } else {
            Stroke::NONE
        };
        job.append(
            &segment.text,
            0.0,
            TextFormat {
                font_id: font_id.clone(),
                color: segment.foreground,
                italics: segment.italic,
                underline,
                ..Default::default()
            },
        );
    }
    job
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(segments: &[HighlightedSegment]) -> String {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_bundled_themes_exist() {
        let highlighter = get_highlighter();
        assert!(highlighter.theme_for_mode(true).is_some());
        assert!(highlighter.theme_for_mode(false).is_some());
    }

    #[test]
    fn test_supported_languages_found() {
        let highlighter = get_highlighter();
        for token in ["html", "css", "js", "json"] {
            assert!(highlighter.find_syntax(token).is_some(), "{}", token);
        }
        assert!(highlighter.find_syntax("").is_none());
    }

    #[test]
    fn test_highlight_preserves_text() {
        let code = "<div class=\"card\">\n  <p>Hi</p>\n</div>\n";
        let segments = get_highlighter().highlight(code, "html", true, Color32::GRAY);
        assert!(segments.len() > 1);
        assert_eq!(joined(&segments), code);
    }

    #[test]
    fn test_unknown_language_is_plain() {
        let segments = get_highlighter().highlight("a b c", "nope", false, Color32::RED);
        assert_eq!(segments, vec![HighlightedSegment::plain("a b c", Color32::RED)]);
    }

    #[test]
    fn test_layout_job_text_matches_input() {
        let code = "body { color: red; }";
        let job = highlight_layout_job(
            code,
            "css",
            true,
            true,
            FontId::monospace(14.0),
            Color32::WHITE,
        );
        assert_eq!(job.text, code);

        let plain = highlight_layout_job(
            code,
            "css",
            true,
            false,
            FontId::monospace(14.0),
            Color32::WHITE,
        );
        assert_eq!(plain.sections.len(), 1);
    }
}
