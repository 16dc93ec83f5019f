//! Tab-key handling for code buffers.
//!
//! The Tab key never moves focus out of a code editor. In HTML buffers it
//! first tries to expand the abbreviation right before the cursor; if there is
//! nothing to expand (or Shift is held, or the buffer is not HTML) it inserts
//! a run of spaces instead.

use super::abbreviation::{expand_abbreviation, trailing_abbreviation};
use crate::string_utils::{byte_index_to_char_index, char_index_to_byte_index, replace_char_range};
use log::debug;

// ─────────────────────────────────────────────────────────────────────────────
// Editor Language
// ─────────────────────────────────────────────────────────────────────────────

/// Language of a code buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditorLanguage {
    #[default]
    Html,
    Css,
    JavaScript,
    Json,
    PlainText,
}

impl EditorLanguage {
    /// Detect the language from a file name's extension.
    pub fn from_file_name(name: &str) -> Self {
        let extension = name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "html" | "htm" => EditorLanguage::Html,
            "css" => EditorLanguage::Css,
            "js" | "mjs" | "cjs" => EditorLanguage::JavaScript,
            "json" => EditorLanguage::Json,
            _ => EditorLanguage::PlainText,
        }
    }

    /// Display label, also used as the editor header when no file is open.
    pub fn label(&self) -> &'static str {
        match self {
            EditorLanguage::Html => "HTML",
            EditorLanguage::Css => "CSS",
            EditorLanguage::JavaScript => "JavaScript",
            EditorLanguage::Json => "JSON",
            EditorLanguage::PlainText => "Text",
        }
    }

    /// Language token understood by the syntax highlighter.
    pub fn syntax_token(&self) -> &'static str {
        match self {
            EditorLanguage::Html => "html",
            EditorLanguage::Css => "css",
            EditorLanguage::JavaScript => "js",
            EditorLanguage::Json => "json",
            EditorLanguage::PlainText => "",
        }
    }

    /// Whether Tab expands abbreviations in this language.
    pub fn expands_abbreviations(&self) -> bool {
        matches!(self, EditorLanguage::Html)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tab Handling
// ─────────────────────────────────────────────────────────────────────────────

/// What a Tab press did to the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabAction {
    /// An abbreviation was replaced by its HTML expansion
    Expanded { abbreviation: String },
    /// Spaces were inserted at the cursor (replacing any selection)
    Indented,
}

/// Result of handling a Tab press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabEdit {
    /// The full buffer after the edit
    pub text: String,
    /// Cursor position (character index) after the edit
    pub cursor: usize,
    /// Which interception fired
    pub action: TabAction,
}

/// Handle a Tab press at `selection` (start and end character indices).
///
/// Expansion only looks at the text before `selection.0` and keeps everything
/// after it, so a selection is left in place when an abbreviation expands.
pub fn handle_tab(
    text: &str,
    selection: (usize, usize),
    shift: bool,
    language: EditorLanguage,
    indent_width: u8,
) -> TabEdit {
    let (start, end) = if selection.0 <= selection.1 {
        selection
    } else {
        (selection.1, selection.0)
    };

    if !shift && language.expands_abbreviations() {
        if let Some(edit) = try_expand(text, start) {
            return edit;
        }
    }

    let indent = " ".repeat(usize::from(indent_width));
    let new_text = replace_char_range(text, start, end, &indent);
    // A selection past the end of the buffer indents at the end.
    let cursor = (start + usize::from(indent_width)).min(new_text.chars().count());
    TabEdit {
        text: new_text,
        cursor,
        action: TabAction::Indented,
    }
}

fn try_expand(text: &str, cursor: usize) -> Option<TabEdit> {
    let cursor_byte = char_index_to_byte_index(text, cursor);
    let before = &text[..cursor_byte];

    let abbreviation = trailing_abbreviation(before)?;
    let expanded = expand_abbreviation(abbreviation);
    if expanded == abbreviation {
        return None;
    }

    let token_start_byte = cursor_byte - abbreviation.len();
    let token_start = byte_index_to_char_index(text, token_start_byte);

    let mut new_text = String::with_capacity(text.len() + expanded.len());
    new_text.push_str(&text[..token_start_byte]);
    new_text.push_str(&expanded);
    new_text.push_str(&text[cursor_byte..]);

    debug!("Tab expanded '{}' at char {}", abbreviation, token_start);

    Some(TabEdit {
        text: new_text,
        cursor: token_start + expanded.chars().count(),
        action: TabAction::Expanded {
            abbreviation: abbreviation.to_string(),
        },
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_file_name() {
        assert_eq!(EditorLanguage::from_file_name("popup.html"), EditorLanguage::Html);
        assert_eq!(EditorLanguage::from_file_name("popup.CSS"), EditorLanguage::Css);
        assert_eq!(
            EditorLanguage::from_file_name("background.js"),
            EditorLanguage::JavaScript
        );
        assert_eq!(EditorLanguage::from_file_name("manifest.json"), EditorLanguage::Json);
        assert_eq!(EditorLanguage::from_file_name("icon16.png"), EditorLanguage::PlainText);
        assert_eq!(EditorLanguage::from_file_name("LICENSE"), EditorLanguage::PlainText);
    }

    #[test]
    fn test_tab_expands_in_html() {
        let text = "<body>\n  div.card\n</body>";
        let cursor = "<body>\n  div.card".chars().count();

        let edit = handle_tab(text, (cursor, cursor), false, EditorLanguage::Html, 2);

        assert_eq!(edit.text, "<body>\n  <div class=\"card\"></div>\n</body>");
        assert_eq!(edit.cursor, "<body>\n  <div class=\"card\"></div>".chars().count());
        assert_eq!(
            edit.action,
            TabAction::Expanded {
                abbreviation: "div.card".to_string()
            }
        );
    }

    #[test]
    fn test_tab_indents_in_css() {
        let text = "body {\n.wrapper";
        let cursor = text.chars().count();

        let edit = handle_tab(text, (cursor, cursor), false, EditorLanguage::Css, 2);

        assert_eq!(edit.text, "body {\n.wrapper  ");
        assert_eq!(edit.cursor, cursor + 2);
        assert_eq!(edit.action, TabAction::Indented);
    }

    #[test]
    fn test_shift_tab_never_expands() {
        let edit = handle_tab("p", (1, 1), true, EditorLanguage::Html, 2);
        assert_eq!(edit.text, "p  ");
        assert_eq!(edit.action, TabAction::Indented);
    }

    #[test]
    fn test_tab_without_abbreviation_indents() {
        let edit = handle_tab("<p> ", (4, 4), false, EditorLanguage::Html, 2);
        assert_eq!(edit.text, "<p>   ");
        assert_eq!(edit.cursor, 6);
    }

    #[test]
    fn test_unexpandable_token_indents() {
        let edit = handle_tab("a>b", (3, 3), false, EditorLanguage::Html, 4);
        // Only `b` is taken as the token, which does expand.
        assert_eq!(edit.text, "a><b></b>");

        let edit = handle_tab("x ...", (5, 5), false, EditorLanguage::Html, 4);
        assert_eq!(edit.text, "x ...    ");
        assert_eq!(edit.action, TabAction::Indented);
    }

    #[test]
    fn test_indent_replaces_selection() {
        let edit = handle_tab("abcdef", (1, 4), false, EditorLanguage::Css, 2);
        assert_eq!(edit.text, "a  ef");
        assert_eq!(edit.cursor, 3);
    }

    #[test]
    fn test_selection_past_end_is_clamped() {
        let edit = handle_tab("body {}", (40, 52), false, EditorLanguage::Css, 2);
        assert_eq!(edit.text, "body {}  ");
        assert_eq!(edit.cursor, 9);

        let edit = handle_tab("div.card", (30, 30), false, EditorLanguage::Html, 4);
        assert_eq!(edit.cursor, edit.text.chars().count());
    }

    #[test]
    fn test_expansion_keeps_text_after_cursor() {
        let edit = handle_tab("h1 tail", (2, 4), false, EditorLanguage::Html, 2);
        assert_eq!(edit.text, "<h1></h1> tail");
        assert_eq!(edit.cursor, 9);
    }

    #[test]
    fn test_expansion_after_multibyte_text() {
        let text = "<p>ø</p>\nspan";
        let cursor = text.chars().count();

        let edit = handle_tab(text, (cursor, cursor), false, EditorLanguage::Html, 2);

        assert_eq!(edit.text, "<p>ø</p>\n<span></span>");
        assert_eq!(edit.cursor, edit.text.chars().count());
    }
}
