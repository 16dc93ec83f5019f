//! Abbreviation expansion for HTML authoring.
//!
//! Turns a single-element shorthand such as `div.card#main{Hello}` into
//! `<div class="card" id="main">Hello</div>`. Only one element is supported:
//! tokens using the child (`>`), sibling (`+`) or climb-up (`^`) operators are
//! left alone, as is anything the element grammar cannot make sense of.
//! Expansion never fails; the worst case is returning the input unchanged.

use log::debug;
use regex::Regex;
use std::sync::OnceLock;

/// Operators for multi-element expressions, which are not expanded.
const UNSUPPORTED_OPERATORS: [char; 3] = ['>', '+', '^'];

/// Tag used when the abbreviation starts with a class, id or text segment.
const DEFAULT_TAG: &str = "div";

/// `tag` followed by any run of `.class`, `#id` and `{text}` segments.
fn element_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"([a-zA-Z0-9]*)((?:\.[a-zA-Z0-9_-]+|#[a-zA-Z0-9_-]+|\{.*?\})*)")
            .expect("element pattern is a valid regex")
    })
}

fn class_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\.([a-zA-Z0-9_-]+)").expect("class pattern is valid"))
}

fn id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"#([a-zA-Z0-9_-]+)").expect("id pattern is valid"))
}

fn text_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{(.*?)\}").expect("text pattern is valid"))
}

/// Whether `c` can be part of an abbreviation typed before the cursor.
fn is_abbreviation_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '#' | '{' | '}')
}

/// Return the abbreviation candidate that ends exactly at the end of `text`.
///
/// This is the maximal trailing run of `[a-zA-Z0-9.#{}]`, or `None` when the
/// text ends with any other character (or is empty).
pub fn trailing_abbreviation(text: &str) -> Option<&str> {
    let start = text
        .char_indices()
        .rev()
        .take_while(|&(_, c)| is_abbreviation_char(c))
        .last()
        .map(|(i, _)| i)?;
    Some(&text[start..])
}

/// Expand a single-element abbreviation into an HTML fragment.
///
/// Returns `token` unchanged when it uses multi-element operators or when no
/// non-empty element match can be found in it.
///
/// Within the attribute run, classes are collected in order of appearance,
/// while for `#id` and `{text}` the last occurrence wins (`div#a#b` yields
/// `id="b"`).
pub fn expand_abbreviation(token: &str) -> String {
    if token.contains(&UNSUPPORTED_OPERATORS[..]) {
        return token.to_string();
    }

    let Some(captures) = element_pattern()
        .captures_iter(token)
        .find(|caps| caps.get(0).is_some_and(|m| !m.is_empty()))
    else {
        return token.to_string();
    };

    let tag = captures
        .get(1)
        .map(|m| m.as_str())
        .filter(|tag| !tag.is_empty())
        .unwrap_or(DEFAULT_TAG);
    let attributes = captures.get(2).map_or("", |m| m.as_str());

    let classes: Vec<&str> = class_pattern()
        .captures_iter(attributes)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect();
    let id = id_pattern()
        .captures_iter(attributes)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .last();
    let text = text_pattern()
        .captures_iter(attributes)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .last()
        .unwrap_or("");

    let mut open_tag = format!("<{}", tag);
    if !classes.is_empty() {
        open_tag.push_str(&format!(" class=\"{}\"", classes.join(" ")));
    }
    if let Some(id) = id {
        open_tag.push_str(&format!(" id=\"{}\"", id));
    }

    let expanded = format!("{}>{}</{}>", open_tag, text, tag);
    debug!("Expanded abbreviation '{}' -> '{}'", token, expanded);
    expanded
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_tag() {
        assert_eq!(expand_abbreviation("div"), "<div></div>");
        assert_eq!(expand_abbreviation("h1"), "<h1></h1>");
    }

    #[test]
    fn test_tag_with_class() {
        assert_eq!(expand_abbreviation("p.intro"), "<p class=\"intro\"></p>");
    }

    #[test]
    fn test_implicit_div() {
        assert_eq!(
            expand_abbreviation(".container"),
            "<div class=\"container\"></div>"
        );
        assert_eq!(expand_abbreviation("#main"), "<div id=\"main\"></div>");
        assert_eq!(expand_abbreviation("{hello}"), "<div>hello</div>");
    }

    #[test]
    fn test_full_element() {
        assert_eq!(
            expand_abbreviation("span.a.b#x{hi}"),
            "<span class=\"a b\" id=\"x\">hi</span>"
        );
    }

    #[test]
    fn test_segments_in_any_order() {
        assert_eq!(
            expand_abbreviation("li{Item}#first.nav"),
            "<li class=\"nav\" id=\"first\">Item</li>"
        );
    }

    #[test]
    fn test_class_names_with_dash_and_underscore() {
        assert_eq!(
            expand_abbreviation("div.search-box.is_open"),
            "<div class=\"search-box is_open\"></div>"
        );
    }

    #[test]
    fn test_multi_element_operators_unchanged() {
        assert_eq!(expand_abbreviation("div>p"), "div>p");
        assert_eq!(expand_abbreviation("h1+p"), "h1+p");
        assert_eq!(expand_abbreviation("ul>li^p"), "ul>li^p");
    }

    #[test]
    fn test_expanded_html_is_fixed_point() {
        for token in ["div", "p.intro", "span.a.b#x{hi}", "#main"] {
            let once = expand_abbreviation(token);
            assert_eq!(expand_abbreviation(&once), once);
        }
    }

    #[test]
    fn test_nothing_expandable_unchanged() {
        assert_eq!(expand_abbreviation(""), "");
        assert_eq!(expand_abbreviation("..."), "...");
        assert_eq!(expand_abbreviation("#"), "#");
        assert_eq!(expand_abbreviation("{}"), "<div></div>");
    }

    #[test]
    fn test_no_empty_class_attribute() {
        let html = expand_abbreviation("section#hero");
        assert!(!html.contains("class="));
        assert_eq!(html, "<section id=\"hero\"></section>");
    }

    #[test]
    fn test_duplicate_id_and_text_last_wins() {
        assert_eq!(expand_abbreviation("div#a#b"), "<div id=\"b\"></div>");
        assert_eq!(expand_abbreviation("p{one}{two}"), "<p>two</p>");
    }

    #[test]
    fn test_text_is_lazy_to_first_closing_brace() {
        // `{a}b}` matches `{a}`; the dangling `b}` falls outside the element.
        assert_eq!(expand_abbreviation("p{a}b}"), "<p>a</p>");
    }

    #[test]
    fn test_unbalanced_brace_ignored() {
        assert_eq!(expand_abbreviation("p{open"), "<p></p>");
    }

    #[test]
    fn test_leading_garbage_skipped() {
        assert_eq!(expand_abbreviation("}div"), "<div></div>");
    }

    #[test]
    fn test_dots_inside_text_count_as_classes() {
        assert_eq!(
            expand_abbreviation("p{v1.2}"),
            "<p class=\"2\">v1.2</p>"
        );
    }

    #[test]
    fn test_trailing_abbreviation() {
        assert_eq!(trailing_abbreviation("<body>\n  div.card"), Some("div.card"));
        assert_eq!(trailing_abbreviation("ul#nav{x}"), Some("ul#nav{x}"));
        assert_eq!(trailing_abbreviation("hello "), None);
        assert_eq!(trailing_abbreviation(""), None);
    }

    #[test]
    fn test_trailing_abbreviation_stops_at_dash() {
        // `-` is not an abbreviation character, so only `box` is picked up.
        assert_eq!(trailing_abbreviation("div.search-box"), Some("box"));
    }
}
