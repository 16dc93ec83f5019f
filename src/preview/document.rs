//! Composite preview document
//!
//! The three editor buffers are pasted verbatim into a fixed HTML skeleton.
//! Nothing is escaped or validated: the buffers are the user's own code and
//! the preview must run it as written.

/// Combine markup, stylesheet and script into one HTML document.
pub fn compose_document(html: &str, css: &str, js: &str) -> String {
    format!(
        "
    <html>
      <head>
        <style>{css}</style>
      </head>
      <body>
        {html}
        <script>{js}</script>
      </body>
    </html>
  "
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Sandbox
// ─────────────────────────────────────────────────────────────────────────────

/// Capabilities granted to the embedded preview document.
///
/// Only script execution is allowed. Storage, top-level navigation, forms,
/// popups and plugins all stay blocked because the document is given an
/// opaque origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SandboxPolicy {
    pub allow_scripts: bool,
}

impl Default for SandboxPolicy {
    fn default() -> Self {
        Self {
            allow_scripts: true,
        }
    }
}

impl SandboxPolicy {
    /// Value for the iframe `sandbox` attribute.
    pub fn attribute_value(&self) -> &'static str {
        if self.allow_scripts {
            "allow-scripts"
        } else {
            ""
        }
    }
}

/// Escape text for use inside a double-quoted HTML attribute.
pub fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + value.len() / 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// A standalone page that shows `document` inside a sandboxed iframe.
///
/// This is what the system browser opens, so the preview there gets the same
/// isolation an embedded `srcdoc` frame would have.
pub fn sandboxed_host_page(document: &str, policy: SandboxPolicy) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Extension Preview</title>
  <style>
    html, body {{ margin: 0; height: 100%; background: #f1f5f9; }}
    iframe {{ border: 0; width: 100%; height: 100%; background: #ffffff; }}
  </style>
</head>
<body>
  <iframe title="Extension Preview" sandbox="{}" srcdoc="{}"></iframe>
</body>
</html>
"#,
        policy.attribute_value(),
        escape_attribute(document)
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn region<'a>(doc: &'a str, open: &str, close: &str) -> &'a str {
        let start = doc.find(open).unwrap() + open.len();
        let end = doc.rfind(close).unwrap();
        &doc[start..end]
    }

    #[test]
    fn test_buffers_land_in_their_regions() {
        let cases = [
            ("<h1>Hi</h1>", "h1 { color: red; }", "console.log(1);"),
            ("", "", ""),
            ("<p>{ } & \"</p>", "a::after { content: '<'; }", "if (a < b && c) {}"),
            ("ø 中 🎉", "/* ø */", "// 🎉"),
        ];

        for (html, css, js) in cases {
            let doc = compose_document(html, css, js);
            assert!(region(&doc, "<style>", "</style>").contains(css));
            assert!(region(&doc, "<body>", "</body>").contains(html));
            assert!(region(&doc, "<script>", "</script>").contains(js));
        }
    }

    #[test]
    fn test_document_layout() {
        let doc = compose_document("<p>x</p>", "p{}", "f()");
        assert!(doc.starts_with("\n    <html>\n      <head>\n        <style>p{}</style>"));
        assert!(doc.contains("<body>\n        <p>x</p>\n        <script>f()</script>"));
        assert!(doc.ends_with("</html>\n  "));
    }

    #[test]
    fn test_sandbox_allows_scripts_only() {
        assert_eq!(SandboxPolicy::default().attribute_value(), "allow-scripts");
        assert_eq!(
            SandboxPolicy {
                allow_scripts: false
            }
            .attribute_value(),
            ""
        );
    }

    #[test]
    fn test_escape_attribute() {
        assert_eq!(
            escape_attribute(r#"<a href="x">&</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;"
        );
        assert_eq!(escape_attribute("it's"), "it's");
    }

    #[test]
    fn test_host_page_embeds_escaped_document() {
        let doc = compose_document("<p class=\"a\">Hi</p>", "", "");
        let page = sandboxed_host_page(&doc, SandboxPolicy::default());

        assert!(page.contains(r#"sandbox="allow-scripts""#));
        assert!(page.contains("&lt;p class=&quot;a&quot;&gt;Hi&lt;/p&gt;"));
        assert!(!page.contains("<p class=\"a\">"));
    }
}
