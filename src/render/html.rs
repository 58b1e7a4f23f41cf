//! HTML fragment helpers shared by the envelope formatter.
//!
//! Fragments are plain strings; callers own them and replace any previously
//! displayed fragment wholesale. The helpers here only cover escaping and the
//! handful of block shapes the formatter emits.

/// Escape text for safe interpolation into an HTML fragment.
///
/// Covers the five characters with meaning in element and attribute context.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Wrap already-rendered inner HTML in a card container.
pub fn card(inner: &str) -> String {
    format!("<div class=\"result-card\">{inner}</div>")
}

/// A single "Label: value" line.
pub fn field_line(label: &str, value: &str) -> String {
    format!(
        "<div class=\"result-field\"><strong>{}:</strong> {}</div>",
        escape(label),
        escape(value)
    )
}

/// A heading followed by an already-rendered block, used for the one-level
/// nested-structure cutoff. The body must be rendered HTML (it is not
/// escaped here).
pub fn labeled_block(label: &str, block_html: &str) -> String {
    format!(
        "<div class=\"result-field\"><strong>{}:</strong>{}</div>",
        escape(label),
        block_html
    )
}

/// A bare preformatted block, used for the raw-JSON fallback path.
pub fn pre_block(body: &str) -> String {
    format!("<pre>{}</pre>", escape(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_handles_markup_characters() {
        assert_eq!(
            escape("<b>\"A&B\"</b> 'x'"),
            "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt; &#39;x&#39;"
        );
    }

    #[test]
    fn escape_leaves_plain_text_alone() {
        assert_eq!(escape("Beirut 1920"), "Beirut 1920");
    }

    #[test]
    fn field_line_escapes_both_sides() {
        let line = field_line("City <name>", "A&B");
        assert!(line.contains("City &lt;name&gt;"));
        assert!(line.contains("A&amp;B"));
    }

    #[test]
    fn labeled_block_wraps_rendered_body() {
        let block = labeled_block("Routes", &pre_block("{\n  \"count\": 3\n}"));
        assert!(block.starts_with("<div class=\"result-field\"><strong>Routes:</strong><pre>"));
        assert!(block.ends_with("</pre></div>"));
        assert!(block.contains("&quot;count&quot;: 3"));
    }
}
