//! Minimal HTML-to-text helpers for plain-text email bodies and content
//! analysis.

use std::sync::LazyLock;

use regex::Regex;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

const ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    // Last, so `&amp;lt;` decodes to the literal `&lt;`.
    ("&amp;", "&"),
];

/// Strip tags, decode the common entities and collapse whitespace.
///
/// ```
/// use akrin_core::html::extract_text_from_html;
///
/// let text = extract_text_from_html("<p>Fish &amp; chips</p>\n<p>&lt;now&gt;</p>");
/// assert_eq!(text, "Fish & chips <now>");
/// ```
pub fn extract_text_from_html(html: &str) -> String {
    let mut text = TAG_RE.replace_all(html, " ").into_owned();
    for (entity, replacement) in ENTITIES {
        text = text.replace(entity, replacement);
    }
    WHITESPACE_RE.replace_all(&text, " ").trim().to_string()
}

/// Remove tags without decoding entities or touching whitespace.
pub fn strip_tags(html: &str) -> String {
    TAG_RE.replace_all(html, "").into_owned()
}

/// Escape text for inclusion in HTML or XML content and attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacent_blocks_do_not_glue_words() {
        assert_eq!(extract_text_from_html("<td>Name</td><td>Taro</td>"), "Name Taro");
    }

    #[test]
    fn nbsp_and_quotes() {
        assert_eq!(
            extract_text_from_html("say&nbsp;&quot;hi&quot; &#39;there&#39;"),
            "say \"hi\" 'there'"
        );
    }

    #[test]
    fn double_escaped_entities_decode_once() {
        assert_eq!(extract_text_from_html("&amp;lt;b&amp;gt;"), "&lt;b&gt;");
    }

    #[test]
    fn empty_input() {
        assert_eq!(extract_text_from_html(""), "");
        assert_eq!(extract_text_from_html("<br/><hr>"), "");
    }

    #[test]
    fn escape_round_trips_through_extract() {
        let raw = r#"<a href="x">Tom & 'Jerry'</a>"#;
        assert_eq!(extract_text_from_html(&escape(raw)), raw);
    }
}
