//! HTML payload sanitizer built on `scraper`

use carcino_application::TextSanitizer;
use carcino_domain::core::string::collapse_whitespace;
use scraper::{Html, Node};

/// Tags whose entire subtree is dropped
const SKIP_TAGS: [&str; 4] = ["script", "style", "noscript", "svg"];

/// Marker placed before each list item so flattened lists stay readable
const BULLET: &str = "•";

/// Strips markup from source payloads into single-spaced plain prose
///
/// Parsing goes through the HTML5 tokenizer, so malformed markup is repaired
/// rather than rejected and character references are decoded. Text from
/// separate nodes is joined with a single space.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlSanitizer;

impl HtmlSanitizer {
    pub fn new() -> Self {
        Self
    }
}

impl TextSanitizer for HtmlSanitizer {
    fn clean(&self, raw: &str) -> String {
        clean_markup(raw)
    }
}

/// Upper bound on re-parsing passes for entity-encoded markup
const MAX_PASSES: usize = 16;

/// Clean `raw` until a further pass changes nothing.
///
/// Decoding can surface new markup (`&lt;li&gt;` becomes `<li>`), so a single
/// pass is not idempotent. Each layer of encoding costs one pass.
pub fn clean_markup(raw: &str) -> String {
    let mut current = extract_text(raw);
    for _ in 0..MAX_PASSES {
        let next = extract_text(&current);
        if next == current {
            break;
        }
        current = next;
    }
    current
}

/// One pass: parse as a fragment and collect text nodes in document order
fn extract_text(raw: &str) -> String {
    if !raw.contains(&['<', '&'][..]) {
        return collapse_whitespace(raw);
    }

    let fragment = Html::parse_fragment(raw);
    let mut parts: Vec<&str> = Vec::new();

    // Explicit stack: deeply nested payloads must not exhaust the call stack.
    let mut stack = vec![fragment.tree.root()];
    while let Some(node) = stack.pop() {
        match node.value() {
            Node::Text(text) => {
                let t = text.trim();
                if !t.is_empty() {
                    parts.push(t);
                }
                continue;
            }
            Node::Element(element) => {
                let name = element.name();
                if SKIP_TAGS.contains(&name) {
                    continue;
                }
                if name == "li" {
                    parts.push(BULLET);
                }
            }
            Node::Document | Node::Fragment => {}
            _ => continue,
        }

        let children: Vec<_> = node.children().collect();
        stack.extend(children.into_iter().rev());
    }

    collapse_whitespace(&parts.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(raw: &str) -> String {
        HtmlSanitizer.clean(raw)
    }

    #[test]
    fn test_strips_tags_with_single_space_separation() {
        assert_eq!(
            clean("<p>Cancer is a disease.</p><p>It can spread.</p>"),
            "Cancer is a disease. It can spread."
        );
    }

    #[test]
    fn test_collapses_whitespace_variants() {
        assert_eq!(
            clean("  line one\n\n\tline\u{a0}two&nbsp;&nbsp;three \r\n"),
            "line one line two three"
        );
    }

    #[test]
    fn test_decodes_entities() {
        assert_eq!(clean("Crohn&#39;s &amp; colitis &lt; 5%"), "Crohn's & colitis < 5%");
        assert_eq!(clean("caf&eacute; &#x2014; ok"), "café — ok");
    }

    #[test]
    fn test_list_items_get_bullets() {
        let html = "<p>Symptoms:</p><ul><li>Fatigue</li><li>Weight loss</li></ul>";
        assert_eq!(clean(html), "Symptoms: • Fatigue • Weight loss");
    }

    #[test]
    fn test_drops_script_and_style() {
        let html = "<style>.x{color:red}</style><p>Visible</p><script>var x = 1;</script>";
        assert_eq!(clean(html), "Visible");
    }

    #[test]
    fn test_empty_and_plain_inputs() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("   "), "");
        assert_eq!(clean("plain text"), "plain text");
    }

    #[test]
    fn test_malformed_markup_degrades_gracefully() {
        assert_eq!(clean("<p>unclosed <b>bold"), "unclosed bold");
        assert_eq!(clean("a < b and c > d"), "a < b and c > d");
    }

    #[test]
    fn test_entity_encoded_markup_is_stripped() {
        assert_eq!(clean("&lt;p&gt;Escaped&lt;/p&gt;"), "Escaped");
        assert_eq!(clean("&amp;lt;b&amp;gt;twice&amp;lt;/b&amp;gt;"), "twice");
    }

    #[test]
    fn test_entity_encoded_list_item_becomes_bullet() {
        assert_eq!(clean("&lt;li&gt;x"), "• x");
    }

    #[test]
    fn test_deeply_nested_markup() {
        let depth = 5_000;
        let html = format!("{}deep{}", "<div>".repeat(depth), "</div>".repeat(depth));
        assert_eq!(clean(&html), "deep");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "plain",
            "<p>Hello <em>world</em></p>",
            "&lt;p&gt;Escaped&lt;/p&gt;",
            "a &lt; b",
            "<ul><li>One</li><li>Two</li></ul>",
            "x&amp;amp;y",
            "&lt;li&gt;x",
            "&lt;ul&gt;&lt;li&gt;One&lt;/li&gt;&lt;/ul&gt;",
            "<p>unclosed <b>bold",
            "tab\tand\u{a0}nbsp",
        ];
        for sample in samples {
            let once = clean(sample);
            assert_eq!(clean(&once), once, "not idempotent for {:?}", sample);
        }
    }
}
