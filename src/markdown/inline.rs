//! Inline Markdown substitution with math protection.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    // Display spans first so `$$ a $$` is not read as two inline spans.
    // `\[..\]` counts as math only when it is the whole line.
    static ref MATH_SPAN: Regex =
        Regex::new(r"^\s*\\\[.*\\\]\s*$|\$\$[^$]+\$\$|\$[^$]+\$").unwrap();

    static ref BOLD_ITALIC: Regex = Regex::new(r"\*\*\*([^*]+)\*\*\*").unwrap();
    static ref BOLD: Regex = Regex::new(r"\*\*(.+?)\*\*").unwrap();
    static ref ITALIC: Regex = Regex::new(r"\*([^*]+)\*").unwrap();
    static ref INLINE_CODE: Regex = Regex::new(r"`([^`]+)`").unwrap();
    static ref STRIKETHROUGH: Regex = Regex::new(r"~~([^~]+)~~").unwrap();
    static ref LINK: Regex = Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap();
    static ref BARE_URL: Regex = Regex::new(r"https?://[^\s<\x00]+").unwrap();
}

/// Delimiter of protection tokens; never produced by any inline pattern.
const TOKEN_MARK: char = '\u{0000}';

/// Numbered stash of spans hidden from the inline patterns.
#[derive(Debug, Default)]
struct ProtectedSpans {
    spans: Vec<String>,
}

impl ProtectedSpans {
    fn token(index: usize) -> String {
        format!("{}M{}{}", TOKEN_MARK, index, TOKEN_MARK)
    }

    fn stash(&mut self, span: impl Into<String>) -> String {
        self.spans.push(span.into());
        Self::token(self.spans.len() - 1)
    }

    // Later spans may contain earlier tokens, so restore newest first.
    fn restore(&self, mut text: String) -> String {
        for (index, span) in self.spans.iter().enumerate().rev() {
            text = text.replace(&Self::token(index), span);
        }
        text
    }
}

/// Apply inline Markdown substitutions to a line of text.
///
/// Math spans are stashed before any pattern runs and restored verbatim at
/// the end, so `*`, `_` or backticks inside math are never rewritten. A
/// `\[..\]` pair is math only when it spans the whole line, as collapsed
/// display blocks do; escaped brackets inside running text such as `\[1\]`
/// still get emphasis and links.
/// Patterns run in a fixed order: bold-italic, bold, italic, inline code,
/// strikethrough, link, bare URL. Bold runs before italic so a bold capture
/// is still scanned for italic afterwards.
pub fn process_inline(text: &str) -> String {
    let mut protected = ProtectedSpans::default();

    let text = MATH_SPAN.replace_all(text, |caps: &Captures| protected.stash(&caps[0]));

    let text = BOLD_ITALIC.replace_all(&text, "<strong><em>${1}</em></strong>");
    let text = BOLD.replace_all(&text, "<strong>${1}</strong>");
    let text = ITALIC.replace_all(&text, "<em>${1}</em>");
    let text = INLINE_CODE.replace_all(&text, "<code>${1}</code>");
    let text = STRIKETHROUGH.replace_all(&text, "<del>${1}</del>");

    // Finished anchors are hidden so the bare URL pass cannot re-link them
    let text = LINK.replace_all(&text, |caps: &Captures| {
        protected.stash(format!("<a href=\"{}\">{}</a>", &caps[2], &caps[1]))
    });
    let text = BARE_URL.replace_all(&text, "<a href=\"${0}\">${0}</a>");

    protected.restore(text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_emphasis() {
        assert_eq!(process_inline("**Bold text**"), "<strong>Bold text</strong>");
        assert_eq!(process_inline("*Italic text*"), "<em>Italic text</em>");
        assert_eq!(
            process_inline("***Bold italic***"),
            "<strong><em>Bold italic</em></strong>"
        );
        assert_eq!(process_inline("~~Strikethrough~~"), "<del>Strikethrough</del>");
    }

    #[test]
    fn test_nested_emphasis() {
        assert_eq!(
            process_inline("**Bold with *italic* inside**"),
            "<strong>Bold with <em>italic</em> inside</strong>"
        );
    }

    #[test]
    fn test_inline_code() {
        assert_eq!(
            process_inline("Use `cargo build` here"),
            "Use <code>cargo build</code> here"
        );
    }

    #[test]
    fn test_links() {
        assert_eq!(
            process_inline("[Link](https://example.com)"),
            "<a href=\"https://example.com\">Link</a>"
        );
        assert_eq!(
            process_inline("https://example.com"),
            "<a href=\"https://example.com\">https://example.com</a>"
        );
        assert_eq!(
            process_inline("see http://a.org/x?y=1 now"),
            "see <a href=\"http://a.org/x?y=1\">http://a.org/x?y=1</a> now"
        );
    }

    #[test]
    fn test_link_text_may_be_url() {
        assert_eq!(
            process_inline("[https://a.org](https://a.org)"),
            "<a href=\"https://a.org\">https://a.org</a>"
        );
    }

    #[test]
    fn test_math_is_protected() {
        let line = "Area $a*b*c$ and `code` with $x_1 * y_2$";
        assert_eq!(
            process_inline(line),
            "Area $a*b*c$ and <code>code</code> with $x_1 * y_2$"
        );
    }

    #[test]
    fn test_display_math_on_one_line_is_protected() {
        assert_eq!(process_inline("$$ a^* * b^* $$"), "$$ a^* * b^* $$");
        assert_eq!(process_inline("\\[ x^* * y^* \\]"), "\\[ x^* * y^* \\]");
        assert_eq!(process_inline("   \\[ a^* * b^* \\]"), "   \\[ a^* * b^* \\]");
    }

    #[test]
    fn test_escaped_brackets_in_text_are_not_math() {
        assert_eq!(
            process_inline("ref \\[*1*\\] in [docs](https://d.org)"),
            "ref \\[<em>1</em>\\] in <a href=\"https://d.org\">docs</a>"
        );
    }

    #[test]
    fn test_math_inside_emphasis_and_links() {
        assert_eq!(
            process_inline("**sum $a*b$**"),
            "<strong>sum $a*b$</strong>"
        );
        assert_eq!(
            process_inline("[$x*y$](https://m.org)"),
            "<a href=\"https://m.org\">$x*y$</a>"
        );
    }

    #[test]
    fn test_many_spans_restore_in_place() {
        let line = (0..12)
            .map(|i| format!("${}*$", i))
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(process_inline(&line), line);
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(process_inline("#Invalid Header"), "#Invalid Header");
        assert_eq!(process_inline(""), "");
    }
}
