//! User-supplied CSS overrides.

use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Error, Result};

lazy_static! {
    static ref CSS_COMMENT: Regex = Regex::new(r"(?s)/\*.*?\*/").unwrap();
}

/// One selector and its declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    /// CSS selector, e.g. `body` or `.footer`
    pub selector: String,

    /// Declarations, one per line, e.g. `color: red;`
    pub declarations: String,
}

/// Ordered selector → declarations map.
///
/// Inserting a selector that already exists replaces its declarations in
/// place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomStyles {
    rules: Vec<StyleRule>,
}

impl CustomStyles {
    /// Create an empty style set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the declarations of a selector.
    pub fn insert(&mut self, selector: impl Into<String>, declarations: impl Into<String>) {
        let selector = selector.into();
        let declarations = declarations.into();
        match self.rules.iter_mut().find(|r| r.selector == selector) {
            Some(rule) => rule.declarations = declarations,
            None => self.rules.push(StyleRule {
                selector,
                declarations,
            }),
        }
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_rule(mut self, selector: impl Into<String>, declarations: impl Into<String>) -> Self {
        self.insert(selector, declarations);
        self
    }

    /// Declarations for a selector.
    pub fn get(&self, selector: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|r| r.selector == selector)
            .map(|r| r.declarations.as_str())
    }

    /// Iterate over rules in insertion order.
    pub fn rules(&self) -> impl Iterator<Item = &StyleRule> {
        self.rules.iter()
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether there are no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Parse a style sheet.
    ///
    /// Accepts rules spread over several lines or written on one line.
    /// Comments are ignored, a rule without a selector is an error, and
    /// trailing text without a closing brace is ignored.
    pub fn parse(css: &str) -> Result<Self> {
        let css = CSS_COMMENT.replace_all(css, "");
        let mut styles = Self::new();

        let mut chunks = css.split('}').peekable();
        while let Some(chunk) = chunks.next() {
            // The text after the last `}` is not a complete rule
            if chunks.peek().is_none() {
                break;
            }

            let Some((selector, body)) = chunk.split_once('{') else {
                if chunk.trim().is_empty() {
                    continue;
                }
                return Err(Error::Style(format!("missing '{{' before '{}'", chunk.trim())));
            };

            let selector = selector.trim();
            if selector.is_empty() {
                return Err(Error::Style("rule without selector".to_string()));
            }

            let declarations: Vec<String> = body
                .split(';')
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(|d| format!("{};", d))
                .collect();

            styles.insert(selector, declarations.join("\n"));
        }

        Ok(styles)
    }

    /// Read and parse a style sheet file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let css = fs::read_to_string(path.as_ref())?;
        let styles = Self::parse(&css)?;
        log::debug!(
            "Loaded {} custom style rule(s) from {}",
            styles.len(),
            path.as_ref().display()
        );
        Ok(styles)
    }

    /// Render the rules as a CSS block.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        for rule in &self.rules {
            css.push_str(&rule.selector);
            css.push_str(" {\n");
            for line in rule.declarations.lines() {
                css.push_str("    ");
                css.push_str(line);
                css.push('\n');
            }
            css.push_str("}\n");
        }
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_multiline_rules() {
        let css = "body {\n    background-color: #f0f0f0;\n    margin: 0;\n}\n\n.custom-class {\n    color: red;\n}\n";
        let styles = CustomStyles::parse(css).unwrap();
        assert_eq!(styles.len(), 2);
        assert_eq!(
            styles.get("body"),
            Some("background-color: #f0f0f0;\nmargin: 0;")
        );
        assert_eq!(styles.get(".custom-class"), Some("color: red;"));
    }

    #[test]
    fn test_parse_single_line_rules_and_comments() {
        let css = "/* theme */ h1 { color: navy } .footer{font-size:12px;}";
        let styles = CustomStyles::parse(css).unwrap();
        assert_eq!(styles.get("h1"), Some("color: navy;"));
        assert_eq!(styles.get(".footer"), Some("font-size:12px;"));
    }

    #[test]
    fn test_repeated_selector_replaces() {
        let styles = CustomStyles::parse("p { color: red; }\np { color: blue; }").unwrap();
        assert_eq!(styles.len(), 1);
        assert_eq!(styles.get("p"), Some("color: blue;"));
    }

    #[test]
    fn test_unclosed_rule_is_ignored() {
        let styles = CustomStyles::parse("a { color: red; }\nb { color: blue;").unwrap();
        assert_eq!(styles.len(), 1);
        assert!(styles.get("b").is_none());
    }

    #[test]
    fn test_rule_without_selector_is_error() {
        assert!(matches!(
            CustomStyles::parse("{ color: red; }"),
            Err(Error::Style(_))
        ));
        assert!(matches!(
            CustomStyles::parse("color: red; }"),
            Err(Error::Style(_))
        ));
    }

    #[test]
    fn test_to_css() {
        let styles = CustomStyles::new()
            .with_rule("body", "background-color: #f0f0f0;")
            .with_rule(".custom-class", "color: red;\nmargin: 0;");
        assert_eq!(
            styles.to_css(),
            "body {\n    background-color: #f0f0f0;\n}\n.custom-class {\n    color: red;\n    margin: 0;\n}\n"
        );
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("style.css");
        fs::write(&path, "body {\n  color: #333;\n}\n").unwrap();

        let styles = CustomStyles::from_file(&path).unwrap();
        assert_eq!(styles.get("body"), Some("color: #333;"));

        let missing = CustomStyles::from_file(dir.path().join("missing.css"));
        assert!(matches!(missing, Err(Error::Io(_))));
    }
}
