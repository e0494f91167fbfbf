//! Block-level Markdown recognition.

use lazy_static::lazy_static;
use regex::Regex;

use super::inline::process_inline;
use super::lists::ListBuilder;

lazy_static! {
    static ref HEADER: Regex = Regex::new(r"^(#{1,4})\s+(.+)$").unwrap();
    static ref BLOCKQUOTE: Regex = Regex::new(r"^>\s*(.*)$").unwrap();
    static ref CODE_FENCE: Regex = Regex::new(r"^```([\w+#.-]*)\s*$").unwrap();
    static ref LIST_ITEM: Regex = Regex::new(r"^(\s*)([-*]|\d+\.)\s+(.+)$").unwrap();
    static ref ORDERED_MARKER: Regex = Regex::new(r"^\d+\.$").unwrap();
}

/// Language tag used when a fence has none.
pub const DEFAULT_CODE_LANGUAGE: &str = "plaintext";

/// Kind of a block-level element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// `#` to `####` heading
    Header,
    /// `-`, `*` or `N.` list item
    List,
    /// Fenced code block opener
    Code,
    /// `>` quoted line
    Blockquote,
    /// Any other line
    Paragraph,
}

/// A block-level Markdown element recognised on one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownBlock {
    /// Element kind
    pub kind: BlockKind,

    /// Raw text content (without the block marker)
    pub content: String,

    /// Header depth (1-4) or list nesting level
    pub level: usize,

    /// Code fence language tag
    pub language: String,

    /// Whether a list item uses a numbered marker
    pub ordered: bool,
}

impl MarkdownBlock {
    fn new(kind: BlockKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            level: 0,
            language: String::new(),
            ordered: false,
        }
    }

    /// Create a header block.
    pub fn header(level: usize, content: impl Into<String>) -> Self {
        Self {
            level,
            ..Self::new(BlockKind::Header, content)
        }
    }

    /// Create a blockquote block.
    pub fn blockquote(content: impl Into<String>) -> Self {
        Self::new(BlockKind::Blockquote, content)
    }

    /// Create a code block opener. An empty language becomes `plaintext`.
    pub fn code(language: &str) -> Self {
        let language = if language.is_empty() {
            DEFAULT_CODE_LANGUAGE
        } else {
            language
        };
        Self {
            language: language.to_string(),
            ..Self::new(BlockKind::Code, "")
        }
    }

    /// Create a list item block.
    pub fn list_item(level: usize, ordered: bool, content: impl Into<String>) -> Self {
        Self {
            level,
            ordered,
            ..Self::new(BlockKind::List, content)
        }
    }

    /// Create a plain paragraph line.
    pub fn paragraph(content: impl Into<String>) -> Self {
        Self::new(BlockKind::Paragraph, content)
    }

    /// Render a single-line block to HTML.
    ///
    /// A code block renders as an empty `<pre>`; its body is supplied
    /// through [`format_code_block`].
    pub fn to_html(&self) -> String {
        match self.kind {
            BlockKind::Header => format!(
                "<h{level}>{}</h{level}>",
                process_inline(&self.content),
                level = self.level
            ),
            BlockKind::Blockquote => {
                format!("<blockquote>{}</blockquote>", process_inline(&self.content))
            }
            BlockKind::List => {
                let mut list = ListBuilder::new();
                list.push_item(self.level, self.ordered, &process_inline(&self.content));
                list.finish().unwrap_or_default()
            }
            BlockKind::Code => format_code_block::<&str>(&self.language, &[]),
            BlockKind::Paragraph => process_inline(&self.content),
        }
    }
}

/// Identify the block construct that opens on a line.
///
/// Headers win over blockquotes, which win over code fences, which win over
/// list items. Returns `None` for plain text.
pub fn identify_block(line: &str) -> Option<MarkdownBlock> {
    if let Some(caps) = HEADER.captures(line) {
        return Some(MarkdownBlock::header(caps[1].len(), &caps[2]));
    }

    if let Some(caps) = BLOCKQUOTE.captures(line) {
        return Some(MarkdownBlock::blockquote(&caps[1]));
    }

    if let Some(caps) = CODE_FENCE.captures(line) {
        return Some(MarkdownBlock::code(&caps[1]));
    }

    parse_list_item(line)
}

/// Parse a list item line into a block.
pub fn parse_list_item(line: &str) -> Option<MarkdownBlock> {
    let caps = LIST_ITEM.captures(line)?;
    let level = caps[1].chars().count() / 2;
    let ordered = ORDERED_MARKER.is_match(&caps[2]);
    Some(MarkdownBlock::list_item(level, ordered, &caps[3]))
}

/// Format collected code lines as a highlighted block.
pub fn format_code_block<S: AsRef<str>>(language: &str, lines: &[S]) -> String {
    let language = if language.is_empty() {
        DEFAULT_CODE_LANGUAGE
    } else {
        language
    };
    let body: Vec<&str> = lines.iter().map(AsRef::as_ref).collect();
    format!(
        "<pre><code class=\"language-{}\">{}</code></pre>",
        language,
        body.join("\n")
    )
}
