//! Grouping of consecutive list items into nested lists.

use std::mem;

use super::block::parse_list_item;
use super::inline::process_inline;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListTag {
    Ordered,
    Unordered,
}

impl ListTag {
    fn from_ordered(ordered: bool) -> Self {
        if ordered {
            ListTag::Ordered
        } else {
            ListTag::Unordered
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            ListTag::Ordered => "ol",
            ListTag::Unordered => "ul",
        }
    }
}

/// Builds one HTML list from a run of list items.
///
/// Keeps a stack of open lists keyed by nesting level. Deeper lists are
/// closed before a shallower or equal item is added; a deeper item opens a
/// new list inside the still-open parent `<li>`.
#[derive(Debug, Default)]
pub(crate) struct ListBuilder {
    stack: Vec<(usize, ListTag)>,
    html: String,
}

impl ListBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add an item whose content is already rendered HTML.
    pub(crate) fn push_item(&mut self, level: usize, ordered: bool, content: &str) {
        let tag = ListTag::from_ordered(ordered);

        while self.stack.last().is_some_and(|&(open, _)| open > level) {
            self.close_top();
        }

        match self.stack.last() {
            Some(&(open, open_tag)) if open == level && open_tag == tag => {
                self.html.push_str("</li>");
            }
            Some(&(open, _)) if open == level => {
                self.close_top();
                self.open(level, tag);
            }
            _ => self.open(level, tag),
        }

        self.html.push_str("<li>");
        self.html.push_str(content);
    }

    /// Close every open list and return the finished HTML.
    pub(crate) fn finish(&mut self) -> Option<String> {
        if self.stack.is_empty() {
            return None;
        }
        while !self.stack.is_empty() {
            self.close_top();
        }
        Some(mem::take(&mut self.html))
    }

    fn open(&mut self, level: usize, tag: ListTag) {
        self.html.push('<');
        self.html.push_str(tag.as_str());
        self.html.push('>');
        self.stack.push((level, tag));
    }

    fn close_top(&mut self) {
        if let Some((_, tag)) = self.stack.pop() {
            self.html.push_str("</li></");
            self.html.push_str(tag.as_str());
            self.html.push('>');
        }
    }
}

/// Merge runs of list-item lines into nested `<ul>`/`<ol>` structures.
///
/// Each run becomes a single output line; all other lines pass through
/// untouched. Open lists are flushed at the first non-list line and at the
/// end of input.
pub fn group_list_lines<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut output = Vec::with_capacity(lines.len());
    let mut list = ListBuilder::new();

    for line in lines {
        let line = line.as_ref();
        match parse_list_item(line) {
            Some(item) => {
                list.push_item(item.level, item.ordered, &process_inline(&item.content));
            }
            None => {
                output.extend(list.finish());
                output.push(line.to_string());
            }
        }
    }
    output.extend(list.finish());

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_items() {
        assert_eq!(group_list_lines(&["- Item"]), vec!["<ul><li>Item</li></ul>"]);
        assert_eq!(group_list_lines(&["* Item"]), vec!["<ul><li>Item</li></ul>"]);
        assert_eq!(group_list_lines(&["1. Item"]), vec!["<ol><li>Item</li></ol>"]);
    }

    #[test]
    fn test_siblings_share_one_list() {
        assert_eq!(
            group_list_lines(&["- A", "- B", "- C"]),
            vec!["<ul><li>A</li><li>B</li><li>C</li></ul>"]
        );
    }

    #[test]
    fn test_nested_list_opens_inside_parent_item() {
        assert_eq!(
            group_list_lines(&["- A", "  - B", "  - C", "- D"]),
            vec!["<ul><li>A<ul><li>B</li><li>C</li></ul></li><li>D</li></ul>"]
        );
    }

    #[test]
    fn test_deep_levels_close_in_order() {
        assert_eq!(
            group_list_lines(&["1. A", "  - B", "    - C", "2. D"]),
            vec!["<ol><li>A<ul><li>B<ul><li>C</li></ul></li></ul></li><li>D</li></ol>"]
        );
    }

    #[test]
    fn test_marker_change_at_same_level_starts_new_list() {
        assert_eq!(
            group_list_lines(&["- A", "1. B"]),
            vec!["<ul><li>A</li></ul><ol><li>B</li></ol>"]
        );
    }

    #[test]
    fn test_non_list_line_flushes() {
        assert_eq!(
            group_list_lines(&["- A", "text", "- B"]),
            vec!["<ul><li>A</li></ul>", "text", "<ul><li>B</li></ul>"]
        );
    }

    #[test]
    fn test_item_content_is_inline_processed() {
        assert_eq!(
            group_list_lines(&["- **bold** and $a*b$"]),
            vec!["<ul><li><strong>bold</strong> and $a*b$</li></ul>"]
        );
    }

    #[test]
    fn test_builder_is_reusable_after_finish() {
        let mut list = ListBuilder::new();
        assert!(list.finish().is_none());

        list.push_item(0, false, "x");
        assert_eq!(list.finish().as_deref(), Some("<ul><li>x</li></ul>"));
        assert!(list.finish().is_none());

        list.push_item(0, true, "y");
        assert_eq!(list.finish().as_deref(), Some("<ol><li>y</li></ol>"));
    }
}
