//! Constrained Markdown to HTML conversion.
//!
//! A single-pass, regex-driven line scanner. Headers, blockquotes and list
//! items occupy one line each, fenced code spans lines, and everything else
//! is inline-processed text. Inline math is never touched.

mod block;
mod inline;
mod lists;
mod processor;

pub use block::{
    format_code_block, identify_block, parse_list_item, BlockKind, MarkdownBlock,
    DEFAULT_CODE_LANGUAGE,
};
pub use inline::process_inline;
pub use lists::group_list_lines;
pub use processor::{process, MarkdownProcessor, LINE_BREAK};
