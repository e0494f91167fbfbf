//! Line scanner turning math-normalised text into an HTML fragment.

use super::block::{format_code_block, identify_block, BlockKind, MarkdownBlock};
use super::inline::process_inline;
use super::lists::ListBuilder;

/// Marker emitted after every blank line.
pub const LINE_BREAK: &str = "<br>";

const FENCE: &str = "```";

/// Scanner state between lines. Only code blocks span lines.
#[derive(Debug)]
enum BlockState {
    None,
    Code { language: String, buffer: Vec<String> },
}

/// Converts constrained Markdown to HTML while preserving math.
#[derive(Debug, Clone, Default)]
pub struct MarkdownProcessor {
    _private: (),
}

impl MarkdownProcessor {
    /// Create a new Markdown processor.
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Convert content to an HTML fragment, one output line per construct.
    ///
    /// Unrecognised lines are inline-processed and emitted without a `<p>`
    /// wrapper. Consecutive list items form one nested list. A code fence
    /// left open at end of input is flushed with the lines collected so far.
    pub fn process(&self, content: &str) -> String {
        if content.is_empty() {
            return String::new();
        }

        let mut output: Vec<String> = Vec::new();
        let mut state = BlockState::None;
        let mut list = ListBuilder::new();

        for line in content.split('\n') {
            if let BlockState::Code { language, buffer } = &mut state {
                if line.trim() == FENCE {
                    output.push(format_code_block(language.as_str(), buffer.as_slice()));
                    state = BlockState::None;
                } else {
                    buffer.push(line.to_string());
                }
                continue;
            }

            let block = identify_block(line).unwrap_or_else(|| MarkdownBlock::paragraph(line));

            if block.kind == BlockKind::List {
                list.push_item(block.level, block.ordered, &process_inline(&block.content));
                continue;
            }
            output.extend(list.finish());

            match block.kind {
                BlockKind::Code => {
                    state = BlockState::Code {
                        language: block.language,
                        buffer: Vec::new(),
                    };
                    continue;
                }
                _ => output.push(block.to_html()),
            }

            if line.trim().is_empty() {
                output.push(LINE_BREAK.to_string());
            }
        }

        output.extend(list.finish());

        if let BlockState::Code { language, buffer } = state {
            log::debug!(
                "Unterminated {} code fence flushed with {} line(s)",
                language,
                buffer.len()
            );
            output.push(format_code_block(&language, buffer.as_slice()));
        }

        output.join("\n")
    }
}

/// Convert content with a default [`MarkdownProcessor`].
pub fn process(content: &str) -> String {
    MarkdownProcessor::new().process(content)
}
