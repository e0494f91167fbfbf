//! Display-math block extraction.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::{MathBlock, MathDelimiter};

lazy_static! {
    // Opening line: indentation, then `$$` or `\[` alone on the line
    static ref DISPLAY_MATH_START: Regex = Regex::new(r"^(\s*)(\$\$|\\\[)\s*$").unwrap();

    // Single-line inline span without an inner `$`
    static ref INLINE_MATH: Regex = Regex::new(r"\$[^$]+\$").unwrap();
}

/// LaTeX row break placed between collapsed body lines.
const ROW_BREAK: &str = " \\\\ ";

/// Collapses display-math blocks onto single lines.
#[derive(Debug, Clone, Default)]
pub struct MathProcessor {
    _private: (),
}

impl MathProcessor {
    /// Create a new math processor.
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Process math blocks while preserving their indentation.
    ///
    /// Each `$$`/`\[` block becomes one line; every other line goes through
    /// [`process_inline_math`]. A block still open at end of input is flushed
    /// with whatever body was collected.
    pub fn process_math_blocks<S: AsRef<str>>(&self, lines: &[S]) -> Vec<String> {
        let mut processed = Vec::with_capacity(lines.len());
        let mut current: Option<MathBlock> = None;

        for line in lines {
            let line = line.as_ref();

            if let Some(mut block) = current.take() {
                if block.is_closed_by(line) {
                    processed.push(format_math_block(&block));
                } else {
                    // A second opener inside a block is ordinary content
                    block.push_line(line);
                    current = Some(block);
                }
                continue;
            }

            match opening_delimiter(line) {
                Some((indentation, delimiter)) => {
                    current = Some(MathBlock::new(delimiter, indentation));
                }
                None => processed.push(process_inline_math(line)),
            }
        }

        if let Some(block) = current {
            log::debug!(
                "Unterminated {} math block flushed with {} line(s)",
                block.delimiter,
                block.line_count()
            );
            processed.push(format_math_block(&block));
        }

        processed
    }
}

/// Process math blocks with a default [`MathProcessor`].
pub fn process_math_blocks<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    MathProcessor::new().process_math_blocks(lines)
}

/// Rewrite every inline `$...$` span in a line.
///
/// The rewrite is currently the identity: inline math leaves byte-identical.
pub fn process_inline_math(line: &str) -> String {
    INLINE_MATH
        .replace_all(line, |caps: &Captures| caps[0].to_string())
        .into_owned()
}

/// Check whether a line consists only of a display-math delimiter.
pub fn is_math_delimiter(line: &str) -> Option<MathDelimiter> {
    match line.trim() {
        "$$" => Some(MathDelimiter::DollarDollar),
        "\\[" | "\\]" => Some(MathDelimiter::Bracket),
        _ => None,
    }
}

fn opening_delimiter(line: &str) -> Option<(String, MathDelimiter)> {
    let caps = DISPLAY_MATH_START.captures(line)?;
    let delimiter = MathDelimiter::from_open(caps.get(2)?.as_str())?;
    Some((caps[1].to_string(), delimiter))
}

fn format_math_block(block: &MathBlock) -> String {
    let rows: Vec<&str> = block
        .lines()
        .map(|line| {
            line.strip_prefix(block.indentation.as_str())
                .unwrap_or(line)
                .trim()
        })
        .filter(|line| !line.is_empty())
        .collect();

    format!(
        "{}{} {} {}",
        block.indentation,
        block.delimiter.open(),
        rows.join(ROW_BREAK),
        block.delimiter.close()
    )
}
