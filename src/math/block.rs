//! Math block model.

use std::fmt;

/// Delimiter family of a display-math block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathDelimiter {
    /// `$$ ... $$`
    DollarDollar,
    /// `\[ ... \]`
    Bracket,
}

impl MathDelimiter {
    /// Opening delimiter text.
    pub fn open(&self) -> &'static str {
        match self {
            MathDelimiter::DollarDollar => "$$",
            MathDelimiter::Bracket => "\\[",
        }
    }

    /// Closing delimiter text.
    pub fn close(&self) -> &'static str {
        match self {
            MathDelimiter::DollarDollar => "$$",
            MathDelimiter::Bracket => "\\]",
        }
    }

    /// Parse an opening delimiter.
    pub fn from_open(s: &str) -> Option<Self> {
        match s {
            "$$" => Some(MathDelimiter::DollarDollar),
            "\\[" => Some(MathDelimiter::Bracket),
            _ => None,
        }
    }
}

impl fmt::Display for MathDelimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.open())
    }
}

/// A display-math block being collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathBlock {
    /// Collected body, source lines joined by `\n`
    pub content: String,

    /// Delimiter family that opened the block
    pub delimiter: MathDelimiter,

    /// Whitespace prefix of the opening line
    pub indentation: String,

    /// Whether this is an inline span rather than a display block
    pub is_inline: bool,

    line_count: usize,
}

impl MathBlock {
    /// Start a new display block.
    pub fn new(delimiter: MathDelimiter, indentation: impl Into<String>) -> Self {
        Self {
            content: String::new(),
            delimiter,
            indentation: indentation.into(),
            is_inline: false,
            line_count: 0,
        }
    }

    /// Append a raw body line.
    pub fn push_line(&mut self, line: &str) {
        if self.line_count > 0 {
            self.content.push('\n');
        }
        self.content.push_str(line);
        self.line_count += 1;
    }

    /// Number of body lines collected so far.
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Iterate over the collected body lines.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        let count = self.line_count;
        self.content.split('\n').take(count)
    }

    /// Whether `line` is the closing delimiter of this block's family.
    pub fn is_closed_by(&self, line: &str) -> bool {
        line.trim() == self.delimiter.close()
    }
}
