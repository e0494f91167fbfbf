//! Display-math extraction for clipboard text.
//!
//! Multi-line `$$ ... $$` and `\[ ... \]` blocks are collapsed onto a single
//! line so the line-oriented Markdown converter never sees their bodies.
//! Inline `$...$` spans are passed through byte-identical.

mod block;
mod environments;
mod processor;

pub use block::{MathBlock, MathDelimiter};
pub use environments::{cleanup_math_content, MathEnvironments};
pub use processor::{is_math_delimiter, process_inline_math, process_math_blocks, MathProcessor};
