//! Conversion driver tying math, Markdown and rendering together.
//!
//! Raw clipboard text goes through four stages: the first line becomes the
//! title, display math in the remaining lines is collapsed onto single
//! lines, the result is converted from Markdown to an HTML fragment, and the
//! fragment is rendered into a complete document.
//!
//! # Example
//!
//! ```
//! use htmlclip::convert::{ClipConverter, ConvertOptions};
//!
//! fn main() -> htmlclip::Result<()> {
//!     let converter = ClipConverter::new();
//!     let result = converter.convert("# Notes\n**bold** $x^2$", &ConvertOptions::default())?;
//!     assert_eq!(result.title, "Notes");
//!     assert!(result.html.contains("<strong>bold</strong>"));
//!     Ok(())
//! }
//! ```

mod output;

pub use output::{save_outputs, OutputPaths};

use crate::error::{Error, Result};
use crate::markdown::MarkdownProcessor;
use crate::math::MathProcessor;
use crate::render::{HtmlGenerator, RenderOptions};

/// Options for clipboard conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Rendering options
    pub render: RenderOptions,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }
}

/// Result of a conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertResult {
    /// Title taken from the first line
    pub title: String,

    /// HTML fragment produced from the body
    pub fragment: String,

    /// Complete HTML document
    pub html: String,
}

/// Split raw text into a title and body lines.
///
/// Line endings are normalised to `\n` and the text is trimmed. The first
/// line, without leading `#` characters and surrounding whitespace, is the
/// title.
pub fn split_title(raw: &str) -> (String, Vec<String>) {
    let normalized = raw.replace("\r\n", "\n");
    let mut lines = normalized.trim().split('\n');

    let title = lines
        .next()
        .unwrap_or("")
        .trim_start_matches('#')
        .trim()
        .to_string();
    let body = lines.map(str::to_string).collect();

    (title, body)
}

/// Converts clipboard text to HTML.
#[derive(Debug, Clone, Default)]
pub struct ClipConverter {
    math: MathProcessor,
    markdown: MarkdownProcessor,
    html: HtmlGenerator,
}

impl ClipConverter {
    /// Create a new converter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract the title and convert the body to an HTML fragment.
    pub fn process_content(&self, raw: &str) -> (String, String) {
        let (title, body) = split_title(raw);
        log::debug!("Title: {:?}, {} body line(s)", title, body.len());

        let math_processed = self.math.process_math_blocks(body.as_slice());
        let fragment = self.markdown.process(&math_processed.join("\n"));

        (title, fragment)
    }

    /// Convert raw text to a complete HTML document.
    ///
    /// Blank text is rejected with [`Error::ClipboardEmpty`].
    pub fn convert(&self, raw: &str, options: &ConvertOptions) -> Result<ConvertResult> {
        if raw.trim().is_empty() {
            return Err(Error::ClipboardEmpty);
        }

        let (title, fragment) = self.process_content(raw);
        log::debug!("Generating HTML for {:?}", title);
        let html = self.html.render(&title, &fragment, &options.render);

        Ok(ConvertResult {
            title,
            fragment,
            html,
        })
    }
}
