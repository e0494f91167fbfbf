//! # htmlclip
//!
//! Clipboard text to styled HTML, with math preserved for MathJax.
//!
//! The first line of the text becomes the document title. The remaining
//! lines may use a constrained Markdown dialect (headers, lists,
//! blockquotes, fenced code, emphasis, links) mixed with TeX math in
//! `$...$`, `$$...$$` or `\[...\]`. Math is left byte-identical for the
//! browser to typeset.
//!
//! ## Quick Start
//!
//! ```
//! use htmlclip::HtmlClip;
//!
//! fn main() -> htmlclip::Result<()> {
//!     let doc = HtmlClip::new()
//!         .with_timestamp("2024-01-01 00:00:00")
//!         .convert("# Notes\nEuler: $e^{i\\pi} + 1 = 0$")?;
//!
//!     assert_eq!(doc.title(), "Notes");
//!     assert!(doc.html().contains("$e^{i\\pi} + 1 = 0$"));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Math normalisation**: multi-line display math collapsed onto one line
//! - **Markdown subset**: headers, nested lists, code fences, inline styles
//! - **Standalone output**: MathJax, highlight.js and fonts linked from CDNs
//! - **Custom styles**: CSS overrides injected into the document head
//! - **Clipboard capture**: `wl-paste` on Wayland, `xclip` on X11

pub mod clipboard;
pub mod convert;
pub mod error;
pub mod markdown;
pub mod math;
pub mod render;

// Re-export commonly used types
pub use clipboard::{ClipboardSource, SessionType, SystemClipboard};
pub use convert::{
    save_outputs, split_title, ClipConverter, ConvertOptions, ConvertResult, OutputPaths,
};
pub use error::{Error, Result};
pub use markdown::MarkdownProcessor;
pub use math::{MathEnvironments, MathProcessor};
pub use render::{CustomStyles, FontOptions, HtmlGenerator, HtmlTemplate, RenderOptions, VERSION};

use std::path::Path;

/// Convert constrained Markdown with math to an HTML fragment.
///
/// Display math is collapsed first, so the input may span many lines.
///
/// # Example
///
/// ```
/// use htmlclip::markdown_to_html;
///
/// let html = markdown_to_html("## Result\n$$\nx = 1\n$$");
/// assert_eq!(html, "<h2>Result</h2>\n$$ x = 1 $$");
/// ```
pub fn markdown_to_html(content: &str) -> String {
    let lines: Vec<&str> = content.split('\n').collect();
    let normalized = math::process_math_blocks(lines.as_slice());
    markdown::process(&normalized.join("\n"))
}

/// Convert clipboard-style text (title line plus body) to a full document.
///
/// # Example
///
/// ```
/// use htmlclip::convert_text;
///
/// let html = convert_text("My Title\n- one\n- two")?;
/// assert!(html.contains("<title>My Title</title>"));
/// assert!(html.contains("<ul><li>one</li><li>two</li></ul>"));
/// # Ok::<(), htmlclip::Error>(())
/// ```
pub fn convert_text(raw: &str) -> Result<String> {
    let result = ClipConverter::new().convert(raw, &ConvertOptions::default())?;
    Ok(result.html)
}

/// Read the system clipboard and write `<base>.html` and `<base>.txt`.
///
/// # Example
///
/// ```no_run
/// let paths = htmlclip::clip_to_files("notes")?;
/// println!("{}", paths.html.display());
/// # Ok::<(), htmlclip::Error>(())
/// ```
pub fn clip_to_files<P: AsRef<Path>>(base: P) -> Result<OutputPaths> {
    HtmlClip::new()
        .convert_clipboard(&SystemClipboard::new())?
        .save(base)
}

/// Builder for converting clipboard text into HTML documents.
///
/// # Example
///
/// ```no_run
/// use htmlclip::{CustomStyles, HtmlClip, SystemClipboard};
///
/// let styles = CustomStyles::from_file("theme.css")?;
/// HtmlClip::new()
///     .with_custom_styles(styles)
///     .convert_clipboard(&SystemClipboard::new())?
///     .save("notes")?;
/// # Ok::<(), htmlclip::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct HtmlClip {
    render_options: RenderOptions,
}

impl HtmlClip {
    /// Create a new HtmlClip builder.
    pub fn new() -> Self {
        Self {
            render_options: RenderOptions::default(),
        }
    }

    /// Set font options.
    pub fn with_fonts(mut self, fonts: FontOptions) -> Self {
        self.render_options = self.render_options.with_fonts(fonts);
        self
    }

    /// Set custom style overrides.
    pub fn with_custom_styles(mut self, styles: CustomStyles) -> Self {
        self.render_options = self.render_options.with_custom_styles(styles);
        self
    }

    /// Pin the footer timestamp.
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_timestamp(timestamp);
        self
    }

    /// Convert raw text.
    pub fn convert(&self, raw: &str) -> Result<ClipDocument> {
        let options = ConvertOptions::new().with_render_options(self.render_options.clone());
        let result = ClipConverter::new().convert(raw, &options)?;
        Ok(ClipDocument {
            raw: raw.to_string(),
            result,
        })
    }

    /// Read text from a clipboard source and convert it.
    pub fn convert_clipboard<C: ClipboardSource + ?Sized>(&self, source: &C) -> Result<ClipDocument> {
        log::debug!("Reading clipboard content...");
        let raw = source.read_text()?;
        if raw.trim().is_empty() {
            return Err(Error::ClipboardEmpty);
        }
        self.convert(&raw)
    }
}

/// A converted document together with the text it came from.
#[derive(Debug, Clone)]
pub struct ClipDocument {
    raw: String,
    result: ConvertResult,
}

impl ClipDocument {
    /// The complete HTML document.
    pub fn html(&self) -> &str {
        &self.result.html
    }

    /// The document title.
    pub fn title(&self) -> &str {
        &self.result.title
    }

    /// The HTML fragment before templating.
    pub fn fragment(&self) -> &str {
        &self.result.fragment
    }

    /// The unmodified input text.
    pub fn raw_text(&self) -> &str {
        &self.raw
    }

    /// Write `<base>.html` and `<base>.txt`.
    pub fn save<P: AsRef<Path>>(&self, base: P) -> Result<OutputPaths> {
        save_outputs(base, &self.result.html, &self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedClipboard(&'static str);

    impl ClipboardSource for FixedClipboard {
        fn read_text(&self) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn test_htmlclip_builder() {
        let clip = HtmlClip::new()
            .with_fonts(FontOptions::new().with_font_size("20px"))
            .with_timestamp("2024-01-01 00:00:00");

        assert_eq!(clip.render_options.fonts.font_size, "20px");
        assert_eq!(
            clip.render_options.timestamp.as_deref(),
            Some("2024-01-01 00:00:00")
        );
        assert!(clip.render_options.custom_styles.is_none());
    }

    #[test]
    fn test_htmlclip_builder_default() {
        let builder = HtmlClip::default();
        assert!(builder.render_options.timestamp.is_none());
        assert_eq!(builder.render_options.fonts, FontOptions::default());
    }

    #[test]
    fn test_convert_keeps_raw_text() {
        let raw = "# Title\r\nbody\n";
        let doc = HtmlClip::new().convert(raw).unwrap();
        assert_eq!(doc.title(), "Title");
        assert_eq!(doc.fragment(), "body");
        assert_eq!(doc.raw_text(), raw);
    }

    #[test]
    fn test_convert_clipboard() {
        let doc = HtmlClip::new()
            .convert_clipboard(&FixedClipboard("Clip\n**hi**"))
            .unwrap();
        assert_eq!(doc.title(), "Clip");
        assert!(doc.html().contains("<strong>hi</strong>"));
    }

    #[test]
    fn test_convert_clipboard_empty() {
        let result = HtmlClip::new().convert_clipboard(&FixedClipboard("   \n"));
        assert!(matches!(result, Err(Error::ClipboardEmpty)));
    }

    #[test]
    fn test_markdown_to_html_collapses_math() {
        assert_eq!(
            markdown_to_html("text\n\\[\n\\int_0^1 f\n\\]"),
            "text\n\\[ \\int_0^1 f \\]"
        );
        assert_eq!(markdown_to_html(""), "");
    }

    #[test]
    fn test_custom_styles_reach_document() {
        let styles = CustomStyles::new().with_rule(".custom-class", "color: red;");
        let doc = HtmlClip::new()
            .with_custom_styles(styles)
            .convert("T\nx")
            .unwrap();
        assert!(doc.html().contains("<style id=\"custom-styles\">"));
        assert!(doc.html().contains("color: red;"));
    }
}
