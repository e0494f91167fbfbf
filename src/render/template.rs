//! Standalone HTML document generation.

use chrono::Local;
use lazy_static::lazy_static;
use regex::Regex;

use super::{CustomStyles, FontOptions, RenderOptions};

/// Version stamped into the document footer.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Footer timestamp format.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const HIGHLIGHT_JS_VERSION: &str = "10.0.3";

lazy_static! {
    static ref HEADER_LINE: Regex = Regex::new(r"^<h([1-6])[\s>]").unwrap();
}

const DOCUMENT_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{title}}</title>
    <link rel="preconnect" href="https://fonts.googleapis.com">
    <link rel="stylesheet" href="https://fonts.googleapis.com/css2?family=Inter:wght@400;600;700&family=Fira+Code&display=swap">
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/highlight.js/{{hljs}}/styles/github.min.css">
    <script src="https://cdnjs.cloudflare.com/ajax/libs/highlight.js/{{hljs}}/highlight.min.js"></script>
    <script>hljs.initHighlightingOnLoad();</script>
    <script>
        window.MathJax = {
            tex: {
                inlineMath: [['$', '$']],
                displayMath: [['$$', '$$'], ['\\[', '\\]']],
                processEscapes: true
            },
            svg: {
                fontCache: 'global'
            }
        };
    </script>
    <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-svg.js"></script>
    <style>
        body {
            font-family: {{main_font}};
            font-size: {{font_size}};
            line-height: {{line_height}};
            color: #24292e;
            max-width: 900px;
            margin: 0 auto;
            padding: 2rem;
        }
        pre, code {
            font-family: {{code_font}};
            font-size: {{code_font_size}};
        }
        pre {
            background-color: #f6f8fa;
            border-radius: 6px;
            padding: 1rem;
            overflow-x: auto;
        }
        blockquote {
            border-left: 4px solid #dfe2e5;
            color: #6a737d;
            margin: 0;
            padding: 0 1rem;
        }
        .content-preserve {
            white-space: pre-wrap;
        }
        .indent-h1 { margin-left: 0; }
        .indent-h2 { margin-left: 1.5rem; }
        .indent-h3 { margin-left: 3rem; }
        .indent-h4 { margin-left: 4.5rem; }
        .indent-h5 { margin-left: 6rem; }
        .indent-h6 { margin-left: 7.5rem; }
        .footer {
            margin-top: 3rem;
            padding-top: 1rem;
            border-top: 1px solid #eaecef;
            color: #6a737d;
            font-size: 0.85em;
        }
    </style>
</head>
<body>
<div id="content">
"#;

const DOCUMENT_TAIL: &str = r#"
</div>
<div class="footer">Generated by htmlclip v{{version}} on {{timestamp}}</div>
</body>
</html>
"#;

/// Values substituted into the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlTemplate {
    /// Document title (escaped on output)
    pub title: String,

    /// Body HTML, inserted verbatim
    pub content: String,

    /// Version shown in the footer
    pub version: String,

    /// Timestamp shown in the footer
    pub timestamp: String,

    /// Fonts used by the style sheet
    pub fonts: FontOptions,
}

impl HtmlTemplate {
    /// Create a template with the crate version, the current time and
    /// default fonts.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            version: VERSION.to_string(),
            timestamp: current_timestamp(),
            fonts: FontOptions::default(),
        }
    }

    /// Set the footer timestamp.
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    /// Set font options.
    pub fn with_fonts(mut self, fonts: FontOptions) -> Self {
        self.fonts = fonts;
        self
    }
}

/// Current local time in [`TIMESTAMP_FORMAT`].
pub fn current_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Renders HTML fragments into complete documents.
#[derive(Debug, Clone, Default)]
pub struct HtmlGenerator {
    _private: (),
}

impl HtmlGenerator {
    /// Create a new generator.
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Produce the full document for a template.
    pub fn generate(&self, template: &HtmlTemplate) -> String {
        let fonts = &template.fonts;
        let head = DOCUMENT_HEAD
            .replace("{{hljs}}", HIGHLIGHT_JS_VERSION)
            .replace("{{main_font}}", &fonts.main_font)
            .replace("{{code_font}}", &fonts.code_font)
            .replace("{{font_size}}", &fonts.font_size)
            .replace("{{line_height}}", &fonts.line_height)
            .replace("{{code_font_size}}", &fonts.code_font_size)
            .replace("{{title}}", &html_escape::encode_text(&template.title));
        let tail = DOCUMENT_TAIL
            .replace("{{version}}", &template.version)
            .replace("{{timestamp}}", &template.timestamp);

        let mut html = String::with_capacity(head.len() + template.content.len() + tail.len());
        html.push_str(&head);
        html.push_str(&template.content);
        html.push_str(&tail);
        html
    }

    /// Wrap non-header content in indentation containers.
    ///
    /// Header lines pass through. Each run of other non-blank lines goes into
    /// `<div class="indent-hN content-preserve">` where `N` is the level of
    /// the most recent header, 1 before any header. Blank lines end a run
    /// unless they sit inside a `<pre>` element.
    pub fn wrap_content(&self, fragment: &str) -> String {
        let mut output: Vec<String> = Vec::new();
        let mut run: Vec<&str> = Vec::new();
        let mut level = 1;
        let mut in_pre = false;

        for line in fragment.split('\n') {
            let trimmed = line.trim();

            if in_pre {
                run.push(line);
                in_pre = !trimmed.contains("</pre>");
                continue;
            }

            if let Some(caps) = HEADER_LINE.captures(trimmed) {
                flush_run(&mut output, &mut run, level);
                level = caps[1].parse().unwrap_or(level);
                output.push(trimmed.to_string());
                continue;
            }

            if trimmed.is_empty() {
                flush_run(&mut output, &mut run, level);
                continue;
            }

            run.push(line);
            in_pre = trimmed.contains("<pre") && !trimmed.contains("</pre>");
        }
        flush_run(&mut output, &mut run, level);

        output.join("\n")
    }

    /// Inject a `<style id="custom-styles">` block before `</head>`.
    ///
    /// The block is appended when the document has no `</head>`; empty
    /// styles leave the document unchanged.
    pub fn apply_custom_styles(&self, html: &str, styles: &CustomStyles) -> String {
        if styles.is_empty() {
            return html.to_string();
        }

        let block = format!("<style id=\"custom-styles\">\n{}</style>\n", styles.to_css());
        match html.find("</head>") {
            Some(pos) => {
                let mut styled = String::with_capacity(html.len() + block.len());
                styled.push_str(&html[..pos]);
                styled.push_str(&block);
                styled.push_str(&html[pos..]);
                styled
            }
            None => format!("{}{}", html, block),
        }
    }

    /// Wrap a fragment and render it as a styled document.
    pub fn render(&self, title: &str, fragment: &str, options: &RenderOptions) -> String {
        let timestamp = options.timestamp.clone().unwrap_or_else(current_timestamp);
        let template = HtmlTemplate::new(title, self.wrap_content(fragment))
            .with_timestamp(timestamp)
            .with_fonts(options.fonts.clone());

        let html = self.generate(&template);
        match &options.custom_styles {
            Some(styles) => self.apply_custom_styles(&html, styles),
            None => html,
        }
    }
}

fn flush_run(output: &mut Vec<String>, run: &mut Vec<&str>, level: usize) {
    if run.is_empty() {
        return;
    }
    output.push(format!(
        "<div class=\"indent-h{} content-preserve\">{}</div>",
        level,
        run.join("\n")
    ));
    run.clear();
}
