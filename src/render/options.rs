//! Rendering options and configuration.

use super::CustomStyles;

/// Font settings substituted into the document style sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontOptions {
    /// Body font stack
    pub main_font: String,

    /// Monospace font stack for code
    pub code_font: String,

    /// Body font size (CSS length)
    pub font_size: String,

    /// Body line height
    pub line_height: String,

    /// Code font size (CSS length)
    pub code_font_size: String,
}

impl FontOptions {
    /// Create font options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the body font stack.
    pub fn with_main_font(mut self, font: impl Into<String>) -> Self {
        self.main_font = font.into();
        self
    }

    /// Set the code font stack.
    pub fn with_code_font(mut self, font: impl Into<String>) -> Self {
        self.code_font = font.into();
        self
    }

    /// Set the body font size.
    pub fn with_font_size(mut self, size: impl Into<String>) -> Self {
        self.font_size = size.into();
        self
    }

    /// Set the body line height.
    pub fn with_line_height(mut self, height: impl Into<String>) -> Self {
        self.line_height = height.into();
        self
    }

    /// Set the code font size.
    pub fn with_code_font_size(mut self, size: impl Into<String>) -> Self {
        self.code_font_size = size.into();
        self
    }
}

impl Default for FontOptions {
    fn default() -> Self {
        Self {
            main_font: "'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, \
                        Oxygen, Ubuntu, Cantarell, sans-serif"
                .to_string(),
            code_font: "'Fira Code', 'Consolas', 'Monaco', 'Andale Mono', 'Ubuntu Mono', \
                        monospace"
                .to_string(),
            font_size: "16px".to_string(),
            line_height: "1.6".to_string(),
            code_font_size: "14px".to_string(),
        }
    }
}

/// Options for rendering the final HTML document.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Font settings
    pub fonts: FontOptions,

    /// Selector overrides injected after the built-in style sheet
    pub custom_styles: Option<CustomStyles>,

    /// Footer timestamp; the current local time when `None`
    pub timestamp: Option<String>,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set font options.
    pub fn with_fonts(mut self, fonts: FontOptions) -> Self {
        self.fonts = fonts;
        self
    }

    /// Set custom style overrides.
    pub fn with_custom_styles(mut self, styles: CustomStyles) -> Self {
        self.custom_styles = Some(styles);
        self
    }

    /// Pin the footer timestamp.
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_defaults() {
        let fonts = FontOptions::default();
        assert!(fonts.main_font.starts_with("'Inter'"));
        assert!(fonts.code_font.starts_with("'Fira Code'"));
        assert!(fonts.main_font.ends_with("sans-serif"));
        assert_eq!(fonts.font_size, "16px");
        assert_eq!(fonts.line_height, "1.6");
        assert_eq!(fonts.code_font_size, "14px");
    }

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_fonts(FontOptions::new().with_font_size("18px"))
            .with_timestamp("2024-01-01 00:00:00");

        assert_eq!(options.fonts.font_size, "18px");
        assert_eq!(options.timestamp.as_deref(), Some("2024-01-01 00:00:00"));
        assert!(options.custom_styles.is_none());
    }
}
