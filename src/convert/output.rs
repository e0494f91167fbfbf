//! Writing the HTML document and the raw text next to each other.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Extension of the rendered document.
pub const HTML_EXTENSION: &str = "html";

/// Extension of the raw text copy.
pub const TEXT_EXTENSION: &str = "txt";

/// Destination files derived from one base name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// Rendered HTML document
    pub html: PathBuf,

    /// Raw clipboard text
    pub text: PathBuf,
}

impl OutputPaths {
    /// Replace the extension of `base` with `.html` and `.txt`.
    pub fn from_base<P: AsRef<Path>>(base: P) -> Self {
        let base = base.as_ref();
        Self {
            html: base.with_extension(HTML_EXTENSION),
            text: base.with_extension(TEXT_EXTENSION),
        }
    }
}

/// Write the document and the raw text, HTML first.
pub fn save_outputs<P: AsRef<Path>>(base: P, html: &str, raw: &str) -> Result<OutputPaths> {
    let paths = OutputPaths::from_base(base);

    write_file(&paths.html, html)?;
    log::info!("HTML content has been written to {}", paths.html.display());

    write_file(&paths.text, raw)?;
    log::info!("Original content saved to {}", paths.text.display());

    Ok(paths)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| {
        log::error!("Error saving {}: {}", path.display(), source);
        Error::Save {
            path: path.to_path_buf(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_from_base() {
        let paths = OutputPaths::from_base("notes");
        assert_eq!(paths.html, PathBuf::from("notes.html"));
        assert_eq!(paths.text, PathBuf::from("notes.txt"));

        let paths = OutputPaths::from_base("out/report.md");
        assert_eq!(paths.html, PathBuf::from("out/report.html"));
        assert_eq!(paths.text, PathBuf::from("out/report.txt"));
    }

    #[test]
    fn test_save_outputs_writes_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("clip");

        let paths = save_outputs(&base, "<html></html>", "# raw\ntext").unwrap();
        assert_eq!(fs::read_to_string(&paths.html).unwrap(), "<html></html>");
        assert_eq!(fs::read_to_string(&paths.text).unwrap(), "# raw\ntext");
    }

    #[test]
    fn test_save_failure_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("missing").join("clip");

        let err = save_outputs(&base, "<html></html>", "raw").unwrap_err();
        match err {
            Error::Save { path, .. } => assert_eq!(path, base.with_extension("html")),
            other => panic!("unexpected error: {}", other),
        }
    }
}
