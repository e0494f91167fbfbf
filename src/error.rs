//! Error types for htmlclip library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for htmlclip operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while capturing and converting clipboard text.
///
/// Malformed Markdown or math never produces an error: the converters pass
/// unrecognised text through unchanged and flush unterminated blocks.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The clipboard holds no text.
    #[error("Clipboard is empty")]
    ClipboardEmpty,

    /// The clipboard helper for the current session is not installed.
    #[error("{0} is not installed")]
    ClipboardToolMissing(&'static str),

    /// The graphical session type has no supported clipboard helper.
    #[error("Unsupported session type: {0}")]
    UnsupportedSession(String),

    /// The clipboard helper ran but failed.
    #[error("Clipboard read failed: {0}")]
    Clipboard(String),

    /// Clipboard content is not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// A custom style sheet could not be parsed.
    #[error("Invalid style sheet: {0}")]
    Style(String),

    /// Writing an output file failed.
    #[error("Error saving {}: {source}", path.display())]
    Save {
        /// Destination that could not be written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Whether the error means no input text could be obtained.
    pub fn is_input_unavailable(&self) -> bool {
        matches!(
            self,
            Error::ClipboardEmpty
                | Error::ClipboardToolMissing(_)
                | Error::UnsupportedSession(_)
                | Error::Clipboard(_)
                | Error::Encoding(_)
        )
    }
}
