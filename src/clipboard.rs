//! Clipboard access through the desktop session's helper tools.
//!
//! Wayland sessions are read with `wl-paste`, X11 sessions with
//! `xclip -selection clipboard -o`. The session is detected from
//! `XDG_SESSION_TYPE`.

use std::env;
use std::fmt;
use std::io;
use std::process::Command;

use crate::error::{Error, Result};

/// Environment variable naming the graphical session type.
pub const SESSION_TYPE_VAR: &str = "XDG_SESSION_TYPE";

const WL_PASTE_ARGS: &[&str] = &[];
const XCLIP_ARGS: &[&str] = &["-selection", "clipboard", "-o"];

/// Anything that can supply clipboard text.
pub trait ClipboardSource {
    /// Read the current clipboard text.
    fn read_text(&self) -> Result<String>;
}

/// Graphical session type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionType {
    /// Wayland compositor
    Wayland,

    /// X11 server
    X11,

    /// Anything else, with the reported name
    Unknown(String),
}

impl SessionType {
    /// Detect the session type from the environment.
    pub fn detect() -> Self {
        Self::from_env_value(env::var(SESSION_TYPE_VAR).ok().as_deref())
    }

    /// Interpret a raw `XDG_SESSION_TYPE` value.
    ///
    /// A missing or blank value is reported as `unknown`.
    pub fn from_env_value(value: Option<&str>) -> Self {
        let value = value.map(str::trim).unwrap_or("");
        match value.to_ascii_lowercase().as_str() {
            "wayland" => SessionType::Wayland,
            "x11" => SessionType::X11,
            "" => SessionType::Unknown("unknown".to_string()),
            _ => SessionType::Unknown(value.to_string()),
        }
    }

    /// Helper command and arguments for this session.
    fn command(&self) -> Result<(&'static str, &'static [&'static str])> {
        match self {
            SessionType::Wayland => Ok(("wl-paste", WL_PASTE_ARGS)),
            SessionType::X11 => Ok(("xclip", XCLIP_ARGS)),
            SessionType::Unknown(name) => Err(Error::UnsupportedSession(name.clone())),
        }
    }

    /// Package providing the helper command.
    fn tool_name(&self) -> &'static str {
        match self {
            SessionType::Wayland => "wl-clipboard",
            SessionType::X11 => "xclip",
            SessionType::Unknown(_) => "clipboard helper",
        }
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionType::Wayland => write!(f, "wayland"),
            SessionType::X11 => write!(f, "x11"),
            SessionType::Unknown(name) => write!(f, "{}", name),
        }
    }
}

/// Clipboard of the running desktop session.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    session: SessionType,
}

impl SystemClipboard {
    /// Use the session detected from the environment.
    pub fn new() -> Self {
        Self::with_session(SessionType::detect())
    }

    /// Use an explicit session type.
    pub fn with_session(session: SessionType) -> Self {
        Self { session }
    }

    /// The session this clipboard reads from.
    pub fn session(&self) -> &SessionType {
        &self.session
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardSource for SystemClipboard {
    fn read_text(&self) -> Result<String> {
        let (program, args) = self.session.command()?;
        log::debug!("Reading clipboard via {} ({} session)", program, self.session);

        let output = Command::new(program).args(args).output().map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                Error::ClipboardToolMissing(self.session.tool_name())
            } else {
                Error::Io(e)
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(Error::Clipboard(if stderr.is_empty() {
                format!("{} exited with {}", program, output.status)
            } else {
                stderr
            }));
        }

        let text = String::from_utf8(output.stdout)
            .map_err(|e| Error::Encoding(format!("clipboard is not valid UTF-8: {}", e)))?;
        Ok(strip_trailing_newline(text))
    }
}

/// Drop a single trailing `\n` (or `\r\n`) added by the helper tools.
fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
