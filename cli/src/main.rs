//! htmlclip CLI - clipboard to styled HTML

use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;

use htmlclip::{CustomStyles, HtmlClip, SystemClipboard};

#[derive(Parser, Debug)]
#[command(name = "htmlclip")]
#[command(author = "iyulab")]
#[command(version)]
#[command(
    about = "Convert clipboard content with markdown and math notation to styled HTML",
    long_about = None
)]
struct Cli {
    /// Base name for output files (without extension)
    #[arg(value_name = "FILENAME")]
    filename: PathBuf,

    /// Path to custom CSS file
    #[arg(long, value_name = "PATH", env = "HTMLCLIP_STYLE")]
    style: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(e) = cmd_convert(&cli.filename, cli.style.as_deref()) {
        log::debug!("Detailed error information: {:?}", e);
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn cmd_convert(base: &Path, style: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let mut clip = HtmlClip::new();
    if let Some(styles) = style.and_then(load_styles) {
        clip = clip.with_custom_styles(styles);
    }

    let document = clip.convert_clipboard(&SystemClipboard::new())?;
    log::debug!("Converted {:?}", document.title());

    let paths = document.save(base)?;

    println!("{} {}", "Converted".green().bold(), document.title());
    println!("\n{}", "Output files:".green().bold());
    println!("  {} {}", "├─".dimmed(), paths.html.display());
    println!("  {} {}", "└─".dimmed(), paths.text.display());

    Ok(())
}

/// Load a style sheet, downgrading failures to a warning.
fn load_styles(path: &Path) -> Option<CustomStyles> {
    log::debug!("Loading custom styles from {}", path.display());
    match CustomStyles::from_file(path) {
        Ok(styles) => Some(styles),
        Err(e) => {
            log::warn!("Error loading custom styles from {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_arguments() {
        let cli = Cli::try_parse_from(["htmlclip", "notes", "--style", "theme.css", "--debug"])
            .unwrap();
        assert_eq!(cli.filename, PathBuf::from("notes"));
        assert_eq!(cli.style, Some(PathBuf::from("theme.css")));
        assert!(cli.debug);
    }

    #[test]
    fn test_filename_is_required() {
        assert!(Cli::try_parse_from(["htmlclip"]).is_err());
    }

    #[test]
    fn test_load_styles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.css");
        std::fs::write(&path, "body {\n    color: #222;\n}\n").unwrap();

        let styles = load_styles(&path).unwrap();
        assert_eq!(styles.get("body"), Some("color: #222;"));
    }

    #[test]
    fn test_load_styles_failure_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_styles(&dir.path().join("missing.css")).is_none());

        let path = dir.path().join("broken.css");
        std::fs::write(&path, "{ color: red; }").unwrap();
        assert!(load_styles(&path).is_none());
    }
}
