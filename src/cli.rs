//! Command-line interface for Reprose.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// What to do with each input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Convert markdown-ish text to HTML
    Convert,
    /// Apply inline formatting to a single fragment
    Inline,
    /// Sanitize HTML for storage
    Publish,
    /// Sanitize stored HTML for display
    Display,
    /// Convert when needed, then sanitize for storage
    Finalize,
    /// Extract plain text from HTML
    Text,
}

/// Reprose - markdown-to-HTML conversion and HTML sanitization for
/// republished articles.
#[derive(Parser, Debug)]
#[command(
    name = "reprose",
    author = "Reprose Contributors",
    version,
    about = "Convert model output to article HTML and sanitize it",
    after_help = "Examples:\n  \
                  cat draft.md | reprose\n  \
                  reprose --mode convert notes.txt\n  \
                  reprose --mode display stored.html\n  \
                  reprose --response --title 'Old Title' reply.txt\n  \
                  reprose -c '[sanitize]\\nImageAlt = \"Photo\"' page.html"
)]
pub struct Cli {
    /// Input files to process (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Operation to apply
    #[arg(short = 'm', long = "mode", value_enum, default_value = "finalize")]
    pub mode: Mode,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Treat input as a TITLE:/CONTENT: model response
    #[arg(short = 'r', long = "response")]
    pub response: bool,

    /// Title to keep when a response has no TITLE line
    #[arg(short = 't', long = "title", requires = "response")]
    pub title: Option<String>,

    /// Append a numbered reference (repeatable)
    #[arg(long = "reference", value_name = "URL")]
    pub references: Vec<String>,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty()
    }
}

/// Show paths information.
pub fn show_paths() {
    use reprose_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_default() {
        let cli = Cli::parse_from(["reprose"]);
        assert!(cli.files.is_empty());
        assert_eq!(cli.mode, Mode::Finalize);
        assert_eq!(cli.log_level, "warn");
        assert!(!cli.response);
        assert!(cli.references.is_empty());
    }

    #[test]
    fn test_cli_parse_with_file() {
        let cli = Cli::parse_from(["reprose", "draft.md"]);
        assert_eq!(cli.files, vec![PathBuf::from("draft.md")]);
        assert!(!cli.should_read_stdin());
    }

    #[test]
    fn test_cli_parse_modes() {
        let cli = Cli::parse_from(["reprose", "--mode", "display"]);
        assert_eq!(cli.mode, Mode::Display);

        let cli = Cli::parse_from(["reprose", "-m", "text"]);
        assert_eq!(cli.mode, Mode::Text);
    }

    #[test]
    fn test_cli_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["reprose", "--mode", "render"]).is_err());
    }

    #[test]
    fn test_cli_parse_response() {
        let cli = Cli::parse_from([
            "reprose",
            "--response",
            "--title", "Old",
            "--reference", "https://a.com",
            "--reference", "https://b.com",
            "reply.txt",
        ]);
        assert!(cli.response);
        assert_eq!(cli.title.as_deref(), Some("Old"));
        assert_eq!(cli.references, vec!["https://a.com", "https://b.com"]);
    }

    #[test]
    fn test_title_requires_response() {
        assert!(Cli::try_parse_from(["reprose", "--title", "Old"]).is_err());
    }

    #[test]
    fn test_should_read_stdin() {
        let cli = Cli::parse_from(["reprose", "-l", "debug"]);
        assert!(cli.should_read_stdin());
        assert_eq!(cli.log_level, "debug");
    }
}
