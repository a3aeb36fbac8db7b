//! Reprose - convert model output to article HTML and sanitize it.
//!
//! This binary provides the CLI interface to the reprose crates, reading
//! whole documents from files or stdin.

mod cli;

use clap::Parser as ClapParser;
use cli::{Cli, Mode};
use log::{debug, error, info, LevelFilter};
use std::fs;
use std::io::{self, Read, Write};

use reprose_config::Config;
use reprose_core::Result;
use reprose_parser::{format_inline, Converter};
use reprose_pipeline::{append_references, ContentRouter, EnhancedArticle};
use reprose_sanitize::{DisplaySanitizer, PublishSanitizer};

fn main() {
    let cli = <Cli as ClapParser>::parse();

    if cli.show_paths {
        cli::show_paths();
        return;
    }

    setup_logging(&cli.log_level);
    info!("Reprose v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let config = Config::load_with_override(cli.config.as_deref())?;
    debug!("Loaded config: {:?}", config);

    let processor = Processor::new(&config);
    let mut stdout = io::stdout().lock();

    if cli.should_read_stdin() {
        info!("Reading from stdin");
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        writeln!(stdout, "{}", processor.process(cli, &input)?)?;
    } else {
        for path in &cli.files {
            info!("Processing file: {}", path.display());
            let input = fs::read_to_string(path)?;
            writeln!(stdout, "{}", processor.process(cli, &input)?)?;
        }
    }

    stdout.flush()?;
    Ok(())
}

/// Converters and sanitizers built once from the loaded config.
struct Processor {
    converter: Converter,
    publish: PublishSanitizer,
    display: DisplaySanitizer,
    router: ContentRouter,
}

impl Processor {
    fn new(config: &Config) -> Self {
        let display = DisplaySanitizer::detect(config.sanitize.clone());
        debug!("Display backend: {}", display.backend_name());

        Self {
            converter: Converter::with_config(config.convert.clone()),
            publish: PublishSanitizer::with_config(&config.sanitize),
            display,
            router: ContentRouter::with_config(config),
        }
    }

    fn process(&self, cli: &Cli, input: &str) -> Result<String> {
        let output = if cli.response {
            let fallback = cli.title.as_deref().unwrap_or_default();
            let article = EnhancedArticle::from_response(input, fallback, &self.router)?;
            format!("TITLE: {}\n\n{}", article.title, article.content)
        } else {
            self.apply(cli.mode, input)
        };

        Ok(append_references(&output, &cli.references))
    }

    fn apply(&self, mode: Mode, input: &str) -> String {
        match mode {
            Mode::Convert => self.converter.convert(input),
            Mode::Inline => format_inline(input),
            Mode::Publish => self.publish.sanitize(input),
            Mode::Display => self.display.sanitize(input),
            Mode::Finalize => self.router.finalize(input),
            Mode::Text => self.display.extract_text(input),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn processor() -> Processor {
        Processor::new(&Config::default())
    }

    #[test]
    fn test_process_finalize_default() {
        let cli = Cli::parse_from(["reprose"]);
        let out = processor().process(&cli, "Hello **there**.").unwrap();
        assert_eq!(out, "<p>Hello <strong>there</strong>.</p>");
    }

    #[test]
    fn test_process_inline() {
        let cli = Cli::parse_from(["reprose", "--mode", "inline"]);
        let out = processor().process(&cli, "a *b* c").unwrap();
        assert_eq!(out, "a <em>b</em> c");
    }

    #[test]
    fn test_process_publish() {
        let cli = Cli::parse_from(["reprose", "--mode", "publish"]);
        let out = processor().process(&cli, "<p>x</p><script>y</script>").unwrap();
        assert_eq!(out, "<p>x</p>");
    }

    #[test]
    fn test_process_response_with_references() {
        let cli = Cli::parse_from([
            "reprose",
            "--response",
            "--title", "Old",
            "--reference", "https://a.com",
        ]);
        let out = processor()
            .process(&cli, "TITLE: New\nCONTENT: <p>Body</p>")
            .unwrap();
        assert_eq!(
            out,
            "TITLE: New\n\n<p>Body</p>\n\n---\n\n**References:**\n1. https://a.com"
        );
    }

    #[test]
    fn test_process_empty_response_fails() {
        let cli = Cli::parse_from(["reprose", "--response"]);
        assert!(processor().process(&cli, "   ").is_err());
    }
}
