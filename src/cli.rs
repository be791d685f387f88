//! Command-line interface for marker.
//!
//! Provides argument parsing for the `mkr` binary.

use clap::Parser;
use std::path::PathBuf;

/// Marker - A Markdown to HTML compiler for a small dialect.
///
/// Compiles markdown files (or stdin) into an HTML document, one
/// output line per rendered line.
#[derive(Parser, Debug)]
#[command(
    name = "mkr",
    author = "Marker Contributors",
    version,
    about = "A Markdown to HTML compiler for a small dialect",
    after_help = "Examples:\n  \
                  cat README.md | mkr\n  \
                  mkr document.md\n  \
                  mkr -o out.html document.md\n  \
                  mkr --no-images -c custom.toml document.md"
)]
pub struct Cli {
    /// Input files to compile (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Write the document to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Leave [name](url) links as literal text
    #[arg(long = "no-links")]
    pub no_links: bool,

    /// Leave ![name](url) images as literal text
    #[arg(long = "no-images")]
    pub no_images: bool,

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
    use marker_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());
    let config_dir = Config::config_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
    println!("  config dir            {}", config_dir);
}
