//! Marker - A Markdown to HTML compiler for a small dialect.
//!
//! This binary provides the CLI interface to the marker library,
//! compiling files or stdin into a single HTML document.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, LevelFilter};
use marker::ScanOptions;
use marker_config::Config;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    // Set up logging
    setup_logging(&cli.log_level);
    info!("Marker v{}", env!("CARGO_PKG_VERSION"));

    // Run the main application
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
fn run(cli: &Cli) -> io::Result<()> {
    // Load and merge configuration
    let config = load_config(cli);
    let options = scan_options(&config, cli);
    debug!("Scan options: {:?}", options);

    // Read, compile, write
    let text = read_input(cli)?;
    let document = marker::render_with_options(&text, options);
    write_output(cli, &document)
}

/// Load configuration with optional overrides.
///
/// Config problems never abort a compile; they are logged and the
/// defaults stand in.
fn load_config(cli: &Cli) -> Config {
    let mut config = Config::load().unwrap_or_default();

    // Apply config override if provided
    if let Some(ref config_arg) = cli.config {
        if Path::new(config_arg).exists() {
            // It's a file path
            match Config::load_from(Path::new(config_arg)) {
                Ok(override_config) => {
                    config.merge(&override_config);
                    debug!("Merged config from file: {}", config_arg);
                }
                Err(e) => {
                    error!("Failed to load config file {}: {}", config_arg, e);
                }
            }
        } else {
            // Try parsing as inline TOML
            match toml::from_str::<Config>(config_arg) {
                Ok(override_config) => {
                    config.merge(&override_config);
                    debug!("Merged inline config");
                }
                Err(e) => {
                    error!("Failed to parse config: {}", e);
                }
            }
        }
    }

    config
}

/// Build scanner options from config and CLI flags.
///
/// A feature runs only when the config enables it and no CLI flag
/// disables it.
fn scan_options(config: &Config, cli: &Cli) -> ScanOptions {
    ScanOptions {
        links: config.features.links && !cli.no_links,
        images: config.features.images && !cli.no_images,
    }
}

/// Concatenate the input files, or read stdin when none are given.
fn read_input(cli: &Cli) -> io::Result<String> {
    if cli.should_read_stdin() {
        info!("Reading from stdin");
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    let mut text = String::new();
    for path in &cli.files {
        info!("Processing file: {}", path.display());
        text.push_str(&fs::read_to_string(path)?);
        // Keep files line-separated, like cat
        if !text.ends_with('\n') {
            text.push('\n');
        }
    }
    Ok(text)
}

/// Write the document to the output file or stdout.
fn write_output(cli: &Cli, document: &str) -> io::Result<()> {
    match &cli.output {
        Some(path) => {
            info!("Writing output to: {}", path.display());
            fs::write(path, format!("{}\n", document))
        }
        None => {
            println!("{}", document);
            Ok(())
        }
    }
}
