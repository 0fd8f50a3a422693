//! LazyLink - Terminal link-in-bio landing page
//!
//! Renders a single personal landing page in the terminal, driven by one
//! static site document: hero banner, profile card, categorized links,
//! socials, QR modal, music toggle, and an exportable brochart card.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use lazylink::cli::{ExportArgs, InspectArgs, ValidateArgs};
use lazylink::config::Config;
use lazylink::constants::{APP_BINARY_NAME, APP_NAME};
use lazylink::site::SiteConfig;
use lazylink::tui;

/// LazyLink - Terminal link-in-bio landing page
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a site document (JSON)
    #[arg(value_name = "SITE")]
    site_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Headless subcommands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a site document
    Validate(ValidateArgs),
    /// Print the grouped link summary of a document
    Inspect(InspectArgs),
    /// Export the brochart card as a JPEG
    Export(ExportArgs),
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    if let Some(command) = cli.command {
        let result = match command {
            Commands::Validate(args) => args.execute(),
            Commands::Inspect(args) => args.execute(),
            Commands::Export(args) => args.execute(),
        };

        if let Err(e) = result {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
        return Ok(());
    }

    // Load or create default settings; a broken settings file should not
    // keep the page from rendering.
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load settings: {e}");
        Config::default()
    });

    let site_path = cli
        .site_path
        .or_else(|| config.paths.default_site.clone());

    let Some(site_path) = site_path else {
        println!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));
        println!("Terminal link-in-bio landing page");
        println!();
        eprintln!("No site document specified.");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  {} demos/site.json", APP_BINARY_NAME);
        eprintln!("  {} path/to/site.json", APP_BINARY_NAME);
        eprintln!();
        eprintln!("Set paths.default_site in the settings file to skip the argument.");
        eprintln!();
        eprintln!("For more options, run:");
        eprintln!("  {} --help", APP_BINARY_NAME);
        std::process::exit(2);
    };

    if !site_path.exists() {
        eprintln!("Error: Site document not found: {}", site_path.display());
        eprintln!();
        eprintln!("Please provide a valid path to a JSON site document.");
        eprintln!();
        eprintln!("To check a document without rendering it, run:");
        eprintln!("  {} validate path/to/site.json", APP_BINARY_NAME);
        std::process::exit(2);
    }

    let site = SiteConfig::load(&site_path)?;

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;
    let mut app_state = tui::AppState::new(site, Some(site_path), config)?;

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    // Check for errors
    result?;

    Ok(())
}
