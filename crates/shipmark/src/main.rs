//! Shipmark CLI - inline markup rendering.
//!
//! Provides commands for:
//! - `render`: Render marked-up text to HTML or Slack `mrkdwn`
//! - `check-url`: Check a link target against the URL policy
//! - `faq`: Render an FAQ list as a landing page accordion

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckUrlArgs, FaqArgs, RenderArgs};
use output::Output;

/// Shipmark - inline markup renderer.
#[derive(Parser)]
#[command(name = "shipmark", version, about)]
struct Cli {
    /// Enable verbose output (show config discovery and rejected links).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render marked-up text from a file or stdin.
    Render(RenderArgs),
    /// Check a link target against the URL policy.
    CheckUrl(CheckUrlArgs),
    /// Render an FAQ list as an accordion.
    Faq(FaqArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables DEBUG level, otherwise RUST_LOG decides
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(&output),
        Commands::CheckUrl(args) => args.execute(&output),
        Commands::Faq(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
