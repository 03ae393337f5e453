//! `shipmark render` command implementation.

use std::path::PathBuf;

use clap::Args;
use shipmark_config::{CliSettings, Config, OutputFormat};
use shipmark_renderer::{HtmlBackend, SlackBackend};

use super::renderer_from_config;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Text file to render (default: read stdin).
    file: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover shipmark.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format: html or slack (overrides config).
    #[arg(short, long)]
    format: Option<OutputFormat>,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the input cannot be read.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            format: self.format,
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let text = read_input(self.file.as_ref())?;
        let rendered = render_text(&config, &text);
        output.result(&rendered)?;
        Ok(())
    }
}

/// Read the input file, or stdin when no file is given.
fn read_input(file: Option<&PathBuf>) -> Result<String, CliError> {
    match file {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Reading input file");
            Ok(std::fs::read_to_string(path)?)
        }
        None => {
            tracing::debug!("Reading input from stdin");
            Ok(std::io::read_to_string(std::io::stdin())?)
        }
    }
}

/// Render text in the configured output format.
fn render_text(config: &Config, text: &str) -> String {
    match config.output.format {
        OutputFormat::Html => renderer_from_config::<HtmlBackend>(config).render(text),
        OutputFormat::Slack => renderer_from_config::<SlackBackend>(config).render(text),
    }
}
