//! CLI error types.

use shipmark_config::ConfigError;
use shipmark_renderer::RejectedUrl;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid FAQ JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Rejected(#[from] RejectedUrl),

    #[error("{0}")]
    Validation(String),
}
