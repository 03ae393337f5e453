//! `shipmark check-url` command implementation.

use std::path::PathBuf;

use clap::Args;
use shipmark_config::Config;
use shipmark_renderer::{SafeUrl, UrlPolicy};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check-url command.
#[derive(Args)]
pub(crate) struct CheckUrlArgs {
    /// Link target to check.
    url: String,

    /// Path to configuration file (default: auto-discover shipmark.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl CheckUrlArgs {
    /// Execute the check-url command.
    ///
    /// Prints the encoded URL when allowed.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the URL is rejected.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = Config::load(self.config.as_deref(), None)?;
        let safe = check_url(&config, &self.url)?;
        output.result(safe.as_str())?;
        Ok(())
    }
}

fn check_url(config: &Config, url: &str) -> Result<SafeUrl, CliError> {
    let policy = UrlPolicy::new(config.links.allowed_schemes.iter().cloned());
    Ok(policy.sanitize(url)?)
}

#[cfg(test)]
mod tests {
    use shipmark_renderer::RejectedUrl;

    use super::*;

    #[test]
    fn test_check_url_allowed() {
        let safe = check_url(&Config::default(), "https://hackclub.com/a b").unwrap();
        assert_eq!(safe.as_str(), "https://hackclub.com/a%20b");
    }

    #[test]
    fn test_check_url_rejected() {
        let err = check_url(&Config::default(), "javascript:alert(1)").unwrap_err();
        assert!(matches!(
            err,
            CliError::Rejected(RejectedUrl::DisallowedScheme(_))
        ));
        assert!(err.to_string().contains("javascript:"));
    }

    #[test]
    fn test_check_url_uses_configured_schemes() {
        let mut config = Config::default();
        config.links.allowed_schemes = vec!["tel:".to_owned()];
        assert!(check_url(&config, "tel:+15555550100").is_ok());
        assert!(check_url(&config, "https://x.y").is_err());
    }
}
