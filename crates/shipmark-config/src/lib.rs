//! Configuration management for Shipmark.
//!
//! Parses `shipmark.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `links.target`
//! - `links.rel`
//! - `faq.source`

mod expand;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override output format.
    pub format: Option<OutputFormat>,
    /// Override FAQ JSON source file.
    pub faq_source: Option<PathBuf>,
    /// Override FAQ accordion element id.
    pub accordion_id: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "shipmark.toml";

/// Scheme prefixes accepted when `links.allowed_schemes` is not set.
const DEFAULT_ALLOWED_SCHEMES: [&str; 3] = ["http://", "https://", "mailto:"];

/// Schemes that can run script and are never allowed in links.
const FORBIDDEN_SCHEMES: [&str; 4] = ["javascript", "vbscript", "data", "file"];

static SCHEME_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-z][a-z0-9+.-]*):(?://)?$").unwrap());

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Link rendering configuration.
    pub links: LinksConfig,
    /// Output configuration.
    pub output: OutputConfig,
    /// FAQ configuration (paths are relative strings from TOML).
    faq: FaqConfigRaw,

    /// Resolved FAQ configuration (set after loading).
    #[serde(skip)]
    pub faq_resolved: FaqConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Link rendering configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    /// Value of the `target` attribute. Empty omits the attribute.
    pub target: String,
    /// Value of the `rel` attribute. Empty omits the attribute.
    pub rel: String,
    /// Scheme prefixes a link target must start with.
    pub allowed_schemes: Vec<String>,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            target: "_blank".to_owned(),
            rel: "noopener noreferrer".to_owned(),
            allowed_schemes: DEFAULT_ALLOWED_SCHEMES.map(str::to_owned).into(),
        }
    }
}

impl LinksConfig {
    /// `target` attribute value, `None` when disabled.
    #[must_use]
    pub fn target_attr(&self) -> Option<String> {
        non_empty(&self.target)
    }

    /// `rel` attribute value, `None` when disabled.
    #[must_use]
    pub fn rel_attr(&self) -> Option<String> {
        non_empty(&self.rel)
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}

/// Output format for rendered text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// HTML fragment for the web UI.
    #[default]
    Html,
    /// Slack `mrkdwn` for notifications.
    Slack,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "slack" => Ok(Self::Slack),
            other => Err(ConfigError::Validation(format!(
                "unknown output format '{other}' (expected html or slack)"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Html => f.write_str("html"),
            Self::Slack => f.write_str("slack"),
        }
    }
}

/// Output configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Format produced by `shipmark render`.
    pub format: OutputFormat,
}

/// Raw FAQ configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct FaqConfigRaw {
    source: Option<String>,
    accordion_id: Option<String>,
    first_expanded: Option<bool>,
}

/// Resolved FAQ configuration with absolute paths.
#[derive(Debug)]
pub struct FaqConfig {
    /// JSON file with the FAQ list, if configured.
    pub source: Option<PathBuf>,
    /// Accordion element id.
    pub accordion_id: String,
    /// Whether the first FAQ starts expanded.
    pub first_expanded: bool,
}

impl Default for FaqConfig {
    fn default() -> Self {
        Self {
            source: None,
            accordion_id: "faqAccordion".to_owned(),
            first_expanded: true,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`links.rel`").
        field: String,
        /// Error message (e.g., "${`LINK_REL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require an allow-list entry to be a well-formed, non-script scheme prefix.
fn require_safe_scheme(prefix: &str, field: &str) -> Result<(), ConfigError> {
    let lower = prefix.to_ascii_lowercase();
    let Some(caps) = SCHEME_PREFIX_RE.captures(&lower) else {
        return Err(ConfigError::Validation(format!(
            "{field} entry '{prefix}' must look like 'https://' or 'mailto:'"
        )));
    };
    let scheme = &caps[1];
    if FORBIDDEN_SCHEMES.contains(&scheme) {
        return Err(ConfigError::Validation(format!(
            "{field} cannot allow the '{scheme}:' scheme"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `shipmark.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            tracing::debug!(path = %discovered.display(), "Discovered config file");
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(format) = settings.format {
            self.output.format = format;
        }
        if let Some(source) = &settings.faq_source {
            self.faq_resolved.source = Some(source.clone());
        }
        if let Some(accordion_id) = &settings.accordion_id {
            self.faq_resolved.accordion_id.clone_from(accordion_id);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading and resolution
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are properly set and contain valid values.
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_links()?;
        require_non_empty(&self.faq_resolved.accordion_id, "faq.accordion_id")?;
        Ok(())
    }

    /// Validate link configuration.
    fn validate_links(&self) -> Result<(), ConfigError> {
        if self.links.allowed_schemes.is_empty() {
            return Err(ConfigError::Validation(
                "links.allowed_schemes cannot be empty".to_owned(),
            ));
        }
        for prefix in &self.links.allowed_schemes {
            require_safe_scheme(prefix, "links.allowed_schemes")?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.links.target = expand::expand_env(&self.links.target, "links.target")?;
        self.links.rel = expand::expand_env(&self.links.rel, "links.rel")?;

        if let Some(ref source) = self.faq.source {
            self.faq.source = Some(expand::expand_env(source, "faq.source")?);
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let defaults = FaqConfig::default();
        self.faq_resolved = FaqConfig {
            source: self.faq.source.as_deref().map(|s| config_dir.join(s)),
            accordion_id: self
                .faq
                .accordion_id
                .clone()
                .unwrap_or(defaults.accordion_id),
            first_expanded: self.faq.first_expanded.unwrap_or(defaults.first_expanded),
        };
    }
}
