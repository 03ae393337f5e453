//! `shipmark faq` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use shipmark_config::{CliSettings, Config};
use shipmark_renderer::{FaqAccordion, FaqList, HtmlBackend};

use super::renderer_from_config;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the faq command.
#[derive(Args)]
pub(crate) struct FaqArgs {
    /// JSON file in the `{"faqs": [...]}` shape (overrides `faq.source`).
    file: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover shipmark.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Accordion element id (overrides config).
    #[arg(long)]
    accordion_id: Option<String>,
}

impl FaqArgs {
    /// Execute the faq command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, no source is configured, or the
    /// JSON cannot be read or parsed.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            faq_source: self.file,
            accordion_id: self.accordion_id,
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let source = config.faq_resolved.source.as_deref().ok_or_else(|| {
            CliError::Validation("No FAQ source: pass a file or set faq.source".to_owned())
        })?;
        let list = load_faqs(source)?;
        if list.faqs.is_empty() {
            output.warning(&format!("No FAQs found in {}", source.display()));
        }

        output.result(&render_faqs(&config, &list))?;
        Ok(())
    }
}

fn load_faqs(path: &Path) -> Result<FaqList, CliError> {
    tracing::debug!(path = %path.display(), "Loading FAQs");
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn render_faqs(config: &Config, list: &FaqList) -> String {
    FaqAccordion::new(config.faq_resolved.accordion_id.clone())
        .with_first_expanded(config.faq_resolved.first_expanded)
        .with_renderer(renderer_from_config::<HtmlBackend>(config))
        .render(&list.faqs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_and_render_faqs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("faqs.json");
        std::fs::write(
            &path,
            r#"{"faqs": [{"question": "How do I earn hours?", "answer": "Ship a **project**."}]}"#,
        )
        .unwrap();

        let list = load_faqs(&path).unwrap();
        let html = render_faqs(&Config::default(), &list);

        assert!(html.contains("How do I earn hours?"));
        assert!(html.contains("Ship a <strong>project</strong>."));
        assert!(html.contains(r##"data-bs-parent="#faqAccordion""##));
    }

    #[test]
    fn test_render_faqs_uses_configured_id() {
        let mut config = Config::default();
        config.faq_resolved.accordion_id = "landingFaq".to_owned();
        config.faq_resolved.first_expanded = false;

        let list: FaqList =
            serde_json::from_str(r#"{"faqs": [{"question": "q", "answer": "a"}]}"#).unwrap();
        let html = render_faqs(&config, &list);

        assert!(html.contains(r##"data-bs-parent="#landingFaq""##));
        assert!(html.contains(r#"aria-expanded="false""#));
    }

    #[test]
    fn test_load_faqs_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("faqs.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(load_faqs(&path), Err(CliError::Json(_))));
    }

    #[test]
    fn test_load_faqs_empty_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("faqs.json");
        std::fs::write(&path, "{}").unwrap();

        let list = load_faqs(&path).unwrap();
        assert!(list.faqs.is_empty());
        assert!(render_faqs(&Config::default(), &list).contains("No FAQs available yet."));
    }
}
