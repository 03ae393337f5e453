//! CLI command implementations.

pub(crate) mod check_url;
pub(crate) mod faq;
pub(crate) mod render;

pub(crate) use check_url::CheckUrlArgs;
pub(crate) use faq::FaqArgs;
pub(crate) use render::RenderArgs;

use shipmark_config::Config;
use shipmark_renderer::{InlineRenderer, RenderBackend, UrlPolicy};

/// Build a renderer for backend `B` from the loaded configuration.
pub(crate) fn renderer_from_config<B: RenderBackend>(config: &Config) -> InlineRenderer<B> {
    InlineRenderer::with_backend()
        .with_url_policy(UrlPolicy::new(config.links.allowed_schemes.iter().cloned()))
        .with_link_target(config.links.target_attr())
        .with_link_rel(config.links.rel_attr())
}
