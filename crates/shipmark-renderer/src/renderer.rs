//! Inline markup renderer with pluggable backend.

use std::marker::PhantomData;

use crate::backend::{LinkAttrs, RenderBackend};
use crate::html::HtmlBackend;
use crate::span::{InlineSpan, spans};
use crate::url::UrlPolicy;

/// Inline markup renderer.
///
/// Scans text once with [`spans`](crate::spans) and writes every span through
/// the [`RenderBackend`]. Rendering never fails: link targets rejected by the
/// [`UrlPolicy`] are written back as literal text, and unmatched delimiters
/// stay literal.
///
/// The renderer only holds configuration, so one instance can be shared
/// across threads.
///
/// # Example
///
/// ```
/// use shipmark_renderer::{InlineRenderer, SlackBackend};
///
/// let html = InlineRenderer::new().render("**Ship** it");
/// assert_eq!(html, "<strong>Ship</strong> it");
///
/// let slack = InlineRenderer::<SlackBackend>::with_backend().render("**Ship** it");
/// assert_eq!(slack, "*Ship* it");
/// ```
pub struct InlineRenderer<B: RenderBackend = HtmlBackend> {
    policy: UrlPolicy,
    link_attrs: LinkAttrs,
    _backend: PhantomData<fn() -> B>,
}

impl InlineRenderer {
    /// Create an HTML renderer with the default URL policy and link attributes.
    #[must_use]
    pub fn new() -> Self {
        Self::with_backend()
    }
}

impl Default for InlineRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: RenderBackend> InlineRenderer<B> {
    /// Create a renderer for backend `B` with default settings.
    #[must_use]
    pub fn with_backend() -> Self {
        Self {
            policy: UrlPolicy::default(),
            link_attrs: LinkAttrs::default(),
            _backend: PhantomData,
        }
    }

    /// Set the URL policy used to validate link targets.
    #[must_use]
    pub fn with_url_policy(mut self, policy: UrlPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the link `target` attribute. `None` omits it.
    #[must_use]
    pub fn with_link_target(mut self, target: Option<String>) -> Self {
        self.link_attrs.target = target;
        self
    }

    /// Set the link `rel` attribute. `None` omits it.
    #[must_use]
    pub fn with_link_rel(mut self, rel: Option<String>) -> Self {
        self.link_attrs.rel = rel;
        self
    }

    /// The URL policy in use.
    #[must_use]
    pub fn url_policy(&self) -> &UrlPolicy {
        &self.policy
    }

    /// Render text into the backend's output format.
    #[must_use]
    pub fn render(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + text.len() / 4);
        for span in spans(text) {
            self.render_span(span, &mut out);
        }
        out
    }

    /// Render optional text. `None` renders as an empty string.
    #[must_use]
    pub fn render_optional(&self, text: Option<&str>) -> String {
        text.map(|t| self.render(t)).unwrap_or_default()
    }

    fn render_span(&self, span: InlineSpan<'_>, out: &mut String) {
        match span {
            InlineSpan::Literal(text) => B::literal(text, out),
            InlineSpan::Bold(content) => B::bold(content, out),
            InlineSpan::Italic(content) => B::italic(content, out),
            InlineSpan::Underline(content) => B::underline(content, out),
            InlineSpan::Strikethrough(content) => B::strikethrough(content, out),
            InlineSpan::Link {
                label,
                target,
                source,
            } => match self.policy.sanitize(target) {
                Ok(href) => B::link(label, &href, &self.link_attrs, out),
                Err(e) => {
                    tracing::debug!(url = %target, reason = %e, "Rendering rejected link as text");
                    B::literal(source, out);
                }
            },
        }
    }
}
