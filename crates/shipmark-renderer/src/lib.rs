//! Inline markup renderer with pluggable backends.
//!
//! Renders a small inline markup subset (links, bold, italic, underline,
//! strikethrough) from user- or admin-authored text into output that is safe
//! to hand to a trusting consumer.
//!
//! # Architecture
//!
//! - [`spans`]: single-pass scanner producing [`InlineSpan`]s
//! - [`sanitize_url`] / [`UrlPolicy`]: scheme allow-list and attribute-safe encoding
//! - [`escape_html`]: escaping for literal text
//! - [`RenderBackend`]: output format ([`HtmlBackend`], [`SlackBackend`])
//! - [`InlineRenderer`]: drives the scanner and a backend
//! - [`FaqAccordion`]: landing page FAQ list built on the renderer
//!
//! Markup is never nested: `**[a](b)**` renders bold text containing the
//! literal characters `[a](b)`. Link targets that fail the URL policy are
//! rendered back as literal text.
//!
//! # Example
//!
//! ```
//! let html = shipmark_renderer::render("[Hack Club](https://hackclub.com) is **fun**\nJoin!");
//! assert_eq!(
//!     html,
//!     r#"<a href="https://hackclub.com" target="_blank" rel="noopener noreferrer">Hack Club</a> is <strong>fun</strong><br>Join!"#
//! );
//! ```

mod backend;
mod escape;
mod faq;
mod html;
mod renderer;
mod slack;
mod span;
mod url;

pub use backend::{LinkAttrs, RenderBackend};
pub use escape::{escape_html, escape_html_into};
pub use faq::{DEFAULT_ACCORDION_ID, Faq, FaqAccordion, FaqList};
pub use html::HtmlBackend;
pub use renderer::InlineRenderer;
pub use slack::SlackBackend;
pub use span::{InlineSpan, Spans, spans};
pub use url::{DEFAULT_ALLOWED_SCHEMES, RejectedUrl, SafeUrl, UrlPolicy, sanitize_url};

/// Render text to an HTML fragment with default settings.
#[must_use]
pub fn render(text: &str) -> String {
    InlineRenderer::new().render(text)
}

/// Render optional text to an HTML fragment. `None` renders as `""`.
#[must_use]
pub fn render_optional(text: Option<&str>) -> String {
    InlineRenderer::new().render_optional(text)
}
