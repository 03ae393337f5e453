//! Render backend trait for format-specific output.
//!
//! The renderer walks the spans produced by the scanner and hands each one to
//! a backend. Backends decide how text is escaped and how each span kind is
//! written, which lets the same markup feed both the web UI ([`HtmlBackend`])
//! and chat notifications ([`SlackBackend`]).
//!
//! [`HtmlBackend`]: crate::HtmlBackend
//! [`SlackBackend`]: crate::SlackBackend

use crate::url::SafeUrl;

/// Attributes applied to rendered links.
///
/// `None` omits the attribute entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkAttrs {
    /// Browsing context for the link (`target` attribute).
    pub target: Option<String>,
    /// Link relationship (`rel` attribute).
    pub rel: Option<String>,
}

impl Default for LinkAttrs {
    fn default() -> Self {
        Self {
            target: Some("_blank".to_owned()),
            rel: Some("noopener noreferrer".to_owned()),
        }
    }
}

/// Backend trait for format-specific rendering operations.
///
/// All span content arrives unescaped; implementations must escape it for
/// their output format.
pub trait RenderBackend {
    /// Write plain text, escaped for the output format.
    fn text(text: &str, out: &mut String);

    /// Write a hard line break.
    fn line_break(out: &mut String);

    fn bold(content: &str, out: &mut String);

    fn italic(content: &str, out: &mut String);

    fn underline(content: &str, out: &mut String);

    fn strikethrough(content: &str, out: &mut String);

    /// Write a link whose target already passed the URL sanitizer.
    ///
    /// # Arguments
    ///
    /// * `label` - Unescaped link text
    /// * `href` - Sanitized, attribute-safe URL
    /// * `attrs` - Extra link attributes (ignored by formats without them)
    /// * `out` - Output buffer to write to
    fn link(label: &str, href: &SafeUrl, attrs: &LinkAttrs, out: &mut String);

    /// Write a literal run: escaped text with every `\n` turned into a line break.
    fn literal(text: &str, out: &mut String) {
        let mut lines = text.split('\n');
        if let Some(first) = lines.next() {
            Self::text(first, out);
        }
        for line in lines {
            Self::line_break(out);
            Self::text(line, out);
        }
    }
}
