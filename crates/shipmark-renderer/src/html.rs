//! HTML backend for inline rendering.
//!
//! Produces an HTML fragment suitable for direct insertion into a page.

use std::fmt::Write;

use crate::backend::{LinkAttrs, RenderBackend};
use crate::escape::{escape_html, escape_html_into};
use crate::url::SafeUrl;

/// HTML render backend.
///
/// Produces:
/// - `<strong>`, `<em>`, `<u>` and `<s>` for emphasis
/// - `<br>` for line breaks
/// - `<a>` with configurable `target` and `rel` for links
pub struct HtmlBackend;

impl HtmlBackend {
    fn wrap(tag: &str, content: &str, out: &mut String) {
        write!(out, "<{tag}>").unwrap();
        escape_html_into(out, content);
        write!(out, "</{tag}>").unwrap();
    }
}

impl RenderBackend for HtmlBackend {
    fn text(text: &str, out: &mut String) {
        escape_html_into(out, text);
    }

    fn line_break(out: &mut String) {
        out.push_str("<br>");
    }

    fn bold(content: &str, out: &mut String) {
        Self::wrap("strong", content, out);
    }

    fn italic(content: &str, out: &mut String) {
        Self::wrap("em", content, out);
    }

    fn underline(content: &str, out: &mut String) {
        Self::wrap("u", content, out);
    }

    fn strikethrough(content: &str, out: &mut String) {
        Self::wrap("s", content, out);
    }

    fn link(label: &str, href: &SafeUrl, attrs: &LinkAttrs, out: &mut String) {
        write!(out, r#"<a href="{href}""#).unwrap();
        if let Some(target) = &attrs.target {
            write!(out, r#" target="{}""#, escape_html(target)).unwrap();
        }
        if let Some(rel) = &attrs.rel {
            write!(out, r#" rel="{}""#, escape_html(rel)).unwrap();
        }
        out.push('>');
        escape_html_into(out, label);
        out.push_str("</a>");
    }
}
