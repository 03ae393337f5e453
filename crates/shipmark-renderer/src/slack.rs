//! Slack `mrkdwn` backend.
//!
//! Used for review and shipping notifications posted to Slack. Slack only
//! requires `&`, `<` and `>` to be escaped; it has no underline, so underlined
//! content is written as plain text.

use std::fmt::Write;

use crate::backend::{LinkAttrs, RenderBackend};
use crate::url::SafeUrl;

/// Slack `mrkdwn` render backend.
pub struct SlackBackend;

impl SlackBackend {
    fn wrap(marker: char, content: &str, out: &mut String) {
        out.push(marker);
        Self::text(content, out);
        out.push(marker);
    }
}

impl RenderBackend for SlackBackend {
    fn text(text: &str, out: &mut String) {
        for c in text.chars() {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                _ => out.push(c),
            }
        }
    }

    fn line_break(out: &mut String) {
        out.push('\n');
    }

    fn bold(content: &str, out: &mut String) {
        Self::wrap('*', content, out);
    }

    fn italic(content: &str, out: &mut String) {
        Self::wrap('_', content, out);
    }

    fn underline(content: &str, out: &mut String) {
        Self::text(content, out);
    }

    fn strikethrough(content: &str, out: &mut String) {
        Self::wrap('~', content, out);
    }

    fn link(label: &str, href: &SafeUrl, _attrs: &LinkAttrs, out: &mut String) {
        write!(out, "<{href}|").unwrap();
        Self::text(label, out);
        out.push('>');
    }
}
