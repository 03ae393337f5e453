//! Link target sanitization.
//!
//! Targets are checked against a scheme allow-list and then percent-encoded
//! so the result can be placed verbatim inside a double-quoted attribute.

use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left untouched by URI encoding: A-Z a-z 0-9 ; , / ? : @ & = + $ - _ . ! ~ * ' ( ) #
const URI_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'#');

/// Scheme prefixes accepted by [`UrlPolicy::default`].
pub const DEFAULT_ALLOWED_SCHEMES: [&str; 3] = ["http://", "https://", "mailto:"];

/// Why a link target was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RejectedUrl {
    /// Nothing left after trimming whitespace.
    #[error("URL is empty")]
    Empty,
    /// The URL does not start with an allowed scheme.
    #[error("URL scheme is not allowed: {0}")]
    DisallowedScheme(String),
}

/// A URL that passed the allow-list and was encoded for attribute context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeUrl(String);

impl SafeUrl {
    /// The encoded URL.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SafeUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SafeUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Scheme allow-list used to validate link targets.
///
/// Prefixes are compared ASCII case-insensitively against the trimmed URL.
/// Anything that does not start with one of them is rejected, including
/// relative paths and bare words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlPolicy {
    allowed: Vec<String>,
}

impl Default for UrlPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_SCHEMES)
    }
}

impl UrlPolicy {
    /// Create a policy from scheme prefixes such as `"https://"` or `"mailto:"`.
    #[must_use]
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Allowed scheme prefixes.
    #[must_use]
    pub fn allowed_schemes(&self) -> &[String] {
        &self.allowed
    }

    /// Validate and encode a link target.
    pub fn sanitize(&self, url: &str) -> Result<SafeUrl, RejectedUrl> {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Err(RejectedUrl::Empty);
        }

        if !self.is_allowed(trimmed) {
            return Err(RejectedUrl::DisallowedScheme(scheme_of(trimmed).to_owned()));
        }

        let encoded = utf8_percent_encode(trimmed, URI_ENCODE_SET).to_string();
        Ok(SafeUrl(encoded.replace('"', "&quot;")))
    }

    fn is_allowed(&self, url: &str) -> bool {
        self.allowed.iter().any(|prefix| {
            url.get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
        })
    }
}

/// Validate and encode a link target against the default allow-list
/// (`http://`, `https://`, `mailto:`).
///
/// # Examples
///
/// ```
/// use shipmark_renderer::sanitize_url;
///
/// let url = sanitize_url(" https://hackclub.com/a b ").unwrap();
/// assert_eq!(url.as_str(), "https://hackclub.com/a%20b");
/// assert!(sanitize_url("javascript:alert(1)").is_err());
/// ```
pub fn sanitize_url(url: &str) -> Result<SafeUrl, RejectedUrl> {
    UrlPolicy::default().sanitize(url)
}

/// Leading scheme-like part of a rejected URL, for diagnostics.
fn scheme_of(url: &str) -> &str {
    match url.find(':') {
        Some(pos) => &url[..=pos],
        None => url.get(..url.len().min(16)).unwrap_or(url),
    }
}
