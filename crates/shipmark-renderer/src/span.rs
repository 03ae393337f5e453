//! Single-pass scanner for the inline markup subset.
//!
//! Recognized constructs, tried in this order at every position:
//!
//! | Source              | Span                          |
//! |---------------------|-------------------------------|
//! | `[label](target)`   | [`InlineSpan::Link`]          |
//! | `**content**`       | [`InlineSpan::Bold`]          |
//! | `*content*`         | [`InlineSpan::Italic`]        |
//! | `_content_`         | [`InlineSpan::Underline`]     |
//! | `~content~`         | [`InlineSpan::Strikethrough`] |
//!
//! The first construct that matches wins and scanning resumes right after
//! it. Span content is never scanned again, so `**[a](b)**` is bold text
//! with a literal link inside. Emphasis content is at least one character,
//! never crosses a line terminator and ends at the nearest closing
//! delimiter. Link labels may span lines; targets run to the first `)`.
//!
//! Everything else is collected into [`InlineSpan::Literal`] runs. The spans
//! tile the input: concatenating their [`source`](InlineSpan::source) slices
//! gives back the original text.

use std::borrow::Cow;

/// A recognized piece of inline markup, borrowing from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineSpan<'a> {
    /// `[label](target)`. The target is unvalidated.
    Link {
        label: &'a str,
        target: &'a str,
        source: &'a str,
    },
    Bold(&'a str),
    Italic(&'a str),
    Underline(&'a str),
    Strikethrough(&'a str),
    /// Text outside any recognized construct.
    Literal(&'a str),
}

impl<'a> InlineSpan<'a> {
    /// The input text this span was scanned from, delimiters included.
    #[must_use]
    pub fn source(&self) -> Cow<'a, str> {
        match *self {
            Self::Link { source, .. } => Cow::Borrowed(source),
            Self::Literal(text) => Cow::Borrowed(text),
            Self::Bold(content) => Cow::Owned(format!("**{content}**")),
            Self::Italic(content) => Cow::Owned(format!("*{content}*")),
            Self::Underline(content) => Cow::Owned(format!("_{content}_")),
            Self::Strikethrough(content) => Cow::Owned(format!("~{content}~")),
        }
    }
}

/// Scan `text` into inline spans.
///
/// # Examples
///
/// ```
/// use shipmark_renderer::{InlineSpan, spans};
///
/// let found: Vec<_> = spans("Ship **it** now").collect();
/// assert_eq!(
///     found,
///     vec![
///         InlineSpan::Literal("Ship "),
///         InlineSpan::Bold("it"),
///         InlineSpan::Literal(" now"),
///     ]
/// );
/// ```
#[must_use]
pub fn spans(text: &str) -> Spans<'_> {
    Spans {
        text,
        pos: 0,
        pending: None,
        dead: DeadZones::default(),
    }
}

/// Emphasis delimiters, in match order after links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Emphasis {
    Bold,
    Italic,
    Underline,
    Strikethrough,
}

impl Emphasis {
    fn delimiter(self) -> &'static str {
        match self {
            Self::Bold => "**",
            Self::Italic => "*",
            Self::Underline => "_",
            Self::Strikethrough => "~",
        }
    }

    fn marker(self) -> char {
        match self {
            Self::Bold | Self::Italic => '*',
            Self::Underline => '_',
            Self::Strikethrough => '~',
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    fn span(self, content: &str) -> InlineSpan<'_> {
        match self {
            Self::Bold => InlineSpan::Bold(content),
            Self::Italic => InlineSpan::Italic(content),
            Self::Underline => InlineSpan::Underline(content),
            Self::Strikethrough => InlineSpan::Strikethrough(content),
        }
    }
}

/// Offsets before which a construct is already known not to match.
///
/// A failed emphasis search from one opener rules out every later opener of
/// the same kind on that line, and a failed link attempt rules out every `[`
/// before the `]` it stopped at. Remembering this keeps the scan linear.
#[derive(Debug, Default)]
struct DeadZones {
    emphasis: [usize; 4],
    link: usize,
}

/// Iterator over the [`InlineSpan`]s of a text. Created by [`spans`].
#[derive(Debug)]
pub struct Spans<'a> {
    text: &'a str,
    pos: usize,
    /// Markup span found right after a literal run, emitted next.
    pending: Option<(InlineSpan<'a>, usize)>,
    dead: DeadZones,
}

impl<'a> Iterator for Spans<'a> {
    type Item = InlineSpan<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((span, end)) = self.pending.take() {
            self.pos = end;
            return Some(span);
        }

        let start = self.pos;
        let mut cursor = start;
        while cursor < self.text.len() {
            if let Some((span, end)) = self.match_at(cursor) {
                if cursor == start {
                    self.pos = end;
                    return Some(span);
                }
                self.pending = Some((span, end));
                self.pos = cursor;
                return Some(InlineSpan::Literal(&self.text[start..cursor]));
            }
            cursor += self.text[cursor..].chars().next().map_or(1, char::len_utf8);
        }

        self.pos = self.text.len();
        (cursor > start).then(|| InlineSpan::Literal(&self.text[start..]))
    }
}

impl<'a> Spans<'a> {
    /// Try every construct at byte offset `at`; return the span and its end.
    fn match_at(&mut self, at: usize) -> Option<(InlineSpan<'a>, usize)> {
        let first = *self.text.as_bytes().get(at)?;
        match first {
            b'[' => self.match_link(at),
            b'*' => self
                .match_emphasis(at, Emphasis::Bold)
                .or_else(|| self.match_emphasis(at, Emphasis::Italic)),
            b'_' => self.match_emphasis(at, Emphasis::Underline),
            b'~' => self.match_emphasis(at, Emphasis::Strikethrough),
            _ => None,
        }
    }

    fn match_link(&mut self, at: usize) -> Option<(InlineSpan<'a>, usize)> {
        if at < self.dead.link {
            return None;
        }

        let label_start = at + 1;
        let Some(close) = self.text[label_start..].find(']') else {
            self.dead.link = self.text.len();
            return None;
        };
        let label_end = label_start + close;
        let target_start = label_end + 2;
        if label_end == label_start || !self.text[label_end + 1..].starts_with('(') {
            self.dead.link = label_end;
            return None;
        }

        let Some(target_len) = self.text[target_start..].find(')') else {
            self.dead.link = self.text.len();
            return None;
        };
        if target_len == 0 {
            self.dead.link = label_end;
            return None;
        }
        let target_end = target_start + target_len;
        let end = target_end + 1;

        Some((
            InlineSpan::Link {
                label: &self.text[label_start..label_end],
                target: &self.text[target_start..target_end],
                source: &self.text[at..end],
            },
            end,
        ))
    }

    fn match_emphasis(&mut self, at: usize, kind: Emphasis) -> Option<(InlineSpan<'a>, usize)> {
        let delim = kind.delimiter();
        if at < self.dead.emphasis[kind.index()] || !self.text[at..].starts_with(delim) {
            return None;
        }

        let content_start = at + delim.len();
        let rest = &self.text[content_start..];
        let first = rest.chars().next().filter(|&c| !is_line_terminator(c))?;

        // Walk to the nearest closing delimiter or line end, whichever is first.
        let marker = kind.marker();
        let mut offset = first.len_utf8();
        loop {
            let Some(found) = rest[offset..].find(|c: char| c == marker || is_line_terminator(c))
            else {
                self.dead.emphasis[kind.index()] = self.text.len();
                return None;
            };
            let hit = offset + found;
            if rest[hit..].starts_with(delim) {
                return Some((
                    kind.span(&rest[..hit]),
                    content_start + hit + delim.len(),
                ));
            }
            if !rest[hit..].starts_with(marker) {
                self.dead.emphasis[kind.index()] = content_start + hit;
                return None;
            }
            offset = hit + 1;
        }
    }
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
