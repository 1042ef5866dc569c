use std::fmt;
use std::ops::Deref;

/// One alternative string of a degenerate segment.
///
/// `text` is the serialized alternative, nested segments included.
/// `span` is the number of positions it covers: one per literal symbol
/// plus the first-alternative span of every nested segment. Syntax
/// characters are never part of the span.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Alternative {
    pub text: String,
    pub span: usize,
}

impl Alternative {
    /// An alternative made only of literal symbols.
    pub fn literal(text: &str) -> Self {
        Alternative {
            text: text.to_string(),
            span: text.chars().count(),
        }
    }
}

/// The alternatives of one degenerate position, never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment(Vec<Alternative>);

impl Deref for Segment {
    type Target = [Alternative];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Alternative> for Segment {
    fn from(first: Alternative) -> Self {
        Segment(vec![first])
    }
}

impl Segment {
    pub fn push(&mut self, alternative: Alternative) {
        self.0.push(alternative);
    }

    /// Only segments with two or more alternatives are written in braces.
    pub fn is_degenerate(&self) -> bool {
        self.0.len() > 1
    }

    pub fn first_span(&self) -> usize {
        self.0[0].span
    }

    pub fn max_span(&self) -> usize {
        self.0.iter().map(|a| a.span).max().unwrap_or(0)
    }

    pub fn sum_span(&self) -> usize {
        self.0.iter().map(|a| a.span).sum()
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_degenerate() {
            return write!(f, "{}", self.0[0].text);
        }
        write!(f, "{{")?;
        for (i, alt) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", alt.text)?;
        }
        write!(f, "}}")
    }
}
