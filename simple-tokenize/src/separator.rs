//! Separator predicates.

/// Decides whether a character separates two tokens.
pub trait Separator {
    fn is_separator(&self, c: char) -> bool;
}

/// Splits on Unicode whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct Whitespace;

impl Separator for Whitespace {
    fn is_separator(&self, c: char) -> bool {
        c.is_whitespace()
    }
}

/// Splits on `,`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Comma;

impl Separator for Comma {
    fn is_separator(&self, c: char) -> bool {
        c == ','
    }
}

/// Splits on `&`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ampersand;

impl Separator for Ampersand {
    fn is_separator(&self, c: char) -> bool {
        c == '&'
    }
}

/// Splits on the arithmetic operators `+`, `-`, `*` and `/`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Arithmetic;

impl Separator for Arithmetic {
    fn is_separator(&self, c: char) -> bool {
        matches!(c, '+' | '-' | '*' | '/')
    }
}

/// Splits on any character contained in the given set.
#[derive(Debug, Clone, Default)]
pub struct AnyOf(pub String);

impl AnyOf {
    pub fn new(chars: impl Into<String>) -> Self {
        Self(chars.into())
    }
}

impl Separator for AnyOf {
    fn is_separator(&self, c: char) -> bool {
        self.0.contains(c)
    }
}

impl<F> Separator for F
where
    F: Fn(char) -> bool,
{
    fn is_separator(&self, c: char) -> bool {
        self(c)
    }
}
