use std::{fmt::{self, Display, Formatter}, ops::Range};
use super::sign::Sign;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single term of a function, together with the sign that precedes it.
///
/// The text never begins with a top-level sign; that is held by [`SignedTerm::sign`]. It can
/// still contain a `-` as part of an exponent (`x^-2`), or as part of a differentiated term
/// (`-sin(x)`).
///
/// A [`SignedTerm`] is never modified after it is created. Differentiating a term produces a
/// new one with [`SignedTerm::with_text`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SignedTerm {
    sign: Sign,
    text: String,
    span: Range<usize>,
}

impl SignedTerm {
    /// Creates a new term. The span is the region of the source the term was parsed from.
    pub fn new(sign: Sign, text: impl Into<String>, span: Range<usize>) -> Self {
        Self { sign, text: text.into(), span }
    }

    /// Returns the sign of this term.
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns the text of this term, without its sign.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the region of the source this term was parsed from.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Returns a new term with the same sign and span as this one, but with the given text.
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self::new(self.sign, text, self.span.clone())
    }
}

impl Display for SignedTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.sign, self.text)
    }
}
