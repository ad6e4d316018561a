use ariadne::Fmt;
use deriva_attrs::ErrorKind;
use deriva_error::EXPR;

/// The term does not have any of the supported shapes.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = if self.text.is_empty() {
        "missing term".to_string()
    } else {
        format!("cannot differentiate `{}`", self.text)
    },
    labels = [if self.text.is_empty() {
        "I expected to see a term after this sign"
    } else {
        "this term"
    }],
    help = if self.suggestions.is_empty() {
        format!(
            "supported terms are constants, {}, {}, and {}",
            "cx^n".fg(EXPR),
            "e^x".fg(EXPR),
            "sin(x) / cos(x) / tan(x)".fg(EXPR),
        )
    } else if self.suggestions.len() == 1 {
        format!("did you mean the `{}` function?", (&*self.suggestions[0]).fg(EXPR))
    } else {
        format!(
            "did you mean one of these functions? {}",
            self.suggestions
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
)]
pub struct UnsupportedTerm {
    /// The text of the term.
    pub text: String,

    /// Supported functions with a name similar to a name used in the term, if any.
    pub suggestions: Vec<String>,
}

/// The term contains `sin(x)`, `cos(x)`, or `tan(x)`, but is not just a coefficient followed by
/// that function.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not a valid trigonometric term", self.text),
    labels = ["this term"],
    help = format!(
        "a trigonometric term is an optional coefficient followed by the function, like {}; the chain, product, and quotient rules are not supported",
        "2cos(x)".fg(EXPR),
    ),
)]
pub struct InvalidTrigTerm {
    /// The text of the term.
    pub text: String,
}
