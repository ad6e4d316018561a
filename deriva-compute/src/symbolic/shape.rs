use crate::error::{InvalidTrigTerm, UnsupportedTerm};
use deriva_error::Error;
use deriva_parser::{
    parser::term::SignedTerm,
    tokenizer::{tokenize_complete, Token, TokenKind},
};
use levenshtein::levenshtein;

/// Names that can appear in a supported term.
const KNOWN_NAMES: [&str; 5] = ["x", "e", "sin", "cos", "tan"];

/// One of the supported trigonometric functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrigFunction {
    Sin,
    Cos,
    Tan,
}

impl TrigFunction {
    /// All supported trigonometric functions.
    pub const ALL: [TrigFunction; 3] = [TrigFunction::Sin, TrigFunction::Cos, TrigFunction::Tan];

    /// Returns the name of the function.
    pub fn name(self) -> &'static str {
        match self {
            TrigFunction::Sin => "sin",
            TrigFunction::Cos => "cos",
            TrigFunction::Tan => "tan",
        }
    }

    /// Returns the function with the given name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|function| function.name() == name)
    }

    /// Evaluates the function at `x`, in radians.
    pub fn eval(self, x: f64) -> f64 {
        match self {
            TrigFunction::Sin => x.sin(),
            TrigFunction::Cos => x.cos(),
            TrigFunction::Tan => x.tan(),
        }
    }
}

/// The shape of a term, recovered from its text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TermShape {
    /// `c·sin(x)`, `c·cos(x)`, or `c·tan(x)`. The coefficient is `1` if it was not written.
    Trigonometric {
        function: TrigFunction,
        coefficient: f64,
    },

    /// `e^x`, with no coefficient.
    Exponential,

    /// `c·x^n`. The coefficient is `1` and the exponent is `1` if they were not written.
    Monomial {
        coefficient: f64,
        exponent: i32,
    },

    /// A number on its own.
    Constant {
        value: f64,
    },
}

/// Parses the tokens that come before `x` or a function call as a coefficient.
///
/// No tokens means an implicit coefficient of `1`.
fn parse_coefficient(tokens: &[Token]) -> Option<f64> {
    match tokens {
        [] => Some(1.0),
        [number] if number.kind == TokenKind::Number => number.lexeme.parse().ok(),
        _ => None,
    }
}

/// Parses an integer exponent, without its sign.
fn parse_exponent(token: &Token) -> Option<i32> {
    if token.kind != TokenKind::Number || !token.lexeme.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.lexeme.parse().ok()
}

/// A `sin(x)`, `cos(x)`, or `tan(x)` call found among the tokens of a term.
struct TrigCall {
    /// Index of the name token.
    index: usize,
    function: TrigFunction,

    /// Whether other letters are joined to the front of the function name, as in `xsin(x)`.
    prefixed: bool,
}

/// Finds the first `sin(x)`, `cos(x)`, or `tan(x)` call in the tokens.
///
/// Adjacent letters are lexed as a single name, so a name that only ends with a function name
/// (`asin`, `xcos`) followed by `(x)` is also reported as a call.
fn find_trig_call(tokens: &[Token]) -> Option<TrigCall> {
    tokens.windows(4).enumerate().find_map(|(index, window)| match window {
        [name, open, x, close] if name.kind == TokenKind::Name
            && open.kind == TokenKind::OpenParen
            && x.is_name("x")
            && close.kind == TokenKind::CloseParen => {
            TrigFunction::ALL
                .into_iter()
                .find(|function| name.lexeme.ends_with(function.name()))
                .map(|function| TrigCall {
                    index,
                    function,
                    prefixed: name.lexeme.len() > function.name().len(),
                })
        },
        _ => None,
    })
}

/// `c·x^n`, `c·x`, `x^n`, or `x`.
fn parse_monomial(tokens: &[Token]) -> Option<TermShape> {
    let x_index = tokens.iter().position(|token| token.is_name("x"))?;
    let coefficient = parse_coefficient(&tokens[..x_index])?;
    let exponent = match &tokens[x_index + 1..] {
        [] => 1,
        [caret, number] if caret.kind == TokenKind::Exp => parse_exponent(number)?,
        [caret, minus, number] if caret.kind == TokenKind::Exp && minus.kind == TokenKind::Sub => {
            parse_exponent(number)?.checked_neg()?
        },
        _ => return None,
    };

    Some(TermShape::Monomial { coefficient, exponent })
}

/// Returns the supported functions whose names are similar to the unknown names in the tokens.
fn similar_functions(tokens: &[Token]) -> Vec<String> {
    let mut suggestions = Vec::new();
    for token in tokens {
        if token.kind != TokenKind::Name || KNOWN_NAMES.contains(&token.lexeme) {
            continue;
        }

        for function in TrigFunction::ALL {
            let name = function.name();
            if levenshtein(name, token.lexeme) < 2 && !suggestions.iter().any(|s| s == name) {
                suggestions.push(name.to_string());
            }
        }
    }
    suggestions
}

impl TermShape {
    /// Classifies the text of the given term.
    ///
    /// The shapes are tried in order: trigonometric, exponential, monomial, and constant. A term
    /// that contains `sin(x)`, `cos(x)`, or `tan(x)` anywhere must be a trigonometric term, or
    /// [`InvalidTrigTerm`] is returned. A term that has none of the shapes results in
    /// [`UnsupportedTerm`]. Whitespace inside a term is ignored.
    pub fn classify(term: &SignedTerm) -> Result<Self, Error> {
        let text = term.text();
        let tokens = tokenize_complete(text)
            .iter()
            .filter(|token| !token.is_whitespace())
            .cloned()
            .collect::<Vec<_>>();

        if let Some(TrigCall { index, function, prefixed }) = find_trig_call(&tokens) {
            return match parse_coefficient(&tokens[..index]) {
                Some(coefficient) if !prefixed && index + 4 == tokens.len() => {
                    Ok(TermShape::Trigonometric { function, coefficient })
                },
                _ => Err(Error::new(vec![term.span()], InvalidTrigTerm {
                    text: text.to_string(),
                })),
            };
        }

        if let [e, caret, x] = tokens.as_slice() {
            if e.is_name("e") && caret.kind == TokenKind::Exp && x.is_name("x") {
                return Ok(TermShape::Exponential);
            }
        }

        if let Some(monomial) = parse_monomial(&tokens) {
            return Ok(monomial);
        }

        if let [number] = tokens.as_slice() {
            if number.kind == TokenKind::Number {
                if let Ok(value) = number.lexeme.parse() {
                    return Ok(TermShape::Constant { value });
                }
            }
        }

        Err(Error::new(vec![term.span()], UnsupportedTerm {
            text: text.to_string(),
            suggestions: similar_functions(&tokens),
        }))
    }

    /// Evaluates the term at `x`, ignoring its sign.
    pub fn eval(&self, x: f64) -> f64 {
        match *self {
            TermShape::Trigonometric { function, coefficient } => coefficient * function.eval(x),
            TermShape::Exponential => x.exp(),
            TermShape::Monomial { coefficient, exponent } => coefficient * x.powi(exponent),
            TermShape::Constant { value } => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use deriva_parser::parser::sign::Sign;
    use pretty_assertions::assert_eq;
    use super::*;

    fn classify(text: &str) -> Result<TermShape, Error> {
        TermShape::classify(&SignedTerm::new(Sign::Positive, text, 0..text.len()))
    }

    #[test]
    fn trigonometric() {
        assert_eq!(classify("sin(x)").unwrap(), TermShape::Trigonometric {
            function: TrigFunction::Sin,
            coefficient: 1.0,
        });
        assert_eq!(classify("2.5cos(x)").unwrap(), TermShape::Trigonometric {
            function: TrigFunction::Cos,
            coefficient: 2.5,
        });
        assert_eq!(classify("3 tan( x )").unwrap(), TermShape::Trigonometric {
            function: TrigFunction::Tan,
            coefficient: 3.0,
        });
    }

    #[test]
    fn invalid_trigonometric() {
        for text in ["sin(x)^2", "x sin(x)", "2sin(x)3", "sin(x)cos(x)", "1.2.3sin(x)"] {
            let err = classify(text).unwrap_err();
            assert_eq!(
                err.downcast_ref::<InvalidTrigTerm>(),
                Some(&InvalidTrigTerm { text: text.to_string() }),
            );
        }
    }

    #[test]
    fn letters_joined_to_trig_call() {
        for text in ["xsin(x)", "asin(x)", "esin(x)", "2xcos(x)", "xtan(x)", "x tan(x)"] {
            let err = classify(text).unwrap_err();
            assert_eq!(
                err.downcast_ref::<InvalidTrigTerm>(),
                Some(&InvalidTrigTerm { text: text.to_string() }),
            );
        }
    }

    #[test]
    fn exponential() {
        assert_eq!(classify("e^x").unwrap(), TermShape::Exponential);
        assert!(classify("2e^x").unwrap_err().is::<UnsupportedTerm>());
        assert!(classify("e^2").unwrap_err().is::<UnsupportedTerm>());
    }

    #[test]
    fn monomial() {
        assert_eq!(classify("x").unwrap(), TermShape::Monomial { coefficient: 1.0, exponent: 1 });
        assert_eq!(classify("2x").unwrap(), TermShape::Monomial { coefficient: 2.0, exponent: 1 });
        assert_eq!(classify("4x^3").unwrap(), TermShape::Monomial { coefficient: 4.0, exponent: 3 });
        assert_eq!(classify("x^-2").unwrap(), TermShape::Monomial { coefficient: 1.0, exponent: -2 });
        assert_eq!(classify(".5x^0").unwrap(), TermShape::Monomial { coefficient: 0.5, exponent: 0 });
    }

    #[test]
    fn unsupported_monomial() {
        for text in ["x^2.5", "x^", "x2", "2x^2x", "x^x", "x^99999999999"] {
            assert!(classify(text).unwrap_err().is::<UnsupportedTerm>(), "{text}");
        }
    }

    #[test]
    fn constant() {
        assert_eq!(classify("7").unwrap(), TermShape::Constant { value: 7.0 });
        assert_eq!(classify("3.14").unwrap(), TermShape::Constant { value: 3.14 });
        assert!(classify(".").unwrap_err().is::<UnsupportedTerm>());
        assert!(classify("1.2.3").unwrap_err().is::<UnsupportedTerm>());
    }

    #[test]
    fn unsupported_carries_text_and_span() {
        let term = SignedTerm::new(Sign::Negative, "ln(x)", 11..16);
        let err = TermShape::classify(&term).unwrap_err();
        assert_eq!(err.spans, vec![11..16]);
        assert_eq!(err.downcast_ref::<UnsupportedTerm>(), Some(&UnsupportedTerm {
            text: "ln(x)".to_string(),
            suggestions: vec![],
        }));
    }

    #[test]
    fn suggest_similar_functions() {
        let err = classify("sine(x)").unwrap_err();
        assert_eq!(err.downcast_ref::<UnsupportedTerm>().unwrap().suggestions, ["sin"]);

        let err = classify("con(x)").unwrap_err();
        assert_eq!(err.downcast_ref::<UnsupportedTerm>().unwrap().suggestions, ["cos"]);

        let err = classify("tin(x)").unwrap_err();
        assert_eq!(err.downcast_ref::<UnsupportedTerm>().unwrap().suggestions, ["sin", "tan"]);

        // `sin` applied to something other than `x` is still spelled correctly
        let err = classify("sin(2x)").unwrap_err();
        assert!(err.downcast_ref::<UnsupportedTerm>().unwrap().suggestions.is_empty());
    }

    #[test]
    fn empty_term() {
        let err = classify("").unwrap_err();
        assert_eq!(err.downcast_ref::<UnsupportedTerm>().unwrap().text, "");
    }
}
