use deriva_parser::parser::{sign::Sign, term::SignedTerm};

/// Joins differentiated terms into the final `f'(x) = ...` string.
///
/// Terms whose text is `0` are left out. The sign of the first remaining term is only written
/// if it is negative, and is attached directly to the term (`f'(x) = -2x + 1`). Every other
/// sign is surrounded by spaces. If no terms remain, the derivative is `0`.
pub fn assemble(terms: &[SignedTerm]) -> String {
    let mut out = String::from("f'(x) =");
    let mut remaining = terms.iter().filter(|term| term.text() != "0").peekable();

    if remaining.peek().is_none() {
        out.push_str(" 0");
        return out;
    }

    for (i, term) in remaining.enumerate() {
        out.push_str(&match (i, term.sign()) {
            (0, Sign::Positive) => format!(" {}", term.text()),
            (0, Sign::Negative) => format!(" -{}", term.text()),
            (_, sign) => format!(" {} {}", sign, term.text()),
        });
    }

    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn term(sign: Sign, text: &str) -> SignedTerm {
        SignedTerm::new(sign, text, 0..0)
    }

    #[test]
    fn drops_zero_terms() {
        let terms = [
            term(Sign::Positive, "12x^2"),
            term(Sign::Negative, "4x"),
            term(Sign::Positive, "5"),
            term(Sign::Negative, "0"),
        ];
        assert_eq!(assemble(&terms), "f'(x) = 12x^2 - 4x + 5");
    }

    #[test]
    fn leading_zero_terms() {
        let terms = [
            term(Sign::Positive, "0"),
            term(Sign::Negative, "0"),
            term(Sign::Positive, "e^x"),
        ];
        assert_eq!(assemble(&terms), "f'(x) = e^x");
    }

    #[test]
    fn leading_negative() {
        let terms = [
            term(Sign::Negative, "2x"),
            term(Sign::Positive, "cos(x)"),
        ];
        assert_eq!(assemble(&terms), "f'(x) = -2x + cos(x)");
    }

    #[test]
    fn leading_negative_after_zero() {
        let terms = [
            term(Sign::Positive, "0"),
            term(Sign::Negative, "sec(x)^2"),
        ];
        assert_eq!(assemble(&terms), "f'(x) = -sec(x)^2");
    }

    #[test]
    fn embedded_negation_is_kept() {
        let terms = [
            term(Sign::Positive, "1"),
            term(Sign::Negative, "-sin(x)"),
        ];
        assert_eq!(assemble(&terms), "f'(x) = 1 - -sin(x)");
    }

    #[test]
    fn every_sign_between_terms() {
        let terms = [
            term(Sign::Positive, "3"),
            term(Sign::Positive, "2x"),
            term(Sign::Negative, "e^x"),
            term(Sign::Positive, "cos(x)"),
        ];
        assert_eq!(assemble(&terms), "f'(x) = 3 + 2x - e^x + cos(x)");
    }

    #[test]
    fn all_terms_vanish() {
        assert_eq!(assemble(&[term(Sign::Positive, "0")]), "f'(x) = 0");
        assert_eq!(assemble(&[term(Sign::Negative, "0"), term(Sign::Positive, "0")]), "f'(x) = 0");
        assert_eq!(assemble(&[]), "f'(x) = 0");
    }

    #[test]
    fn no_trailing_sign_or_whitespace() {
        let terms = [
            term(Sign::Positive, "2x"),
            term(Sign::Positive, "0"),
            term(Sign::Negative, "0"),
        ];
        let out = assemble(&terms);
        assert_eq!(out, "f'(x) = 2x");
        assert!(!out.ends_with(['+', '-', ' ']));
    }
}
