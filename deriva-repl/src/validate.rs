use ariadne::Fmt;
use deriva_attrs::ErrorKind;
use deriva_error::{Error, EXPR};
use deriva_parser::parser::{error::MissingPrefix, PREFIX};

/// The characters allowed in a function, other than whitespace.
pub const ALLOWED: &str = "f()xe0123456789+-=^−.sincota";

/// The input contains a character that cannot appear in a supported function.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("disallowed character found: `{}`", self.character),
    labels = ["this character"],
    help = format!("the only allowed characters are {}", "f ( ) x e 0-9 + - = ^ − . sin cos tan".fg(EXPR)),
)]
pub struct DisallowedCharacter {
    /// The character that is not allowed.
    pub character: char,
}

/// Checks that the input starts with `f(x) =` and only contains allowed characters.
///
/// Returns the input with every `−` (U+2212 MINUS SIGN) replaced by an ASCII `-`.
pub fn validate(input: &str) -> Result<String, Error> {
    if !input.starts_with(PREFIX) {
        let end = input.len().min(PREFIX.len());
        return Err(Error::new(vec![0..end], MissingPrefix));
    }

    if let Some((i, character)) = input
        .char_indices()
        .find(|(_, c)| !c.is_whitespace() && !ALLOWED.contains(*c))
    {
        return Err(Error::new(
            vec![i..i + character.len_utf8()],
            DisallowedCharacter { character },
        ));
    }

    Ok(input.replace('−', "-"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn valid() {
        let input = "f(x) = 4x^3 - 2x^2 + 5x - 7";
        assert_eq!(validate(input).unwrap(), input);
        assert_eq!(validate("f(x) = 2cos(x) + tan(x) - e^x").unwrap(), "f(x) = 2cos(x) + tan(x) - e^x");
    }

    #[test]
    fn unicode_minus() {
        assert_eq!(validate("f(x) = x^2 − 3").unwrap(), "f(x) = x^2 - 3");
    }

    #[test]
    fn missing_prefix() {
        let err = validate("4x^3 - 2x^2").unwrap_err();
        assert!(err.is::<MissingPrefix>());
        assert_eq!(err.spans, vec![0..6]);

        assert!(validate("f(x)= x").unwrap_err().is::<MissingPrefix>());
        assert!(validate("").unwrap_err().is::<MissingPrefix>());
    }

    #[test]
    fn disallowed_character() {
        let err = validate("f(x) = 3y + 1").unwrap_err();
        assert_eq!(err.downcast_ref::<DisallowedCharacter>(), Some(&DisallowedCharacter { character: 'y' }));
        assert_eq!(err.spans, vec![8..9]);

        let err = validate("f(x) = x * 2").unwrap_err();
        assert_eq!(err.downcast_ref::<DisallowedCharacter>(), Some(&DisallowedCharacter { character: '*' }));
    }

    #[test]
    fn disallowed_multibyte_character() {
        let err = validate("f(x) = π").unwrap_err();
        assert_eq!(err.spans, vec![7..9]);
    }
}
