use crate::validate::validate;
use deriva_compute::differentiate_function;
use deriva_error::Error;
use rustyline::{error::ReadlineError, DefaultEditor};

/// Reports an error to stderr, pointing into the given input.
fn report(err: &Error, input: &str) {
    // nothing else can be done if stderr is unavailable
    let _ = err.report_to_stderr("input", input);
}

/// Validates and differentiates one function, returning its derivative. Errors are reported to
/// stderr, and [`None`] is returned.
pub fn respond(raw: &str) -> Option<String> {
    let input = match validate(raw) {
        Ok(input) => input,
        Err(err) => {
            report(&err, raw);
            return None;
        },
    };

    match differentiate_function(&input) {
        Ok(derivative) => Some(derivative),
        Err(err) => {
            report(&err, &input);
            None
        },
    }
}

/// Prints the introduction and instructions shown when an interactive session starts.
pub fn print_instructions() {
    println!("░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░\n");
    println!("INTRODUCTION:\n  Welcome to DerivaGenius, a program that differentiates simple calculus functions.\n");
    println!("DISCLAIMER:\n  This is an experimental program. No warranties are made or implied.\n");
    println!("INSTRUCTIONS:");
    println!("  1. The only allowed input characters are f, (, ), x, e, sin, cos, tan, 0-9, +, -, =, ^, −, and .");
    println!("  2. Your input must be in the format \"f(x) = <FUNCTION>\" to be valid. For example: \"f(x) = 4x^3 - 2x^2 + 5x - 7\" would be valid input, but \"4x^3 - 2x^2 + 5x - 7\" would not be.");
    println!("  3. Terms in your function must be separated with + or -.");
    println!("  4. DerivaGenius cannot differentiate functions that require the chain rule, product rule, quotient rule, or other advanced calculus techniques to differentiate.");
    println!("  5. DerivaGenius can only support the following term structures:");
    println!("    a. sin(x), cos(x), tan(x) (e.g. 2cos(x))");
    println!("    b. <COEFFICIENT>x^<POWER> (e.g. 2x^3)");
    println!("    c. e^x");
    println!("    d. <CONSTANT> (e.g. 21)");
    println!("\n░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░\n");
}

/// An interactive session. The session owns the line editor for as long as it runs.
pub struct Session {
    editor: DefaultEditor,
}

impl Session {
    /// Creates a new session.
    pub fn new() -> Result<Self, ReadlineError> {
        Ok(Self { editor: DefaultEditor::new()? })
    }

    /// Prompts for functions until one can be differentiated, then prints its derivative.
    pub fn run_once(&mut self) -> Result<(), ReadlineError> {
        loop {
            println!("➡ Please enter your function below:\n");
            let input = self.editor.readline("> ")?;
            if input.trim().is_empty() {
                continue;
            }

            self.editor.add_history_entry(&input)?;

            println!("\n▞ You entered:\n  {}", input);
            match respond(&input) {
                Some(derivative) => {
                    println!("\n➡ Result:\n  {}", derivative);
                    return Ok(());
                },
                None => println!("▕! Please try again.\n"),
            }
        }
    }

    /// Asks whether to differentiate another function. Only `yes` continues the session.
    pub fn ask_rerun(&mut self) -> Result<bool, ReadlineError> {
        let response = self.editor.readline("\n➡ Do you want to run again? (yes/no): ")?;
        Ok(response.trim().eq_ignore_ascii_case("yes"))
    }

    /// Runs the session until the user declines to run again.
    pub fn run(&mut self) -> Result<(), ReadlineError> {
        loop {
            self.run_once()?;
            if !self.ask_rerun()? {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn respond_with_derivative() {
        assert_eq!(respond("f(x) = 4x^3 - 2x^2 + 5x - 7").as_deref(), Some("f'(x) = 12x^2 - 4x + 5"));
        assert_eq!(respond("f(x) = sin(x) + e^x").as_deref(), Some("f'(x) = cos(x) + e^x"));
        assert_eq!(respond("f(x) = x^2 − 3x").as_deref(), Some("f'(x) = 2x - 3"));
    }

    #[test]
    fn respond_with_error() {
        assert_eq!(respond("x^2"), None);
        assert_eq!(respond("f(x) = y^2"), None);
        assert_eq!(respond("f(x) = 2e^x"), None);
    }
}
