//! Symbolic differentiation of simple single-variable functions.
//!
//! A function is a sum of terms, where each term is one of:
//!
//! - a constant, such as `7` or `3.14`;
//! - a monomial `c·x^n`, such as `x`, `2.5x`, or `4x^-2`;
//! - the natural exponential `e^x`;
//! - `sin(x)`, `cos(x)`, or `tan(x)`, optionally preceded by a coefficient.
//!
//! Each term is differentiated on its own, and the results are joined back together:
//!
//! ```
//! use deriva_compute::differentiate_function;
//!
//! let derivative = differentiate_function("f(x) = 4x^3 - 2x^2 + 5x - 7").unwrap();
//! assert_eq!(derivative, "f'(x) = 12x^2 - 4x + 5");
//! ```

pub mod assemble;
pub mod error;
pub mod fmt;
pub mod symbolic;

use deriva_error::Error;
use deriva_parser::parser::Parser;

pub use assemble::assemble;
pub use symbolic::{differentiate, differentiate_all};

/// Parses and differentiates a function of the form `f(x) = <terms>`, returning its derivative
/// in the form `f'(x) = <terms>`.
///
/// Fails with the error of the first term that cannot be parsed or differentiated.
pub fn differentiate_function(source: &str) -> Result<String, Error> {
    let terms = Parser::new(source).try_parse_full()?;
    let derived = differentiate_all(&terms)?;
    Ok(assemble(&derived))
}
