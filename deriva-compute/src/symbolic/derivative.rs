use crate::fmt::fmt_coefficient;
use deriva_error::Error;
use deriva_parser::parser::term::SignedTerm;
use std::fmt::{self, Display, Formatter};
use super::shape::{TermShape, TrigFunction};

/// The derivative of one of the supported trigonometric functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrigDerivative {
    /// `d/dx sin(x) = cos(x)`
    Cos,

    /// `d/dx cos(x) = -sin(x)`
    NegSin,

    /// `d/dx tan(x) = sec(x)^2`
    SecSquared,
}

impl TrigFunction {
    /// Returns the derivative of this function.
    pub fn derivative(self) -> TrigDerivative {
        match self {
            TrigFunction::Sin => TrigDerivative::Cos,
            TrigFunction::Cos => TrigDerivative::NegSin,
            TrigFunction::Tan => TrigDerivative::SecSquared,
        }
    }
}

/// The derivative of a single term, before it is given its sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Derivative {
    /// The term vanishes.
    Zero,

    /// A non-zero constant.
    Constant(f64),

    /// `c·x^n`, where `c` is non-zero and `n` is not `0`.
    Monomial {
        coefficient: f64,
        exponent: i32,
    },

    /// `e^x`.
    Exponential,

    /// `c·cos(x)`, `-c·sin(x)`, or `c·sec(x)^2`, where `c` is non-zero.
    Trigonometric {
        function: TrigDerivative,
        coefficient: f64,
    },
}

impl Derivative {
    /// Evaluates the derivative at `x`, in radians.
    pub fn eval(&self, x: f64) -> f64 {
        match *self {
            Derivative::Zero => 0.0,
            Derivative::Constant(c) => c,
            Derivative::Monomial { coefficient, exponent } => coefficient * x.powi(exponent),
            Derivative::Exponential => x.exp(),
            Derivative::Trigonometric { function, coefficient } => coefficient * match function {
                TrigDerivative::Cos => x.cos(),
                TrigDerivative::NegSin => -x.sin(),
                TrigDerivative::SecSquared => x.cos().powi(-2),
            },
        }
    }
}

impl TermShape {
    /// Returns the derivative of this term.
    pub fn derivative(&self) -> Derivative {
        match *self {
            TermShape::Trigonometric { coefficient, .. } if coefficient == 0.0 => Derivative::Zero,
            TermShape::Trigonometric { function, coefficient } => Derivative::Trigonometric {
                function: function.derivative(),
                coefficient,
            },
            TermShape::Exponential => Derivative::Exponential,
            TermShape::Monomial { coefficient, exponent: 1 } => {
                if coefficient == 0.0 {
                    Derivative::Zero
                } else {
                    Derivative::Constant(coefficient)
                }
            },
            // power rule: d/dx c·x^n = (c·n)·x^(n - 1)
            TermShape::Monomial { coefficient, exponent } => {
                let coefficient = coefficient * exponent as f64;
                if coefficient == 0.0 {
                    Derivative::Zero
                } else {
                    Derivative::Monomial { coefficient, exponent: exponent - 1 }
                }
            },
            TermShape::Constant { .. } => Derivative::Zero,
        }
    }
}

/// Writes a coefficient that is followed by a variable or function. A coefficient of `1` is
/// left out.
fn fmt_leading_coefficient(f: &mut Formatter<'_>, coefficient: f64) -> fmt::Result {
    if coefficient == 1.0 {
        Ok(())
    } else if coefficient == -1.0 {
        write!(f, "-")
    } else {
        fmt_coefficient(f, coefficient)
    }
}

impl Display for Derivative {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Derivative::Zero => write!(f, "0"),
            Derivative::Constant(c) => fmt_coefficient(f, c),
            Derivative::Monomial { coefficient, exponent } => {
                fmt_leading_coefficient(f, coefficient)?;
                write!(f, "x")?;
                if exponent != 1 {
                    write!(f, "^{}", exponent)?;
                }
                Ok(())
            },
            Derivative::Exponential => write!(f, "e^x"),
            Derivative::Trigonometric { function, coefficient } => match function {
                TrigDerivative::Cos => {
                    fmt_leading_coefficient(f, coefficient)?;
                    write!(f, "cos(x)")
                },
                // `-{c}sin(x)` rather than `{c}-sin(x)`: the coefficient is moved after the
                // negation so `2cos(x)` becomes `-2sin(x)`. The sign of the term is untouched.
                TrigDerivative::NegSin => {
                    write!(f, "-")?;
                    fmt_leading_coefficient(f, coefficient)?;
                    write!(f, "sin(x)")
                },
                TrigDerivative::SecSquared => {
                    fmt_leading_coefficient(f, coefficient)?;
                    write!(f, "sec(x)^2")
                },
            },
        }
    }
}

/// Differentiates a single term. The result has the same sign and span as the given term.
pub fn differentiate(term: &SignedTerm) -> Result<SignedTerm, Error> {
    let shape = TermShape::classify(term)?;
    Ok(term.with_text(shape.derivative().to_string()))
}

/// Differentiates every term, in order. Stops at the first term that cannot be differentiated.
pub fn differentiate_all(terms: &[SignedTerm]) -> Result<Vec<SignedTerm>, Error> {
    terms.iter().map(differentiate).collect()
}
