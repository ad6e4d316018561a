use ariadne::Fmt;
use deriva_attrs::ErrorKind;
use deriva_error::EXPR;
use super::PREFIX;

/// The input did not start with the required `f(x) =` prefix.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the input must start with `{}`", PREFIX),
    labels = ["I expected to see the function name here"],
    help = format!("write your function as {}", "f(x) = <FUNCTION>".fg(EXPR)),
)]
pub struct MissingPrefix;

/// A sign token was neither `+` nor `-`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("no sign with the symbol `{}` exists", self.symbol),
    labels = ["this sign"],
    help = "terms must be separated with `+` or `-`",
)]
pub struct UnknownSign {
    /// The symbol that could not be resolved to a sign.
    pub symbol: String,
}
