use std::{fmt::{self, Display, Formatter}, str::FromStr};
use super::error::UnknownSign;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The sign attached to a term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sign {
    /// `+`
    Positive,

    /// `-`
    Negative,
}

impl Sign {
    /// Returns the symbol of this sign.
    pub fn symbol(self) -> char {
        match self {
            Sign::Positive => '+',
            Sign::Negative => '-',
        }
    }

    /// Returns the opposite sign.
    ///
    /// The differentiator never calls this: the negation produced by differentiating `cos(x)`
    /// is written into the text of the term instead.
    pub fn flip(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

impl Display for Sign {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Sign {
    type Error = UnknownSign;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '+' => Ok(Sign::Positive),
            '-' => Ok(Sign::Negative),
            _ => Err(UnknownSign { symbol: value.to_string() }),
        }
    }
}

impl FromStr for Sign {
    type Err = UnknownSign;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Sign::try_from(c),
            _ => Err(UnknownSign { symbol: s.to_string() }),
        }
    }
}
