//! Parser for the functions accepted by DerivaGenius.
//!
//! Input has the form `f(x) = <terms>`, where the terms are joined by top-level `+` and `-`
//! operators. The [`Parser`] splits the input into an ordered list of [`SignedTerm`]s; it does
//! not try to understand the terms themselves, which is left to the differentiator.
//!
//! [`Parser`]: parser::Parser
//! [`SignedTerm`]: parser::term::SignedTerm

pub mod parser;
pub mod tokenizer;
