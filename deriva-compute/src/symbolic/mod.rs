//! Classification of terms into the supported shapes, and the differentiation rules for each
//! shape.

pub mod derivative;
pub mod shape;

pub use derivative::{differentiate, differentiate_all, Derivative};
pub use shape::{TermShape, TrigFunction};
