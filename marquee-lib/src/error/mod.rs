//! Error types

mod field;
mod source;
mod validation;
mod view;

pub use field::*;
pub use source::*;
pub use validation::*;
pub use view::*;
