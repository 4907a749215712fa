//! Application state module

mod banner;
mod forms;
mod submit;
pub mod validation;

pub use banner::*;
pub use forms::*;
pub use submit::*;
pub use validation::FieldKind;
