//! Style property names and value types.

mod property;
mod value;

pub use property::StyleProperty;
pub use value::StyleValue;
