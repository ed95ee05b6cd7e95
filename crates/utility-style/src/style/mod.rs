//! Style mappings and their serialized form.

mod mapping;
mod serialize;

pub use mapping::StyleMapping;
pub use serialize::{serialize, serialize_as, OutputFormat};
