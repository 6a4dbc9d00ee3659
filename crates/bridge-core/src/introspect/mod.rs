//! Introspección segura de grafos del host (ciclos, profundidad, conversores).

pub mod context;
pub mod registry;
pub mod serializer;

pub use context::SerializationContext;
pub use registry::{Converter, ConverterRegistry};
pub use serializer::{serialize, serialize_default};
