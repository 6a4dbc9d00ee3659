//! Resolución de argumentos posicionales contra un esquema.

pub mod convert;
pub mod resolved;
pub mod resolver;
pub mod schema;

pub use resolved::{ResolvedArguments, ResolvedValue};
pub use resolver::{resolve, resolve_lenient};
pub use schema::{ArgSpec, ArgumentSchema, ConvertFn};
