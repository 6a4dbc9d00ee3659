//! bridge-core: normalización de argumentos de scripts e introspección segura
//! de objetos del host.
//!
//! Tres piezas independientes y síncronas:
//! - `args`: resolución posicional contra un `ArgumentSchema`.
//! - `prompt`: relleno interactivo de lo que quedó pendiente.
//! - `introspect`: grafo del host → árbol JSON (ciclos, profundidad, conversores).
//!
//! `env` y `ui` son la capa fina que usan los scripts (salida `print`, árboles).
pub mod args;
pub mod constants;
pub mod env;
pub mod errors;
pub mod host;
pub mod introspect;
pub mod prompt;
pub mod ui;

pub use args::{resolve, resolve_lenient, ArgSpec, ArgumentSchema, ResolvedArguments, ResolvedValue};
pub use env::Environment;
pub use errors::BridgeError;
pub use host::{HostList, HostMap, HostObject, HostValue};
pub use introspect::{serialize, serialize_default, ConverterRegistry};
pub use prompt::{fill_missing, resolve_interactive, NoPrompt, Prompt, PromptRequest};
pub use ui::{TreeCallbacks, TreeEvent, TreeNode, TreeViewAdapter};
