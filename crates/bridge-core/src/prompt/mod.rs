//! Proveedor interactivo: completa los campos que la resolución posicional
//! dejó pendientes preguntando a un colaborador inyectado.
//!
//! El colaborador (`Prompt`) puede ser un diálogo modal, una lectura de
//! terminal o un doble de test; este módulo no hace I/O por sí mismo.

pub mod fallback;
pub mod request;

use serde_json::Value;

pub use fallback::{fill_missing, resolve_interactive};
pub use request::PromptRequest;

/// Colaborador que obtiene un valor para un campo. `None` = cancelado.
///
/// Una sola llamada por campo: si la implementación quiere reintentar ante
/// entradas inválidas debe hacerlo antes de devolver.
pub trait Prompt {
    fn prompt(&mut self, request: &PromptRequest) -> Option<Value>;
}

impl<F> Prompt for F where F: FnMut(&PromptRequest) -> Option<Value>
{
    fn prompt(&mut self, request: &PromptRequest) -> Option<Value> {
        self(request)
    }
}

/// Prompt no interactivo: cancela siempre (sólo se aplican defaults).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPrompt;

impl Prompt for NoPrompt {
    fn prompt(&mut self, _request: &PromptRequest) -> Option<Value> {
        None
    }
}
