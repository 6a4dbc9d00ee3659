//! Errores del núcleo. Todos son terminales para la llamada que los produce y
//! ninguno deja estado intermedio (cada operación es independiente).

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum BridgeError {
    /// Un argumento presente no pudo convertirse.
    #[error("cannot convert argument '{field}' from {raw:?}: {cause}")]
    Conversion { field: String, raw: String, cause: String },
    /// Uno o más campos requeridos quedaron sin valor (se listan todos).
    #[error("missing required arguments: {}", .0.join(", "))]
    MissingRequiredArgument(Vec<String>),
    /// Un conversor registrado falló para un tipo que declaró manejar.
    #[error("converter '{tag}' failed: {cause}")]
    Converter { tag: String, cause: String },
    #[error("duplicate field in schema: {0}")]
    DuplicateField(String),
    #[error("unknown tree node at path {0:?}")]
    UnknownNode(Vec<usize>),
}

impl BridgeError {
    /// Campos pendientes si el error es `MissingRequiredArgument`.
    pub fn missing_fields(&self) -> Option<&[String]> {
        match self {
            BridgeError::MissingRequiredArgument(fields) => Some(fields),
            _ => None,
        }
    }
}
