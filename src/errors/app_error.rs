use bridge_core::BridgeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Bridge(#[from] BridgeError),
    #[error("Error en IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON inválido: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Uso incorrecto: {0}")]
    Usage(String),
}

impl AppError {
    /// Códigos de salida del CLI: 2 uso, 3 entrada, 5 interno.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Usage(_) => 2,
            AppError::Bridge(BridgeError::MissingRequiredArgument(_))
            | AppError::Bridge(BridgeError::Conversion { .. })
            | AppError::Bridge(BridgeError::DuplicateField(_)) => 2,
            AppError::Io(_) | AppError::Json(_) => 3,
            AppError::Bridge(_) => 5,
        }
    }
}
