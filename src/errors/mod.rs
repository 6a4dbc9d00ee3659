//! Errores de la aplicación (binario `hostbridge`).

pub mod app_error;

pub use app_error::AppError;
