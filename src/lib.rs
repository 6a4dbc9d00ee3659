//! hostbridge
//!
//! Librería del binario `hostbridge`:
//! - `config`: configuración desde entorno / `.env`.
//! - `errors`: errores de aplicación y códigos de salida.
//! - `commands`: subcomandos (`env`, `inspect`, `tree`) sobre `bridge-core`.
//! - `terminal`: prompt de terminal para argumentos faltantes.

pub mod commands;
pub mod config;
pub mod errors;
pub mod terminal;
