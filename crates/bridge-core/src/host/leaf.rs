//! Hojas del host que no son JSON nativo: buffers, marcas de tiempo,
//! valores enumerados y objetos opacos. Los tres primeros tienen conversor
//! por defecto en `ConverterRegistry::with_defaults`; el opaco cae al
//! respaldo `toString`.

use std::any::Any;

use chrono::{DateTime, Utc};

use super::value::HostObject;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostBuffer(pub Vec<u8>);

impl HostObject for HostBuffer {
    fn type_tag(&self) -> &str {
        "buffer"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn display(&self) -> String {
        format!("[buffer {} bytes]", self.0.len())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostTimestamp(pub DateTime<Utc>);

impl HostObject for HostTimestamp {
    fn type_tag(&self) -> &str {
        "timestamp"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn display(&self) -> String {
        self.0.to_string()
    }
}

/// Valor enumerado del host (`Kind.FILE`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEnum {
    pub type_name: String,
    pub variant: String,
}

impl HostEnum {
    pub fn new(type_name: impl Into<String>, variant: impl Into<String>) -> Self {
        Self { type_name: type_name.into(), variant: variant.into() }
    }
}

impl HostObject for HostEnum {
    fn type_tag(&self) -> &str {
        "enum"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn display(&self) -> String {
        format!("{}.{}", self.type_name, self.variant)
    }
}

/// Objeto sin vistas: sólo etiqueta y texto.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostOpaque {
    pub tag: String,
    pub text: String,
}

impl HostOpaque {
    pub fn new(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self { tag: tag.into(), text: text.into() }
    }
}

impl HostObject for HostOpaque {
    fn type_tag(&self) -> &str {
        &self.tag
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn display(&self) -> String {
        self.text.clone()
    }
}
