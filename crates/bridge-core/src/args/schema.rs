//! Esquema de argumentos posicionales: lista ordenada de `ArgSpec` con
//! nombres únicos. El orden define el mapeo `raw_args[i] -> fields[i]`.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::convert;
use crate::errors::BridgeError;

/// Conversor de texto crudo a valor tipado. El error es la causa legible.
pub type ConvertFn = Arc<dyn Fn(&str) -> Result<Value, String> + Send + Sync>;

/// Descripción de un campo del esquema.
#[derive(Clone)]
pub struct ArgSpec {
    pub name: String,
    pub default: Option<Value>,
    pub required: bool,
    pub prompt_text: Option<String>,
    convert: ConvertFn,
}

impl ArgSpec {
    /// Campo opcional sin default; si falta se resuelve a `null`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(),
               default: None,
               required: false,
               prompt_text: None,
               convert: Arc::new(convert::string) }
    }

    /// Campo requerido (sin default salvo que se añada con `with_default`).
    pub fn required(name: impl Into<String>) -> Self {
        Self { required: true, ..Self::new(name) }
    }

    /// Campo opcional con default.
    pub fn optional(name: impl Into<String>, default: impl Into<Value>) -> Self {
        Self::new(name).with_default(default)
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_convert<F>(mut self, f: F) -> Self
        where F: Fn(&str) -> Result<Value, String> + Send + Sync + 'static
    {
        self.convert = Arc::new(f);
        self
    }

    pub fn with_prompt(mut self, text: impl Into<String>) -> Self {
        self.prompt_text = Some(text.into());
        self
    }

    /// Aplica el conversor del campo, envolviendo la causa en `Conversion`.
    pub fn convert(&self, raw: &str) -> Result<Value, BridgeError> {
        (self.convert)(raw).map_err(|cause| BridgeError::Conversion { field: self.name.clone(),
                                                                     raw: raw.to_string(),
                                                                     cause })
    }

    /// Texto a mostrar al pedir el valor; por defecto el nombre del campo.
    pub fn prompt_text(&self) -> String {
        self.prompt_text.clone().unwrap_or_else(|| self.name.clone())
    }
}

impl fmt::Debug for ArgSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArgSpec")
         .field("name", &self.name)
         .field("default", &self.default)
         .field("required", &self.required)
         .field("prompt_text", &self.prompt_text)
         .finish_non_exhaustive()
    }
}

/// Esquema inmutable. Se construye una vez por script y se reutiliza.
#[derive(Debug, Clone)]
pub struct ArgumentSchema {
    fields: Vec<ArgSpec>,
}

impl ArgumentSchema {
    /// Falla con `DuplicateField` si dos campos comparten nombre.
    pub fn new(fields: Vec<ArgSpec>) -> Result<Self, BridgeError> {
        let mut seen = HashSet::new();
        for f in &fields {
            if !seen.insert(f.name.as_str()) {
                return Err(BridgeError::DuplicateField(f.name.clone()));
            }
        }
        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[ArgSpec] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&ArgSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Línea de uso: `<file> [count=10] [label] [mode=fast]`.
    pub fn usage(&self) -> String {
        self.fields
            .iter()
            .map(|f| match (&f.default, f.required) {
                (None, true) => format!("<{}>", f.name),
                (Some(Value::String(d)), _) => format!("[{}={}]", f.name, d),
                (Some(d), _) => format!("[{}={}]", f.name, d),
                (None, false) => format!("[{}]", f.name),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
