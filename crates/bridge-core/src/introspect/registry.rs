//! Registro de conversores `(tag, predicado, conversión)` consultado en orden
//! de registro. Es el único lugar donde se nombran tipos concretos del host.
//!
//! Las closures son `Send + Sync` para poder compartir el registro detrás de
//! un `Arc`; mutarlo mientras otro hilo serializa requiere un lock externo.

use std::fmt;

use chrono::SecondsFormat;
use serde_json::json;

use crate::constants::DEFAULT_BUFFER_PREVIEW;
use crate::host::{HostBuffer, HostEnum, HostObject, HostTimestamp, HostValue};

pub type Predicate = Box<dyn Fn(&dyn HostObject) -> bool + Send + Sync>;
pub type ConvertHost = Box<dyn Fn(&dyn HostObject) -> Result<HostValue, String> + Send + Sync>;

pub struct Converter {
    tag: String,
    predicate: Predicate,
    convert: ConvertHost,
}

impl Converter {
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn matches(&self, obj: &dyn HostObject) -> bool {
        (self.predicate)(obj)
    }

    pub fn apply(&self, obj: &dyn HostObject) -> Result<HostValue, String> {
        (self.convert)(obj)
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter").field("tag", &self.tag).finish_non_exhaustive()
    }
}

#[derive(Debug, Default)]
pub struct ConverterRegistry {
    converters: Vec<Converter>,
}

impl ConverterRegistry {
    /// Registro vacío: sólo vistas de secuencia/mapeo y respaldo `toString`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer, timestamp y enum con la vista previa de buffer por defecto.
    pub fn with_defaults() -> Self {
        Self::with_buffer_preview(DEFAULT_BUFFER_PREVIEW)
    }

    pub fn with_buffer_preview(preview: usize) -> Self {
        let mut reg = Self::new();
        reg.register_type::<HostBuffer, _>("buffer", move |b| {
               let shown = &b.0[..b.0.len().min(preview)];
               Ok(HostValue::from(json!({
                   "type": "buffer",
                   "length": b.0.len(),
                   "data": shown,
                   "truncated": shown.len() < b.0.len(),
               })))
           })
           .register_type::<HostTimestamp, _>("timestamp", |t| {
               Ok(HostValue::String(t.0.to_rfc3339_opts(SecondsFormat::Millis, true)))
           })
           .register_type::<HostEnum, _>("enum", |e| Ok(HostValue::String(format!("{}.{}", e.type_name, e.variant))));
        reg
    }

    /// Registra un conversor con predicado arbitrario (por ejemplo por etiqueta).
    pub fn register<P, C>(&mut self, tag: impl Into<String>, predicate: P, convert: C) -> &mut Self
        where P: Fn(&dyn HostObject) -> bool + Send + Sync + 'static,
              C: Fn(&dyn HostObject) -> Result<HostValue, String> + Send + Sync + 'static
    {
        self.converters.push(Converter { tag: tag.into(),
                                         predicate: Box::new(predicate),
                                         convert: Box::new(convert) });
        self
    }

    /// Registra un conversor para el tipo concreto `T` (downcast vía `as_any`).
    pub fn register_type<T, C>(&mut self, tag: impl Into<String>, convert: C) -> &mut Self
        where T: HostObject + 'static,
              C: Fn(&T) -> Result<HostValue, String> + Send + Sync + 'static
    {
        self.register(tag,
                      |obj: &dyn HostObject| obj.as_any().is::<T>(),
                      move |obj: &dyn HostObject| match obj.as_any().downcast_ref::<T>() {
                          Some(t) => convert(t),
                          None => Err(format!("expected {}, found '{}'", std::any::type_name::<T>(), obj.type_tag())),
                      })
    }

    /// Primer conversor cuyo predicado acepta `obj`.
    pub fn find(&self, obj: &dyn HostObject) -> Option<&Converter> {
        self.converters.iter().find(|c| c.matches(obj))
    }

    pub fn tags(&self) -> Vec<&str> {
        self.converters.iter().map(|c| c.tag()).collect()
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }
}
