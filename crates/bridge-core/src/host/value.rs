//! Modelo de objetos del host.
//!
//! Un objeto del host se expone como interfaz de capacidades: una etiqueta de
//! tipo y, opcionalmente, una vista de secuencia (`len` + acceso por índice)
//! o de mapeo (`keys` + `get`). El serializador sólo conoce estas vistas, de
//! modo que trata igual un registro nativo y un objeto foráneo adaptado.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use serde_json::{Number, Value};

use super::collections::{HostList, HostMap};

pub type HostRef = Rc<dyn HostObject>;

pub trait HostObject {
    /// Etiqueta estable del tipo (`"map"`, `"buffer"`, ...).
    fn type_tag(&self) -> &str;

    fn as_sequence(&self) -> Option<&dyn HostSequence> {
        None
    }

    fn as_mapping(&self) -> Option<&dyn HostMapping> {
        None
    }

    /// Necesario para que los conversores tipados hagan downcast.
    fn as_any(&self) -> &dyn Any;

    /// Representación textual de último recurso.
    fn display(&self) -> String {
        format!("[object {}]", self.type_tag())
    }
}

pub trait HostSequence {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn item(&self, index: usize) -> Option<HostValue>;
}

pub trait HostMapping {
    /// Claves en orden de inserción.
    fn keys(&self) -> Vec<String>;

    /// Leer una propiedad puede fallar en objetos foráneos.
    fn get(&self, key: &str) -> Result<HostValue, String>;
}

/// Valor del grafo: escalares JSON o referencia a un objeto del host.
#[derive(Clone)]
pub enum HostValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Object(HostRef),
}

impl HostValue {
    /// NaN e infinitos no existen en JSON: se degradan a `Null`.
    pub fn float(f: f64) -> Self {
        Number::from_f64(f).map(HostValue::Number).unwrap_or(HostValue::Null)
    }

    pub fn object<T: HostObject + 'static>(obj: T) -> Self {
        HostValue::Object(Rc::new(obj))
    }

    pub fn as_object(&self) -> Option<&HostRef> {
        match self {
            HostValue::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            HostValue::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Identidad de un objeto: dirección de la asignación del `Rc`.
pub fn identity(obj: &HostRef) -> usize {
    Rc::as_ptr(obj) as *const () as usize
}

impl fmt::Debug for HostValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostValue::Null => write!(f, "Null"),
            HostValue::Bool(b) => write!(f, "Bool({b})"),
            HostValue::Number(n) => write!(f, "Number({n})"),
            HostValue::String(s) => write!(f, "String({s:?})"),
            HostValue::Object(o) => write!(f, "Object({}@{:#x})", o.type_tag(), identity(o)),
        }
    }
}

impl From<bool> for HostValue {
    fn from(b: bool) -> Self {
        HostValue::Bool(b)
    }
}

impl From<i64> for HostValue {
    fn from(i: i64) -> Self {
        HostValue::Number(i.into())
    }
}

impl From<u64> for HostValue {
    fn from(u: u64) -> Self {
        HostValue::Number(u.into())
    }
}

impl From<f64> for HostValue {
    fn from(f: f64) -> Self {
        HostValue::float(f)
    }
}

impl From<&str> for HostValue {
    fn from(s: &str) -> Self {
        HostValue::String(s.to_string())
    }
}

impl From<String> for HostValue {
    fn from(s: String) -> Self {
        HostValue::String(s)
    }
}

impl<T: HostObject + 'static> From<Rc<T>> for HostValue {
    fn from(obj: Rc<T>) -> Self {
        HostValue::Object(obj)
    }
}

/// Eleva JSON plano a un grafo del host (`HostMap` / `HostList`).
impl From<Value> for HostValue {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => HostValue::Null,
            Value::Bool(b) => HostValue::Bool(b),
            Value::Number(n) => HostValue::Number(n),
            Value::String(s) => HostValue::String(s),
            Value::Array(items) => {
                let list = HostList::new();
                for item in items {
                    list.push(HostValue::from(item));
                }
                HostValue::object(list)
            }
            Value::Object(map) => {
                let out = HostMap::new();
                for (k, item) in map {
                    out.set(k, HostValue::from(item));
                }
                HostValue::object(out)
            }
        }
    }
}
