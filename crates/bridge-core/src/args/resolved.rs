//! Registro resultante de una resolución. Inmutable para el llamador: sólo
//! el resolver y el proveedor interactivo (en este crate) lo construyen.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::BridgeError;

/// Valor de un campo y de dónde salió.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedValue {
    pub value: Value,
    pub was_defaulted: bool,
    pub was_prompted: bool,
}

impl ResolvedValue {
    pub(crate) fn supplied(value: Value) -> Self {
        Self { value, was_defaulted: false, was_prompted: false }
    }

    pub(crate) fn defaulted(value: Value) -> Self {
        Self { value, was_defaulted: true, was_prompted: false }
    }

    pub(crate) fn prompted(value: Value) -> Self {
        Self { value, was_defaulted: false, was_prompted: true }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ResolvedArguments {
    values: IndexMap<String, ResolvedValue>,
    /// Campos requeridos aún sin valor, en orden de esquema.
    unresolved: Vec<String>,
    /// Argumentos crudos más allá del esquema, sin convertir.
    extra: Vec<String>,
}

impl ResolvedArguments {
    pub fn get(&self, name: &str) -> Option<&ResolvedValue> {
        self.values.get(name)
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name).map(|r| &r.value)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.value(name).and_then(Value::as_str)
    }

    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.value(name).and_then(Value::as_i64)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolvedValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn unresolved(&self) -> &[String] {
        &self.unresolved
    }

    pub fn is_unresolved(&self, name: &str) -> bool {
        self.unresolved.iter().any(|n| n == name)
    }

    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }

    pub fn extra(&self) -> &[String] {
        &self.extra
    }

    /// Vista plana `{name: value}` en orden de esquema.
    pub fn to_json(&self) -> Value {
        let mut out = Map::new();
        for (k, v) in &self.values {
            out.insert(k.clone(), v.value.clone());
        }
        Value::Object(out)
    }

    pub(crate) fn insert(&mut self, name: String, value: ResolvedValue) {
        self.values.insert(name, value);
    }

    pub(crate) fn mark_unresolved(&mut self, name: String) {
        self.unresolved.push(name);
    }

    pub(crate) fn set_extra(&mut self, extra: Vec<String>) {
        self.extra = extra;
    }

    /// `Ok(self)` si no quedan requeridos pendientes; si no, un único error
    /// con todos ellos.
    pub(crate) fn into_complete(self) -> Result<Self, BridgeError> {
        if self.unresolved.is_empty() {
            Ok(self)
        } else {
            Err(BridgeError::MissingRequiredArgument(self.unresolved))
        }
    }
}
