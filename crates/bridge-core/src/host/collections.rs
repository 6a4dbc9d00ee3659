//! Colecciones mutables del host. Usan mutabilidad interior para poder
//! construir grafos cíclicos (`obj.set("self", obj.clone())`).
//!
//! Un ciclo de `Rc` no se libera solo: `clear()` lo rompe cuando el grafo
//! deja de usarse.

use std::any::Any;
use std::cell::RefCell;

use indexmap::IndexMap;

use super::value::{HostMapping, HostObject, HostSequence, HostValue};

/// Mapeo clave/valor con orden de inserción.
pub struct HostMap {
    tag: String,
    entries: RefCell<IndexMap<String, HostValue>>,
}

impl HostMap {
    pub fn new() -> Self {
        Self::tagged("map")
    }

    /// Mapeo con etiqueta de tipo propia, para que los conversores lo distingan.
    pub fn tagged(tag: impl Into<String>) -> Self {
        Self { tag: tag.into(), entries: RefCell::new(IndexMap::new()) }
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<HostValue>) {
        self.entries.borrow_mut().insert(key.into(), value.into());
    }

    pub fn get_value(&self, key: &str) -> Option<HostValue> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

impl Default for HostMap {
    fn default() -> Self {
        Self::new()
    }
}

impl HostObject for HostMap {
    fn type_tag(&self) -> &str {
        &self.tag
    }

    fn as_mapping(&self) -> Option<&dyn HostMapping> {
        Some(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl HostMapping for HostMap {
    fn keys(&self) -> Vec<String> {
        self.entries.borrow().keys().cloned().collect()
    }

    fn get(&self, key: &str) -> Result<HostValue, String> {
        self.get_value(key).ok_or_else(|| format!("no such key: {key}"))
    }
}

/// Secuencia ordenada.
pub struct HostList {
    items: RefCell<Vec<HostValue>>,
}

impl HostList {
    pub fn new() -> Self {
        Self { items: RefCell::new(Vec::new()) }
    }

    pub fn push(&self, value: impl Into<HostValue>) {
        self.items.borrow_mut().push(value.into());
    }

    pub fn clear(&self) {
        self.items.borrow_mut().clear();
    }
}

impl Default for HostList {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Into<HostValue>> FromIterator<V> for HostList {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self { items: RefCell::new(iter.into_iter().map(Into::into).collect()) }
    }
}

impl HostObject for HostList {
    fn type_tag(&self) -> &str {
        "list"
    }

    fn as_sequence(&self) -> Option<&dyn HostSequence> {
        Some(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl HostSequence for HostList {
    fn len(&self) -> usize {
        self.items.borrow().len()
    }

    fn item(&self, index: usize) -> Option<HostValue> {
        self.items.borrow().get(index).cloned()
    }
}
