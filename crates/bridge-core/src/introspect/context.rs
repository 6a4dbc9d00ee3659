use std::collections::HashSet;

/// Estado transitorio de una pasada de serialización.
///
/// `visited` contiene las identidades del camino de descenso actual (no de
/// todo lo visitado): un subobjeto compartido que aparece dos veces se
/// serializa dos veces, y sólo una referencia hacia un ancestro es circular.
#[derive(Debug, Default)]
pub struct SerializationContext {
    visited: HashSet<usize>,
    max_depth: usize,
}

impl SerializationContext {
    pub fn new(max_depth: usize) -> Self {
        Self { visited: HashSet::new(), max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn is_on_path(&self, id: usize) -> bool {
        self.visited.contains(&id)
    }

    pub(crate) fn enter(&mut self, id: usize) {
        self.visited.insert(id);
    }

    pub(crate) fn leave(&mut self, id: usize) {
        self.visited.remove(&id);
    }
}
